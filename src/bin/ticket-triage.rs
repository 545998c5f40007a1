//! ticket-triage CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, error};

use ticket_triage::cli::args::TriageArgs;
use ticket_triage::cli::commands::execute_command;

fn main() {
    let args = TriageArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Info,  // Default
        _ => LevelFilter::Debug, // Verbose
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        error!("{e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
