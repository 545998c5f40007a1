//! Command line argument parsing for the ticket-triage CLI using clap.
//!
//! The three data paths are bound to environment variables so the binary can
//! run unattended, with flags taking precedence when both are given.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::error;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TriageError};
use crate::training::{DEFAULT_WORKER_COUNT, TrainingConfig};

pub const STOP_WORDS_ENV: &str = "STOP_WORDS_DIR";
pub const TRAIN_DATA_ENV: &str = "TRAIN_DATA_DIR";
pub const MODEL_FILE_ENV: &str = "MODEL_FILE_DIR";

/// ticket-triage - route support tickets to product categories
#[derive(Parser, Debug, Clone)]
#[command(name = "ticket-triage")]
#[command(about = "Train and run a Naive Bayes support ticket classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TriageArgs {
    /// Verbosity level (0=quiet, 1=normal, 2+=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        default_value = "human",
        global = true
    )]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Stop words file (JSON array of strings)
    #[arg(long = "stop-words", env = STOP_WORDS_ENV, value_name = "FILE", global = true)]
    pub stop_words: Option<PathBuf>,

    /// Training data file (JSON array of ticket records)
    #[arg(long = "train-data", env = TRAIN_DATA_ENV, value_name = "FILE", global = true)]
    pub train_data: Option<PathBuf>,

    /// Model file to load and persist
    #[arg(long = "model-file", env = MODEL_FILE_ENV, value_name = "FILE", global = true)]
    pub model_file: Option<PathBuf>,

    /// Custom lemma table (`form lemma` per line); the built-in English table otherwise
    #[arg(long = "lemma-dict", env = "LEMMA_DICT_PATH", value_name = "FILE", global = true)]
    pub lemma_dict: Option<PathBuf>,

    /// Number of training workers
    #[arg(long, env = "TRAINING_WORKERS", default_value_t = DEFAULT_WORKER_COUNT, global = true)]
    pub workers: usize,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TriageArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }

    /// Training configuration from the command line.
    pub fn training_config(&self) -> TrainingConfig {
        TrainingConfig::with_workers(self.workers)
    }

    /// Resolve the three data paths, logging one diagnostic per missing value.
    pub fn pipeline_paths(&self) -> Result<PipelinePaths> {
        let required = [
            (STOP_WORDS_ENV, &self.stop_words),
            (TRAIN_DATA_ENV, &self.train_data),
            (MODEL_FILE_ENV, &self.model_file),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| match value {
                Some(path) => path.as_os_str().is_empty(),
                None => true,
            })
            .map(|(name, _)| *name)
            .collect();
        for name in &missing {
            error!("{name} is empty");
        }
        if !missing.is_empty() {
            return Err(TriageError::config(format!(
                "missing required settings: {}",
                missing.join(", ")
            )));
        }

        Ok(PipelinePaths {
            stop_words: self.stop_words.clone().unwrap_or_default(),
            train_data: self.train_data.clone().unwrap_or_default(),
            model_file: self.model_file.clone().unwrap_or_default(),
        })
    }
}

/// Validated locations of the pipeline inputs and output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelinePaths {
    pub stop_words: PathBuf,
    pub train_data: PathBuf,
    pub model_file: PathBuf,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Load the stored model, retraining and persisting it when the corpus has new classes
    Train(TrainArgs),

    /// Classify one or more ticket texts
    Classify(ClassifyArgs),

    /// Measure accuracy on a labeled ticket file
    Evaluate(EvaluateArgs),

    /// Show the classes and vocabulary of the stored model
    Inspect(InspectArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {}

/// Arguments for classification
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Ticket texts to classify
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,
}

/// Arguments for evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Held-out ticket file in the training data format
    #[arg(value_name = "TEST_FILE")]
    pub test_file: PathBuf,
}

/// Arguments for model inspection
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
