//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use ticket_triage::analysis::normalizer::TextNormalizer;
use ticket_triage::corpus::Corpus;
use ticket_triage::training::{TrainingConfig, TrainingOrchestrator};

pub const TRAINING_TICKETS: &[(&str, &str, &str)] = &[
    (
        "Credit card",
        "Unauthorized charge",
        "My credit card was charged twice for the same purchase",
    ),
    (
        "Credit card",
        "Annual fee",
        "The card issuer charged an annual fee I never agreed to",
    ),
    (
        "Credit card",
        "Card declined",
        "My card was declined at the store although the balance is low",
    ),
    (
        "Mortgage",
        "Escrow problem",
        "The mortgage servicer miscalculated my escrow and raised the monthly payment",
    ),
    (
        "Mortgage",
        "Loan modification",
        "I applied for a mortgage loan modification and the lender lost my documents",
    ),
    (
        "Mortgage",
        "Foreclosure notice",
        "I received a foreclosure notice even though every mortgage payment was made",
    ),
    (
        "Student loan",
        "Repayment plan",
        "My student loan servicer refused to put me on an income driven repayment plan",
    ),
    (
        "Student loan",
        "Forgiveness",
        "The servicer denied my public service student loan forgiveness application",
    ),
    (
        "Bank account",
        "Overdraft fees",
        "The bank charged overdraft fees on my checking account after a deposit cleared",
    ),
    (
        "Bank account",
        "Account closed",
        "The bank closed my savings account without notice and kept the deposit",
    ),
];

pub const HELD_OUT: &[(&str, &str)] = &[
    ("a charge on my credit card that I did not make", "Credit card"),
    ("escrow payment on the mortgage went up", "Mortgage"),
    ("student loan forgiveness was denied", "Student loan"),
    ("overdraft fee on my checking account", "Bank account"),
];

pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "at", "for", "i", "is", "me", "my", "of", "on", "the", "to", "was",
];

pub fn corpus() -> Corpus {
    let mut corpus = Corpus::new();
    for (label, title, description) in TRAINING_TICKETS {
        corpus.push(label, format!("{title} {description}"));
    }
    corpus
}

pub fn orchestrator(workers: usize) -> TrainingOrchestrator {
    TrainingOrchestrator::new(
        TrainingConfig::with_workers(workers),
        TextNormalizer::english().unwrap(),
    )
    .unwrap()
}

/// Training records in the search-export JSON layout.
pub fn training_json(tickets: &[(&str, &str, &str)]) -> String {
    let records: Vec<serde_json::Value> = tickets
        .iter()
        .map(|(label, title, description)| {
            serde_json::json!({
                "_source": {
                    "issue": title,
                    "complaint_what_happened": description,
                    "product": label,
                }
            })
        })
        .collect();
    serde_json::to_string(&records).unwrap()
}

pub fn write_training_file(dir: &Path, tickets: &[(&str, &str, &str)]) -> PathBuf {
    let path = dir.join("train.json");
    fs::write(&path, training_json(tickets)).unwrap();
    path
}

pub fn write_stop_words_file(dir: &Path) -> PathBuf {
    let path = dir.join("stop_words.json");
    fs::write(&path, serde_json::to_string(STOP_WORDS).unwrap()).unwrap();
    path
}
