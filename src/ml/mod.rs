//! Machine learning components for ticket routing.

pub mod classifier;

pub use classifier::{NaiveBayesModel, ScoreOutcome};
