//! # ticket-triage
//!
//! Routes support tickets to product categories with a bag-of-words Naive
//! Bayes classifier.
//!
//! ## Pipeline
//!
//! - [`corpus`] reads labeled tickets and the stop word list
//! - [`analysis`] normalizes ticket text into deduplicated lemmas
//! - [`training`] learns every class on a fixed pool of worker threads
//! - [`lifecycle`] reuses the stored model or retrains and persists a new one
//! - [`classification`] scores new tickets against the trained model
//!
//! ## Example
//!
//! ```
//! use ticket_triage::analysis::normalizer::TextNormalizer;
//! use ticket_triage::analysis::stop_words::StopWordSet;
//! use ticket_triage::corpus::Corpus;
//! use ticket_triage::training::{TrainingConfig, TrainingOrchestrator};
//!
//! let mut corpus = Corpus::new();
//! corpus.push("class1", "this is a text");
//! corpus.push("class2", "this is another text");
//! let classes = corpus.labels();
//!
//! let orchestrator =
//!     TrainingOrchestrator::new(TrainingConfig::default(), TextNormalizer::english().unwrap())
//!         .unwrap();
//! let model = orchestrator.train(corpus, &classes, &StopWordSet::new()).unwrap();
//! assert_eq!(model.learned_class_count(), 2);
//! ```

pub mod analysis;
pub mod classification;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod lifecycle;
pub mod ml;
pub mod training;

pub mod prelude {
    pub use crate::analysis::{StopWordSet, TextNormalizer};
    pub use crate::classification::{ClassificationResult, ClassificationService, classify};
    pub use crate::corpus::{Corpus, read_corpus, read_stop_words, read_training_data};
    pub use crate::error::{Result, TriageError};
    pub use crate::lifecycle::{LifecycleState, ModelLifecycle, ResolvedModel};
    pub use crate::ml::classifier::{FileModelStore, ModelStore, NaiveBayesModel};
    pub use crate::training::{TrainingConfig, TrainingOrchestrator};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
