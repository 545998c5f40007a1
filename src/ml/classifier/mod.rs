//! Bag-of-words Naive Bayes classifier and its on-disk store.
//!
//! The model follows a two-phase life: `learn` is called once per class with
//! that class's normalized tokens, then `finalize` reweights the raw term
//! frequencies with TF-IDF exactly once. Only a finalized model can score.

pub mod naive_bayes;
pub mod store;

pub use naive_bayes::{DEFAULT_WORD_PROBABILITY, NaiveBayesModel, ScoreOutcome};
pub use store::{FileModelStore, ModelStore};
