//! Concurrent model training.
//!
//! [`TrainingOrchestrator::train`] fans the classes of a corpus out to a
//! fixed-size pool of worker threads. Workers only normalize text; every
//! `learn` call is made by the orchestrator thread, which is the model's
//! single writer. Once a result has arrived for every class and all workers
//! have been joined, the model is finalized exactly once.

pub mod config;
pub mod orchestrator;

pub use config::{DEFAULT_WORKER_COUNT, TrainingConfig};
pub use orchestrator::TrainingOrchestrator;
