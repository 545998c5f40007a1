//! Error types for the ticket-triage library.
//!
//! All fallible operations return [`TriageError`] through the [`Result`]
//! alias. The variants follow the error taxonomy of the pipeline: some are
//! fatal at the orchestration layer (configuration, corpus, persistence),
//! others are recovered from by the caller (model load, lemmatizer setup).
//!
//! # Examples
//!
//! ```
//! use ticket_triage::error::{Result, TriageError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TriageError::config("worker_count must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for ticket-triage operations.
#[derive(Error, Debug)]
pub enum TriageError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Training corpus or stop-word file problems
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Analysis-related errors (tokenization, lemmatization, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Model contract violations (unknown label, learn after finalize, ...)
    #[error("Model error: {0}")]
    Model(String),

    /// Model file errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Classification errors
    #[error("Classification error: {0}")]
    Classification(String),

    /// Thread join errors
    #[error("Thread join error: {0}")]
    ThreadJoinError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with TriageError.
pub type Result<T> = std::result::Result<T, TriageError>;

impl TriageError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TriageError::Config(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        TriageError::Corpus(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TriageError::Analysis(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        TriageError::Model(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        TriageError::Storage(msg.into())
    }

    /// Create a new classification error.
    pub fn classification<S: Into<String>>(msg: S) -> Self {
        TriageError::Classification(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        TriageError::SerializationError(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        TriageError::Other(format!("Internal error: {}", msg.into()))
    }
}
