//! Training configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TriageError};

/// Number of training workers unless configured otherwise.
///
/// Fixed rather than derived from the corpus size or the CPU count.
pub const DEFAULT_WORKER_COUNT: usize = 10;

/// Configuration for a training run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of worker threads normalizing class documents.
    pub worker_count: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            worker_count: DEFAULT_WORKER_COUNT,
        }
    }
}

impl TrainingConfig {
    /// Create a configuration with an explicit worker count.
    pub fn with_workers(worker_count: usize) -> Self {
        TrainingConfig { worker_count }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.worker_count == 0 {
            return Err(TriageError::config("worker_count must be at least 1"));
        }
        Ok(())
    }
}
