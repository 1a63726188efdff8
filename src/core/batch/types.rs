//! Batch dispatcher types

use crate::core::types::ClassificationResult;
use std::sync::Arc;

/// Invoked with `(completed, total)` after every resolved task
pub type ProgressCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// Dispatcher settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Upper bound on tasks in flight (default: 10)
    pub max_concurrency: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 10,
        }
    }
}

impl BatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set concurrency limit
    pub fn with_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }
}

/// What one worker handed back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The task resolved to a cache hit, an API success or a failure
    Completed(ClassificationResult),
    /// The worker died before producing a result
    Faulted { index: usize, reason: String },
}

impl TaskOutcome {
    pub fn index(&self) -> usize {
        match self {
            Self::Completed(result) => result.index,
            Self::Faulted { index, .. } => *index,
        }
    }
}
