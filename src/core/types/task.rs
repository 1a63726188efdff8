//! Classification task

use serde::{Deserialize, Serialize};

/// One unit of work: the merged feedback of a single non-empty row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationTask {
    /// Ordinal of the source row
    pub index: usize,
    /// Merged feedback text sent to the LLM
    pub feedback: String,
    /// Normalized feedback used as the cache key
    pub feedback_key: String,
}

impl ClassificationTask {
    pub fn new(index: usize, feedback: impl Into<String>, feedback_key: impl Into<String>) -> Self {
        Self {
            index,
            feedback: feedback.into(),
            feedback_key: feedback_key.into(),
        }
    }
}
