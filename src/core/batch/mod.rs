//! Batch dispatcher
//!
//! Fans classification tasks out over a bounded number of concurrent workers,
//! consulting the label cache before the classifier and saving the cache once
//! the whole batch has resolved.

mod processor;
mod types;


pub use processor::BatchProcessor;
pub use types::{BatchConfig, ProgressCallback, TaskOutcome};
