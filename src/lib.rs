//! # feedback-classifier
//!
//! Batch classification of free-text customer feedback into hierarchical
//! labels (`Level 1/Level 2/Level 3/Level 4`) using an OpenAI-compatible LLM endpoint.
//!
//! ## Features
//!
//! - **Deduplication**: rows with the same normalized feedback share one cache entry
//! - **Persistent label cache**: labels survive restarts in a readable JSON file
//! - **Bounded concurrency**: at most `max_concurrency` requests in flight
//! - **Retry**: fixed-delay retry for transport, API and parse failures
//! - **Fault isolation**: a failing or panicking task never aborts its batch
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use feedback_classifier::{ClassificationEngine, Config, StaticTopicProvider};
//! use feedback_classifier::core::sources::{JsonRowSource, RowSource};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/classifier.yaml").await?;
//!     let topics = Arc::new(StaticTopicProvider::from_config(&config));
//!     let engine = ClassificationEngine::new(config, topics).await;
//!
//!     let rows = JsonRowSource::new("feedback.json").read_rows().await?;
//!     let outcome = engine.run(&rows, None, None).await?;
//!     println!("{}", outcome.report.stats);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use crate::config::Config;
pub use crate::core::batch::{BatchConfig, BatchProcessor, ProgressCallback};
pub use crate::core::cache_manager::LabelCache;
pub use crate::core::classifier::{Classifier, LlmClient};
pub use crate::core::engine::{BatchOutcome, ClassificationEngine};
pub use crate::core::topics::{StaticTopicProvider, TopicProvider};
pub use crate::core::types::{
    BatchReport, ClassificationResult, ClassificationStatus, ClassificationTask, LabeledRow,
    ProcessingStats, Row,
};
pub use crate::utils::error::{EngineError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (unix seconds)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}, {})",
            NAME, self.version, self.git_hash, self.rust_version
        )
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
