//! Topic lookup
//!
//! A topic is a named LLM endpoint configuration selected per batch.

mod provider;


pub use provider::StaticTopicProvider;

use crate::config::TopicConfig;
use crate::utils::error::{EngineError, Result};
use async_trait::async_trait;

/// Source of topic configurations
#[async_trait]
pub trait TopicProvider: Send + Sync {
    /// Topic with the given id, `None` if unknown
    async fn get_topic(&self, id: &str) -> Result<Option<TopicConfig>>;

    /// Topic used when a batch names none
    async fn default_topic(&self) -> Result<TopicConfig>;

    /// Resolve an optional topic id, falling back to the default topic
    async fn resolve(&self, id: Option<&str>) -> Result<TopicConfig> {
        match id.map(str::trim).filter(|id| !id.is_empty()) {
            None => self.default_topic().await,
            Some(id) => self
                .get_topic(id)
                .await?
                .ok_or_else(|| EngineError::not_found(format!("Topic '{}' not found", id))),
        }
    }
}
