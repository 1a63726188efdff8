//! Topic provider backed by loaded configuration

use super::TopicProvider;
use crate::config::{Config, TopicConfig};
use crate::utils::error::{EngineError, Result};
use async_trait::async_trait;
use std::collections::HashMap;

/// Topics fixed at construction time
#[derive(Debug, Clone)]
pub struct StaticTopicProvider {
    default: TopicConfig,
    topics: HashMap<String, TopicConfig>,
}

impl StaticTopicProvider {
    pub fn new(default: TopicConfig, topics: impl IntoIterator<Item = TopicConfig>) -> Self {
        Self {
            default,
            topics: topics.into_iter().map(|t| (t.id.clone(), t)).collect(),
        }
    }

    /// The `llm` section is the default topic, `topics` the named ones
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.llm().clone(), config.topics().iter().cloned())
    }

    /// Known topic ids, sorted
    pub fn topic_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.topics.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

#[async_trait]
impl TopicProvider for StaticTopicProvider {
    async fn get_topic(&self, id: &str) -> Result<Option<TopicConfig>> {
        if let Some(topic) = self.topics.get(id) {
            return Ok(Some(topic.clone()));
        }
        if id == self.default.id && self.default.is_configured() {
            return Ok(Some(self.default.clone()));
        }
        Ok(None)
    }

    async fn default_topic(&self) -> Result<TopicConfig> {
        if self.default.is_configured() {
            Ok(self.default.clone())
        } else {
            Err(EngineError::config(
                "No default topic configured; set the `llm` section or pick a topic",
            ))
        }
    }
}
