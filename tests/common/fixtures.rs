//! Test fixtures and data factories

use feedback_classifier::Row;
use feedback_classifier::config::{Config, TopicConfig};
use std::path::Path;

/// Rows from a JSON array of objects, indexed by position
pub fn rows(values: serde_json::Value) -> Vec<Row> {
    values
        .as_array()
        .expect("fixture rows must be an array")
        .iter()
        .enumerate()
        .map(|(index, value)| {
            Row::new(
                index,
                value
                    .as_object()
                    .cloned()
                    .expect("fixture row must be an object"),
            )
        })
        .collect()
}

/// Factory for topic configurations
pub struct TopicFactory;

impl TopicFactory {
    /// A valid topic pointed at `base_url`
    pub fn create(id: &str, base_url: &str) -> TopicConfig {
        TopicConfig {
            id: id.to_string(),
            name: format!("{} topic", id),
            base_url: base_url.to_string(),
            api_key: "sk-test-key-123456".to_string(),
            model: "gpt-4o-mini".to_string(),
            prompt_template: "Classify the following customer feedback:\n{FEEDBACK}".to_string(),
            temperature: 0.0,
            max_tokens: 150,
            ..Default::default()
        }
    }

    /// Engine configuration with a default topic, fast retries and a cache at `cache_path`
    pub fn config(base_url: &str, cache_path: &Path) -> Config {
        let mut config = Config::default();
        config.engine.llm = Self::create("default", base_url);
        config.engine.processing.max_concurrency = 4;
        config.engine.processing.max_retry = 3;
        config.engine.processing.retry_wait_ms = 1;
        config.engine.processing.request_timeout = 5;
        config.engine.cache.path = cache_path.to_path_buf();
        config
    }
}
