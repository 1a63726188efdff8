//! Configuration validators
//!
//! Validation implementations for every section of the engine configuration.

use super::trait_def::Validate;
use crate::config::models::*;
use crate::utils::net::ClientUtils;
use std::collections::HashSet;
use tracing::{debug, warn};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating engine configuration");

        // The default topic only has to be usable when nothing else is configured
        if self.topics.is_empty() || self.llm.is_configured() {
            self.llm
                .validate()
                .map_err(|e| format!("Default topic: {}", e))?;
        }

        let mut topic_ids = HashSet::new();
        for topic in &self.topics {
            if !topic_ids.insert(topic.id.as_str()) {
                return Err(format!("Duplicate topic id: {}", topic.id));
            }
            topic
                .validate()
                .map_err(|e| format!("Topic '{}': {}", topic.id, e))?;
        }

        self.processing.validate()?;
        self.cache.validate()?;
        self.source.validate()?;
        self.logging.validate()?;

        debug!("Engine configuration validation completed");
        Ok(())
    }
}

impl Validate for TopicConfig {
    fn validate(&self) -> Result<(), String> {
        let mut errors = Vec::new();

        if self.id.trim().is_empty() {
            errors.push("topic id is not set".to_string());
        }
        if self.base_url.trim().is_empty() {
            errors.push("base URL is not set".to_string());
        } else if let Err(e) = ClientUtils::validate_url(&self.base_url) {
            errors.push(e);
        }
        if self.model.trim().is_empty() {
            errors.push("model is not set".to_string());
        }
        if self.api_key.is_empty() {
            errors.push("API key is not set".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            errors.push(format!(
                "temperature must be between 0 and 2, got {}",
                self.temperature
            ));
        }
        if self.max_tokens == 0 || self.max_tokens > 4096 {
            errors.push(format!(
                "max_tokens must be between 1 and 4096, got {}",
                self.max_tokens
            ));
        }
        if self.prompt_template.trim().is_empty() && self.prompt_template_file.is_none() {
            errors.push("prompt template is not set".to_string());
        }

        if !errors.is_empty() {
            return Err(errors.join(", "));
        }

        if !self.prompt_template.is_empty() && !self.prompt_template.contains(FEEDBACK_PLACEHOLDER)
        {
            warn!(
                "Prompt template of topic '{}' has no {} placeholder; feedback will not be included",
                self.id, FEEDBACK_PLACEHOLDER
            );
        }

        Ok(())
    }
}

impl Validate for ProcessingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_concurrency == 0 {
            return Err("max_concurrency must be greater than 0".to_string());
        }
        if self.max_concurrency > 1000 {
            return Err("max_concurrency seems too high (>1000)".to_string());
        }
        if self.max_retry == 0 {
            return Err("max_retry must be at least 1".to_string());
        }
        if self.request_timeout == 0 {
            return Err("request_timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for CacheConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.as_os_str().is_empty() {
            return Err("cache path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for SourceConfig {
    fn validate(&self) -> Result<(), String> {
        if self.fields.is_empty() {
            return Err("at least one source field must be configured".to_string());
        }
        if self.fields.iter().any(|f| f.trim().is_empty()) {
            return Err("source field names cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        // Full EnvFilter directives are allowed; bare words must be a known level
        let level = self.level.trim();
        if level.is_empty() {
            return Err("log level cannot be empty".to_string());
        }
        if !level.contains('=') && !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            return Err(format!("unknown log level: {}", self.level));
        }
        Ok(())
    }
}
