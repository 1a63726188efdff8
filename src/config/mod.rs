//! Configuration management for the classification engine
//!
//! This module handles loading, validation, and management of all engine configuration.

mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{EngineError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the engine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Engine configuration
    pub engine: EngineConfig,
}

impl Config {
    /// Load, resolve and validate configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::parse_file(path).await?;
        config.load_prompt_templates().await?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load, resolve and validate configuration from environment variables
    pub async fn from_env() -> Result<Self> {
        let mut config = Self::from_env_unvalidated()?;
        config.load_prompt_templates().await?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML file without validating it
    pub async fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| EngineError::config(format!("Failed to read config file: {}", e)))?;

        let engine: EngineConfig = serde_yaml::from_str(&content)
            .map_err(|e| EngineError::config(format!("Failed to parse config: {}", e)))?;

        Ok(Self { engine })
    }

    /// Read environment variables without validating the result
    pub fn from_env_unvalidated() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Ok(Self {
            engine: EngineConfig::from_env()?,
        })
    }

    /// Fill empty prompt templates from their template files.
    ///
    /// A missing file is an error only for topics that have no inline template.
    pub async fn load_prompt_templates(&mut self) -> Result<()> {
        let topics = std::iter::once(&mut self.engine.llm).chain(self.engine.topics.iter_mut());

        for topic in topics {
            if !topic.prompt_template.trim().is_empty() {
                continue;
            }
            let Some(file) = topic.prompt_template_file.as_ref() else {
                continue;
            };
            if !topic.is_configured() && !file.exists() {
                // Unused default topic
                continue;
            }

            topic.prompt_template = tokio::fs::read_to_string(file).await.map_err(|e| {
                EngineError::config(format!(
                    "Prompt template file '{}' not found: {}",
                    file.display(),
                    e
                ))
            })?;
            debug!("Loaded prompt template for topic '{}' from {:?}", topic.id, file);
        }

        Ok(())
    }

    /// Get the default topic
    pub fn llm(&self) -> &TopicConfig {
        &self.engine.llm
    }

    /// Get the named topics
    pub fn topics(&self) -> &[TopicConfig] {
        &self.engine.topics
    }

    /// Get processing settings
    pub fn processing(&self) -> &ProcessingConfig {
        &self.engine.processing
    }

    /// Get cache settings
    pub fn cache(&self) -> &CacheConfig {
        &self.engine.cache
    }

    /// Get source settings
    pub fn source(&self) -> &SourceConfig {
        &self.engine.source
    }

    /// Get logging settings
    pub fn logging(&self) -> &LoggingConfig {
        &self.engine.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.engine
            .validate()
            .map_err(|e| EngineError::config(format!("Configuration errors: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.engine)
            .map_err(|e| EngineError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
