//! Configuration loading from environment variables

use super::models::*;
use crate::utils::error::{EngineError, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset variables keep their defaults; malformed numbers are errors.
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        let mut config = Self::default();

        // Default topic
        if let Ok(base_url) = env::var("OPENAI_BASE_URL") {
            config.llm.base_url = base_url;
        }
        if let Ok(api_key) = env::var("OPENAI_API_KEY") {
            config.llm.api_key = api_key;
        }
        if let Ok(model) = env::var("MODEL") {
            config.llm.model = model;
        }
        if let Some(temperature) = parse_var("TEMPERATURE")? {
            config.llm.temperature = temperature;
        }
        if let Some(max_tokens) = parse_var("MAX_TOKENS")? {
            config.llm.max_tokens = max_tokens;
        }
        config.llm.prompt_template_file = Some(
            env::var("PROMPT_TEMPLATE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_prompt_template_file()),
        );

        // Processing
        if let Some(workers) = parse_var("MAX_WORKERS")? {
            config.processing.max_concurrency = workers;
        }
        if let Some(max_retry) = parse_var("MAX_RETRY")? {
            config.processing.max_retry = max_retry;
        }
        if let Some(wait_secs) = parse_var::<f64>("RETRY_WAIT")? {
            if wait_secs < 0.0 {
                return Err(EngineError::config("RETRY_WAIT must not be negative"));
            }
            config.processing.retry_wait_ms = (wait_secs * 1000.0).round() as u64;
        }
        if let Some(timeout) = parse_var("REQUEST_TIMEOUT")? {
            config.processing.request_timeout = timeout;
        }

        // Cache
        if let Ok(cache_file) = env::var("CACHE_FILE") {
            config.cache.path = PathBuf::from(cache_file);
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(json) = parse_var("LOG_JSON")? {
            config.logging.json = json;
        }

        debug!("Configuration loaded from environment variables");
        Ok(config)
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| EngineError::config(format!("Invalid {}: {}", name, e))),
        _ => Ok(None),
    }
}
