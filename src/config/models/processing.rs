//! Batch processing configuration

use super::*;
use crate::utils::error::RetryConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Worker pool and retry settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Size of the worker pool
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    /// Attempts per classification, including the first one
    #[serde(default = "default_max_retry")]
    pub max_retry: u32,
    /// Pause between attempts in milliseconds
    #[serde(default = "default_retry_wait_ms")]
    pub retry_wait_ms: u64,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
            max_retry: default_max_retry(),
            retry_wait_ms: default_retry_wait_ms(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl ProcessingConfig {
    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig::new(self.max_retry, Duration::from_millis(self.retry_wait_ms))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}
