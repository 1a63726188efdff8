//! Label cache configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Label cache configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Location of the durable key -> label store
    #[serde(default = "default_cache_path")]
    pub path: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: default_cache_path(),
        }
    }
}
