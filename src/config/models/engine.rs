//! Top-level engine configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Default topic used when a batch names none
    #[serde(default)]
    pub llm: TopicConfig,
    /// Additional named topics
    #[serde(default)]
    pub topics: Vec<TopicConfig>,
    #[serde(default)]
    pub processing: ProcessingConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
