//! Configuration data models
//!
//! This module defines all configuration structures used by the engine.

pub mod cache;
pub mod engine;
pub mod logging;
pub mod processing;
pub mod source;
pub mod topic;

// Re-export all configuration types
pub use cache::*;
pub use engine::*;
pub use logging::*;
pub use processing::*;
pub use source::*;
pub use topic::*;

/// Identifier of the topic built from the `llm` section
pub const DEFAULT_TOPIC_ID: &str = "default";

/// Placeholder substituted with the feedback text in prompt templates
pub const FEEDBACK_PLACEHOLDER: &str = "{FEEDBACK}";

pub fn default_topic_id() -> String {
    DEFAULT_TOPIC_ID.to_string()
}

pub fn default_llm_provider() -> String {
    "openai".to_string()
}

/// Self-hosted endpoints often accept any credential
pub fn default_api_key() -> String {
    "DUMMY_KEY".to_string()
}

pub fn default_max_tokens() -> u32 {
    150
}

pub fn default_max_concurrency() -> usize {
    10
}

pub fn default_max_retry() -> u32 {
    3
}

pub fn default_retry_wait_ms() -> u64 {
    500
}

/// Default per-request timeout in seconds
pub fn default_request_timeout() -> u64 {
    60
}

pub fn default_cache_path() -> std::path::PathBuf {
    std::path::PathBuf::from("classification_cache.json")
}

pub fn default_prompt_template_file() -> std::path::PathBuf {
    std::path::PathBuf::from("prompt_template.txt")
}

pub fn default_source_fields() -> Vec<String> {
    vec![
        "Title".to_string(),
        "Content".to_string(),
        "Description".to_string(),
    ]
}

pub fn default_log_level() -> String {
    "info".to_string()
}
