//! Topic (LLM endpoint) configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A named LLM endpoint configuration selectable per batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicConfig {
    /// Topic identifier
    #[serde(default = "default_topic_id")]
    pub id: String,
    /// Human readable name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Provider family; only OpenAI-compatible endpoints are spoken to
    #[serde(default = "default_llm_provider")]
    pub llm_provider: String,
    /// Endpoint base URL, e.g. `https://api.openai.com/v1`
    #[serde(default)]
    pub base_url: String,
    /// Bearer credential
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Model identifier
    #[serde(default)]
    pub model: String,
    /// Prompt with a `{FEEDBACK}` placeholder
    #[serde(default)]
    pub prompt_template: String,
    /// File to read the prompt from when `prompt_template` is empty
    #[serde(default)]
    pub prompt_template_file: Option<PathBuf>,
    #[serde(default)]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self {
            id: default_topic_id(),
            name: String::new(),
            description: None,
            llm_provider: default_llm_provider(),
            base_url: String::new(),
            api_key: default_api_key(),
            model: String::new(),
            prompt_template: String::new(),
            prompt_template_file: None,
            temperature: 0.0,
            max_tokens: default_max_tokens(),
        }
    }
}

impl TopicConfig {
    /// Whether any endpoint setting was provided for this topic
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() || !self.model.is_empty()
    }

    /// Display name, falling back to the identifier
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
