//! LLM classification call
//!
//! One feedback text in, one hierarchical label out. Transport errors, API
//! errors and unusable responses are all retried the same way; a spent retry
//! budget yields `None` instead of an error.

mod client;
mod parsing;
mod prompt;
mod types;


pub use client::LlmClient;
pub use parsing::{extract_json, extract_label, strip_code_fences};
pub use prompt::{OUTPUT_FORMAT_INSTRUCTION, SYSTEM_PROMPT, build_prompt};
pub use types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ClassifyAttemptError};

use async_trait::async_trait;

/// Anything able to turn feedback into a label
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Label for `feedback`, or `None` once every attempt has failed
    async fn classify(&self, feedback: &str) -> Option<String>;
}
