//! OpenAI-compatible classification client

use super::Classifier;
use super::parsing::extract_label;
use super::prompt::{SYSTEM_PROMPT, build_prompt};
use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ClassifyAttemptError,
};
use crate::config::{ProcessingConfig, TopicConfig};
use crate::utils::error::{Result, RetryConfig, RetryPolicy};
use crate::utils::net::{ClientUtils, HttpClientConfig};
use crate::utils::truncate_string;
use async_trait::async_trait;
use tracing::debug;

/// Longest slice of a bad response kept in an error message
const ERROR_SNIPPET_CHARS: usize = 200;

/// Classifier bound to one topic's endpoint
#[derive(Debug, Clone)]
pub struct LlmClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    prompt_template: String,
    temperature: f32,
    max_tokens: u32,
    retry: RetryPolicy,
}

impl LlmClient {
    /// Build a client for `topic` using the processing retry and timeout settings
    pub fn new(topic: &TopicConfig, processing: &ProcessingConfig) -> Result<Self> {
        let http_config = HttpClientConfig::default().with_timeout(processing.request_timeout());
        Self::with_settings(topic, processing.retry_config(), &http_config)
    }

    pub fn with_settings(
        topic: &TopicConfig,
        retry: RetryConfig,
        http_config: &HttpClientConfig,
    ) -> Result<Self> {
        let http = ClientUtils::create_http_client(http_config)?;

        Ok(Self {
            http,
            endpoint: ClientUtils::add_path_to_api_base(&topic.base_url, "chat/completions"),
            api_key: topic.api_key.clone(),
            model: topic.model.clone(),
            prompt_template: topic.prompt_template.clone(),
            temperature: topic.temperature,
            max_tokens: topic.max_tokens,
            retry: RetryPolicy::new(retry),
        })
    }

    /// Full chat completions URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One request, no retry
    pub async fn request_label(
        &self,
        prompt: &str,
    ) -> std::result::Result<String, ClassifyAttemptError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClassifyAttemptError::Api {
                status: status.as_u16(),
                message: truncate_string(&text, ERROR_SNIPPET_CHARS),
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&text)?;
        let content = parsed
            .first_content()
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .ok_or(ClassifyAttemptError::EmptyResponse)?;

        extract_label(content).ok_or_else(|| {
            ClassifyAttemptError::Unlabeled(truncate_string(content, ERROR_SNIPPET_CHARS))
        })
    }
}

#[async_trait]
impl Classifier for LlmClient {
    async fn classify(&self, feedback: &str) -> Option<String> {
        if feedback.trim().is_empty() {
            return None;
        }

        let prompt = build_prompt(&self.prompt_template, feedback);
        let max_attempts = self.retry.config().max_attempts;

        self.retry
            .call(|attempt| {
                debug!("Classification attempt {}/{}", attempt, max_attempts);
                self.request_label(&prompt)
            })
            .await
            .ok()
    }
}
