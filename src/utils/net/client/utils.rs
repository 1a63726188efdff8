use super::types::HttpClientConfig;
use crate::utils::error::{EngineError, Result};
use reqwest::{Client, ClientBuilder};

/// Utility functions for HTTP client operations
pub struct ClientUtils;

impl ClientUtils {
    /// Creates an HTTP client with the specified configuration
    pub fn create_http_client(config: &HttpClientConfig) -> Result<Client> {
        ClientBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| EngineError::config(format!("Failed to build HTTP client: {}", e)))
    }

    /// Joins a base URL and a path with exactly one slash between them
    pub fn add_path_to_api_base(api_base: &str, ending_path: &str) -> String {
        let base = api_base.trim_end_matches('/');
        let path = ending_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Accepts only well-formed http(s) URLs
    pub fn validate_url(url: &str) -> std::result::Result<(), String> {
        let parsed = url::Url::parse(url).map_err(|e| format!("Invalid URL '{}': {}", url, e))?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(format!(
                "Unsupported URL scheme '{}'. Only http and https are supported",
                scheme
            )),
        }
    }
}
