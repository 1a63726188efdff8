//! HTTP Client utilities
//!
//! This module provides HTTP client configuration and URL helpers
//! for talking to OpenAI-compatible endpoints.

pub mod types;
pub mod utils;


pub use types::HttpClientConfig;
pub use utils::ClientUtils;
