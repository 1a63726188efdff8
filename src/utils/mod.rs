//! Utility modules for the classification engine
//!
//! ## Module Organization
//!
//! - **error**: Error type and retry policy
//! - **logging**: Tracing subscriber setup
//! - **net**: HTTP client construction and URL helpers

pub mod error;
pub mod logging;
pub mod net;

pub use net::{ClientUtils, HttpClientConfig};

/// Mask a credential for display, keeping only a short prefix
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }

    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 8 {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}

/// Truncate string to specified number of characters with ellipsis
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
