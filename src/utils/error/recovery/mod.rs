//! Error recovery utilities
//!
//! Bounded, sequential retry with a fixed pause between attempts.

mod retry;
mod types;

pub use retry::RetryPolicy;
pub use types::RetryConfig;
