//! Error handling for the classification engine
//!
//! This module defines all error types used throughout the engine.

mod helpers;
mod types;

pub use types::{EngineError, Result};
