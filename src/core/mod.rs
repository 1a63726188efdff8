//! Core functionality for the classifier
//!
//! This module contains the batch classification pipeline and its data types.

pub mod aggregate;
pub mod batch;
pub mod cache_manager;
pub mod classifier;
pub mod engine;
pub mod normalize;
pub mod sources;
pub mod topics;
pub mod types;

pub use engine::{BatchOutcome, ClassificationEngine};
