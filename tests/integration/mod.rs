//! Integration tests for feedback-classifier
//!
//! These tests drive the public API end to end: rows in, labeled rows and
//! statistics out, against a fake LLM endpoint or scripted classifiers.

pub mod cache_tests;
pub mod config_validation_tests;
pub mod pipeline_tests;
