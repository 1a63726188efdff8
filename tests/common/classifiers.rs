//! Classifiers with scripted behavior

use async_trait::async_trait;
use feedback_classifier::Classifier;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Answers from a fixed feedback -> label table and records every call
#[derive(Debug, Default)]
pub struct TableClassifier {
    labels: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl TableClassifier {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            labels: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Feedback texts seen so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl Classifier for TableClassifier {
    async fn classify(&self, feedback: &str) -> Option<String> {
        self.calls.lock().push(feedback.to_string());
        tokio::task::yield_now().await;
        self.labels.get(feedback).cloned()
    }
}

/// Panics on every `n`th call, answers with a fixed label otherwise
#[derive(Debug)]
pub struct FlakyClassifier {
    every: usize,
    label: String,
    calls: AtomicUsize,
}

impl FlakyClassifier {
    pub fn new(every: usize, label: &str) -> Self {
        Self {
            every: every.max(1),
            label: label.to_string(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Classifier for FlakyClassifier {
    async fn classify(&self, _feedback: &str) -> Option<String> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::task::yield_now().await;
        if n % self.every == 0 {
            panic!("simulated worker fault on call {}", n);
        }
        Some(self.label.clone())
    }
}
