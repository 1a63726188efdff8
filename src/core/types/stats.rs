//! Batch accounting

use super::result::{ClassificationResult, ClassificationStatus};
use serde::{Deserialize, Serialize};

/// Counters accumulated while a batch runs.
///
/// Once a batch is finished `cache_hits + api_calls + failed == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingStats {
    pub total: usize,
    pub cache_hits: usize,
    pub api_calls: usize,
    pub failed: usize,
}

impl ProcessingStats {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    /// Pure fold over result statuses
    pub fn from_results<'a, I>(total: usize, results: I) -> Self
    where
        I: IntoIterator<Item = &'a ClassificationResult>,
    {
        results.into_iter().fold(Self::new(total), |mut stats, r| {
            stats.record(r.status);
            stats
        })
    }

    /// Count one finished task
    pub fn record(&mut self, status: ClassificationStatus) {
        match status {
            ClassificationStatus::CacheHit => self.cache_hits += 1,
            ClassificationStatus::ApiSuccess => self.api_calls += 1,
            ClassificationStatus::Failed => self.failed += 1,
        }
    }

    /// Tasks accounted for so far
    pub fn processed(&self) -> usize {
        self.cache_hits + self.api_calls + self.failed
    }

    pub fn succeeded(&self) -> usize {
        self.cache_hits + self.api_calls
    }

    pub fn is_complete(&self) -> bool {
        self.processed() == self.total
    }

    /// `(cache_hits + api_calls) / total`, 0 for an empty batch
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.succeeded() as f64 / self.total as f64
        }
    }

    /// Success rate as a percentage rounded to one decimal
    pub fn success_rate_percent(&self) -> f64 {
        (self.success_rate() * 1000.0).round() / 10.0
    }
}

impl std::fmt::Display for ProcessingStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "total={} cache_hits={} api_calls={} failed={} success_rate={:.1}%",
            self.total,
            self.cache_hits,
            self.api_calls,
            self.failed,
            self.success_rate_percent()
        )
    }
}
