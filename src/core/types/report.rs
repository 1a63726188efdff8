//! Batch report handed back to the caller for persistence

use super::stats::ProcessingStats;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub batch_id: Uuid,
    pub topic_id: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub stats: ProcessingStats,
    /// Percentage with one decimal
    pub success_rate: f64,
}

impl BatchReport {
    pub fn new(
        topic_id: impl Into<String>,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        stats: ProcessingStats,
    ) -> Self {
        let duration_ms = (finished_at - started_at).num_milliseconds().max(0) as u64;
        Self {
            batch_id: Uuid::new_v4(),
            topic_id: topic_id.into(),
            started_at,
            finished_at,
            duration_ms,
            stats,
            success_rate: stats.success_rate_percent(),
        }
    }
}
