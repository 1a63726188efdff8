//! Result aggregation
//!
//! Merges classification results back into the source rows by index.

use crate::core::types::{ClassificationResult, LabeledRow, ProcessingStats, Row};
use std::collections::HashMap;
use tracing::debug;

/// Attach results to their rows, keeping the source row order.
///
/// Rows without a result (empty feedback, faulted worker) and rows whose task
/// failed keep every label column absent.
pub fn apply_results(rows: &[Row], results: &[ClassificationResult]) -> Vec<LabeledRow> {
    let by_index: HashMap<usize, &ClassificationResult> =
        results.iter().map(|r| (r.index, r)).collect();

    let labeled: Vec<LabeledRow> = rows
        .iter()
        .map(|row| {
            let mut out = LabeledRow::unlabeled(row);
            if let Some(result) = by_index.get(&row.index).filter(|r| r.label.is_some()) {
                out.label = result.label.clone();
                out.levels = result.levels.clone();
            }
            out
        })
        .collect();

    debug!(
        "Applied {} results to {} rows ({} labeled)",
        results.len(),
        rows.len(),
        labeled.iter().filter(|r| r.is_labeled()).count()
    );
    labeled
}

/// Statistics recomputed from a finished result set
pub fn summarize(total: usize, results: &[ClassificationResult]) -> ProcessingStats {
    ProcessingStats::from_results(total, results)
}
