use crate::core::types::{ClassificationTask, Row};
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

/// Joins the distinct field values of a row
pub const FEEDBACK_SEPARATOR: &str = " | ";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

static PADDED_PIPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\|\s*").expect("valid separator pattern"));

/// Render a cell as trimmed text. Missing and null cells are empty.
pub fn clean_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string().trim().to_string(),
    }
}

/// Merge the configured fields of a row into one feedback string.
///
/// Empty values are skipped and a value equal to an earlier one is kept once.
pub fn merge_feedback<S: AsRef<str>>(row: &Row, fields: &[S]) -> String {
    let mut seen = HashSet::new();
    let parts: Vec<String> = fields
        .iter()
        .map(|field| clean_text(row.get(field.as_ref())))
        .filter(|part| !part.is_empty() && seen.insert(part.clone()))
        .collect();

    parts.join(FEEDBACK_SEPARATOR).trim().to_string()
}

/// Canonical cache key: whitespace runs collapsed, `|` padded by exactly one space
pub fn normalize_feedback_key(feedback: &str) -> String {
    let trimmed = feedback.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    // Adjacent separators end up as `a | | b`
    let padded = PADDED_PIPE.replace_all(trimmed, FEEDBACK_SEPARATOR);
    let collapsed = WHITESPACE_RUN.replace_all(&padded, " ");
    collapsed.trim().to_string()
}

/// One task per row with non-empty feedback, in row order
pub fn prepare_tasks<S: AsRef<str>>(rows: &[Row], fields: &[S]) -> Vec<ClassificationTask> {
    let tasks: Vec<ClassificationTask> = rows
        .iter()
        .filter_map(|row| {
            let feedback = merge_feedback(row, fields);
            if feedback.is_empty() {
                return None;
            }
            let key = normalize_feedback_key(&feedback);
            Some(ClassificationTask::new(row.index, feedback, key))
        })
        .collect();

    debug!(
        "Prepared {} tasks from {} rows ({} skipped)",
        tasks.len(),
        rows.len(),
        rows.len() - tasks.len()
    );
    tasks
}
