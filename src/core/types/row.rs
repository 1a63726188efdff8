//! Input rows and labeled output rows

use super::result::LabelLevels;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Columns added to every output row
pub const LABEL_COLUMNS: [&str; 5] = ["label", "label_1", "label_2", "label_3", "label_4"];

/// A source row: an ordinal plus opaque named values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub index: usize,
    pub values: Map<String, Value>,
}

impl Row {
    pub fn new(index: usize, values: Map<String, Value>) -> Self {
        Self { index, values }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }
}

/// A source row augmented with the label columns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledRow {
    #[serde(skip)]
    pub index: usize,
    #[serde(flatten)]
    pub values: Map<String, Value>,
    pub label: Option<String>,
    #[serde(flatten)]
    pub levels: LabelLevels,
}

impl LabeledRow {
    /// Start from a source row with every label column absent.
    ///
    /// Pre-existing label columns in the source are replaced.
    pub fn unlabeled(row: &Row) -> Self {
        let mut values = row.values.clone();
        for column in LABEL_COLUMNS {
            values.remove(column);
        }
        Self {
            index: row.index,
            values,
            label: None,
            levels: LabelLevels::default(),
        }
    }

    pub fn is_labeled(&self) -> bool {
        self.label.is_some()
    }
}
