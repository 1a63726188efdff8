//! Classification result

use serde::{Deserialize, Serialize};

/// Deepest label level kept in the output
pub const MAX_LABEL_LEVELS: usize = 4;

/// How a task obtained its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassificationStatus {
    /// Label served from the label cache
    CacheHit,
    /// Label obtained from the LLM endpoint
    ApiSuccess,
    /// Every attempt failed
    Failed,
}

impl ClassificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CacheHit => "cache-hit",
            Self::ApiSuccess => "api-success",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ClassificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The individual levels of a hierarchical label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelLevels {
    pub label_1: Option<String>,
    pub label_2: Option<String>,
    pub label_3: Option<String>,
    pub label_4: Option<String>,
}

impl LabelLevels {
    /// Build from up to four levels, ignoring anything deeper
    pub fn from_levels<I>(levels: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let mut iter = levels.into_iter();
        Self {
            label_1: iter.next().flatten(),
            label_2: iter.next().flatten(),
            label_3: iter.next().flatten(),
            label_4: iter.next().flatten(),
        }
    }

    /// Levels in order, from the broadest to the most specific
    pub fn as_array(&self) -> [Option<&str>; MAX_LABEL_LEVELS] {
        [
            self.label_1.as_deref(),
            self.label_2.as_deref(),
            self.label_3.as_deref(),
            self.label_4.as_deref(),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.as_array().iter().all(Option::is_none)
    }
}

/// Outcome of one classification task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub index: usize,
    /// Full hierarchical label, absent when the task failed
    pub label: Option<String>,
    #[serde(flatten)]
    pub levels: LabelLevels,
    pub status: ClassificationStatus,
    pub feedback_key: String,
}

impl ClassificationResult {
    /// A labeled result; levels are derived from the label
    pub fn labeled(
        index: usize,
        label: String,
        status: ClassificationStatus,
        feedback_key: String,
    ) -> Self {
        let levels = crate::core::normalize::split_label(&label);
        Self {
            index,
            label: Some(label),
            levels,
            status,
            feedback_key,
        }
    }

    /// A failed result with every label field absent
    pub fn failed(index: usize, feedback_key: String) -> Self {
        Self {
            index,
            label: None,
            levels: LabelLevels::default(),
            status: ClassificationStatus::Failed,
            feedback_key,
        }
    }
}
