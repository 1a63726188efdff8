//! Row source configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Which row fields are merged into the feedback text, in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_fields")]
    pub fields: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            fields: default_source_fields(),
        }
    }
}
