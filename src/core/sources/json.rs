//! JSON file rows

use super::{RowSink, RowSource};
use crate::core::types::{LabeledRow, Row};
use crate::utils::error::{EngineError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads a JSON array of objects; the index of a row is its array position
#[derive(Debug, Clone)]
pub struct JsonRowSource {
    path: PathBuf,
}

impl JsonRowSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse rows from JSON text
    pub fn parse(content: &str) -> Result<Vec<Row>> {
        let value: Value = serde_json::from_str(content)?;
        let Value::Array(items) = value else {
            return Err(EngineError::parsing("Expected a JSON array of row objects"));
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(values) => Ok(Row::new(index, values)),
                other => Err(EngineError::parsing(format!(
                    "Row {} is not an object: {}",
                    index, other
                ))),
            })
            .collect()
    }
}

#[async_trait]
impl RowSource for JsonRowSource {
    async fn read_rows(&self) -> Result<Vec<Row>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            EngineError::not_found(format!("Cannot read rows from {:?}: {}", self.path, e))
        })?;
        let rows = Self::parse(&content)?;
        info!("Read {} rows from {:?}", rows.len(), self.path);
        Ok(rows)
    }
}

/// Writes labeled rows as a pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct JsonRowSink {
    path: PathBuf,
}

impl JsonRowSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RowSink for JsonRowSink {
    async fn write_rows(&self, rows: &[LabeledRow]) -> Result<()> {
        let content = serde_json::to_string_pretty(rows)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, content).await?;

        info!("Wrote {} rows to {:?}", rows.len(), self.path);
        Ok(())
    }
}
