//! Row sources and sinks
//!
//! Where rows come from and where labeled rows go. The engine only sees the traits.

mod json;


pub use json::{JsonRowSink, JsonRowSource};

use crate::core::types::{LabeledRow, Row};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Supplies the rows of one batch
#[async_trait]
pub trait RowSource: Send + Sync {
    /// All rows, each with a unique ordinal index
    async fn read_rows(&self) -> Result<Vec<Row>>;
}

/// Receives labeled rows
#[async_trait]
pub trait RowSink: Send + Sync {
    async fn write_rows(&self, rows: &[LabeledRow]) -> Result<()>;
}
