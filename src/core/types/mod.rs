//! Core data types for the classification pipeline
//!
//! Tasks flow into the dispatcher, results and statistics flow out.

pub mod report;
pub mod result;
pub mod row;
pub mod stats;
pub mod task;


pub use report::BatchReport;
pub use result::{ClassificationResult, ClassificationStatus, LabelLevels, MAX_LABEL_LEVELS};
pub use row::{LABEL_COLUMNS, LabeledRow, Row};
pub use stats::ProcessingStats;
pub use task::ClassificationTask;
