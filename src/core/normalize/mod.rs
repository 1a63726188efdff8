//! Feedback normalization and label splitting
//!
//! Rows are reduced to a merged feedback string and a normalized cache key;
//! hierarchical labels are split back into their levels.

mod feedback;
mod label;


pub use feedback::{
    FEEDBACK_SEPARATOR, clean_text, merge_feedback, normalize_feedback_key, prepare_tasks,
};
pub use label::{LEVEL_SEPARATOR, SLASH_ESCAPE, join_levels, split_label};
