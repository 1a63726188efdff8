//! Label extraction from free-form model output

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```(?:json)?").expect("valid code fence pattern"));

/// Field names a label may be returned under, preferred first
const LABEL_FIELDS: [&str; 2] = ["label", "label_en"];

/// Remove Markdown code fence markers and surrounding whitespace
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

/// Parse the JSON object embedded in `text`.
///
/// The span from the first `{` to the last `}` is tried first, then the whole text.
pub fn extract_json(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }

    let cleaned = strip_code_fences(text);

    if let (Some(start), Some(end)) = (cleaned.find('{'), cleaned.rfind('}')) {
        if start < end {
            if let Ok(value) = serde_json::from_str(&cleaned[start..=end]) {
                return Some(value);
            }
        }
    }

    serde_json::from_str(&cleaned).ok()
}

/// Trimmed, non-empty label carried by the model output
pub fn extract_label(text: &str) -> Option<String> {
    let value = extract_json(text)?;
    let object = value.as_object()?;

    LABEL_FIELDS
        .iter()
        .filter_map(|field| object.get(*field).and_then(Value::as_str))
        .map(str::trim)
        .find(|label| !label.is_empty())
        .map(str::to_string)
}
