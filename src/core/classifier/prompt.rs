//! Prompt construction

use crate::config::FEEDBACK_PLACEHOLDER;

/// System message sent with every classification request
pub const SYSTEM_PROMPT: &str = "You are an expert feedback classification system.";

/// Appended to every prompt so the model answers with a single JSON object
pub const OUTPUT_FORMAT_INSTRUCTION: &str = "You must return exactly one single JSON object, NO other characters. \
The JSON structure must be strictly as follows (Example with hierarchical label):\n\
{ \"label\": \"BUYER / Engagement / Seller / Buyer\" }";

/// Substitute the feedback into the template and append the format instruction
pub fn build_prompt(template: &str, feedback: &str) -> String {
    format!(
        "{}\n\n{}",
        template.replace(FEEDBACK_PLACEHOLDER, feedback),
        OUTPUT_FORMAT_INSTRUCTION
    )
}
