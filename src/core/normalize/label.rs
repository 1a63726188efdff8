use crate::core::types::{LabelLevels, MAX_LABEL_LEVELS};

/// Separates the levels of a hierarchical label
pub const LEVEL_SEPARATOR: char = '/';

/// Stands for a literal `/` inside a single level
pub const SLASH_ESCAPE: char = '~';

/// Split `A / B / C` into levels. Blank segments and segments past the
/// fourth are absent; `~` inside a segment decodes to `/`.
pub fn split_label(label: &str) -> LabelLevels {
    if label.trim().is_empty() {
        return LabelLevels::default();
    }

    LabelLevels::from_levels(label.split(LEVEL_SEPARATOR).take(MAX_LABEL_LEVELS).map(|part| {
        let part = part.trim();
        (!part.is_empty()).then(|| part.replace(SLASH_ESCAPE, "/"))
    }))
}

/// Rejoin the present levels, re-escaping literal slashes
pub fn join_levels(levels: &LabelLevels) -> Option<String> {
    let parts: Vec<String> = levels
        .as_array()
        .iter()
        .flatten()
        .map(|level| level.replace(LEVEL_SEPARATOR, &SLASH_ESCAPE.to_string()))
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(&LEVEL_SEPARATOR.to_string()))
    }
}
