//! Reading raw JSON cell values as display text.

use serde_json::Value;

/// Text shown for any value that is missing, null or blank.
pub const BLANK: &str = "-";

/// Returns the string form of a raw cell value, or `None` for null.
///
/// Strings are returned as-is (no quotes), numbers and booleans use their
/// JSON rendering, and nested arrays/objects are serialized compactly.
pub fn display_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        v => Some(v.to_string()),
    }
}

/// Returns `true` when a cell value should be rendered as [`BLANK`].
///
/// A value is blank when it is null, when its string form uppercases to
/// `"NULL"`, or when its string form is empty after trimming.
pub fn is_blank(value: &Value) -> bool {
    match display_string(value) {
        Some(text) => is_blank_text(&text),
        None => true,
    }
}

pub(crate) fn is_blank_text(text: &str) -> bool {
    text.to_uppercase() == "NULL" || text.trim().is_empty()
}
