//! Helpers for reading scalar YAML values.

use crate::length::format_number;

/// Renders a scalar YAML value (string, number or bool) as plain text.
///
/// Used for identifiers and keyword values, where `1`, `"1"` and `800` are
/// all acceptable. Returns `None` for mappings, sequences and null.
pub(crate) fn scalar_text(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else {
                n.as_f64().map(format_number)
            }
        }
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
