//! # Field Readers
//!
//! Lenient accessors over raw JSON objects. Every reader returns `None` (or an
//! empty default) for absent or wrongly-typed fields instead of failing.

use serde_json::{Map, Value};

/// Returns the field as an owned string when it holds a JSON string.
pub(crate) fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Reads a free-text field.
///
/// Collections store descriptions either as a plain string or as
/// `{ "content": "...", "type": "text/markdown" }`.
pub(crate) fn text_field(map: &Map<String, Value>, key: &str) -> String {
    match map.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Object(inner)) => string_field(inner, "content").unwrap_or_default(),
        _ => String::new(),
    }
}

/// Returns the field when it is a JSON boolean.
pub(crate) fn bool_field(map: &Map<String, Value>, key: &str) -> Option<bool> {
    map.get(key).and_then(Value::as_bool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_string_field_ignores_non_strings() {
        let map = object(json!({"name": "List", "method": 5}));
        assert_eq!(string_field(&map, "name").as_deref(), Some("List"));
        assert_eq!(string_field(&map, "method"), None);
        assert_eq!(string_field(&map, "missing"), None);
    }

    #[test]
    fn test_text_field_reads_content_objects() {
        let map = object(json!({
            "plain": "hello",
            "rich": {"content": "# Title", "type": "text/markdown"},
            "null": null
        }));
        assert_eq!(text_field(&map, "plain"), "hello");
        assert_eq!(text_field(&map, "rich"), "# Title");
        assert_eq!(text_field(&map, "null"), "");
        assert_eq!(text_field(&map, "missing"), "");
    }
}
