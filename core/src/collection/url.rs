//! # Request URLs
//!
//! A request URL is stored either as a plain string or as a structured object
//! carrying the pre-split pieces (`raw`, `protocol`, `host`, `path`, `query`).

use crate::collection::values::{bool_field, string_field, text_field};
use serde_json::{Map, Value};

/// The URL of a saved request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Url {
    /// A URL written as a single string, e.g. `"https://api.example.com/v1/items"`.
    Text(String),
    /// A URL object with optional pre-split components.
    Structured(StructuredUrl),
    /// No URL, `null`, or a shape that carries no usable information.
    #[default]
    Missing,
}

impl Url {
    /// Classifies a raw `url` field by its JSON shape.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(text)) => Url::Text(text.clone()),
            Some(Value::Object(map)) => Url::Structured(StructuredUrl::from_map(map)),
            _ => Url::Missing,
        }
    }
}

/// The object form of a request URL.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructuredUrl {
    /// The full URL as typed by the user.
    pub raw: Option<String>,
    /// Scheme without the `://` separator (e.g. `"https"`).
    pub protocol: Option<String>,
    /// Host name, as one string or as dot-separated labels.
    pub host: Option<UrlHost>,
    /// Path, as one string or as segments.
    pub path: Option<UrlPath>,
    /// Query parameters in declaration order. `None` when the field is absent.
    pub query: Option<Vec<QueryParam>>,
}

impl StructuredUrl {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            raw: string_field(map, "raw"),
            protocol: string_field(map, "protocol"),
            host: map.get("host").and_then(UrlHost::from_value),
            path: map.get("path").and_then(UrlPath::from_value),
            query: map.get("query").and_then(Value::as_array).map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_object)
                    .map(QueryParam::from_map)
                    .collect()
            }),
        }
    }
}

/// Host component of a structured URL.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlHost {
    /// `"api.example.com"`
    Name(String),
    /// `["api", "example", "com"]`
    Labels(Vec<String>),
}

impl UrlHost {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(UrlHost::Name(name.clone())),
            Value::Array(labels) => Some(UrlHost::Labels(
                labels
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
            )),
            _ => None,
        }
    }

    /// The host as a single dotted name.
    pub fn resolve(&self) -> String {
        match self {
            UrlHost::Name(name) => name.clone(),
            UrlHost::Labels(labels) => labels.join("."),
        }
    }
}

/// Path component of a structured URL.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlPath {
    /// `"v1/items"` or `"/v1/items"`
    Text(String),
    /// `["v1", "items"]`
    Segments(Vec<String>),
}

impl UrlPath {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(path) => Some(UrlPath::Text(path.clone())),
            Value::Array(segments) => Some(UrlPath::Segments(
                segments.iter().filter_map(segment_text).collect(),
            )),
            _ => None,
        }
    }
}

// Segments are usually strings; older exports wrap them as `{ "value": "..." }`.
fn segment_text(segment: &Value) -> Option<String> {
    match segment {
        Value::String(text) => Some(text.clone()),
        Value::Object(map) => string_field(map, "value"),
        _ => None,
    }
}

/// A query parameter declared on a structured URL.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryParam {
    /// Parameter name. Absent keys stay absent in the output.
    pub key: Option<String>,
    /// Free-text description, empty when not given.
    pub description: String,
    /// Whether the parameter is switched off. Only a JSON `true` counts.
    pub disabled: bool,
}

impl QueryParam {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            key: string_field(map, "key"),
            description: text_field(map, "description"),
            disabled: bool_field(map, "disabled").unwrap_or(false),
        }
    }
}
