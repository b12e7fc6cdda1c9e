#![deny(missing_docs)]

//! # Collection Model
//!
//! Typed view of a request-tree collection (folders of saved HTTP requests).
//!
//! The source format tells folders from requests, and string URLs from URL
//! objects, only by which fields are present. This module resolves those
//! shapes once, at load time, into explicit enums with every optional field
//! already defaulted:
//!
//! - **Node**: `Request` when a `request` field exists, otherwise `Folder` when
//!   an `item` field exists, otherwise `Unknown`.
//! - **Url**: see [`url`].
//!
//! Building the model never fails: any JSON value maps to some `Collection`.

pub mod url;
mod values;

pub use url::{QueryParam, StructuredUrl, Url, UrlHost, UrlPath};

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use values::{string_field, text_field};

/// Title used when the collection does not name itself.
pub const DEFAULT_TITLE: &str = "Converted API";

/// Method used when a request does not declare one.
pub const DEFAULT_METHOD: &str = "GET";

/// The root of a collection document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Collection {
    /// Collection metadata.
    pub info: CollectionInfo,
    /// Top-level nodes in document order.
    pub item: Vec<Node>,
}

impl Collection {
    /// Builds a collection from an already parsed JSON value.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };
        Self {
            info: map
                .get("info")
                .and_then(Value::as_object)
                .map(CollectionInfo::from_map)
                .unwrap_or_default(),
            item: nodes_from_value(map.get("item")),
        }
    }
}

impl<'de> Deserialize<'de> for Collection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&raw))
    }
}

/// Collection-level metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionInfo {
    /// Taken from `info.name`.
    pub title: String,
    /// Taken from `info.description`.
    pub description: String,
}

impl Default for CollectionInfo {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: String::new(),
        }
    }
}

impl CollectionInfo {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            title: string_field(map, "name").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: text_field(map, "description"),
        }
    }
}

/// One entry of an `item` list.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A saved request (leaf).
    Request(RequestItem),
    /// A folder grouping further nodes.
    Folder(Folder),
    /// Neither `request` nor `item` is present; ignored by every traversal.
    Unknown,
}

impl Node {
    /// Classifies a raw node.
    ///
    /// `request` is checked before `item`: a node carrying both is a request
    /// and its `item` children are ignored.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Node::Unknown;
        };
        let name = string_field(map, "name").unwrap_or_default();

        if let Some(request) = map.get("request") {
            return Node::Request(RequestItem {
                name,
                request: RequestSpec::from_value(request),
            });
        }
        if let Some(children) = map.get("item") {
            return Node::Folder(Folder {
                name,
                item: nodes_from_value(Some(children)),
            });
        }
        Node::Unknown
    }
}

/// A folder node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Folder {
    /// Display name, empty when absent.
    pub name: String,
    /// Child nodes in document order.
    pub item: Vec<Node>,
}

/// A request node: display name plus the request itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestItem {
    /// Display name, empty when absent.
    pub name: String,
    /// The saved request.
    pub request: RequestSpec,
}

/// A saved HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    /// HTTP method as written in the collection (`"GET"` when absent or not a string).
    pub method: String,
    /// Target URL.
    pub url: Url,
    /// Free-text description, empty when absent.
    pub description: String,
}

impl Default for RequestSpec {
    fn default() -> Self {
        Self {
            method: DEFAULT_METHOD.to_string(),
            url: Url::Missing,
            description: String::new(),
        }
    }
}

impl RequestSpec {
    /// Builds a request from its raw JSON value.
    ///
    /// A bare string is shorthand for a `GET` to that URL.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(url) => Self {
                url: Url::Text(url.clone()),
                ..Self::default()
            },
            Value::Object(map) => Self {
                method: string_field(map, "method").unwrap_or_else(|| DEFAULT_METHOD.to_string()),
                url: Url::from_value(map.get("url")),
                description: text_field(map, "description"),
            },
            _ => Self::default(),
        }
    }
}

fn nodes_from_value(value: Option<&Value>) -> Vec<Node> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().map(Node::from_value).collect())
        .unwrap_or_default()
}
