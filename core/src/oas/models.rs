#![deny(missing_docs)]

//! # OpenAPI Models
//!
//! Serializable structures for the generated document.
//!
//! Maps are `IndexMap`s so paths and methods are written in the order the
//! converter inserted them, not sorted.

use indexmap::IndexMap;
use serde::Serialize;

/// Value of the top-level `openapi` field.
pub const OPENAPI_VERSION: &str = "3.0.0";

/// Value of `info.version`.
pub const DOCUMENT_VERSION: &str = "1.0.0";

/// Server used when no request carries an absolute URL.
pub const DEFAULT_SERVER_URL: &str = "http://localhost";

/// Description of the single `default` response attached to every operation.
pub const DEFAULT_RESPONSE_DESCRIPTION: &str = "Default response";

/// Path template ➜ operations on that path.
pub type Paths = IndexMap<String, PathItem>;

/// Lowercase HTTP method ➜ operation.
pub type PathItem = IndexMap<String, Operation>;

/// The generated OpenAPI document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenApiDocument {
    /// Format marker, always [`OPENAPI_VERSION`].
    pub openapi: String,
    /// Document metadata.
    pub info: Info,
    /// Always exactly one entry.
    pub servers: Vec<Server>,
    /// Operations grouped by path.
    pub paths: Paths,
}

impl OpenApiDocument {
    /// Assembles a document around one server.
    pub fn new(info: Info, server: Server, paths: Paths) -> Self {
        Self {
            openapi: OPENAPI_VERSION.to_string(),
            info,
            servers: vec![server],
            paths,
        }
    }
}

/// The `info` object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Info {
    /// API title.
    pub title: String,
    /// API description (may be empty).
    pub description: String,
    /// Document version, always [`DOCUMENT_VERSION`].
    pub version: String,
}

impl Info {
    /// Creates the info block with the fixed document version.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            version: DOCUMENT_VERSION.to_string(),
        }
    }
}

/// A `servers` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Server {
    /// Base URL (`scheme://host`).
    pub url: String,
}

impl Server {
    /// Creates a server entry.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// A single operation under a path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    /// Request display name.
    pub summary: String,
    /// Request description.
    pub description: String,
    /// Query parameters; omitted from the output when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Always a single `default` entry.
    pub responses: IndexMap<String, Response>,
}

impl Operation {
    /// Creates an operation with the fixed `default` response and no parameters.
    pub fn new(summary: impl Into<String>, description: impl Into<String>) -> Self {
        let mut responses = IndexMap::new();
        responses.insert(
            "default".to_string(),
            Response {
                description: DEFAULT_RESPONSE_DESCRIPTION.to_string(),
            },
        );
        Self {
            summary: summary.into(),
            description: description.into(),
            parameters: Vec::new(),
            responses,
        }
    }

    /// Sets the parameter list.
    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }
}

/// A response entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    /// Human readable description.
    pub description: String,
}

/// A query parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    /// Parameter name; written as `null` when the source had no key.
    pub name: Option<String>,
    /// Parameter location, always `"query"`.
    #[serde(rename = "in")]
    pub location: String,
    /// Parameter description (may be empty).
    pub description: String,
    /// Whether the parameter is required.
    pub required: bool,
    /// Value schema, always a plain string.
    pub schema: ParameterSchema,
}

impl Parameter {
    /// Creates a string-typed query parameter.
    pub fn query(name: Option<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name,
            location: "query".to_string(),
            description: description.into(),
            required,
            schema: ParameterSchema::string(),
        }
    }
}

/// The inline schema of a parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSchema {
    /// JSON type name.
    #[serde(rename = "type")]
    pub kind: String,
}

impl ParameterSchema {
    /// `{ "type": "string" }`
    pub fn string() -> Self {
        Self {
            kind: "string".to_string(),
        }
    }
}
