#![deny(missing_docs)]

//! # Codec
//!
//! Loading collections from JSON text and rendering documents as YAML or JSON.

use crate::collection::Collection;
use crate::convert::convert_collection;
use crate::error::{AppError, AppResult};
use crate::oas::OpenApiDocument;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Encoding of the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// YAML with keys in insertion order.
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Picks the format from a file extension: `.json` is JSON, anything else YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Yaml,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::General(format!(
                "Unknown output format '{}' (expected yaml or json)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Parses collection JSON.
///
/// Fails only on malformed JSON; any well-formed value yields a collection.
pub fn parse_collection(json: &str) -> AppResult<Collection> {
    Ok(serde_json::from_str(json)?)
}

/// Serializes a document, preserving path and method order.
pub fn render_document(document: &OpenApiDocument, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(document)?),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(document)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Parses, converts and renders in one call.
pub fn convert_str(json: &str, format: OutputFormat) -> AppResult<String> {
    let collection = parse_collection(json)?;
    render_document(&convert_collection(&collection), format)
}
