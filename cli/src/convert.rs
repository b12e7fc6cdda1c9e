#![deny(missing_docs)]

//! # Convert Command
//!
//! Reads a collection file, converts it and writes the OpenAPI document.

use pm2oas_core::{
    convert_collection, parse_collection, render_document, AppError, AppResult, OutputFormat,
};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Output encodings selectable on the command line.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// YAML (keys in insertion order).
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => OutputFormat::Yaml,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Arguments for the conversion.
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Path to the collection JSON file.
    pub input: PathBuf,

    /// Path of the OpenAPI document to write.
    pub output: PathBuf,

    /// Output encoding. Inferred from the output extension when omitted
    /// (`.json` ➜ JSON, anything else ➜ YAML).
    #[clap(long, value_enum, env = "PM2OAS_FORMAT")]
    pub format: Option<FormatArg>,
}

impl ConvertArgs {
    fn output_format(&self) -> OutputFormat {
        self.format
            .map(OutputFormat::from)
            .unwrap_or_else(|| OutputFormat::from_path(&self.output))
    }
}

/// Executes the conversion.
pub fn execute(args: &ConvertArgs) -> AppResult<()> {
    let json = fs::read_to_string(&args.input).map_err(|e| {
        AppError::General(format!("Failed to read collection {:?}: {}", args.input, e))
    })?;

    let collection = parse_collection(&json)?;
    let document = convert_collection(&collection);
    let format = args.output_format();
    let rendered = render_document(&document, format)?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(&args.output, rendered).map_err(|e| {
        AppError::General(format!("Failed to write document {:?}: {}", args.output, e))
    })?;

    info!(
        input = ?args.input,
        output = ?args.output,
        %format,
        paths = document.paths.len(),
        "Generated OpenAPI document"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const COLLECTION: &str = r#"{
        "info": {"name": "Demo"},
        "item": [{
            "name": "List",
            "request": {
                "method": "GET",
                "url": {
                    "raw": "https://api.example.com/v1/items",
                    "query": [{"key": "limit", "description": "max items"}]
                }
            }
        }]
    }"#;

    fn args(input: PathBuf, output: PathBuf, format: Option<FormatArg>) -> ConvertArgs {
        ConvertArgs {
            input,
            output,
            format,
        }
    }

    #[test]
    fn test_execute_writes_yaml() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("collection.json");
        let output = dir.path().join("nested/out/openapi.yaml");
        fs::write(&input, COLLECTION).unwrap();

        execute(&args(input, output.clone(), None)).unwrap();

        let yaml = fs::read_to_string(output).unwrap();
        let value: serde_json::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(value["servers"][0]["url"], "https://api.example.com");
        assert_eq!(
            value["paths"]["/v1/items"]["get"]["parameters"][0]["name"],
            "limit"
        );
    }

    #[test]
    fn test_execute_infers_json_from_extension() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("collection.json");
        let output = dir.path().join("openapi.json");
        fs::write(&input, COLLECTION).unwrap();

        execute(&args(input, output.clone(), None)).unwrap();

        let text = fs::read_to_string(output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["info"]["title"], "Demo");
    }

    #[test]
    fn test_explicit_format_overrides_extension() {
        let parsed = args(
            PathBuf::from("in.json"),
            PathBuf::from("out.json"),
            Some(FormatArg::Yaml),
        );
        assert_eq!(parsed.output_format(), OutputFormat::Yaml);
    }

    #[test]
    fn test_execute_missing_input() {
        let dir = tempdir().unwrap();
        let err = execute(&args(
            dir.path().join("missing.json"),
            dir.path().join("openapi.yaml"),
            None,
        ))
        .unwrap_err();
        assert!(format!("{}", err).contains("Failed to read collection"));
    }

    #[test]
    fn test_execute_malformed_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("collection.json");
        let output = dir.path().join("openapi.yaml");
        fs::write(&input, "{ not json").unwrap();

        let err = execute(&args(input, output.clone(), None)).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
        assert!(!output.exists());
    }
}
