#![deny(missing_docs)]

//! # PM2OAS Core
//!
//! Core library for converting request-tree API collections into OpenAPI
//! documents.

/// Shared error types.
pub mod error;

/// Typed collection (input) model.
pub mod collection;

/// OpenAPI (output) model.
pub mod oas;

/// Collection ➜ OpenAPI conversion engine.
pub mod convert;

/// JSON loading and YAML/JSON rendering.
pub mod codec;

pub use codec::{convert_str, parse_collection, render_document, OutputFormat};
pub use collection::{Collection, Node, RequestItem, RequestSpec, Url};
pub use convert::{
    build_operation, convert_collection, extract_first_server, insert_operation,
    normalize_url_path, walk_items,
};
pub use error::{AppError, AppResult};
pub use oas::{OpenApiDocument, Operation, Parameter, Paths};
