#![deny(missing_docs)]

//! # OpenAPI Output Module
//!
//! - **models**: the minimal OpenAPI 3.0 document produced by the converter.

pub mod models;

pub use models::{
    Info, OpenApiDocument, Operation, Parameter, ParameterSchema, PathItem, Paths, Response,
    Server, DEFAULT_RESPONSE_DESCRIPTION, DEFAULT_SERVER_URL, DOCUMENT_VERSION, OPENAPI_VERSION,
};
