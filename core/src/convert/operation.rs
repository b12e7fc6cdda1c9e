//! # Operation Builder
//!
//! Turns one saved request into an OpenAPI operation and records it under its
//! path and method.

use crate::collection::{QueryParam, RequestItem, StructuredUrl, Url};
use crate::convert::normalize::normalize_url_path;
use crate::oas::{Operation, Parameter, Paths};
use tracing::debug;

/// An operation together with the slot it occupies in `paths`.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationEntry {
    /// Normalized path key.
    pub path: String,
    /// Lowercase method key.
    pub method: String,
    /// The operation itself.
    pub operation: Operation,
}

/// Builds the operation for a request node.
pub fn build_operation(item: &RequestItem) -> OperationEntry {
    let request = &item.request;
    let operation = Operation::new(&item.name, &request.description)
        .with_parameters(query_parameters(&request.url));

    OperationEntry {
        path: normalize_url_path(&request.url),
        method: request.method.to_lowercase(),
        operation,
    }
}

/// Builds the operation for `item` and stores it in `paths`.
///
/// A later request with the same path and method replaces the earlier one.
pub fn insert_operation(item: &RequestItem, paths: &mut Paths) {
    let OperationEntry {
        path,
        method,
        operation,
    } = build_operation(item);

    let path_item = paths.entry(path).or_default();
    if let Some(previous) = path_item.insert(method, operation) {
        debug!(
            replaced = %previous.summary,
            by = %item.name,
            "operation overwritten by a later request with the same path and method"
        );
    }
}

fn query_parameters(url: &Url) -> Vec<Parameter> {
    match url {
        Url::Structured(StructuredUrl {
            query: Some(query), ..
        }) => query.iter().map(query_parameter).collect(),
        _ => Vec::new(),
    }
}

fn query_parameter(param: &QueryParam) -> Parameter {
    Parameter::query(param.key.clone(), &param.description, !param.disabled)
}
