#![deny(missing_docs)]

//! # Conversion Engine
//!
//! Maps a [`Collection`] onto an [`OpenApiDocument`] in one pass:
//!
//! - **servers**: pre-pass deriving the base server URL.
//! - **walker**: document-order traversal of folders and requests.
//! - **normalize**: URL ➜ path key.
//! - **operation**: request ➜ operation, merged into `paths`.
//!
//! Conversion is total: missing or oddly shaped fields fall back to defaults
//! and never produce an error.

pub mod normalize;
pub mod operation;
pub mod servers;
mod uri;
pub mod walker;

pub use normalize::normalize_url_path;
pub use operation::{build_operation, insert_operation, OperationEntry};
pub use servers::{extract_first_server, server_from_url};
pub use walker::walk_items;

use crate::collection::Collection;
use crate::oas::{Info, OpenApiDocument, Paths, Server, DEFAULT_SERVER_URL};
use tracing::debug;

/// Converts a collection into an OpenAPI document.
pub fn convert_collection(collection: &Collection) -> OpenApiDocument {
    let server_url = extract_first_server(collection).unwrap_or_else(|| {
        debug!(fallback = DEFAULT_SERVER_URL, "no absolute request URL found");
        DEFAULT_SERVER_URL.to_string()
    });

    let mut paths = Paths::new();
    walk_items(&collection.item, &mut paths);
    debug!(paths = paths.len(), "collection converted");

    OpenApiDocument::new(
        Info::new(&collection.info.title, &collection.info.description),
        Server::new(server_url),
        paths,
    )
}
