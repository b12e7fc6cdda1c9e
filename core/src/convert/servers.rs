//! # Server Extraction
//!
//! Finds the base server URL: the origin of the first request, in document
//! order, whose URL is absolute.

use crate::collection::{Collection, Node, StructuredUrl, Url};
use crate::convert::uri::split_uri_reference;
use tracing::debug;

/// Returns `scheme://host` of the first request with an absolute URL.
///
/// Traversal is pre-order: a folder is searched as soon as it is reached, so a
/// request nested in an earlier folder beats a shallower request after it.
pub fn extract_first_server(collection: &Collection) -> Option<String> {
    let server = find_server(&collection.item);
    if let Some(url) = &server {
        debug!(server = %url, "derived base server from collection");
    }
    server
}

fn find_server(items: &[Node]) -> Option<String> {
    items.iter().find_map(|node| match node {
        Node::Request(item) => server_from_url(&item.request.url),
        Node::Folder(folder) => find_server(&folder.item),
        Node::Unknown => None,
    })
}

/// Origin carried by a single URL, if any.
pub fn server_from_url(url: &Url) -> Option<String> {
    match url {
        Url::Text(text) => split_uri_reference(text).origin(),
        Url::Structured(structured) => structured_server(structured),
        Url::Missing => None,
    }
}

// `raw` is preferred; when it is relative the split `protocol` + `host` pair
// is tried next.
fn structured_server(url: &StructuredUrl) -> Option<String> {
    url.raw
        .as_deref()
        .and_then(|raw| split_uri_reference(raw).origin())
        .or_else(|| {
            let protocol = url.protocol.as_deref().filter(|p| !p.is_empty())?;
            let host = url.host.as_ref()?.resolve();
            if host.is_empty() {
                None
            } else {
                Some(format!("{}://{}", protocol, host))
            }
        })
}
