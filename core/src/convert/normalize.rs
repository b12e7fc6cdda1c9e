//! # URL Normalization
//!
//! Reduces any request URL representation to the path key used in `paths`.

use crate::collection::{StructuredUrl, Url, UrlPath};
use crate::convert::uri::split_uri_reference;

const ROOT_PATH: &str = "/";

/// Returns the canonical path of a request URL.
///
/// The result always starts with `/` and is never empty.
///
/// - String URLs (and `raw` on URL objects, which wins over `path`) contribute
///   their path component, or `/` when it is empty.
/// - Segment lists are joined: `["a", "b"]` ➜ `/a/b`.
/// - Path strings get a leading `/` unless they already have one.
/// - Everything else maps to `/`.
pub fn normalize_url_path(url: &Url) -> String {
    match url {
        Url::Text(text) => reference_path(text),
        Url::Structured(structured) => structured_path(structured),
        Url::Missing => ROOT_PATH.to_string(),
    }
}

fn structured_path(url: &StructuredUrl) -> String {
    if let Some(raw) = &url.raw {
        return reference_path(raw);
    }
    match &url.path {
        Some(UrlPath::Segments(segments)) => format!("/{}", segments.join("/")),
        Some(UrlPath::Text(path)) => with_leading_slash(path),
        None => ROOT_PATH.to_string(),
    }
}

fn reference_path(reference: &str) -> String {
    let path = split_uri_reference(reference).path;
    if path.is_empty() {
        ROOT_PATH.to_string()
    } else {
        with_leading_slash(path)
    }
}

fn with_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
