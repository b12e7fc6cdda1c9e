//! # URI Reference Splitting
//!
//! Splits a URL string into scheme, authority and path following the generic
//! URI grammar (RFC 3986, Appendix B) without percent-encoding or validating
//! anything. Collection URLs routinely contain `{{variable}}` placeholders
//! that a strict URL parser would reject or escape.

use regex::Regex;
use std::sync::OnceLock;

/// Components of a URI reference. Borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UriParts<'a> {
    /// Scheme, present only when it is syntactically valid.
    pub scheme: Option<&'a str>,
    /// Authority (`user@host:port`), present when the reference has `//`.
    pub authority: Option<&'a str>,
    /// Path, possibly empty. Query and fragment are dropped; `;params` are kept.
    pub path: &'a str,
}

impl UriParts<'_> {
    /// `scheme://authority` when both parts are non-empty.
    pub fn origin(&self) -> Option<String> {
        let scheme = self.scheme.filter(|s| !s.is_empty())?;
        let authority = self.authority.filter(|a| !a.is_empty())?;
        Some(format!("{}://{}", scheme.to_ascii_lowercase(), authority))
    }
}

/// Splits `input` into its components. Never fails.
pub(crate) fn split_uri_reference(input: &str) -> UriParts<'_> {
    static URI_RE: OnceLock<Regex> = OnceLock::new();
    let uri_re = URI_RE.get_or_init(|| {
        Regex::new(r"^(?:([A-Za-z][A-Za-z0-9+.\-]*):)?(?://([^/?#]*))?([^?#]*)")
            .expect("Invalid regex")
    });

    let input = input.trim();
    match uri_re.captures(input) {
        Some(caps) => UriParts {
            scheme: caps.get(1).map(|m| m.as_str()),
            authority: caps.get(2).map(|m| m.as_str()),
            path: caps.get(3).map_or("", |m| m.as_str()),
        },
        None => UriParts {
            scheme: None,
            authority: None,
            path: input,
        },
    }
}
