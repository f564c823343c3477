//! Decoding types and header extraction
//!
//! Collection payloads arrive wrapped in a single-key JSON object whose key
//! varies by endpoint ("Org" for orgs, "users" for every user-shaped
//! collection). [`Collection`] records that mapping on each wrapper type so
//! the client can peel responses without any runtime key discovery.

use crate::error::{Error, Result};
use crate::model::ErrorPayload;
use reqwest::header::{HeaderMap, LINK};
use serde::de::DeserializeOwned;
use url::Url;

/// Header carrying the total size of the collection being paged.
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

// ============================================================================
// Collection Trait
// ============================================================================

/// A decoded collection response that yields its items.
///
/// Wrapper types name their top-level key through serde attributes; the trait
/// only asks them to surrender the item vector afterwards.
pub trait Collection: DeserializeOwned {
    /// Record type carried inside the wrapper.
    type Item;

    /// Consume the wrapper and return the decoded items.
    fn into_items(self) -> Vec<Self::Item>;
}

// ============================================================================
// Body Decoding
// ============================================================================

/// Decode a response body into a typed value.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| Error::decode(e.to_string()))
}

/// Best-effort decode of the structured error payload servers attach to
/// non-success responses. Unparseable bodies yield `None` rather than masking
/// the original HTTP failure.
pub fn decode_error_payload(body: &[u8]) -> Option<ErrorPayload> {
    serde_json::from_slice(body).ok()
}

// ============================================================================
// Pagination Hints
// ============================================================================

/// Pagination hints lifted from response headers.
///
/// Servers advertise progress through `X-Total-Count` and RFC 8288 `Link`
/// relations; any of the three may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    /// Value of the `X-Total-Count` header, when present and numeric.
    pub total_count: Option<u64>,
    /// Target of the `rel="next"` link, resolved to an absolute URL.
    pub next: Option<Url>,
    /// Target of the `rel="last"` link, resolved to an absolute URL.
    pub last: Option<Url>,
}

impl PageMeta {
    /// Extract pagination hints from response headers.
    ///
    /// Relative link targets are resolved against the request URL. Malformed
    /// values are ignored rather than failing the page.
    pub fn from_headers(headers: &HeaderMap, request_url: &Url) -> Self {
        let total_count = headers
            .get(TOTAL_COUNT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());

        let mut next = None;
        let mut last = None;
        for value in headers.get_all(LINK) {
            let Ok(header) = value.to_str() else { continue };
            if next.is_none() {
                next = parse_link_header(header, "next")
                    .and_then(|target| request_url.join(&target).ok());
            }
            if last.is_none() {
                last = parse_link_header(header, "last")
                    .and_then(|target| request_url.join(&target).ok());
            }
        }

        Self {
            total_count,
            next,
            last,
        }
    }
}

/// Parse a `Link` header and extract the target for the given rel
fn parse_link_header(header: &str, target_rel: &str) -> Option<String> {
    // Link header format: <url>; rel="next", <url>; rel="last"
    for part in header.split(',') {
        let part = part.trim();
        let mut url = None;
        let mut rel = None;

        for segment in part.split(';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') {
                url = Some(&segment[1..segment.len() - 1]);
            } else if let Some(stripped) = segment.strip_prefix("rel=") {
                let rel_value = stripped.trim_matches('"').trim_matches('\'');
                rel = Some(rel_value);
            }
        }

        if let (Some(u), Some(r)) = (url, rel) {
            if r == target_rel {
                return Some(u.to_string());
            }
        }
    }

    None
}
