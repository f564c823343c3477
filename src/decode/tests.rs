//! Tests for the decode module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize, PartialEq)]
struct Widget {
    id: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct Widgets {
    widgets: Vec<Widget>,
}

impl Collection for Widgets {
    type Item = Widget;

    fn into_items(self) -> Vec<Widget> {
        self.widgets
    }
}

fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.append(*name, HeaderValue::from_str(value).unwrap());
    }
    map
}

fn request_url() -> Url {
    Url::parse("https://test.com/ims/oneroster/v1p1/orgs?limit=100&offset=0").unwrap()
}

// ============================================================================
// Body Decoding Tests
// ============================================================================

#[test]
fn test_decode_body_typed() {
    let body = br#"{"widgets": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]}"#;

    let decoded: Widgets = decode_body(body).unwrap();
    let items = decoded.into_items();
    assert_eq!(items.len(), 2);
    assert_eq!(
        items[0],
        Widget {
            id: 1,
            name: "a".to_string()
        }
    );
}

#[test]
fn test_decode_body_invalid_json() {
    let result: crate::error::Result<Widgets> = decode_body(b"not json at all");
    assert!(matches!(result, Err(Error::Decode { .. })));
}

#[test]
fn test_decode_body_wrong_shape() {
    let result: crate::error::Result<Widgets> = decode_body(br#"{"widgets": "nope"}"#);
    assert!(matches!(result, Err(Error::Decode { .. })));
}

#[test]
fn test_decode_error_payload() {
    let body = br#"{"errors": [{"description": "invalid filter field"}]}"#;

    let payload = decode_error_payload(body).unwrap();
    assert_eq!(payload.errors.len(), 1);
    assert_eq!(payload.errors[0].description, "invalid filter field");
}

#[test]
fn test_decode_error_payload_unparseable() {
    assert!(decode_error_payload(b"<html>502 Bad Gateway</html>").is_none());
    assert!(decode_error_payload(b"").is_none());
}

// ============================================================================
// Total Count Tests
// ============================================================================

#[test]
fn test_total_count_parsed() {
    let meta = PageMeta::from_headers(&headers(&[("x-total-count", "237")]), &request_url());
    assert_eq!(meta.total_count, Some(237));
}

#[test]
fn test_total_count_whitespace_tolerated() {
    let meta = PageMeta::from_headers(&headers(&[("x-total-count", " 42 ")]), &request_url());
    assert_eq!(meta.total_count, Some(42));
}

#[test]
fn test_total_count_non_numeric_ignored() {
    let meta = PageMeta::from_headers(&headers(&[("x-total-count", "lots")]), &request_url());
    assert_eq!(meta.total_count, None);
}

#[test]
fn test_no_headers_yields_default() {
    let meta = PageMeta::from_headers(&HeaderMap::new(), &request_url());
    assert_eq!(meta, PageMeta::default());
}

// ============================================================================
// Link Header Tests
// ============================================================================

#[test]
fn test_link_next_and_last_in_one_header() {
    let meta = PageMeta::from_headers(
        &headers(&[(
            "link",
            "<https://test.com/ims/oneroster/v1p1/orgs?limit=100&offset=100>; rel=\"next\", \
             <https://test.com/ims/oneroster/v1p1/orgs?limit=100&offset=200>; rel=\"last\"",
        )]),
        &request_url(),
    );

    assert_eq!(
        meta.next.unwrap().as_str(),
        "https://test.com/ims/oneroster/v1p1/orgs?limit=100&offset=100"
    );
    assert_eq!(
        meta.last.unwrap().as_str(),
        "https://test.com/ims/oneroster/v1p1/orgs?limit=100&offset=200"
    );
}

#[test]
fn test_link_unquoted_rel() {
    let meta = PageMeta::from_headers(
        &headers(&[("link", "<https://test.com/orgs?offset=100>; rel=next")]),
        &request_url(),
    );
    assert_eq!(
        meta.next.unwrap().as_str(),
        "https://test.com/orgs?offset=100"
    );
}

#[test]
fn test_link_relative_target_resolved() {
    let meta = PageMeta::from_headers(
        &headers(&[("link", "</ims/oneroster/v1p1/orgs?offset=100>; rel=\"next\"")]),
        &request_url(),
    );
    assert_eq!(
        meta.next.unwrap().as_str(),
        "https://test.com/ims/oneroster/v1p1/orgs?offset=100"
    );
}

#[test]
fn test_link_other_rels_ignored() {
    let meta = PageMeta::from_headers(
        &headers(&[(
            "link",
            "<https://test.com/orgs?offset=0>; rel=\"first\", \
             <https://test.com/orgs?offset=50>; rel=\"prev\"",
        )]),
        &request_url(),
    );
    assert_eq!(meta.next, None);
    assert_eq!(meta.last, None);
}

#[test]
fn test_link_separate_headers() {
    let meta = PageMeta::from_headers(
        &headers(&[
            ("link", "<https://test.com/orgs?offset=100>; rel=\"next\""),
            ("link", "<https://test.com/orgs?offset=200>; rel=\"last\""),
        ]),
        &request_url(),
    );
    assert!(meta.next.is_some());
    assert!(meta.last.is_some());
}

#[test]
fn test_link_malformed_ignored() {
    let meta = PageMeta::from_headers(
        &headers(&[("link", "https://test.com/orgs?offset=100; rel=\"next\"")]),
        &request_url(),
    );
    assert_eq!(meta.next, None);
}
