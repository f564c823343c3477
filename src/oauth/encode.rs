//! RFC 5849 percent encoding and base-string URL derivation

use percent_encoding::{percent_decode_str, percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::error::{Error, Result};

/// Everything outside the RFC 5849 section 3.6 unreserved set.
///
/// Strictly narrower than general URL encoding: `!*'()` must be escaped here
/// even though most URL encoders pass them through.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string per RFC 5849 section 3.6.
///
/// Operates on UTF-8 bytes, so multi-byte characters encode to one `%XX`
/// escape per byte, uppercase hex.
pub fn oauth_encode(input: &str) -> String {
    percent_encode(input.as_bytes(), OAUTH_ENCODE_SET).to_string()
}

/// Render the base-string URI of a request URL per RFC 5849 section 3.4.1.2.
///
/// Scheme and host are lowercase (guaranteed by `Url` parsing), default ports
/// are absent, userinfo and path are kept, query and fragment are dropped.
pub fn signature_base_url(url: &Url) -> Result<String> {
    let host = url
        .host_str()
        .ok_or_else(|| Error::signing("request URL has no host"))?;

    let mut base = format!("{}://", url.scheme());
    if !url.username().is_empty() {
        base.push_str(url.username());
        if let Some(password) = url.password() {
            base.push(':');
            base.push_str(password);
        }
        base.push('@');
    }
    base.push_str(host);
    if let Some(port) = url.port() {
        // `Url` drops scheme-default ports at parse time, so this is non-default.
        base.push(':');
        base.push_str(&port.to_string());
    }
    base.push_str(url.path());
    Ok(base)
}

/// Split a raw query string into decoded name/value pairs.
///
/// Strict RFC 3986 decoding: `+` stays a literal plus. Form-body material is
/// decoded elsewhere with form-urlencoded semantics.
pub(crate) fn decode_query_pairs(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (name, value) = part.split_once('=').unwrap_or((part, ""));
            (
                percent_decode_str(name).decode_utf8_lossy().into_owned(),
                percent_decode_str(value).decode_utf8_lossy().into_owned(),
            )
        })
        .collect()
}
