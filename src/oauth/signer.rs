//! OAuth 1.0 signing
//!
//! Produces the `Authorization` header value the OneRoster security profile
//! requires: an HMAC-SHA256 signature over the RFC 5849 base string, rendered
//! with the protocol parameters.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::{form_urlencoded, Url};
use uuid::Uuid;

use super::encode::{decode_query_pairs, oauth_encode, signature_base_url};
use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

// ============================================================================
// Credentials
// ============================================================================

/// OAuth 1.0 credentials.
///
/// The consumer pair identifies the calling application. The user pair is
/// optional; when a user key is present it is emitted as `oauth_token`, and
/// the user secret joins the signing key.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub user_key: Option<String>,
    pub user_secret: Option<String>,
}

impl Credentials {
    /// Consumer-only credentials
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            user_key: None,
            user_secret: None,
        }
    }

    /// Attach a user token pair
    #[must_use]
    pub fn with_user(mut self, user_key: impl Into<String>, user_secret: impl Into<String>) -> Self {
        self.user_key = Some(user_key.into());
        self.user_secret = Some(user_secret.into());
        self
    }
}

// ============================================================================
// Signature inputs
// ============================================================================

/// Supported signature methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureMethod {
    /// The only method the targeted providers accept
    #[default]
    HmacSha256,
}

impl SignatureMethod {
    /// Wire name of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureMethod::HmacSha256 => "HMAC-SHA256",
        }
    }
}

/// Source of the per-request signature inputs: timestamp and nonce.
///
/// Production signers use [`SystemSource`]. Tests inject [`StaticSource`] so
/// signatures become deterministic. Implementations must be safe to share
/// across concurrent fetches.
pub trait SignatureSource: Send + Sync + fmt::Debug {
    /// Seconds since the Unix epoch
    fn timestamp(&self) -> u64;

    /// A request-unique token
    fn nonce(&self) -> String;
}

/// System clock and random UUID nonces
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSource;

impl SignatureSource for SystemSource {
    fn timestamp(&self) -> u64 {
        Utc::now().timestamp().max(0) as u64
    }

    fn nonce(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Fixed timestamp and nonce, for deterministic signing under test
#[derive(Debug, Clone)]
pub struct StaticSource {
    pub timestamp: u64,
    pub nonce: String,
}

impl StaticSource {
    pub fn new(timestamp: u64, nonce: impl Into<String>) -> Self {
        Self {
            timestamp,
            nonce: nonce.into(),
        }
    }
}

impl SignatureSource for StaticSource {
    fn timestamp(&self) -> u64 {
        self.timestamp
    }

    fn nonce(&self) -> String {
        self.nonce.clone()
    }
}

/// One outgoing request, as the signer sees it
#[derive(Debug, Clone, Copy)]
pub struct SignableRequest<'a> {
    /// HTTP method; uppercased during signing
    pub method: &'a str,
    /// Full request URL including any query
    pub url: &'a Url,
    /// Request body, if any
    pub body: Option<&'a [u8]>,
    /// Content type of the body; used to recognize form-encoded payloads
    pub content_type: Option<&'a str>,
}

impl<'a> SignableRequest<'a> {
    /// A bodyless request
    pub fn new(method: &'a str, url: &'a Url) -> Self {
        Self {
            method,
            url,
            body: None,
            content_type: None,
        }
    }

    /// Attach a body and its content type
    #[must_use]
    pub fn with_body(mut self, body: &'a [u8], content_type: &'a str) -> Self {
        self.body = Some(body);
        self.content_type = Some(content_type);
        self
    }
}

// ============================================================================
// Signer
// ============================================================================

/// Stateless OAuth 1.0 signer.
///
/// Holds the signature method and the timestamp/nonce source, nothing else.
/// Credentials are borrowed for the duration of one call and never retained,
/// so a single signer can serve any number of concurrent fetches.
#[derive(Debug, Clone)]
pub struct Signer {
    method: SignatureMethod,
    source: Arc<dyn SignatureSource>,
}

impl Signer {
    /// A signer using the system clock and random nonces
    pub fn new() -> Self {
        Self::with_source(Arc::new(SystemSource))
    }

    /// A signer with an injected timestamp/nonce source
    pub fn with_source(source: Arc<dyn SignatureSource>) -> Self {
        Self {
            method: SignatureMethod::default(),
            source,
        }
    }

    /// Compute the `Authorization` header value for one request.
    ///
    /// Merges the protocol parameters with the URL's query parameters (and
    /// the body's, for form-encoded bodies, per RFC 5849 section 3.4.1.3.1),
    /// signs the base string with HMAC-SHA256, and renders
    /// `OAuth name="value", ...` with every value percent-encoded.
    ///
    /// Fails when the request URL has no authority to sign against. A
    /// malformed request is never signed silently.
    pub fn authorization_header(
        &self,
        request: &SignableRequest<'_>,
        credentials: &Credentials,
    ) -> Result<String> {
        let base_url = signature_base_url(request.url)?;
        let oauth_params = self.protocol_parameters(credentials);
        let parameter_string = parameter_string(request, &oauth_params);
        let base_string = signature_base_string(request.method, &base_url, &parameter_string);
        let signature = sign_base_string(&base_string, credentials)?;

        let mut header_params = oauth_params;
        header_params.insert("oauth_signature".to_string(), signature);
        Ok(render_header(&header_params))
    }

    /// The oauth_* parameter set of RFC 5849 section 3.1, minus the signature
    fn protocol_parameters(&self, credentials: &Credentials) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert(
            "oauth_consumer_key".to_string(),
            credentials.consumer_key.clone(),
        );
        params.insert(
            "oauth_signature_method".to_string(),
            self.method.as_str().to_string(),
        );
        params.insert(
            "oauth_timestamp".to_string(),
            self.source.timestamp().to_string(),
        );
        params.insert("oauth_nonce".to_string(), self.source.nonce());
        params.insert("oauth_version".to_string(), "1.0".to_string());
        if let Some(user_key) = &credentials.user_key {
            params.insert("oauth_token".to_string(), user_key.clone());
        }
        params
    }
}

impl Default for Signer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Base string assembly
// ============================================================================

/// The canonical parameter string of RFC 5849 section 3.4.1.3.
///
/// Protocol, query, and form-body parameters are encoded pair by pair, sorted
/// byte-wise on encoded name (ties broken by encoded value), and joined.
pub(crate) fn parameter_string(
    request: &SignableRequest<'_>,
    oauth_params: &BTreeMap<String, String>,
) -> String {
    let mut pairs: Vec<(String, String)> = oauth_params
        .iter()
        .map(|(name, value)| (oauth_encode(name), oauth_encode(value)))
        .collect();

    if let Some(query) = request.url.query() {
        for (name, value) in decode_query_pairs(query) {
            pairs.push((oauth_encode(&name), oauth_encode(&value)));
        }
    }

    if let (Some(body), Some(content_type)) = (request.body, request.content_type) {
        if content_type.starts_with("application/x-www-form-urlencoded") {
            for (name, value) in form_urlencoded::parse(body) {
                pairs.push((oauth_encode(&name), oauth_encode(&value)));
            }
        }
    }

    pairs.sort();

    pairs
        .into_iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// RFC 5849 section 3.4.1.1: method, base URL, and parameter string, each
/// encoded again as a whole, ampersand-joined.
pub(crate) fn signature_base_string(method: &str, base_url: &str, parameter_string: &str) -> String {
    let method = method.to_ascii_uppercase();
    [
        oauth_encode(&method),
        oauth_encode(base_url),
        oauth_encode(parameter_string),
    ]
    .join("&")
}

/// RFC 5849 section 3.4.2: encoded consumer secret and encoded user secret
/// (empty when absent), ampersand-joined.
pub(crate) fn signing_key(credentials: &Credentials) -> String {
    format!(
        "{}&{}",
        oauth_encode(&credentials.consumer_secret),
        oauth_encode(credentials.user_secret.as_deref().unwrap_or(""))
    )
}

fn sign_base_string(base_string: &str, credentials: &Credentials) -> Result<String> {
    let key = signing_key(credentials);
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|e| Error::signing(format!("HMAC key rejected: {e}")))?;
    mac.update(base_string.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

/// RFC 5849 section 3.5.1: `OAuth` and the quoted pairs, comma-space
/// separated, in a fixed name order so output is reproducible.
fn render_header(params: &BTreeMap<String, String>) -> String {
    let rendered: Vec<String> = params
        .iter()
        .map(|(name, value)| format!("{name}=\"{}\"", oauth_encode(value)))
        .collect();
    format!("OAuth {}", rendered.join(", "))
}
