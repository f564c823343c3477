//! The OneRoster client and its pagination engine
//!
//! # Overview
//!
//! [`OneRosterClient`] ties the other modules together:
//! - builds each request URL through [`Endpoint`]
//! - authorizes it (OAuth 1.0 signature, bearer token, or nothing)
//! - sends it through the [`Transport`] seam
//! - decodes the page and applies the termination decision table
//!
//! `fetch_all` walks a collection endpoint to completion, one page at a time;
//! page N+1 may depend on page N's response (next-link adoption), so pages are
//! never fetched in parallel. Independent fetches share no mutable state and
//! can run concurrently. The engine never retries: transport failures, error
//! statuses, and undecodable pages all surface to the caller as errors rather
//! than truncated results.

mod types;

pub use types::Authorization;

use crate::config::{ClientConfig, ListOptions};
use crate::decode::{decode_body, decode_error_payload, Collection, PageMeta};
use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use crate::http::{ReqwestTransport, Transport, TransportRequest, TransportResponse};
use crate::oauth::{Credentials, SignableRequest, Signer};
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};
use types::{decide, NextPage, PageState, StopReason};
use url::Url;

/// Client for a OneRoster v1.1 roster provider.
#[derive(Debug, Clone)]
pub struct OneRosterClient {
    base_url: Url,
    transport: Arc<dyn Transport>,
    authorization: Authorization,
    signer: Signer,
    config: ClientConfig,
}

impl OneRosterClient {
    /// Create a client that signs every request with OAuth 1.0.
    ///
    /// The base URL may be a true root or already end in the API version
    /// prefix; see [`Endpoint::request_url`].
    pub fn new(base_url: impl AsRef<str>, credentials: Credentials) -> Result<Self> {
        Self::with_config(base_url, credentials, ClientConfig::default())
    }

    /// Create an OAuth 1.0 client with explicit configuration.
    pub fn with_config(
        base_url: impl AsRef<str>,
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self> {
        Self::build(base_url, Authorization::OAuth1(credentials), config)
    }

    /// Create a client that attaches a static bearer token instead of
    /// signing, for providers fronted by a separate token grant.
    pub fn with_bearer_token(base_url: impl AsRef<str>, token: impl Into<String>) -> Result<Self> {
        Self::build(
            base_url,
            Authorization::Bearer(token.into()),
            ClientConfig::default(),
        )
    }

    /// Create a client that sends no Authorization header.
    pub fn unauthenticated(base_url: impl AsRef<str>) -> Result<Self> {
        Self::build(base_url, Authorization::None, ClientConfig::default())
    }

    fn build(
        base_url: impl AsRef<str>,
        authorization: Authorization,
        config: ClientConfig,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        let transport = Arc::new(ReqwestTransport::with_config(&config));
        Ok(Self {
            base_url,
            transport,
            authorization,
            signer: Signer::new(),
            config,
        })
    }

    /// Replace the transport, e.g. with a test double.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Replace the signer, e.g. one with a pinned timestamp/nonce source.
    #[must_use]
    pub fn with_signer(mut self, signer: Signer) -> Self {
        self.signer = signer;
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ========================================================================
    // Fetching
    // ========================================================================

    /// Fetch every item of a collection endpoint, walking all pages.
    ///
    /// `options.limit` defaults to the configured page size and
    /// `options.offset` to zero. Termination follows the server's own hints
    /// where present (`last`/`next` links, `X-Total-Count`) and falls back to
    /// offset arithmetic; a server that never lets the walk finish trips the
    /// request ceiling and fails with
    /// [`Error::PaginationNotTerminating`].
    pub async fn fetch_all<C>(
        &self,
        endpoint: Endpoint,
        options: ListOptions,
    ) -> Result<Vec<C::Item>>
    where
        C: Collection,
    {
        let limit = options.limit.unwrap_or(self.config.default_limit);
        let offset = options.offset.unwrap_or(0);
        let mut state = PageState::new(limit, offset, options.filter);
        let mut items = Vec::new();

        loop {
            let url = match state.next_url.take() {
                Some(next) => next,
                None => endpoint.request_url(&self.base_url, &state.list_options())?,
            };

            let response = self.send_get(&url).await?;
            state.count_request();

            let meta = PageMeta::from_headers(&response.headers, &url);
            let page: C = decode_body(&response.body)?;
            let page_items = page.into_items();
            let fetched = page_items.len();
            items.extend(page_items);
            state.add_fetched(fetched);

            debug!(
                "Page {} at offset {}: {} items ({} accumulated)",
                state.request_count, state.offset, fetched, state.accumulated
            );

            match decide(&url, &meta, fetched, &state) {
                NextPage::Done(reason) => {
                    if reason == StopReason::NextLinkRepeats {
                        warn!("Server next link repeats the requested URL: {}", url);
                    }
                    debug!(
                        "Pagination complete after {} requests: {:?}",
                        state.request_count, reason
                    );
                    break;
                }
                NextPage::Follow(next) => state.follow(next),
                NextPage::Offset(offset) => state.advance(offset),
            }

            if state.request_count >= self.config.max_requests {
                return Err(Error::PaginationNotTerminating {
                    requests: state.request_count,
                });
            }
        }

        Ok(items)
    }

    /// Fetch a single resource endpoint and decode its response wrapper.
    pub async fn fetch_one<T>(&self, endpoint: Endpoint) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = endpoint.request_url(&self.base_url, &ListOptions::default())?;
        let response = self.send_get(&url).await?;
        decode_body(&response.body)
    }

    // ========================================================================
    // Request Plumbing
    // ========================================================================

    /// Send an authorized GET and deliver the response if it succeeded.
    ///
    /// Non-success statuses become [`Error::Server`], carrying whatever
    /// structured error payload the body yielded; an unreadable error body
    /// must not mask the HTTP failure itself.
    async fn send_get(&self, url: &Url) -> Result<TransportResponse> {
        let mut request = TransportRequest::new(Method::GET, url.clone());
        request
            .headers
            .insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(value) = self.authorization_value(url)? {
            request.headers.insert(AUTHORIZATION, value);
        }

        let response = self.transport.send(request).await?;
        if !response.status.is_success() {
            warn!(
                "Server returned HTTP {} for {}",
                response.status.as_u16(),
                url
            );
            let payload = decode_error_payload(&response.body);
            return Err(Error::server(response.status.as_u16(), payload));
        }
        Ok(response)
    }

    /// The Authorization header value for one request, if any.
    fn authorization_value(&self, url: &Url) -> Result<Option<HeaderValue>> {
        let raw = match &self.authorization {
            Authorization::OAuth1(credentials) => {
                let request = SignableRequest::new("GET", url);
                self.signer.authorization_header(&request, credentials)?
            }
            Authorization::Bearer(token) => format!("Bearer {token}"),
            Authorization::None => return Ok(None),
        };
        let value = HeaderValue::from_str(&raw)
            .map_err(|e| Error::signing(format!("Authorization header is not valid: {e}")))?;
        Ok(Some(value))
    }
}
