//! Client configuration
//!
//! [`ClientConfig`] holds the knobs shared by every fetch a client performs;
//! [`ListOptions`] carries the per-call pagination and filter parameters.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default page size, per the OneRoster v1.1 specification
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Default ceiling on requests per fetch before pagination is declared
/// non-terminating
pub const DEFAULT_MAX_REQUESTS: u32 = 10_000;

// ============================================================================
// Client Config
// ============================================================================

/// Configuration for a [`OneRosterClient`](crate::client::OneRosterClient)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Page size used for offset arithmetic when a call provides no `limit`
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Hard ceiling on requests per fetch; reaching it fails the fetch
    /// instead of trusting a server whose pages never end
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
            default_limit: default_limit(),
            max_requests: default_max_requests(),
        }
    }
}

impl ClientConfig {
    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_seconds = timeout.as_secs();
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set the fallback page size
    #[must_use]
    pub fn default_limit(mut self, limit: u32) -> Self {
        self.default_limit = limit;
        self
    }

    /// Set the request ceiling
    #[must_use]
    pub fn max_requests(mut self, max_requests: u32) -> Self {
        self.max_requests = max_requests;
        self
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("oneroster-client/{}", env!("CARGO_PKG_VERSION"))
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

fn default_max_requests() -> u32 {
    DEFAULT_MAX_REQUESTS
}

// ============================================================================
// List Options
// ============================================================================

/// Pagination and filter parameters for one collection fetch.
///
/// The fetch engine resolves `limit` and `offset` to concrete values before
/// the first request (configured page size, offset zero), so every page
/// request is explicit about its window. Unset parameters only stay absent
/// for single-resource fetches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Requested page size
    pub limit: Option<u32>,
    /// Starting offset
    pub offset: Option<u32>,
    /// Raw filter expression, e.g. `role='teacher'`; encoded when the URL is
    /// built
    pub filter: Option<String>,
}

impl ListOptions {
    /// Empty options: server defaults for everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the starting offset
    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the filter expression
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}
