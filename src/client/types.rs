//! Client types and the page-termination decision table
//!
//! Separates the bookkeeping of a paginated walk from the I/O that drives it,
//! so the stopping rules can be tested without a server.

use crate::config::ListOptions;
use crate::decode::PageMeta;
use crate::oauth::Credentials;
use url::Url;

// ============================================================================
// Authorization
// ============================================================================

/// How outgoing requests are authorized.
#[derive(Debug, Clone)]
pub enum Authorization {
    /// Sign every request with OAuth 1.0 (HMAC-SHA256) using these credentials.
    OAuth1(Credentials),
    /// Attach a static bearer token, e.g. one obtained out of band.
    Bearer(String),
    /// Send no Authorization header.
    None,
}

// ============================================================================
// Pagination State
// ============================================================================

/// Bookkeeping for one in-flight paginated fetch.
///
/// Owned exclusively by a single `fetch_all` call; concurrent fetches never
/// share state.
#[derive(Debug, Clone)]
pub(crate) struct PageState {
    /// Page size used when rebuilding requests.
    pub limit: u32,
    /// Offset the next rebuilt request will carry.
    pub offset: u32,
    /// Offset the walk started from, for total-count arithmetic.
    pub start_offset: u32,
    /// Filter expression forwarded to every rebuilt request.
    pub filter: Option<String>,
    /// Items accumulated across pages so far.
    pub accumulated: usize,
    /// Requests issued so far.
    pub request_count: u32,
    /// Server-supplied URL to request next, when a next link was adopted.
    pub next_url: Option<Url>,
}

impl PageState {
    pub fn new(limit: u32, offset: u32, filter: Option<String>) -> Self {
        Self {
            limit,
            offset,
            start_offset: offset,
            filter,
            accumulated: 0,
            request_count: 0,
            next_url: None,
        }
    }

    /// Record one issued request.
    pub fn count_request(&mut self) {
        self.request_count += 1;
    }

    /// Record items decoded from the current page.
    pub fn add_fetched(&mut self, count: usize) {
        self.accumulated += count;
    }

    /// Adopt a server-supplied next link as the next request.
    ///
    /// Its `offset` query value, when present, becomes the new baseline so a
    /// later rebuilt request continues from where the link left off.
    pub fn follow(&mut self, next: Url) {
        if let Some(offset) = query_offset(&next) {
            self.offset = offset;
        }
        self.next_url = Some(next);
    }

    /// Move to the given offset and rebuild the next request from scratch.
    pub fn advance(&mut self, offset: u32) {
        self.offset = offset;
        self.next_url = None;
    }

    /// List parameters for a rebuilt request. Always carries limit and offset
    /// so every page is explicit about its window.
    pub fn list_options(&self) -> ListOptions {
        let options = ListOptions::new().limit(self.limit).offset(self.offset);
        match &self.filter {
            Some(filter) => options.filter(filter.clone()),
            None => options,
        }
    }
}

/// Extract the numeric `offset` query value from a URL, if it carries one.
fn query_offset(url: &Url) -> Option<u32> {
    url.query_pairs()
        .find(|(name, _)| name == "offset")
        .and_then(|(_, value)| value.parse().ok())
}

// ============================================================================
// Termination Decision
// ============================================================================

/// Why a paginated walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopReason {
    /// The `last` link equals the URL just requested.
    LastLinkReached,
    /// The `next` link repeats the URL just requested, a server loop bug.
    NextLinkRepeats,
    /// The page carried zero items.
    EmptyPage,
    /// Accumulated items plus the starting offset cover the advertised total.
    TotalCountReached,
}

/// What the engine does after a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NextPage {
    /// Stop and return the accumulated items.
    Done(StopReason),
    /// Request the server-supplied URL next.
    Follow(Url),
    /// Rebuild the next request at this offset.
    Offset(u32),
}

impl NextPage {
    #[cfg(test)]
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

/// Decide what follows the page just fetched.
///
/// Heuristics in priority order: explicit server intent first (`last`, then
/// `next`, the latter guarded against self-referencing links), then inferred
/// intent (empty page, total-count arithmetic), then plain offset advance.
/// Servers are not required to send any pagination hints, so every rung must
/// degrade to the next.
pub(crate) fn decide(
    requested: &Url,
    meta: &PageMeta,
    page_items: usize,
    state: &PageState,
) -> NextPage {
    if let Some(last) = &meta.last {
        if last == requested {
            return NextPage::Done(StopReason::LastLinkReached);
        }
    }

    if let Some(next) = &meta.next {
        if next == requested {
            return NextPage::Done(StopReason::NextLinkRepeats);
        }
        return NextPage::Follow(next.clone());
    }

    if page_items == 0 {
        return NextPage::Done(StopReason::EmptyPage);
    }

    if let Some(total) = meta.total_count {
        if state.accumulated as u64 + u64::from(state.start_offset) >= total {
            return NextPage::Done(StopReason::TotalCountReached);
        }
    }

    NextPage::Offset(state.offset + state.limit)
}
