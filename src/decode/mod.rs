//! Response decoding and pagination hints
//!
//! # Overview
//!
//! The decode module turns raw response bytes into typed values and lifts the
//! pagination hints the client steers by. Collection wrappers declare their
//! top-level key per endpoint via the [`Collection`] trait, and [`PageMeta`]
//! captures the `X-Total-Count` and `Link` headers a page arrived with.

mod types;

pub use types::{decode_body, decode_error_payload, Collection, PageMeta, TOTAL_COUNT_HEADER};

#[cfg(test)]
mod tests;
