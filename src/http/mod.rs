//! HTTP transport module
//!
//! The fetch engine talks to the network through the narrow [`Transport`]
//! contract: one request in, one response out. [`ReqwestTransport`] is the
//! shipped implementation; tests substitute their own to exercise the engine
//! without a socket.
//!
//! Deliberately absent: retries, backoff, rate limiting. A stalled or failing
//! request surfaces to the caller unmodified.

mod transport;

pub use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};
