//! OAuth 1.0 request signing
//!
//! Implements the RFC 5849 signature flow the OneRoster security profile
//! mandates: every request carries an `Authorization: OAuth ...` header with
//! an HMAC-SHA256 signature over a canonical base string.
//!
//! The pieces compose bottom-up: the percent encoder (section 3.6 unreserved
//! set), the base-string URL (section 3.4.1.2), the parameter normalizer
//! (section 3.4.1.3), and the [`Signer`] that ties them together. Timestamps
//! and nonces come from an injectable [`SignatureSource`] so tests can pin
//! them.

mod encode;
mod signer;

pub use encode::{oauth_encode, signature_base_url};
pub use signer::{
    Credentials, SignableRequest, SignatureMethod, SignatureSource, Signer, StaticSource,
    SystemSource,
};

#[cfg(test)]
mod tests;
