//! Error types for the OneRoster client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

use crate::model::ErrorPayload;

/// The main error type for the OneRoster client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request Construction Errors
    // ============================================================================
    #[error("Invalid URL: {0}")]
    UrlConstruction(#[from] url::ParseError),

    #[error("Cannot build URL: {message}")]
    UrlComponents { message: String },

    #[error("Signing failed: {message}")]
    Signing { message: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    // ============================================================================
    // Server Errors
    // ============================================================================
    #[error("Server returned HTTP {status}")]
    Server {
        status: u16,
        /// Structured error body, when the server sent one we could decode.
        payload: Option<ErrorPayload>,
    },

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Pagination did not terminate after {requests} requests")]
    PaginationNotTerminating { requests: u32 },
}

impl Error {
    /// Create a URL components error
    pub fn url_components(message: impl Into<String>) -> Self {
        Self::UrlComponents {
            message: message.into(),
        }
    }

    /// Create a signing error
    pub fn signing(message: impl Into<String>) -> Self {
        Self::Signing {
            message: message.into(),
        }
    }

    /// Create a server error from a status code and an optional decoded payload
    pub fn server(status: u16, payload: Option<ErrorPayload>) -> Self {
        Self::Server { status, payload }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// The HTTP status code, for server errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The first server-supplied error description, when one was decoded
    pub fn server_description(&self) -> Option<&str> {
        match self {
            Error::Server {
                payload: Some(payload),
                ..
            } => payload.errors.first().map(|e| e.description.as_str()),
            _ => None,
        }
    }
}

/// Result type alias for the OneRoster client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ErrorDescription;

    #[test]
    fn test_error_display() {
        let err = Error::signing("relative URL has no host");
        assert_eq!(err.to_string(), "Signing failed: relative URL has no host");

        let err = Error::decode("missing field `orgs`");
        assert_eq!(
            err.to_string(),
            "Failed to decode response: missing field `orgs`"
        );

        let err = Error::server(404, None);
        assert_eq!(err.to_string(), "Server returned HTTP 404");

        let err = Error::PaginationNotTerminating { requests: 10_000 };
        assert_eq!(
            err.to_string(),
            "Pagination did not terminate after 10000 requests"
        );
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(Error::server(503, None).status(), Some(503));
        assert_eq!(Error::signing("nope").status(), None);
    }

    #[test]
    fn test_server_description() {
        let payload = ErrorPayload {
            errors: vec![ErrorDescription {
                description: "sourcedId not found".to_string(),
            }],
        };
        let err = Error::server(404, Some(payload));
        assert_eq!(err.server_description(), Some("sourcedId not found"));
        assert_eq!(Error::server(404, None).server_description(), None);
    }

    #[test]
    fn test_url_parse_conversion() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::UrlConstruction(_)));
    }
}
