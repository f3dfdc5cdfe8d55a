//! Error types for the HTTP helper layer.
//!
//! # Design
//! Each variant corresponds to one stage of a call: URL building, the
//! transport round-trip, status validation, and body (de)serialization.
//! Errors are logged once at the call boundary and then returned unchanged,
//! so `Transport` is transparent over whatever the transport produced.

use thiserror::Error;

/// Opaque error produced by a [`Transport`](crate::Transport) implementation.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by `HttpClient` operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The base string is not a usable absolute URL.
    #[error("invalid URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The underlying transport failed (connectivity, DNS, TLS, timeout).
    #[error(transparent)]
    Transport(TransportError),

    /// The response status fell outside the success range. `-1` means the
    /// response carried no status at all.
    #[error("HTTP status {code}")]
    Status { code: i32 },

    /// The response body could not be decoded into the expected type.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be encoded to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl HttpError {
    /// Status code carried by a `Status` error.
    pub fn status(&self) -> Option<i32> {
        match self {
            HttpError::Status { code } => Some(*code),
            _ => None,
        }
    }
}
