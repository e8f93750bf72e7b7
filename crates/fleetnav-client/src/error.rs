//! Client error types.

use thiserror::Error;

/// Client error type.
///
/// Callers are expected to branch on success vs. failure only; the variants
/// exist for diagnostics and logging, not for control flow.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed (connection, timeout, or body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server answered with a non-success HTTP status.
    #[error("API error (HTTP {status})")]
    Api {
        /// HTTP status code.
        status: u16,
    },

    /// HTTP 200, but the response envelope carried a non-success status.
    #[error("service rejected request (status {status})")]
    Service {
        /// `status` field of the response envelope.
        status: i64,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this is a transport-level error (connection or timeout).
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_connect() || e.is_timeout())
    }

    /// Check if the service accepted the request at the HTTP layer but
    /// rejected it in the envelope.
    pub fn is_service_rejection(&self) -> bool {
        matches!(self, Error::Service { .. })
    }

    /// Check if this is an HTTP-level rejection.
    pub fn is_http_rejection(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
