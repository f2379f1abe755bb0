//! Error types for the Dome API client

use thiserror::Error;

/// Client-wide error type
///
/// Synchronous endpoints surface exactly one of these per call; nothing is
/// retried internally. `RateLimited` in particular is returned to the caller,
/// who decides whether to back off.
#[derive(Error, Debug)]
pub enum DomeError {
    /// A precondition on an argument failed before any I/O was attempted.
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// HTTP 401 from the API (bad or missing API key).
    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    /// HTTP 429 from the API.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// HTTP 400 from the API; carries the raw response body for diagnostics.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Any other non-2xx HTTP status.
    #[error("HTTP error: {status} - {reason}")]
    Http { status: u16, reason: String },

    #[error("Network error: {0}")]
    Network(String),

    /// Malformed body on an otherwise successful response.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomeError {
    pub fn argument(msg: impl Into<String>) -> Self {
        DomeError::Argument(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        DomeError::BadRequest(msg.into())
    }

    pub fn http(status: u16, reason: impl Into<String>) -> Self {
        DomeError::Http {
            status,
            reason: reason.into(),
        }
    }

    pub fn network(msg: impl Into<String>) -> Self {
        DomeError::Network(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        DomeError::Parse(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        DomeError::Config(msg.into())
    }
}

/// Result type alias for Dome API operations
pub type DomeResult<T> = Result<T, DomeError>;
