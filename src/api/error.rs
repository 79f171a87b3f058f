//! Error types for the Subscan API client.
//!
//! Only caller-side failures live here. Anything that goes wrong on the wire
//! or on the server is reported through [`ApiResponse::Error`](crate::api::ApiResponse)
//! instead.

use thiserror::Error;

/// Local error raised before any request is sent.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed hash argument (must be `0x` + 64 hex digits).
    #[error("Invalid {field}: {reason}")]
    InvalidHash {
        field: &'static str,
        reason: String,
    },

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Missing or unusable client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client could not be constructed
    #[cfg(feature = "native")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
