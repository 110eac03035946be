//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the school service.
///
/// A 404 is not an error; it maps to the `NotFound` outcomes.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a service response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The service returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}
