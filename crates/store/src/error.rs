//! Error type for storefront API calls.

use thiserror::Error;

/// Errors that can occur when reading from the storefront API.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP request failed (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Storefront returned a non-success status.
    #[error("storefront returned {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    /// Response body was not the expected JSON shape.
    #[error("failed to decode storefront response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}
