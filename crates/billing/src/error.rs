//! Error type for billing API calls.

use thiserror::Error;

/// Errors that can occur when interacting with the billing API.
#[derive(Debug, Error)]
pub enum BillingError {
    /// HTTP request failed (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The secret key was rejected.
    #[error("billing API rejected the credentials")]
    Unauthorized,

    /// Too many requests.
    #[error("billing API rate limited the request")]
    RateLimited,

    /// The API rejected the call (validation failure and the like).
    #[error("billing API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON shape.
    #[error("failed to decode billing response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    /// Client construction failed (malformed secret key).
    #[error("invalid billing configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = BillingError::Api {
            status: 400,
            message: "missing required param: customer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "billing API error: 400 - missing required param: customer"
        );
    }
}
