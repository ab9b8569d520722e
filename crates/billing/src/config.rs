//! Billing client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `BILLING_SECRET_KEY` - Secret API key for the billing account
//!
//! ## Optional
//! - `BILLING_API_URL` - Base URL of the billing API (default: the hosted
//!   endpoint)

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Hosted billing API endpoint used when `BILLING_API_URL` is not set.
const DEFAULT_API_URL: &str = "https://api.stripe.com/v1";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Billing API configuration.
///
/// `SecretString` keeps the key out of `Debug` output.
#[derive(Debug, Clone)]
pub struct BillingConfig {
    /// Secret API key for the billing account.
    pub secret_key: SecretString,
    /// Base URL of the billing API, without a trailing slash.
    pub api_url: String,
}

impl BillingConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `BILLING_SECRET_KEY` is missing or
    /// `BILLING_API_URL` is set to something that is not a valid HTTP(S)
    /// URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let secret_key = std::env::var("BILLING_SECRET_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("BILLING_SECRET_KEY".to_string()))?;
        let raw_url =
            std::env::var("BILLING_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_url = validate_base_url(&raw_url, "BILLING_API_URL")?;

        Ok(Self {
            secret_key: SecretString::from(secret_key),
            api_url,
        })
    }
}

/// Parse and normalize a base URL, stripping any trailing slash so request
/// paths can be appended verbatim.
fn validate_base_url(raw: &str, var_name: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(raw.trim_end_matches('/').to_string())
}
