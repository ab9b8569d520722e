//! Storefront client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STORE_BASE_URL` - Base URL of the storefront API
//!   (e.g., `https://fakestoreapi.com`)

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront API configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the storefront API, without a trailing slash.
    pub base_url: String,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `STORE_BASE_URL` is missing or is not a
    /// valid HTTP(S) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw = std::env::var("STORE_BASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("STORE_BASE_URL".to_string()))?;
        let base_url = validate_base_url(&raw, "STORE_BASE_URL")?;

        Ok(Self { base_url })
    }
}

/// Parse and normalize a base URL, stripping any trailing slash so request
/// paths can be appended verbatim.
pub(crate) fn validate_base_url(raw: &str, var_name: &str) -> Result<String, ConfigError> {
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
