//! Storefront API client implementation.

use order_sync_core::{ProductId, UserId};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::models::{Cart, ProductRecord, UserRecord};

/// Client for the storefront's read-only JSON API.
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl StoreClient {
    /// Create a new storefront API client.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    /// Fetch every cart currently known to the storefront.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the storefront is unreachable, responds with
    /// a non-success status, or returns malformed JSON.
    pub async fn carts(&self) -> Result<Vec<Cart>, StoreError> {
        self.get("/carts").await
    }

    /// Fetch a single user record by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the storefront is unreachable, responds with
    /// a non-success status, or returns malformed JSON.
    pub async fn user(&self, user_id: UserId) -> Result<UserRecord, StoreError> {
        self.get(&format!("/users/{user_id}")).await
    }

    /// Fetch a single product record by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the storefront is unreachable, responds with
    /// a non-success status, or returns malformed JSON.
    pub async fn product(&self, product_id: ProductId) -> Result<ProductRecord, StoreError> {
        self.get(&format!("/products/{product_id}")).await
    }

    /// Perform a GET against the storefront and decode the JSON body.
    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, StoreError> {
        let url = format!("{}{endpoint}", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let value = response.json::<T>().await.map_err(|e| StoreError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })?;

        debug!(endpoint, "storefront request succeeded");
        Ok(value)
    }
}
