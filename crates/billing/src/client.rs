//! Billing API client implementation.

use order_sync_core::{Currency, MinorUnits};
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::BillingConfig;
use crate::error::BillingError;
use crate::types::{CustomerId, InvoiceId, InvoiceItemId, PriceId, ProductId};

/// Client for the hosted billing API.
///
/// Every operation is a single authenticated POST. Nothing is retried and
/// nothing is rolled back; failures surface to the caller as
/// [`BillingError`].
#[derive(Debug, Clone)]
pub struct BillingClient {
    client: reqwest::Client,
    api_url: String,
}

/// Minimal shape of every creation response: the handle of the new resource.
#[derive(Debug, Deserialize)]
struct CreatedResource<Id> {
    id: Id,
}

impl BillingClient {
    /// Create a new billing API client.
    ///
    /// # Errors
    ///
    /// Returns error if the secret key cannot form a valid header or the
    /// HTTP client fails to build.
    pub fn new(config: &BillingConfig) -> Result<Self, BillingError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.secret_key.expose_secret());
        let mut auth_header = HeaderValue::from_str(&auth_value)
            .map_err(|e| BillingError::Config(format!("invalid secret key: {e}")))?;
        auth_header.set_sensitive(true);
        headers.insert("Authorization", auth_header);

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    /// Create a customer record.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn create_customer(
        &self,
        name: &str,
        email: &str,
    ) -> Result<CustomerId, BillingError> {
        let body = serde_json::json!({ "name": name, "email": email });
        let created: CreatedResource<CustomerId> = self.post_json("/customers", &body).await?;
        Ok(created.id)
    }

    /// Create a product record.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn create_product(&self, name: &str) -> Result<ProductId, BillingError> {
        let body = serde_json::json!({ "name": name });
        let created: CreatedResource<ProductId> = self.post_json("/products", &body).await?;
        Ok(created.id)
    }

    /// Create a price for a product, denominated in minor units.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn create_price(
        &self,
        currency: Currency,
        unit_amount: MinorUnits,
        product: &ProductId,
    ) -> Result<PriceId, BillingError> {
        let body = serde_json::json!({
            "currency": currency.code(),
            "unit_amount": unit_amount,
            "product": product,
        });
        let created: CreatedResource<PriceId> = self.post_json("/prices", &body).await?;
        Ok(created.id)
    }

    /// Create a pending invoice item for a customer.
    ///
    /// The item is attached to an invoice later via
    /// [`add_invoice_lines`](Self::add_invoice_lines).
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn create_invoice_item(
        &self,
        customer: &CustomerId,
        price: &PriceId,
        quantity: u32,
    ) -> Result<InvoiceItemId, BillingError> {
        let body = serde_json::json!({
            "customer": customer,
            "price": price,
            "quantity": quantity,
        });
        let created: CreatedResource<InvoiceItemId> =
            self.post_json("/invoiceitems", &body).await?;
        Ok(created.id)
    }

    /// Create a draft invoice for a customer.
    ///
    /// Auto-advancing is disabled so the invoice stays open for line-item
    /// attachment until it is explicitly finalized.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn create_draft_invoice(
        &self,
        customer: &CustomerId,
    ) -> Result<InvoiceId, BillingError> {
        let body = serde_json::json!({
            "customer": customer,
            "auto_advance": false,
        });
        let created: CreatedResource<InvoiceId> = self.post_json("/invoices", &body).await?;
        Ok(created.id)
    }

    /// Attach previously created invoice items to a draft invoice, in the
    /// given order.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn add_invoice_lines(
        &self,
        invoice: &InvoiceId,
        items: &[InvoiceItemId],
    ) -> Result<(), BillingError> {
        let lines: Vec<_> = items
            .iter()
            .map(|item| serde_json::json!({ "invoice_item": item }))
            .collect();
        let body = serde_json::json!({ "lines": lines });
        self.post(&format!("/invoices/{invoice}/add_lines"), &body)
            .await?;
        Ok(())
    }

    /// Finalize a draft invoice, closing it to further changes.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn finalize_invoice(&self, invoice: &InvoiceId) -> Result<(), BillingError> {
        let body = serde_json::json!({});
        self.post(&format!("/invoices/{invoice}/finalize"), &body)
            .await?;
        Ok(())
    }

    /// POST a JSON body and map non-success statuses to errors.
    async fn post(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<reqwest::Response, BillingError> {
        let url = format!("{}{endpoint}", self.api_url);
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        match status {
            s if s.is_success() => {
                debug!(endpoint, "billing request succeeded");
                Ok(response)
            }
            StatusCode::UNAUTHORIZED => Err(BillingError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => Err(BillingError::RateLimited),
            _ => {
                let message = response.text().await.unwrap_or_default();
                Err(BillingError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    /// POST a JSON body and decode the JSON response.
    async fn post_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<T, BillingError> {
        let response = self.post(endpoint, body).await?;
        response.json::<T>().await.map_err(|e| BillingError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }
}
