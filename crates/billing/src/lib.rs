//! Order Sync Billing - Hosted billing API client.
//!
//! Wraps the billing provider's REST API behind typed operations: create
//! customers, products, prices, and invoice items, assemble draft invoices,
//! and finalize them. Every method is a single blocking round-trip
//! authenticated with the account's secret key; retry and reconciliation
//! are left to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use order_sync_billing::{BillingClient, BillingConfig};
//!
//! let client = BillingClient::new(&BillingConfig::from_env()?)?;
//! let customer = client.create_customer("john doe", "john@gmail.com").await?;
//! let invoice = client.create_draft_invoice(&customer).await?;
//! client.finalize_invoice(&invoice).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
mod config;
mod error;
mod types;

pub use client::BillingClient;
pub use config::{BillingConfig, ConfigError};
pub use error::BillingError;
pub use types::{CustomerId, InvoiceId, InvoiceItemId, PriceId, ProductId};
