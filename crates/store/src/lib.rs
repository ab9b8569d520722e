//! Order Sync Store - Read-only storefront API client.
//!
//! Fetches carts, users, and products from the storefront's JSON API. This
//! crate never writes anything: the storefront is the source of truth and
//! the sync only reads from it.
//!
//! # Example
//!
//! ```rust,ignore
//! use order_sync_store::{StoreClient, StoreConfig};
//!
//! let client = StoreClient::new(&StoreConfig::from_env()?);
//! let carts = client.carts().await?;
//! for cart in &carts {
//!     let user = client.user(cart.user_id).await?;
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
mod config;
mod error;
mod models;

pub use client::StoreClient;
pub use config::{ConfigError, StoreConfig};
pub use error::StoreError;
pub use models::{Cart, CartLine, ProductRecord, UserName, UserRecord};
