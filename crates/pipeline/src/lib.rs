//! Order Sync Pipeline - The cart-to-invoice processing workflow.
//!
//! Pulls every cart from the storefront, then drives the billing API
//! through seven strictly sequential stages: create customers, create
//! products and prices, create invoice items, create draft invoices,
//! attach the items as invoice lines, and finalize.
//!
//! Correlation between the two systems lives in four insertion-ordered
//! maps built fresh on every run ([`maps`]); nothing is persisted. The
//! first failure anywhere aborts the remaining stages with no retry and no
//! rollback of billing resources already created - a deliberate trade-off
//! for a low-volume batch job, which also means a re-run creates duplicate
//! customers, products, and invoices.
//!
//! # Example
//!
//! ```rust,ignore
//! use order_sync_pipeline::OrderProcessor;
//!
//! let processor = OrderProcessor::new(store_client, billing_client);
//! processor.run().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod error;
pub mod maps;
mod processor;

pub use error::{Stage, SyncError};
pub use processor::OrderProcessor;
