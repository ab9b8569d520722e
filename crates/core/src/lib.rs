//! Order Sync Core - Shared types library.
//!
//! This crate provides common types used across the order sync components:
//! - `store` - Read-only client for the storefront API
//! - `billing` - Client for the hosted billing API
//! - `pipeline` - The order processing workflow
//! - `cli` - The `order-sync` binary
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, minor-unit money
//!   conversion, and log redaction

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
