//! Core types for the order sync workspace.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod redact;

pub use id::*;
pub use money::{Currency, MinorUnits, to_minor_units};
pub use redact::id_suffix;
