//! Correlation maps between store-side and billing-side identifiers.
//!
//! All four maps are insertion-ordered (`IndexMap`), so iteration always
//! replays discovery order: users and products in order of first
//! appearance across the fetched carts, invoice items in creation order.
//! The maps live only for the duration of one run.

use indexmap::IndexMap;
use order_sync_billing::{CustomerId, InvoiceId, InvoiceItemId, PriceId, ProductId as BillingProductId};
use order_sync_core::{ProductId, UserId};

/// Billing-side handles created for one storefront product.
#[derive(Debug, Clone)]
pub struct PriceMapping {
    /// The billing product created from the storefront title.
    pub product: BillingProductId,
    /// The price attached to that product, in the fixed currency.
    pub price: PriceId,
}

/// Storefront user id → billing customer, one entry per distinct user.
pub type CustomerMap = IndexMap<UserId, CustomerId>;

/// Storefront product id → billing product and price, one entry per
/// distinct product.
pub type ProductMap = IndexMap<ProductId, PriceMapping>;

/// Storefront user id → invoice items created for that user's cart lines,
/// in creation order. Items accumulate and are never deduplicated, even
/// when the same product appears twice for one user.
pub type InvoiceItemMap = IndexMap<UserId, Vec<InvoiceItemId>>;

/// Billing customer → that customer's draft invoice.
pub type InvoiceMap = IndexMap<CustomerId, InvoiceId>;
