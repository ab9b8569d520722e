//! Billing-side resource handles.
//!
//! The billing API identifies everything it creates by an opaque string
//! (`cus_...`, `prod_...`, `price_...`, `ii_...`, `in_...`). Each resource
//! kind gets its own newtype so a price handle can never be attached where
//! an invoice-item handle belongs.

use order_sync_core::define_resource_id;

define_resource_id!(CustomerId);
define_resource_id!(ProductId);
define_resource_id!(PriceId);
define_resource_id!(InvoiceItemId);
define_resource_id!(InvoiceId);
