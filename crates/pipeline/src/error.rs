//! Stage-tagged error type for the order processing workflow.

use order_sync_billing::{BillingError, CustomerId};
use order_sync_core::{ProductId, UserId};
use order_sync_store::StoreError;
use thiserror::Error;

/// The seven stages of the workflow, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    FetchCarts,
    CreateCustomers,
    CreateProducts,
    CreateInvoiceItems,
    CreateDraftInvoices,
    AttachInvoiceLines,
    FinalizeInvoices,
}

impl Stage {
    /// One-based position of the stage in the pipeline.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::FetchCarts => 1,
            Self::CreateCustomers => 2,
            Self::CreateProducts => 3,
            Self::CreateInvoiceItems => 4,
            Self::CreateDraftInvoices => 5,
            Self::AttachInvoiceLines => 6,
            Self::FinalizeInvoices => 7,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::FetchCarts => "fetch carts",
            Self::CreateCustomers => "create customers",
            Self::CreateProducts => "create products and prices",
            Self::CreateInvoiceItems => "create invoice items",
            Self::CreateDraftInvoices => "create draft invoices",
            Self::AttachInvoiceLines => "attach invoice lines",
            Self::FinalizeInvoices => "finalize invoices",
        };
        f.write_str(name)
    }
}

/// Errors that abort the workflow.
///
/// Every variant carries enough context to tell the operator which of the
/// seven stages failed; nothing is retried or rolled back.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A storefront read failed.
    #[error("stage {} ({stage}) failed: {source}", .stage.number())]
    Store {
        stage: Stage,
        #[source]
        source: StoreError,
    },

    /// A billing call failed.
    #[error("stage {} ({stage}) failed: {source}", .stage.number())]
    Billing {
        stage: Stage,
        #[source]
        source: BillingError,
    },

    /// A cart references a user no customer was recorded for.
    #[error("cart references user {0} with no billing customer")]
    MissingCustomer(UserId),

    /// A cart line references a product no price was recorded for.
    #[error("cart line references product {0} with no billing price")]
    MissingPrice(ProductId),

    /// A customer has no draft invoice recorded.
    #[error("no draft invoice recorded for customer {0}")]
    MissingInvoice(CustomerId),

    /// A product price does not fit the minor-unit integer range.
    #[error("price of product {0} overflows the minor-unit range")]
    AmountOutOfRange(ProductId),
}

impl SyncError {
    /// The stage the error surfaced in.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Store { stage, .. } | Self::Billing { stage, .. } => *stage,
            Self::AmountOutOfRange(_) => Stage::CreateProducts,
            Self::MissingCustomer(_) | Self::MissingPrice(_) => Stage::CreateInvoiceItems,
            Self::MissingInvoice(_) => Stage::AttachInvoiceLines,
        }
    }
}
