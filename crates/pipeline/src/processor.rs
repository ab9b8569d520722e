//! The seven-stage order processing workflow.
//!
//! Stages run strictly in sequence; each one finishes completely before
//! the next starts, and every external call is awaited to completion
//! before another is issued. Stage functions are free functions over the
//! explicit correlation maps so the data flow stays visible at the call
//! site - the processor struct only carries the two clients.

use indexmap::IndexSet;
use order_sync_billing::{BillingClient, BillingError};
use order_sync_core::{Currency, ProductId, UserId, id_suffix, to_minor_units};
use order_sync_store::{Cart, StoreClient, StoreError};
use tracing::info;

use crate::error::{Stage, SyncError};
use crate::maps::{CustomerMap, InvoiceItemMap, InvoiceMap, PriceMapping, ProductMap};

/// Drives one full cart-to-invoice sync against the two external services.
#[derive(Debug, Clone)]
pub struct OrderProcessor {
    store: StoreClient,
    billing: BillingClient,
}

impl OrderProcessor {
    /// Create a processor over the given clients.
    #[must_use]
    pub const fn new(store: StoreClient, billing: BillingClient) -> Self {
        Self { store, billing }
    }

    /// Run the workflow to completion.
    ///
    /// # Errors
    ///
    /// Returns the first [`SyncError`] encountered; remaining stages are
    /// skipped and billing resources already created are left in place.
    pub async fn run(&self) -> Result<(), SyncError> {
        info!("starting to process orders");

        let carts = fetch_carts(&self.store).await?;
        let customers = create_customers(&self.store, &self.billing, &carts).await?;
        let products = create_products(&self.store, &self.billing, &carts).await?;
        let invoice_items =
            create_invoice_items(&self.billing, &carts, &customers, &products).await?;
        let invoices = create_draft_invoices(&self.billing, &customers).await?;
        attach_invoice_lines(&self.billing, &customers, &invoices, &invoice_items).await?;
        finalize_invoices(&self.billing, &invoices).await?;

        info!("all orders have been processed successfully");
        Ok(())
    }
}

/// Stage 1: pull every cart from the storefront.
async fn fetch_carts(store: &StoreClient) -> Result<Vec<Cart>, SyncError> {
    let carts = store.carts().await.map_err(store_err(Stage::FetchCarts))?;
    stage_complete(Stage::FetchCarts);
    Ok(carts)
}

/// Stage 2: create one billing customer per distinct cart user.
///
/// Exactly one storefront fetch and one billing call per distinct user,
/// regardless of how many carts reference them.
async fn create_customers(
    store: &StoreClient,
    billing: &BillingClient,
    carts: &[Cart],
) -> Result<CustomerMap, SyncError> {
    let mut customers = CustomerMap::new();
    for user_id in distinct_user_ids(carts) {
        let user = store
            .user(user_id)
            .await
            .map_err(store_err(Stage::CreateCustomers))?;
        let customer = billing
            .create_customer(&user.full_name(), &user.email)
            .await
            .map_err(billing_err(Stage::CreateCustomers))?;
        info!(
            user = %user_id,
            customer = %id_suffix(customer.as_str()),
            "created billing customer"
        );
        customers.insert(user_id, customer);
    }
    stage_complete(Stage::CreateCustomers);
    Ok(customers)
}

/// Stage 3: create one billing product and one price per distinct product.
///
/// The price is denominated in minor units of the fixed currency,
/// converted from the storefront's decimal amount.
async fn create_products(
    store: &StoreClient,
    billing: &BillingClient,
    carts: &[Cart],
) -> Result<ProductMap, SyncError> {
    let mut products = ProductMap::new();
    for product_id in distinct_product_ids(carts) {
        let record = store
            .product(product_id)
            .await
            .map_err(store_err(Stage::CreateProducts))?;
        let product = billing
            .create_product(&record.title)
            .await
            .map_err(billing_err(Stage::CreateProducts))?;
        info!(product = %id_suffix(product.as_str()), "created billing product");

        let unit_amount =
            to_minor_units(record.price).ok_or(SyncError::AmountOutOfRange(product_id))?;
        let price = billing
            .create_price(Currency::Usd, unit_amount, &product)
            .await
            .map_err(billing_err(Stage::CreateProducts))?;
        info!(price = %id_suffix(price.as_str()), "created billing price");

        products.insert(product_id, PriceMapping { product, price });
    }
    stage_complete(Stage::CreateProducts);
    Ok(products)
}

/// Stage 4: create one billing invoice item per cart line.
///
/// Carts and lines are processed in their original order, and item ids
/// accumulate per user - a product appearing twice for the same user
/// yields two items. Every user with a cart gets a bucket, even when the
/// cart has no lines.
async fn create_invoice_items(
    billing: &BillingClient,
    carts: &[Cart],
    customers: &CustomerMap,
    products: &ProductMap,
) -> Result<InvoiceItemMap, SyncError> {
    let mut invoice_items: InvoiceItemMap = customers
        .keys()
        .map(|&user_id| (user_id, Vec::new()))
        .collect();

    for cart in carts {
        let customer = customers
            .get(&cart.user_id)
            .ok_or(SyncError::MissingCustomer(cart.user_id))?;
        for line in &cart.lines {
            let mapping = products
                .get(&line.product_id)
                .ok_or(SyncError::MissingPrice(line.product_id))?;
            let item = billing
                .create_invoice_item(customer, &mapping.price, line.quantity)
                .await
                .map_err(billing_err(Stage::CreateInvoiceItems))?;
            info!(
                user = %cart.user_id,
                item = %id_suffix(item.as_str()),
                "created invoice item"
            );
            invoice_items.entry(cart.user_id).or_default().push(item);
        }
    }
    stage_complete(Stage::CreateInvoiceItems);
    Ok(invoice_items)
}

/// Stage 5: create one draft invoice per customer, in discovery order.
async fn create_draft_invoices(
    billing: &BillingClient,
    customers: &CustomerMap,
) -> Result<InvoiceMap, SyncError> {
    let mut invoices = InvoiceMap::new();
    for customer in customers.values() {
        let invoice = billing
            .create_draft_invoice(customer)
            .await
            .map_err(billing_err(Stage::CreateDraftInvoices))?;
        info!(invoice = %id_suffix(invoice.as_str()), "created draft invoice");
        invoices.insert(customer.clone(), invoice);
    }
    stage_complete(Stage::CreateDraftInvoices);
    Ok(invoices)
}

/// Stage 6: attach each user's accumulated items to their invoice, in
/// creation order.
async fn attach_invoice_lines(
    billing: &BillingClient,
    customers: &CustomerMap,
    invoices: &InvoiceMap,
    invoice_items: &InvoiceItemMap,
) -> Result<(), SyncError> {
    for (user_id, customer) in customers {
        let invoice = invoices
            .get(customer)
            .ok_or_else(|| SyncError::MissingInvoice(customer.clone()))?;
        let items = invoice_items
            .get(user_id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        billing
            .add_invoice_lines(invoice, items)
            .await
            .map_err(billing_err(Stage::AttachInvoiceLines))?;
        info!(
            invoice = %id_suffix(invoice.as_str()),
            lines = items.len(),
            "attached lines to draft invoice"
        );
    }
    stage_complete(Stage::AttachInvoiceLines);
    Ok(())
}

/// Stage 7: finalize every draft invoice, each exactly once.
async fn finalize_invoices(
    billing: &BillingClient,
    invoices: &InvoiceMap,
) -> Result<(), SyncError> {
    for invoice in invoices.values() {
        billing
            .finalize_invoice(invoice)
            .await
            .map_err(billing_err(Stage::FinalizeInvoices))?;
        info!(invoice = %id_suffix(invoice.as_str()), "finalized invoice");
    }
    stage_complete(Stage::FinalizeInvoices);
    Ok(())
}

/// Distinct cart users in order of first appearance.
fn distinct_user_ids(carts: &[Cart]) -> IndexSet<UserId> {
    carts.iter().map(|cart| cart.user_id).collect()
}

/// Distinct products across all cart lines in order of first appearance.
fn distinct_product_ids(carts: &[Cart]) -> IndexSet<ProductId> {
    carts
        .iter()
        .flat_map(|cart| cart.lines.iter().map(|line| line.product_id))
        .collect()
}

fn stage_complete(stage: Stage) {
    info!(stage = stage.number(), "{stage} completed successfully");
}

fn store_err(stage: Stage) -> impl FnOnce(StoreError) -> SyncError {
    move |source| SyncError::Store { stage, source }
}

fn billing_err(stage: Stage) -> impl FnOnce(BillingError) -> SyncError {
    move |source| SyncError::Billing { stage, source }
}
