//! Order Sync CLI - synchronize storefront carts into the billing system.
//!
//! # Usage
//!
//! ```bash
//! # Run the full cart-to-invoice sync (also the default with no command)
//! order-sync run
//! ```
//!
//! # Environment
//!
//! - `STORE_BASE_URL` - Base URL of the storefront API (required)
//! - `BILLING_SECRET_KEY` - Secret key for the billing account (required)
//! - `BILLING_API_URL` - Billing API base URL (optional)
//! - `RUST_LOG` - Log filter (optional, defaults to info for the sync crates)
//!
//! Exit status is 0 when every stage completes; the first unhandled error
//! is logged and the process exits non-zero. Re-running after a partial
//! failure creates duplicate billing resources - there is no rollback and
//! no dedup, so reconcile manually before retrying.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use order_sync_billing::{BillingClient, BillingConfig};
use order_sync_pipeline::OrderProcessor;
use order_sync_store::{StoreClient, StoreConfig};

#[derive(Parser)]
#[command(name = "order-sync")]
#[command(version, about = "Synchronize storefront carts into the billing system")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full cart-to-invoice sync
    Run,
}

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for the sync crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "order_sync_pipeline=info,order_sync_store=info,order_sync_billing=info".into()
    });
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let store = StoreClient::new(&StoreConfig::from_env()?);
            let billing = BillingClient::new(&BillingConfig::from_env()?)?;
            OrderProcessor::new(store, billing).run().await?;
        }
    }
    Ok(())
}
