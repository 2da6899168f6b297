//! Electricity Billing Core - Console Status Binary
//!
//! Loads the directories from their configured files, logs a startup
//! summary, and prints the regional reports for an optional region
//! argument. The interactive forms live elsewhere; this binary exists to
//! inspect a deployment's data files from a shell.
//!
//! # Usage
//!
//! ```bash
//! # Summary only
//! cargo run --bin ebill-console
//!
//! # Regional bill listing and consumption statistics
//! cargo run --bin ebill-console -- Cairo
//! ```
//!
//! # Environment Variables
//!
//! * `EBILL_CUSTOMERS_PATH` - customer file (default: customers.txt)
//! * `EBILL_OPERATORS_PATH` - operator file (default: operators.txt)
//! * `EBILL_ADMIN_NAME` - administrator name (default: admin)
//! * `EBILL_LOG_LEVEL` - trace, debug, info, warn, error (default: info)

use anyhow::Context;
use interface_app::{AppConfig, AppContext};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().unwrap_or_default();
    init_tracing(&config.log_level);

    tracing::info!(
        customers_path = %config.customers_path,
        operators_path = %config.operators_path,
        "starting ebill console"
    );

    let context = AppContext::load(config).context("failed to load directories")?;

    println!(
        "{} customers, {} operators on file",
        context.customers.len(),
        context.operators.len()
    );
    println!("{}", context.collections_report());

    if let Some(region) = std::env::args().nth(1) {
        println!();
        println!("{}", context.bills_by_region(&region));
        println!();
        println!("{}", context.consumption_statistics(&region));
    }

    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
