//! Application-level errors

use domain_billing::BillingError;
use domain_customer::CustomerError;
use infra_store::StoreError;
use thiserror::Error;

/// Errors surfaced by the application context
///
/// Domain failures are recoverable: the presentation layer shows the
/// reason and lets the user retry. Store failures on load abort startup;
/// store failures on save do not appear here at all, because the
/// in-memory mutation already happened. They ride along on the operation
/// outcome instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Billing(#[from] BillingError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
