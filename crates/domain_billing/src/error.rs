//! Billing domain errors

use core_kernel::Money;
use thiserror::Error;

/// Errors that can occur in the billing domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingError {
    /// A submitted reading did not advance past the current one
    #[error("Invalid reading: {submitted} must exceed the current reading {current}")]
    InvalidReading { submitted: u32, current: u32 },

    /// The reading pair was corrupted by out-of-band edits
    #[error("Invalid reading state: current reading {current} is below last reading {last}")]
    InvalidReadingState { current: u32, last: u32 },

    /// The tariff price was not strictly positive
    #[error("Invalid price: {0} (price per unit must be positive)")]
    InvalidPrice(Money),

    /// Arithmetic failed while computing a charge
    #[error("Calculation error: {0}")]
    Calculation(String),

    /// A payment was routed with the wrong meter code
    #[error("Meter mismatch: claimed {claimed}, account is {actual}")]
    MeterMismatch { claimed: String, actual: String },

    /// There is nothing to pay
    #[error("No balance due")]
    NoBalance,

    /// The payment amount did not equal the balance exactly
    #[error("Amount mismatch: offered {offered}, balance due is {due}")]
    AmountMismatch { offered: Money, due: Money },

    /// An operator name was empty
    #[error("Operator name must not be empty")]
    EmptyOperatorName,

    /// An operator with this name already exists
    #[error("Duplicate operator: {0}")]
    DuplicateOperator(String),

    /// No operator matched the given name
    #[error("Operator not found: {0}")]
    OperatorNotFound(String),
}
