//! Billing Domain
//!
//! This crate implements the billing lifecycle for customer accounts:
//!
//! - [`metering::submit_reading`]: record a monthly meter reading
//! - [`tariff::apply_tariff`]: convert consumption into a charge at a
//!   price per unit, accumulating onto the balance due
//! - [`payment::settle`]: clear the balance with an exact payment
//! - [`Operator`]: field staff who collect payments (crediting their
//!   running total) and stop meters
//!
//! Every operation acts on a borrowed [`domain_customer::CustomerAccount`]
//! and returns a typed receipt or a [`BillingError`]; persistence is the
//! caller's concern.

pub mod error;
pub mod metering;
pub mod operator;
pub mod payment;
pub mod tariff;

pub use error::BillingError;
pub use metering::{submit_reading, ArrearsAdvisory, ReadingReceipt, ARREARS_ADVISORY_MONTHS};
pub use operator::{CancellationNotice, CollectionReceipt, Operator, OperatorDirectory};
pub use payment::{settle, PaymentReceipt};
pub use tariff::{apply_tariff, validate_consumption, TariffOutcome};
