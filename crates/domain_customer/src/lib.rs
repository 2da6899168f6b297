//! Customer Domain
//!
//! This crate owns the customer side of the billing system: the shared
//! identity record, registration applications (prospective customers),
//! active accounts, and the customer directory.
//!
//! # Entity Model
//!
//! Prospective and active customers share one identity record, embedded
//! by composition in two distinct entities:
//!
//! - [`CustomerIdentity`]: name, national ID, contact fields
//! - [`CustomerApplication`]: a transient registration draft holding raw
//!   form input plus a contract reference
//! - [`CustomerAccount`]: the durable, billable entity with meter
//!   readings, balance, and status flags
//!
//! Registration ([`registration::register`]) consumes the application by
//! value and appends a zeroed account to the [`CustomerDirectory`].

pub mod account;
pub mod application;
pub mod directory;
pub mod error;
pub mod identity;
pub mod registration;
pub mod validation;

pub use account::{ComplaintOutcome, CustomerAccount};
pub use application::CustomerApplication;
pub use directory::{CustomerDirectory, CustomerUpdate};
pub use error::CustomerError;
pub use identity::CustomerIdentity;
pub use registration::register;
pub use validation::{ApplicationValidator, FieldViolation, ValidationResult};
