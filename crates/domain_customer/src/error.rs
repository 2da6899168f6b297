//! Customer domain errors

use core_kernel::{ApplicationId, MeterCode, NationalId};
use thiserror::Error;

/// Errors that can occur in the customer domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustomerError {
    /// A field failed its format or presence check
    #[error("Invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// The national ID or derived meter code is already registered
    #[error("Duplicate customer: {0}")]
    Duplicate(String),

    /// No customer matched the given key
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// The registration draft was already consumed
    #[error("Application already registered: {0}")]
    AlreadyRegistered(String),
}

impl CustomerError {
    /// Creates a validation error for a named field
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        CustomerError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Creates a duplicate error for a national ID
    pub fn duplicate_national_id(national_id: &NationalId) -> Self {
        CustomerError::Duplicate(format!("national ID {} already exists", national_id))
    }

    /// Creates a duplicate error for a meter code
    pub fn duplicate_meter_code(meter_code: &MeterCode) -> Self {
        CustomerError::Duplicate(format!("meter code {} already exists", meter_code))
    }

    /// Creates a not-found error for a meter code lookup
    pub fn meter_not_found(meter_code: impl std::fmt::Display) -> Self {
        CustomerError::NotFound(format!("no customer with meter code {}", meter_code))
    }

    /// Creates an already-registered error for an application
    pub fn already_registered(application_id: ApplicationId) -> Self {
        CustomerError::AlreadyRegistered(application_id.to_string())
    }
}
