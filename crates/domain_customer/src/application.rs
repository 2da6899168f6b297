//! Registration applications (prospective customers)
//!
//! An application is the transient draft a prospective customer fills in
//! before they have an account. Fields are raw strings straight from the
//! form; nothing is trusted until [`crate::validation`] has passed over it.
//! Registration consumes the application by value, so a draft can never
//! produce two accounts; the move is the one-shot guard.

use chrono::{DateTime, Utc};
use core_kernel::ApplicationId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A prospective customer's registration draft
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CustomerApplication {
    /// Transient draft identifier
    pub id: ApplicationId,
    /// Display name
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Claimed national ID, validated to 14 digits before registration
    pub national_id: String,
    /// Postal address
    pub address: String,
    /// Contact email
    #[validate(email(message = "email must look like local@domain"))]
    pub email: String,
    /// Service region
    pub region: String,
    /// Claimed phone number, validated to 11 digits before registration
    pub phone_number: String,
    /// Path or reference to the signed contract copy; opaque to the core
    pub contract_reference: String,
    /// When the draft was submitted
    pub submitted_at: DateTime<Utc>,
}

impl CustomerApplication {
    /// Creates a new draft from form fields
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        national_id: impl Into<String>,
        address: impl Into<String>,
        email: impl Into<String>,
        region: impl Into<String>,
        phone_number: impl Into<String>,
        contract_reference: impl Into<String>,
    ) -> Self {
        Self {
            id: ApplicationId::new(),
            name: name.into(),
            national_id: national_id.into(),
            address: address.into(),
            email: email.into(),
            region: region.into(),
            phone_number: phone_number.into(),
            contract_reference: contract_reference.into(),
            submitted_at: Utc::now(),
        }
    }
}
