//! Field validation for registration and directory updates
//!
//! Format rules are enforced here, at the edge where untrusted form input
//! enters the domain. Values loaded back from storage are exempt; legacy
//! records keep whatever they were persisted with.
//!
//! # Validation Rules
//!
//! - National ID: exactly 14 ASCII digits
//! - Phone number: exactly 11 ASCII digits
//! - Email: conventional `local@domain.tld` shape, alphabetic TLD of 2-6
//!   characters
//! - Name: non-empty after trimming

use core_kernel::{NationalId, PhoneNumber};
use validator::Validate;

use crate::application::CustomerApplication;
use crate::directory::CustomerUpdate;
use crate::error::CustomerError;

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Name of the offending field
    pub field: &'static str,
    /// Human-readable reason
    pub message: String,
}

/// Result of validating a form-level record
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Violations, in the order the fields were checked
    pub errors: Vec<FieldViolation>,
    /// Non-fatal observations
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates an empty (passing) result
    pub fn ok() -> Self {
        Self::default()
    }

    /// Whether no violations were recorded
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records a violation
    pub fn add_error(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    /// Records a warning
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Converts into a `Result`, surfacing the first violation
    pub fn into_result(mut self) -> Result<(), CustomerError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            let first = self.errors.remove(0);
            Err(CustomerError::validation(first.field, first.message))
        }
    }
}

/// Validator for customer-facing form input
pub struct ApplicationValidator;

impl ApplicationValidator {
    /// Validates a registration application
    ///
    /// Checks run in a fixed order (national ID, phone, then the derive
    /// rules for email and name) so the first reported violation is
    /// deterministic.
    pub fn validate(application: &CustomerApplication) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if let Err(e) = NationalId::new(&application.national_id) {
            result.add_error("national_id", e.to_string());
        }
        if let Err(e) = PhoneNumber::new(&application.phone_number) {
            result.add_error("phone_number", e.to_string());
        }
        Self::check_derive_rules(application, &mut result);
        Self::check_email_tld(&application.email, &mut result);

        if application.region.trim().is_empty() {
            result.add_warning("region is empty; regional reports will not match this customer");
        }
        if application.contract_reference.trim().is_empty() {
            result.add_warning("no contract copy attached");
        }

        result
    }

    /// Validates a directory update payload
    pub fn validate_update(update: &CustomerUpdate) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if update.name.trim().is_empty() {
            result.add_error("name", "name must not be empty");
        }
        if let Err(e) = PhoneNumber::new(&update.phone_number) {
            result.add_error("phone_number", e.to_string());
        }
        if !is_conventional_email(&update.email) {
            result.add_error("email", "email must look like local@domain.tld");
        }

        result
    }

    /// Runs the `validator` derive rules and maps their output
    fn check_derive_rules(application: &CustomerApplication, result: &mut ValidationResult) {
        if let Err(errors) = Validate::validate(application) {
            for (field, violations) in errors.field_errors() {
                for violation in violations.iter() {
                    let message = violation
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("failed {} check", violation.code));
                    result.add_error(field, message);
                }
            }
        }
    }

    /// The derive-level email check accepts TLD-less domains; billing
    /// notices need a routable address, so require a conventional TLD.
    fn check_email_tld(email: &str, result: &mut ValidationResult) {
        let already_flagged = result.errors.iter().any(|v| v.field == "email");
        if !already_flagged && !has_conventional_tld(email) {
            result.add_error("email", "email must look like local@domain.tld");
        }
    }
}

/// Full email shape check used outside the derive path
pub fn is_conventional_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.starts_with('.') && has_conventional_tld(email)
}

fn has_conventional_tld(email: &str) -> bool {
    let Some((_, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && (2..=6).contains(&tld.len()) && tld.chars().all(|c| c.is_ascii_alphabetic())
}
