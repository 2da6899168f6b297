//! Registration: converting an application into an account
//!
//! The application is taken by value and consumed whether or not
//! registration succeeds; a rejected draft is resubmitted as a fresh form,
//! never retried in place. Consuming the draft is what makes registration
//! one-shot: there is no flag to reset and no second account to mint.

use core_kernel::{MeterCode, NationalId, PhoneNumber};

use crate::account::CustomerAccount;
use crate::application::CustomerApplication;
use crate::directory::CustomerDirectory;
use crate::error::CustomerError;
use crate::identity::CustomerIdentity;
use crate::validation::ApplicationValidator;

/// Registers an application, appending a fresh account to the directory
///
/// Steps, in order:
/// 1. Field validation (national ID, phone, email, name).
/// 2. National ID uniqueness against the directory.
/// 3. Meter code derivation and uniqueness; two distinct national IDs
///    sharing their last four digits collide here.
/// 4. Account construction with zeroed billing state.
///
/// # Returns
///
/// A borrow of the newly appended account.
///
/// # Errors
///
/// `Validation` naming the first offending field, or `Duplicate` for
/// national ID / meter code collisions.
pub fn register(
    application: CustomerApplication,
    directory: &mut CustomerDirectory,
) -> Result<&CustomerAccount, CustomerError> {
    ApplicationValidator::validate(&application).into_result()?;

    let national_id = NationalId::new(&application.national_id)
        .map_err(|e| CustomerError::validation("national_id", e.to_string()))?;
    let phone_number = PhoneNumber::new(&application.phone_number)
        .map_err(|e| CustomerError::validation("phone_number", e.to_string()))?;

    if directory.find_by_national_id(national_id.as_str()).is_some() {
        return Err(CustomerError::duplicate_national_id(&national_id));
    }
    let meter_code = MeterCode::derive(&national_id);
    if directory.find_by_meter(meter_code.as_str()).is_some() {
        return Err(CustomerError::duplicate_meter_code(&meter_code));
    }

    let identity = CustomerIdentity {
        name: application.name,
        national_id,
        address: application.address,
        email: application.email,
        region: application.region,
        phone_number,
    };
    directory.add(CustomerAccount::open(identity))
}
