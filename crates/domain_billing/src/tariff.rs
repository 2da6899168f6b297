//! Tariff application: converting consumption into a charge

use core_kernel::Money;
use domain_customer::CustomerAccount;
use serde::{Deserialize, Serialize};

use crate::error::BillingError;

/// Result of applying a tariff to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffOutcome {
    /// Units billed: `current_reading - last_reading`
    pub consumption: u32,
    /// Charge added by this application
    pub charge: Money,
    /// Balance due after the charge
    pub balance_due: Money,
}

/// Checks the account's reading pair without mutating anything
///
/// # Returns
///
/// The consumption in units when the pair is consistent.
///
/// # Errors
///
/// `InvalidReadingState` when `current < last` (reachable only through
/// out-of-band edits to persisted records).
pub fn validate_consumption(account: &CustomerAccount) -> Result<u32, BillingError> {
    account
        .consumption()
        .ok_or(BillingError::InvalidReadingState {
            current: account.current_reading,
            last: account.last_reading,
        })
}

/// Applies a tariff: charges the current consumption at the given price
///
/// The charge is added on top of whatever balance is already due, so
/// applying twice before payment accumulates two periods' charges; there
/// is no billing-period entity to stop it.
///
/// # Errors
///
/// `InvalidPrice` unless `price_per_unit > 0`; `InvalidReadingState` when
/// the reading pair is corrupted. The account is unchanged on error.
pub fn apply_tariff(
    account: &mut CustomerAccount,
    price_per_unit: Money,
) -> Result<TariffOutcome, BillingError> {
    if !price_per_unit.is_positive() {
        return Err(BillingError::InvalidPrice(price_per_unit));
    }
    let consumption = validate_consumption(account)?;
    let charge = price_per_unit
        .times(consumption)
        .map_err(|e| BillingError::Calculation(e.to_string()))?;

    account.balance_due += charge;

    Ok(TariffOutcome {
        consumption,
        charge,
        balance_due: account.balance_due,
    })
}
