//! Exact-payment settlement

use core_kernel::{MeterCode, Money};
use domain_customer::CustomerAccount;
use serde::{Deserialize, Serialize};

use crate::error::BillingError;

/// Receipt for a settled balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// The meter the payment was applied to
    pub meter_code: MeterCode,
    /// The amount that cleared the balance
    pub amount_paid: Money,
}

/// Settles an account's balance with an exact payment
///
/// The claimed meter code guards against misrouted payments and is matched
/// case-insensitively against the account's own code. Only the exact
/// balance is accepted: partial payments and overpayments are both
/// rejected, with no credit carried.
///
/// On success the balance and the unpaid-month counter reset to zero.
///
/// # Errors
///
/// In check order: `MeterMismatch`, `NoBalance` (when nothing is due),
/// `AmountMismatch`. The account is unchanged on every error path.
pub fn settle(
    account: &mut CustomerAccount,
    claimed_meter: &str,
    amount: Money,
) -> Result<PaymentReceipt, BillingError> {
    if !account.meter_code.matches(claimed_meter) {
        return Err(BillingError::MeterMismatch {
            claimed: claimed_meter.trim().to_string(),
            actual: account.meter_code.to_string(),
        });
    }
    if !account.balance_due.is_positive() {
        return Err(BillingError::NoBalance);
    }
    if amount != account.balance_due {
        return Err(BillingError::AmountMismatch {
            offered: amount,
            due: account.balance_due,
        });
    }

    account.balance_due = Money::zero();
    account.unpaid_months = 0;

    Ok(PaymentReceipt {
        meter_code: account.meter_code.clone(),
        amount_paid: amount,
    })
}
