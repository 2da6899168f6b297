//! Monthly meter reading submission

use domain_customer::CustomerAccount;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BillingError;

/// Unpaid-month count at which a reading receipt starts carrying an
/// arrears advisory
pub const ARREARS_ADVISORY_MONTHS: u32 = 3;

/// Advisory attached to a receipt when payments are overdue
///
/// Informational only; nothing in the core enforces a consequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrearsAdvisory {
    /// Reading submissions since the last full payment
    pub unpaid_months: u32,
}

impl fmt::Display for ArrearsAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Payment outstanding for {} months; please check your notifications",
            self.unpaid_months
        )
    }
}

/// Receipt for an accepted meter reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingReceipt {
    /// The reading that was current before this submission
    pub previous_reading: u32,
    /// The newly recorded reading
    pub current_reading: u32,
    /// Unpaid-month counter after this submission
    pub unpaid_months: u32,
}

impl ReadingReceipt {
    /// Arrears advisory, present once unpaid months reach the threshold
    pub fn arrears_advisory(&self) -> Option<ArrearsAdvisory> {
        (self.unpaid_months >= ARREARS_ADVISORY_MONTHS).then_some(ArrearsAdvisory {
            unpaid_months: self.unpaid_months,
        })
    }
}

/// Records a monthly reading against an account
///
/// The reading must advance strictly past the current one; a same-value or
/// regressed reading is rejected without distinguishing the two cases, and
/// the account is left untouched. On success the previous current reading
/// becomes the last reading and the unpaid-month counter advances.
///
/// # Errors
///
/// `InvalidReading` when `reading <= account.current_reading`.
pub fn submit_reading(
    account: &mut CustomerAccount,
    reading: u32,
) -> Result<ReadingReceipt, BillingError> {
    if reading <= account.current_reading {
        return Err(BillingError::InvalidReading {
            submitted: reading,
            current: account.current_reading,
        });
    }

    account.last_reading = account.current_reading;
    account.current_reading = reading;
    account.unpaid_months += 1;

    Ok(ReadingReceipt {
        previous_reading: account.last_reading,
        current_reading: account.current_reading,
        unpaid_months: account.unpaid_months,
    })
}
