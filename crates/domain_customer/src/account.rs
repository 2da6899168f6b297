//! Customer accounts (active, billable customers)

use core_kernel::{MeterCode, Money};
use serde::{Deserialize, Serialize};

use crate::identity::CustomerIdentity;

/// Outcome of a complaint registration attempt
///
/// The complaint flag is one-shot: a second attempt reports that the
/// complaint already exists rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintOutcome {
    /// The complaint flag transitioned from clear to set
    Registered,
    /// A complaint was already on file; nothing changed
    AlreadyRegistered,
}

impl ComplaintOutcome {
    /// Returns true if this attempt set the flag
    pub fn is_new(&self) -> bool {
        matches!(self, ComplaintOutcome::Registered)
    }
}

/// An active customer account: identity plus billing state
///
/// Accounts are created by registration (zeroed billing state) or rebuilt
/// from storage. The customer directory owns every account exclusively;
/// other code holds at most a transient borrow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAccount {
    /// Shared identity record
    pub identity: CustomerIdentity,
    /// Derived primary lookup key
    pub meter_code: MeterCode,
    /// Most recent meter reading
    pub current_reading: u32,
    /// Reading before the most recent one
    pub last_reading: u32,
    /// Accumulated unpaid charge; never negative
    pub balance_due: Money,
    /// Reading submissions since the last full payment
    pub unpaid_months: u32,
    /// One-shot complaint flag
    pub has_complaint: bool,
    /// Terminal cancellation flag; the meter is considered stopped
    pub is_cancelled: bool,
}

impl CustomerAccount {
    /// Opens a fresh account for a validated identity
    ///
    /// The meter code is derived from the national ID and all billing
    /// state starts zeroed.
    pub fn open(identity: CustomerIdentity) -> Self {
        let meter_code = MeterCode::derive(&identity.national_id);
        Self {
            identity,
            meter_code,
            current_reading: 0,
            last_reading: 0,
            balance_due: Money::zero(),
            unpaid_months: 0,
            has_complaint: false,
            is_cancelled: false,
        }
    }

    /// Rebuilds an account from persisted state
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        identity: CustomerIdentity,
        meter_code: MeterCode,
        current_reading: u32,
        last_reading: u32,
        balance_due: Money,
        unpaid_months: u32,
        has_complaint: bool,
        is_cancelled: bool,
    ) -> Self {
        Self {
            identity,
            meter_code,
            current_reading,
            last_reading,
            balance_due,
            unpaid_months,
            has_complaint,
            is_cancelled,
        }
    }

    /// Signed consumption since the last reading
    ///
    /// Negative only when the reading pair was corrupted by out-of-band
    /// edits; core operations keep `current >= last`.
    pub fn total_usage(&self) -> i64 {
        i64::from(self.current_reading) - i64::from(self.last_reading)
    }

    /// Consumption as a unit count, or `None` when the state is corrupted
    pub fn consumption(&self) -> Option<u32> {
        self.current_reading.checked_sub(self.last_reading)
    }

    /// Registers a complaint; one-shot
    pub fn register_complaint(&mut self) -> ComplaintOutcome {
        if self.has_complaint {
            ComplaintOutcome::AlreadyRegistered
        } else {
            self.has_complaint = true;
            ComplaintOutcome::Registered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{NationalId, PhoneNumber};

    fn identity() -> CustomerIdentity {
        CustomerIdentity {
            name: "Amina Farouk".to_string(),
            national_id: NationalId::new("29805241234567").unwrap(),
            address: "12 Nile St".to_string(),
            email: "amina@example.com".to_string(),
            region: "Cairo".to_string(),
            phone_number: PhoneNumber::new("01012345678").unwrap(),
        }
    }

    #[test]
    fn test_open_zeroes_billing_state() {
        let account = CustomerAccount::open(identity());
        assert_eq!(account.meter_code.as_str(), "MTR-4567");
        assert_eq!(account.current_reading, 0);
        assert_eq!(account.last_reading, 0);
        assert!(account.balance_due.is_zero());
        assert_eq!(account.unpaid_months, 0);
        assert!(!account.has_complaint);
        assert!(!account.is_cancelled);
    }

    #[test]
    fn test_complaint_is_one_shot() {
        let mut account = CustomerAccount::open(identity());
        assert_eq!(account.register_complaint(), ComplaintOutcome::Registered);
        assert!(account.has_complaint);
        assert_eq!(
            account.register_complaint(),
            ComplaintOutcome::AlreadyRegistered
        );
        assert!(account.has_complaint);
    }

    #[test]
    fn test_consumption_none_on_corrupted_state() {
        let mut account = CustomerAccount::open(identity());
        account.current_reading = 50;
        account.last_reading = 80;
        assert_eq!(account.consumption(), None);
        assert_eq!(account.total_usage(), -30);
    }
}
