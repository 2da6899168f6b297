//! Shared customer identity record
//!
//! Both the registration application and the billable account carry the
//! same identity data. The identity is a plain record embedded by
//! composition rather than a base type: behavior never varies by entity
//! kind beyond which fields are present, so there is nothing to dispatch
//! on.

use core_kernel::{NationalId, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity fields common to applications and accounts
///
/// `national_id` is immutable after registration; everything else may be
/// overwritten by a directory update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerIdentity {
    /// Display name
    pub name: String,
    /// Government identity number, source of the meter code
    pub national_id: NationalId,
    /// Postal address, free text
    pub address: String,
    /// Contact email
    pub email: String,
    /// Service region, matched case-insensitively in reports
    pub region: String,
    /// Contact phone number
    pub phone_number: PhoneNumber,
}

impl CustomerIdentity {
    /// Case-insensitive region match, tolerant of padding on the query
    pub fn in_region(&self, region: &str) -> bool {
        self.region.eq_ignore_ascii_case(region.trim())
    }
}

impl fmt::Display for CustomerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (NID {}, {}, {})",
            self.name, self.national_id, self.region, self.phone_number
        )
    }
}
