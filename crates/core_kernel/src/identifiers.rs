//! Strongly-typed identifiers for domain entities
//!
//! Durable customer keys in this system are derived from government-issued
//! data rather than generated: the national ID is the root identity, and the
//! meter code is computed from it. Newtype wrappers keep those strings from
//! being mixed up with free-text fields, and centralize the format rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Prefix for all derived meter codes
pub const METER_CODE_PREFIX: &str = "MTR-";

/// Number of digits in a national ID
pub const NATIONAL_ID_DIGITS: usize = 14;

/// Number of digits in a phone number
pub const PHONE_NUMBER_DIGITS: usize = 11;

/// Errors raised when constructing identifiers from untrusted input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("national ID must be exactly {NATIONAL_ID_DIGITS} digits, got {0:?}")]
    InvalidNationalId(String),

    #[error("phone number must be exactly {PHONE_NUMBER_DIGITS} digits, got {0:?}")]
    InvalidPhoneNumber(String),

    #[error("meter code must not be empty")]
    EmptyMeterCode,
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A national identity number: exactly 14 ASCII digits
///
/// Immutable after registration; the last four digits seed the meter code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NationalId(String);

impl NationalId {
    /// Validates and wraps a national ID
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::InvalidNationalId` unless the input is
    /// exactly 14 ASCII digits.
    pub fn new(id: impl Into<String>) -> Result<Self, IdentityError> {
        let id = id.into();
        if id.len() != NATIONAL_ID_DIGITS || !is_digits(&id) {
            return Err(IdentityError::InvalidNationalId(id));
        }
        Ok(Self(id))
    }

    /// Wraps a value read back from storage without re-validation
    ///
    /// Legacy records are loaded as persisted; registration-time rules
    /// apply only to new input.
    pub fn from_stored(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw digit string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the trailing digits used to derive the meter code
    pub fn last_four(&self) -> &str {
        &self.0[self.0.len().saturating_sub(4)..]
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NationalId {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A meter code: `MTR-` followed by the last four digits of the national ID
///
/// The primary lookup key for customer accounts. Stored uppercase so that
/// equality is a plain comparison; lookups accept any casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeterCode(String);

impl MeterCode {
    /// Derives the meter code for a national ID
    pub fn derive(national_id: &NationalId) -> Self {
        Self(format!("{}{}", METER_CODE_PREFIX, national_id.last_four()))
    }

    /// Parses a user-supplied meter code, normalizing case
    pub fn parse(code: impl AsRef<str>) -> Result<Self, IdentityError> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return Err(IdentityError::EmptyMeterCode);
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Wraps a value read back from storage, normalizing case
    pub fn from_stored(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    /// Returns the normalized code
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against raw input
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.eq_ignore_ascii_case(candidate.trim())
    }
}

impl fmt::Display for MeterCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MeterCode {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A phone number: exactly 11 ASCII digits at registration time
///
/// Stored as its digit string so leading zeros survive persistence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validates and wraps a phone number
    pub fn new(number: impl Into<String>) -> Result<Self, IdentityError> {
        let number = number.into();
        if number.len() != PHONE_NUMBER_DIGITS || !is_digits(&number) {
            return Err(IdentityError::InvalidPhoneNumber(number));
        }
        Ok(Self(number))
    }

    /// Wraps a numeric value read back from storage without length checks
    ///
    /// Records written before the 11-digit rule existed still load.
    pub fn from_stored(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Returns the digit string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Identifier for a transient registration application
///
/// Applications never reach storage, so a time-ordered UUID is enough to
/// track a draft between form submission and registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(Uuid);

impl ApplicationId {
    /// Creates a new time-ordered identifier
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ApplicationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "APP-{}", self.0)
    }
}

impl FromStr for ApplicationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid_str = s.strip_prefix("APP-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(uuid_str)?))
    }
}
