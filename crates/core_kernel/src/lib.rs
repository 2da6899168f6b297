//! Core Kernel - Foundational types for the electricity billing system
//!
//! This crate provides the fundamental building blocks used across all
//! domain modules:
//! - Money with precise decimal arithmetic (single-currency, EGP)
//! - Derived identifiers: national IDs, meter codes, phone numbers

pub mod identifiers;
pub mod money;

pub use identifiers::{
    ApplicationId, IdentityError, MeterCode, NationalId, PhoneNumber, METER_CODE_PREFIX,
    NATIONAL_ID_DIGITS, PHONE_NUMBER_DIGITS,
};
pub use money::{Money, MoneyError};
