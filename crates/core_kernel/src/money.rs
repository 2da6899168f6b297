//! Money type with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//! All amounts are denominated in Egyptian pounds (EGP); the billing system
//! operates in a single currency.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount in Egyptian pounds
///
/// Money uses rust_decimal for precise arithmetic without floating-point
/// errors. Bill charges are whole-pound products of consumption and a unit
/// price, but the type accepts fractional amounts so prices like 1.5 EGP
/// per unit remain representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value from a decimal amount
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates Money from a whole number of pounds
    pub fn from_whole(pounds: i64) -> Self {
        Self(Decimal::new(pounds, 0))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Returns the underlying decimal amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Checked addition
    pub fn checked_add(&self, other: Money) -> Result<Money, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction that rejects a negative result
    ///
    /// Balances in the billing core are never allowed to go below zero,
    /// so subtraction past zero is an error rather than a negative amount.
    pub fn checked_sub_to_zero(&self, other: Money) -> Result<Money, MoneyError> {
        let result = self.0.checked_sub(other.0).ok_or(MoneyError::Overflow)?;
        if result.is_sign_negative() && !result.is_zero() {
            return Err(MoneyError::NegativeAmount(result));
        }
        Ok(Money(result))
    }

    /// Multiplies this amount (a price per unit) by a unit count
    ///
    /// # Arguments
    ///
    /// * `units` - Number of consumed units to bill at this price
    pub fn times(&self, units: u32) -> Result<Money, MoneyError> {
        self.0
            .checked_mul(Decimal::from(units))
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} EGP", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
