//! Field operators: payment collection and meter control
//!
//! Operators are the staff who collect payments and manage meters in the
//! field. Each operator accumulates the total it has collected; the
//! accumulator only moves on a settlement that actually succeeded.

use core_kernel::{MeterCode, Money};
use domain_customer::CustomerAccount;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BillingError;
use crate::payment::{settle, PaymentReceipt};

/// A field operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    /// Unique name (case-insensitive); the lookup key
    pub name: String,
    /// Running total of successfully collected payments
    pub total_collected: Money,
}

/// Receipt for an operator-mediated collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionReceipt {
    /// The underlying settlement
    pub payment: PaymentReceipt,
    /// The operator's running total after this collection
    pub operator_total: Money,
}

/// Notice produced when a meter is stopped and the subscription cancelled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancellationNotice {
    pub meter_code: MeterCode,
    pub customer_name: String,
}

impl fmt::Display for CancellationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Meter {} for {} has been stopped and the subscription cancelled",
            self.meter_code, self.customer_name
        )
    }
}

impl Operator {
    /// Creates an operator with a zeroed collection total
    ///
    /// # Errors
    ///
    /// `EmptyOperatorName` when the trimmed name is empty.
    pub fn new(name: impl AsRef<str>) -> Result<Self, BillingError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(BillingError::EmptyOperatorName);
        }
        Ok(Self {
            name: name.to_string(),
            total_collected: Money::zero(),
        })
    }

    /// Rebuilds an operator from persisted state
    pub fn from_parts(name: impl Into<String>, total_collected: Money) -> Self {
        Self {
            name: name.into(),
            total_collected,
        }
    }

    /// Collects an exact payment from a customer
    ///
    /// Settles against the account's own meter code, then credits this
    /// operator's running total. A failed settlement is surfaced unchanged
    /// and leaves the total untouched.
    pub fn collect_payment(
        &mut self,
        account: &mut CustomerAccount,
        amount: Money,
    ) -> Result<CollectionReceipt, BillingError> {
        let claimed = account.meter_code.clone();
        let payment = settle(account, claimed.as_str(), amount)?;
        self.total_collected += amount;
        tracing::info!(
            operator = %self.name,
            meter = %payment.meter_code,
            %amount,
            "payment collected"
        );
        Ok(CollectionReceipt {
            payment,
            operator_total: self.total_collected,
        })
    }

    /// Stops the customer's meter and cancels the subscription
    ///
    /// Unconditional and irreversible: there is no precondition on the
    /// unpaid balance, and no operation turns the flag back off.
    pub fn stop_meter(&self, account: &mut CustomerAccount) -> CancellationNotice {
        account.is_cancelled = true;
        tracing::info!(
            operator = %self.name,
            meter = %account.meter_code,
            "subscription cancelled"
        );
        CancellationNotice {
            meter_code: account.meter_code.clone(),
            customer_name: account.identity.name.clone(),
        }
    }
}

/// Insertion-ordered collection of operators, keyed by case-insensitive name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorDirectory {
    operators: Vec<Operator>,
}

impl OperatorDirectory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps operators reconstructed from storage
    pub fn from_operators(operators: Vec<Operator>) -> Self {
        Self { operators }
    }

    /// Number of operators
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Whether the directory is empty
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Iterates operators in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Operator> {
        self.operators.iter()
    }

    /// Operators as a slice, insertion order
    pub fn as_slice(&self) -> &[Operator] {
        &self.operators
    }

    /// Adds an operator after checking name uniqueness
    ///
    /// # Errors
    ///
    /// `DuplicateOperator` when another operator already holds the name,
    /// compared case-insensitively.
    pub fn add(&mut self, operator: Operator) -> Result<&Operator, BillingError> {
        if self.find_by_name(&operator.name).is_some() {
            return Err(BillingError::DuplicateOperator(operator.name));
        }
        self.operators.push(operator);
        let idx = self.operators.len() - 1;
        Ok(&self.operators[idx])
    }

    /// Finds an operator by name, case-insensitively
    pub fn find_by_name(&self, name: &str) -> Option<&Operator> {
        self.operators
            .iter()
            .find(|o| o.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Mutable lookup by name
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Operator> {
        self.operators
            .iter_mut()
            .find(|o| o.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Overwrites an operator's name and collection total
    ///
    /// Renaming changes the lookup key itself; callers must re-resolve any
    /// handle they held under the old name.
    ///
    /// # Errors
    ///
    /// `OperatorNotFound` when no operator matches; `EmptyOperatorName`
    /// when the new name is blank; `DuplicateOperator` when the new name
    /// belongs to a different operator.
    pub fn update(
        &mut self,
        name: &str,
        new_name: &str,
        new_total: Money,
    ) -> Result<&Operator, BillingError> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(BillingError::EmptyOperatorName);
        }
        let position = self
            .position_of(name)
            .ok_or_else(|| BillingError::OperatorNotFound(name.trim().to_string()))?;
        let taken = self
            .position_of(new_name)
            .is_some_and(|other| other != position);
        if taken {
            return Err(BillingError::DuplicateOperator(new_name.to_string()));
        }
        let operator = &mut self.operators[position];
        operator.name = new_name.to_string();
        operator.total_collected = new_total;
        Ok(&self.operators[position])
    }

    /// Removes and returns the operator with the given name
    ///
    /// # Errors
    ///
    /// `OperatorNotFound` when no operator matches; the directory is
    /// unchanged. Removal has no effect on any customer.
    pub fn remove_by_name(&mut self, name: &str) -> Result<Operator, BillingError> {
        let position = self
            .position_of(name)
            .ok_or_else(|| BillingError::OperatorNotFound(name.trim().to_string()))?;
        Ok(self.operators.remove(position))
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.operators
            .iter()
            .position(|o| o.name.eq_ignore_ascii_case(name.trim()))
    }
}
