//! The customer directory
//!
//! An insertion-ordered collection of customer accounts, keyed logically by
//! unique meter code and national ID. Uniqueness is enforced by linear scan
//! on insert; listings preserve insertion order. There is no indexing;
//! directory sizes here never justify one.

use core_kernel::PhoneNumber;
use serde::{Deserialize, Serialize};

use crate::account::CustomerAccount;
use crate::error::CustomerError;
use crate::validation::ApplicationValidator;

/// Mutable fields of a customer record
///
/// Identity keys (national ID, meter code) are never changed by update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: String,
    pub address: String,
    pub email: String,
    pub region: String,
    pub phone_number: String,
}

/// Insertion-ordered collection of active customer accounts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerDirectory {
    accounts: Vec<CustomerAccount>,
}

impl CustomerDirectory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps accounts reconstructed from storage
    pub fn from_accounts(accounts: Vec<CustomerAccount>) -> Self {
        Self { accounts }
    }

    /// Number of accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the directory is empty
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Iterates accounts in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CustomerAccount> {
        self.accounts.iter()
    }

    /// Accounts as a slice, insertion order
    pub fn as_slice(&self) -> &[CustomerAccount] {
        &self.accounts
    }

    /// Adds an account after checking required fields and uniqueness
    ///
    /// # Errors
    ///
    /// `Validation` when the name is empty; `Duplicate` when the national
    /// ID or meter code is already present.
    pub fn add(&mut self, account: CustomerAccount) -> Result<&CustomerAccount, CustomerError> {
        if account.identity.name.trim().is_empty() {
            return Err(CustomerError::validation("name", "name must not be empty"));
        }
        if self
            .find_by_national_id(account.identity.national_id.as_str())
            .is_some()
        {
            return Err(CustomerError::duplicate_national_id(
                &account.identity.national_id,
            ));
        }
        if self.find_by_meter(account.meter_code.as_str()).is_some() {
            return Err(CustomerError::duplicate_meter_code(&account.meter_code));
        }
        self.accounts.push(account);
        let idx = self.accounts.len() - 1;
        Ok(&self.accounts[idx])
    }

    /// Finds an account by meter code, case-insensitively
    pub fn find_by_meter(&self, meter_code: &str) -> Option<&CustomerAccount> {
        self.accounts
            .iter()
            .find(|a| a.meter_code.matches(meter_code))
    }

    /// Mutable lookup by meter code
    pub fn find_by_meter_mut(&mut self, meter_code: &str) -> Option<&mut CustomerAccount> {
        self.accounts
            .iter_mut()
            .find(|a| a.meter_code.matches(meter_code))
    }

    /// Finds an account by national ID
    pub fn find_by_national_id(&self, national_id: &str) -> Option<&CustomerAccount> {
        self.accounts
            .iter()
            .find(|a| a.identity.national_id.as_str() == national_id.trim())
    }

    /// Finds the first account with a matching name, case-insensitively
    pub fn find_by_name(&self, name: &str) -> Option<&CustomerAccount> {
        self.accounts
            .iter()
            .find(|a| a.identity.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Overwrites the mutable fields of the account with the given meter code
    ///
    /// # Errors
    ///
    /// `NotFound` when no account matches; `Validation` when the update
    /// payload fails format checks.
    pub fn update(
        &mut self,
        meter_code: &str,
        update: CustomerUpdate,
    ) -> Result<&CustomerAccount, CustomerError> {
        ApplicationValidator::validate_update(&update).into_result()?;
        // Validated just above
        let phone = PhoneNumber::new(&update.phone_number)
            .map_err(|e| CustomerError::validation("phone_number", e.to_string()))?;
        let account = self
            .find_by_meter_mut(meter_code)
            .ok_or_else(|| CustomerError::meter_not_found(meter_code))?;
        account.identity.name = update.name;
        account.identity.address = update.address;
        account.identity.email = update.email;
        account.identity.region = update.region;
        account.identity.phone_number = phone;
        Ok(account)
    }

    /// Removes and returns the account with the given meter code
    ///
    /// # Errors
    ///
    /// `NotFound` when no account matches; the directory is unchanged.
    pub fn remove_by_meter(&mut self, meter_code: &str) -> Result<CustomerAccount, CustomerError> {
        let position = self
            .accounts
            .iter()
            .position(|a| a.meter_code.matches(meter_code))
            .ok_or_else(|| CustomerError::meter_not_found(meter_code))?;
        Ok(self.accounts.remove(position))
    }
}
