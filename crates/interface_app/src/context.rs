//! The application context
//!
//! Process state lives in an explicitly constructed context, never in
//! globals: the caller builds it once at startup, passes it to whatever
//! needs it, and every mutating operation persists the affected
//! collection before returning.
//!
//! # Save semantics
//!
//! Persistence is a whole-file overwrite after each successful mutation.
//! A failed save does not roll the in-memory state back; the divergence is
//! carried on the [`AppOutcome`] and logged, so the presentation layer can
//! warn the user instead of silently losing the discrepancy.

use core_kernel::{ApplicationId, MeterCode, Money};
use domain_billing::{
    metering, tariff, BillingError, CancellationNotice, CollectionReceipt, OperatorDirectory,
    ReadingReceipt, TariffOutcome,
};
use domain_customer::{
    registration, ComplaintOutcome, CustomerAccount, CustomerApplication, CustomerDirectory,
    CustomerError, CustomerUpdate,
};
use domain_reporting::{CollectionsReport, ConsumptionStatistics, RegionBillsReport};
use infra_store::{load_customers, load_operators, save_customers, save_operators, StoreError};

use crate::config::AppConfig;
use crate::error::AppError;

/// An administrator identity
///
/// Administrators carry no state of their own; they act on the
/// directories held by the context. Names are configured per deployment
/// and are not persisted alongside customers or operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Administrator {
    pub name: String,
}

/// Result of a mutating operation plus the fate of its save
#[derive(Debug)]
pub struct AppOutcome<T> {
    /// The domain-level result
    pub value: T,
    /// Set when the post-mutation save failed; memory is ahead of disk
    pub save_failure: Option<StoreError>,
}

impl<T> AppOutcome<T> {
    /// Whether the mutation reached disk
    pub fn is_persisted(&self) -> bool {
        self.save_failure.is_none()
    }
}

/// Process-wide application state: directories, drafts, and configuration
#[derive(Debug)]
pub struct AppContext {
    config: AppConfig,
    pub customers: CustomerDirectory,
    pub operators: OperatorDirectory,
    administrators: Vec<Administrator>,
    applications: Vec<CustomerApplication>,
}

impl AppContext {
    /// Builds a context over already-loaded directories
    pub fn new(
        config: AppConfig,
        customers: CustomerDirectory,
        operators: OperatorDirectory,
    ) -> Self {
        let administrators = vec![Administrator {
            name: config.admin_name.clone(),
        }];
        Self {
            config,
            customers,
            operators,
            administrators,
            applications: Vec::new(),
        }
    }

    /// Loads both directories from the configured files
    ///
    /// Missing files start the respective directory empty.
    pub fn load(config: AppConfig) -> Result<Self, AppError> {
        let customers = load_customers(&config.customers_path)?;
        let operators = load_operators(&config.operators_path)?;
        tracing::info!(
            customers = customers.len(),
            operators = operators.len(),
            "directories loaded"
        );
        Ok(Self::new(config, customers, operators))
    }

    /// The active configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Accepts a registration draft from the form layer
    pub fn submit_application(&mut self, application: CustomerApplication) -> ApplicationId {
        let id = application.id;
        self.applications.push(application);
        id
    }

    /// Drafts awaiting registration, in submission order
    pub fn pending_applications(&self) -> &[CustomerApplication] {
        &self.applications
    }

    /// Registers a pending draft, consuming it
    ///
    /// The draft is consumed whether or not registration succeeds; a
    /// rejected applicant resubmits a fresh form. A second call with the
    /// same id therefore fails with `AlreadyRegistered`.
    pub fn register(&mut self, id: ApplicationId) -> Result<AppOutcome<MeterCode>, AppError> {
        let position = self
            .applications
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| CustomerError::already_registered(id))?;
        let application = self.applications.remove(position);
        let meter_code = registration::register(application, &mut self.customers)?
            .meter_code
            .clone();
        Ok(self.customer_outcome(meter_code))
    }

    // ------------------------------------------------------------------
    // Billing
    // ------------------------------------------------------------------

    /// Records a monthly reading for the given meter
    pub fn submit_reading(
        &mut self,
        meter_code: &str,
        reading: u32,
    ) -> Result<AppOutcome<ReadingReceipt>, AppError> {
        let account = Self::customer_mut(&mut self.customers, meter_code)?;
        let receipt = metering::submit_reading(account, reading)?;
        Ok(self.customer_outcome(receipt))
    }

    /// Bills the given meter's consumption at a price per unit
    pub fn apply_tariff(
        &mut self,
        meter_code: &str,
        price_per_unit: Money,
    ) -> Result<AppOutcome<TariffOutcome>, AppError> {
        let account = Self::customer_mut(&mut self.customers, meter_code)?;
        let outcome = tariff::apply_tariff(account, price_per_unit)?;
        Ok(self.customer_outcome(outcome))
    }

    /// Collects an exact payment through an operator
    ///
    /// Persists both directories on success: the customer's cleared
    /// balance and the operator's credited total.
    pub fn collect_payment(
        &mut self,
        operator_name: &str,
        meter_code: &str,
        amount: Money,
    ) -> Result<AppOutcome<CollectionReceipt>, AppError> {
        let operator = self
            .operators
            .find_by_name_mut(operator_name)
            .ok_or_else(|| BillingError::OperatorNotFound(operator_name.trim().to_string()))?;
        let account = Self::customer_mut(&mut self.customers, meter_code)?;
        let receipt = operator.collect_payment(account, amount)?;

        // Both saves are attempted even if the first fails
        let customer_failure = self.save_customers_logged();
        let operator_failure = self.save_operators_logged();
        Ok(AppOutcome {
            value: receipt,
            save_failure: customer_failure.or(operator_failure),
        })
    }

    /// Registers a complaint on the given meter; one-shot
    pub fn register_complaint(
        &mut self,
        meter_code: &str,
    ) -> Result<AppOutcome<ComplaintOutcome>, AppError> {
        let account = Self::customer_mut(&mut self.customers, meter_code)?;
        let outcome = account.register_complaint();
        Ok(self.customer_outcome(outcome))
    }

    /// Stops the given meter and cancels the subscription
    pub fn cancel_subscription(
        &mut self,
        operator_name: &str,
        meter_code: &str,
    ) -> Result<AppOutcome<CancellationNotice>, AppError> {
        let operator = self
            .operators
            .find_by_name(operator_name)
            .ok_or_else(|| BillingError::OperatorNotFound(operator_name.trim().to_string()))?;
        let account = Self::customer_mut(&mut self.customers, meter_code)?;
        let notice = operator.stop_meter(account);
        Ok(self.customer_outcome(notice))
    }

    // ------------------------------------------------------------------
    // Directory maintenance
    // ------------------------------------------------------------------

    /// Overwrites a customer's mutable fields
    pub fn update_customer(
        &mut self,
        meter_code: &str,
        update: CustomerUpdate,
    ) -> Result<AppOutcome<()>, AppError> {
        self.customers.update(meter_code, update)?;
        Ok(self.customer_outcome(()))
    }

    /// Deletes a customer, returning the removed account
    pub fn delete_customer(
        &mut self,
        meter_code: &str,
    ) -> Result<AppOutcome<CustomerAccount>, AppError> {
        let removed = self.customers.remove_by_meter(meter_code)?;
        Ok(self.customer_outcome(removed))
    }

    /// Adds a new operator with a zeroed collection total
    pub fn add_operator(&mut self, name: &str) -> Result<AppOutcome<()>, AppError> {
        let operator = domain_billing::Operator::new(name)?;
        self.operators.add(operator)?;
        Ok(self.operator_outcome(()))
    }

    /// Renames an operator and resets its collection total
    ///
    /// The name is the lookup key; callers must re-resolve after a rename.
    pub fn update_operator(
        &mut self,
        name: &str,
        new_name: &str,
        new_total: Money,
    ) -> Result<AppOutcome<()>, AppError> {
        self.operators.update(name, new_name, new_total)?;
        Ok(self.operator_outcome(()))
    }

    /// Deletes an operator; customers are unaffected
    pub fn delete_operator(&mut self, name: &str) -> Result<AppOutcome<()>, AppError> {
        self.operators.remove_by_name(name)?;
        Ok(self.operator_outcome(()))
    }

    // ------------------------------------------------------------------
    // Lookups and reports (read-only; never save)
    // ------------------------------------------------------------------

    /// Finds a customer by meter code
    pub fn find_customer(&self, meter_code: &str) -> Option<&CustomerAccount> {
        self.customers.find_by_meter(meter_code)
    }

    /// Finds an administrator by name, case-insensitively
    pub fn find_administrator(&self, name: &str) -> Option<&Administrator> {
        self.administrators
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Regional bill listing
    pub fn bills_by_region(&self, region: &str) -> RegionBillsReport {
        RegionBillsReport::build(&self.customers, region)
    }

    /// Regional consumption statistics
    pub fn consumption_statistics(&self, region: &str) -> ConsumptionStatistics {
        ConsumptionStatistics::build(&self.customers, region)
    }

    /// Total collected across all operators
    pub fn collections_report(&self) -> CollectionsReport {
        CollectionsReport::build(&self.operators)
    }

    // ------------------------------------------------------------------
    // Persistence plumbing
    // ------------------------------------------------------------------

    fn customer_mut<'d>(
        customers: &'d mut CustomerDirectory,
        meter_code: &str,
    ) -> Result<&'d mut CustomerAccount, CustomerError> {
        customers
            .find_by_meter_mut(meter_code)
            .ok_or_else(|| CustomerError::meter_not_found(meter_code))
    }

    fn customer_outcome<T>(&self, value: T) -> AppOutcome<T> {
        AppOutcome {
            value,
            save_failure: self.save_customers_logged(),
        }
    }

    fn operator_outcome<T>(&self, value: T) -> AppOutcome<T> {
        AppOutcome {
            value,
            save_failure: self.save_operators_logged(),
        }
    }

    fn save_customers_logged(&self) -> Option<StoreError> {
        match save_customers(&self.customers, &self.config.customers_path) {
            Ok(()) => None,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    path = %self.config.customers_path,
                    "customer save failed; memory and disk have diverged"
                );
                Some(e)
            }
        }
    }

    fn save_operators_logged(&self) -> Option<StoreError> {
        match save_operators(&self.operators, &self.config.operators_path) {
            Ok(()) => None,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    path = %self.config.operators_path,
                    "operator save failed; memory and disk have diverged"
                );
                Some(e)
            }
        }
    }
}
