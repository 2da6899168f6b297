//! Regional reports over the customer directory
//!
//! All reports are pure reads: they borrow the directory, filter by a
//! case-insensitive region match, and render through `Display`. An empty
//! filtered set renders an explicit "none found" sentinel instead of an
//! empty body, and statistics never divide by a zero count.

use chrono::{DateTime, Utc};
use core_kernel::{MeterCode, Money};
use domain_customer::{CustomerAccount, CustomerDirectory};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One customer's bill line in a regional listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillSummary {
    pub customer_name: String,
    pub meter_code: MeterCode,
    pub balance_due: Money,
}

impl BillSummary {
    /// Summarizes one account for display
    pub fn for_account(account: &CustomerAccount) -> Self {
        Self {
            customer_name: account.identity.name.clone(),
            meter_code: account.meter_code.clone(),
            balance_due: account.balance_due,
        }
    }
}

impl fmt::Display for BillSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bill for {}", self.customer_name)?;
        writeln!(f, "- Meter Code: {}", self.meter_code)?;
        write!(f, "- Balance Due: {}", self.balance_due)
    }
}

/// Listing of every bill in a region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionBillsReport {
    /// The queried region, as given (trimmed)
    pub region: String,
    /// One entry per matching customer, directory order
    pub bills: Vec<BillSummary>,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
}

impl RegionBillsReport {
    /// Builds the listing for a region
    pub fn build(directory: &CustomerDirectory, region: &str) -> Self {
        let bills = directory
            .iter()
            .filter(|a| a.identity.in_region(region))
            .map(BillSummary::for_account)
            .collect();
        Self {
            region: region.trim().to_string(),
            bills,
            generated_at: Utc::now(),
        }
    }

    /// Whether no customer matched the region
    pub fn is_empty(&self) -> bool {
        self.bills.is_empty()
    }
}

impl fmt::Display for RegionBillsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bills in Region: {}", self.region)?;
        if self.bills.is_empty() {
            return write!(f, "No customers found in this region.");
        }
        for bill in &self.bills {
            writeln!(f, "--------------------")?;
            writeln!(f, "{}", bill)?;
        }
        Ok(())
    }
}

/// Consumption statistics for a region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionStatistics {
    /// The queried region, as given (trimmed)
    pub region: String,
    /// Sum of `current - last` over matching customers; signed so corrupt
    /// records are reflected rather than hidden
    pub total_units: i64,
    /// Number of matching customers
    pub customer_count: usize,
    /// When the statistics were produced
    pub generated_at: DateTime<Utc>,
}

impl ConsumptionStatistics {
    /// Computes consumption statistics for a region
    pub fn build(directory: &CustomerDirectory, region: &str) -> Self {
        let matching: Vec<_> = directory
            .iter()
            .filter(|a| a.identity.in_region(region))
            .collect();
        Self {
            region: region.trim().to_string(),
            total_units: matching.iter().map(|a| a.total_usage()).sum(),
            customer_count: matching.len(),
            generated_at: Utc::now(),
        }
    }

    /// Whether no customer matched the region
    pub fn is_empty(&self) -> bool {
        self.customer_count == 0
    }

    /// Mean units per customer; undefined for an empty set
    pub fn mean_units(&self) -> Option<i64> {
        if self.customer_count == 0 {
            None
        } else {
            Some(self.total_units / self.customer_count as i64)
        }
    }
}

impl fmt::Display for ConsumptionStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(
                f,
                "No customers found in region {} for consumption statistics.",
                self.region
            )
        } else {
            write!(
                f,
                "Consumption in {}: {} units for {} customers.",
                self.region, self.total_units, self.customer_count
            )
        }
    }
}
