//! Fleet-wide collection totals

use chrono::{DateTime, Utc};
use core_kernel::Money;
use domain_billing::OperatorDirectory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Total collected across every operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionsReport {
    /// Sum of each operator's running total
    pub total_collected: Money,
    /// Number of operators summed
    pub operator_count: usize,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
}

impl CollectionsReport {
    /// Sums collection totals over the operator directory
    pub fn build(directory: &OperatorDirectory) -> Self {
        Self {
            total_collected: directory.iter().map(|o| o.total_collected).sum(),
            operator_count: directory.len(),
            generated_at: Utc::now(),
        }
    }
}

impl fmt::Display for CollectionsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total collected by all {} operators: {}",
            self.operator_count, self.total_collected
        )
    }
}
