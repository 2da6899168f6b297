//! Reporting Domain
//!
//! Read-only aggregations over the customer and operator directories:
//! regional bill listings, fleet-wide collection totals, and regional
//! consumption statistics. Reports carry their own `Display` rendering so
//! the presentation layer can show them verbatim; empty filtered sets
//! render a "none found" sentinel rather than an empty body.

pub mod collections;
pub mod region;

pub use collections::CollectionsReport;
pub use region::{BillSummary, ConsumptionStatistics, RegionBillsReport};
