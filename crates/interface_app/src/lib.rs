//! Application Interface
//!
//! The seam between the presentation layer (forms, dialogs) and the
//! domain. This crate owns the [`AppContext`]: directories loaded once at
//! startup, mutated by domain operations, and persisted back to their
//! flat files after every successful mutation. The presentation layer
//! itself is an external collaborator: it collects field values, calls
//! the context, and displays the returned receipts, reports, and errors.

pub mod config;
pub mod context;
pub mod error;

pub use config::AppConfig;
pub use context::{Administrator, AppContext, AppOutcome};
pub use error::AppError;
