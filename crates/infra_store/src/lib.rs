//! Infrastructure Store
//!
//! Flat-file persistence for the billing directories. Each collection is
//! one plain-text file of labeled record blocks; every save rewrites the
//! whole file and every load rebuilds the whole collection. The core never
//! calls into this crate; the application context saves after each
//! successful mutating operation.
//!
//! # Tolerance
//!
//! Loading is deliberately forgiving: a missing file is an empty
//! directory, a missing numeric field is zero, and a record that cannot be
//! reconstructed is skipped with a logged diagnostic rather than failing
//! the whole load.

pub mod customers;
pub mod error;
pub mod operators;
pub mod record;

pub use customers::{load_customers, save_customers};
pub use error::StoreError;
pub use operators::{load_operators, save_operators};
pub use record::{BlockReader, RecordBlock, RecordFault, RECORD_SEPARATOR};
