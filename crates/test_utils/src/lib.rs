//! Shared Test Utilities
//!
//! Builders, fixtures, and proptest generators used by the crate test
//! suites. Nothing here ships in a release build; it exists so tests can
//! state only what they are about.

pub mod builders;
pub mod fixtures;
pub mod generators;

pub use builders::{ApplicationBuilder, CustomerAccountBuilder};
pub use fixtures::{AccountFixtures, IdentityFixtures, OperatorFixtures, StoreFixtures};
