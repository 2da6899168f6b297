//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants.

use core_kernel::Money;
use proptest::prelude::*;

/// Strategy for valid 14-digit national ID strings
pub fn national_id_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9]{14}").expect("valid regex")
}

/// Strategy for valid 11-digit phone number strings
pub fn phone_number_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9]{11}").expect("valid regex")
}

/// Strategy for positive whole-pound prices
pub fn price_strategy() -> impl Strategy<Value = Money> {
    (1i64..10_000).prop_map(Money::from_whole)
}

/// Strategy for a consistent reading pair (`last <= current`)
pub fn reading_pair_strategy() -> impl Strategy<Value = (u32, u32)> {
    (0u32..100_000).prop_flat_map(|last| (Just(last), last..1_000_000))
}

/// Strategy for a reading strictly above the given current reading
pub fn advancing_reading_strategy(current: u32) -> impl Strategy<Value = u32> {
    (current + 1)..=current.saturating_add(1_000_000)
}
