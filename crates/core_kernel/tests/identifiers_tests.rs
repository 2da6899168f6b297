//! Tests for identifier value types

use core_kernel::{ApplicationId, IdentityError, MeterCode, NationalId, PhoneNumber};
use proptest::prelude::*;

#[test]
fn test_national_id_accepts_exactly_fourteen_digits() {
    let nid = NationalId::new("30101011401234").unwrap();
    assert_eq!(nid.as_str(), "30101011401234");
    assert_eq!(nid.last_four(), "1234");
}

#[test]
fn test_national_id_rejects_whitespace_and_signs() {
    assert!(NationalId::new(" 0101011401234").is_err());
    assert!(NationalId::new("+0101011401234").is_err());
    assert!(NationalId::new("").is_err());
}

#[test]
fn test_national_id_error_names_the_value() {
    let err = NationalId::new("abc").unwrap_err();
    assert_eq!(err, IdentityError::InvalidNationalId("abc".to_string()));
    assert!(err.to_string().contains("14 digits"));
}

#[test]
fn test_from_stored_bypasses_validation() {
    // Legacy data may predate the format rules; loading must not reject it
    let nid = NationalId::from_stored("123");
    assert_eq!(nid.as_str(), "123");
    let phone = PhoneNumber::from_stored("0");
    assert_eq!(phone.as_str(), "0");
}

#[test]
fn test_meter_code_parse_normalizes_uppercase() {
    let code = MeterCode::parse("mtr-9912").unwrap();
    assert_eq!(code.as_str(), "MTR-9912");
    assert_eq!(code, MeterCode::parse("MTR-9912").unwrap());
}

#[test]
fn test_meter_code_parse_rejects_blank() {
    assert_eq!(MeterCode::parse("   "), Err(IdentityError::EmptyMeterCode));
}

#[test]
fn test_derived_codes_collide_on_shared_suffix() {
    let a = NationalId::new("11111111115555").unwrap();
    let b = NationalId::new("22222222225555").unwrap();
    assert_eq!(MeterCode::derive(&a), MeterCode::derive(&b));
}

#[test]
fn test_phone_number_display_is_raw_digits() {
    let phone = PhoneNumber::new("01234567890").unwrap();
    assert_eq!(phone.to_string(), "01234567890");
}

#[test]
fn test_application_ids_are_unique() {
    let a = ApplicationId::new();
    let b = ApplicationId::new();
    assert_ne!(a, b);
}

#[test]
fn test_application_id_display_prefix() {
    let id = ApplicationId::new();
    assert!(id.to_string().starts_with("APP-"));
}

proptest! {
    #[test]
    fn prop_meter_code_is_prefix_plus_last_four(digits in "[0-9]{14}") {
        let nid = NationalId::new(digits.clone()).unwrap();
        let code = MeterCode::derive(&nid);
        prop_assert_eq!(code.as_str(), format!("MTR-{}", &digits[10..]));
    }

    #[test]
    fn prop_eleven_digit_phones_always_parse(digits in "[0-9]{11}") {
        prop_assert!(PhoneNumber::new(digits).is_ok());
    }
}
