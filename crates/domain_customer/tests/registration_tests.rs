//! Tests for the registration workflow

use domain_customer::{register, CustomerApplication, CustomerDirectory, CustomerError};
use proptest::prelude::*;

fn application(national_id: &str) -> CustomerApplication {
    CustomerApplication::new(
        "Amina Farouk",
        national_id,
        "12 Nile St",
        "amina@example.com",
        "Cairo",
        "01012345678",
        "/contracts/amina.pdf",
    )
}

#[test]
fn test_registration_derives_meter_code() {
    let mut directory = CustomerDirectory::new();
    let account = register(application("29805241234567"), &mut directory).unwrap();
    assert_eq!(account.meter_code.as_str(), "MTR-4567");
    assert_eq!(account.identity.name, "Amina Farouk");
    assert_eq!(directory.len(), 1);
}

#[test]
fn test_registration_starts_with_zeroed_billing_state() {
    let mut directory = CustomerDirectory::new();
    let account = register(application("29805241234567"), &mut directory).unwrap();
    assert_eq!(account.current_reading, 0);
    assert_eq!(account.last_reading, 0);
    assert!(account.balance_due.is_zero());
    assert_eq!(account.unpaid_months, 0);
    assert!(!account.has_complaint);
    assert!(!account.is_cancelled);
}

#[test]
fn test_duplicate_national_id_rejected() {
    let mut directory = CustomerDirectory::new();
    register(application("29805241234567"), &mut directory).unwrap();

    let mut second = application("29805241234567");
    second.name = "Someone Else".to_string();
    let err = register(second, &mut directory).unwrap_err();
    assert!(matches!(err, CustomerError::Duplicate(_)));
    assert_eq!(directory.len(), 1);
}

#[test]
fn test_shared_last_four_digits_collide_on_meter_code() {
    let mut directory = CustomerDirectory::new();
    register(application("11111111119999"), &mut directory).unwrap();

    let err = register(application("22222222229999"), &mut directory).unwrap_err();
    assert!(matches!(err, CustomerError::Duplicate(_)));
    assert!(err.to_string().contains("MTR-9999"));
    assert_eq!(directory.len(), 1);
}

#[test]
fn test_invalid_national_id_names_the_field() {
    let mut directory = CustomerDirectory::new();
    let err = register(application("not-digits"), &mut directory).unwrap_err();
    assert!(matches!(
        err,
        CustomerError::Validation {
            field: "national_id",
            ..
        }
    ));
    assert!(directory.is_empty());
}

#[test]
fn test_invalid_phone_names_the_field() {
    let mut directory = CustomerDirectory::new();
    let mut app = application("29805241234567");
    app.phone_number = "123".to_string();
    let err = register(app, &mut directory).unwrap_err();
    assert!(matches!(
        err,
        CustomerError::Validation {
            field: "phone_number",
            ..
        }
    ));
}

#[test]
fn test_invalid_email_names_the_field() {
    let mut directory = CustomerDirectory::new();
    let mut app = application("29805241234567");
    app.email = "nope".to_string();
    let err = register(app, &mut directory).unwrap_err();
    assert!(matches!(
        err,
        CustomerError::Validation { field: "email", .. }
    ));
}

#[test]
fn test_failed_registration_leaves_directory_untouched() {
    let mut directory = CustomerDirectory::new();
    register(application("29805241234567"), &mut directory).unwrap();

    let mut bad = application("30101011409876");
    bad.name = String::new();
    assert!(register(bad, &mut directory).is_err());
    assert_eq!(directory.len(), 1);
}

proptest! {
    #[test]
    fn prop_fresh_registration_meter_is_prefix_plus_last_four(digits in "[0-9]{14}") {
        let mut directory = CustomerDirectory::new();
        let account = register(application(&digits), &mut directory).unwrap();
        prop_assert_eq!(
            account.meter_code.as_str(),
            format!("MTR-{}", &digits[10..])
        );
    }
}
