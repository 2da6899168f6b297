//! Tests for customer directory maintenance

use core_kernel::{NationalId, PhoneNumber};
use domain_customer::{
    CustomerAccount, CustomerDirectory, CustomerError, CustomerIdentity, CustomerUpdate,
};

fn account(name: &str, national_id: &str, region: &str) -> CustomerAccount {
    CustomerAccount::open(CustomerIdentity {
        name: name.to_string(),
        national_id: NationalId::new(national_id).unwrap(),
        address: "1 Corniche Rd".to_string(),
        email: "someone@example.com".to_string(),
        region: region.to_string(),
        phone_number: PhoneNumber::new("01012345678").unwrap(),
    })
}

fn update() -> CustomerUpdate {
    CustomerUpdate {
        name: "Renamed Customer".to_string(),
        address: "9 New St".to_string(),
        email: "renamed@example.com".to_string(),
        region: "Giza".to_string(),
        phone_number: "01198765432".to_string(),
    }
}

#[test]
fn test_add_preserves_insertion_order() {
    let mut directory = CustomerDirectory::new();
    directory.add(account("First", "11111111110001", "Cairo")).unwrap();
    directory.add(account("Second", "22222222220002", "Giza")).unwrap();
    directory.add(account("Third", "33333333330003", "Luxor")).unwrap();

    let names: Vec<_> = directory.iter().map(|a| a.identity.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[test]
fn test_add_rejects_empty_name() {
    let mut directory = CustomerDirectory::new();
    let err = directory
        .add(account("   ", "11111111110001", "Cairo"))
        .unwrap_err();
    assert!(matches!(err, CustomerError::Validation { field: "name", .. }));
}

#[test]
fn test_find_by_meter_is_case_insensitive() {
    let mut directory = CustomerDirectory::new();
    directory.add(account("Amina", "29805241234567", "Cairo")).unwrap();

    assert!(directory.find_by_meter("mtr-4567").is_some());
    assert!(directory.find_by_meter("MTR-4567").is_some());
    assert!(directory.find_by_meter("MTR-0000").is_none());
}

#[test]
fn test_find_by_name_is_case_insensitive() {
    let mut directory = CustomerDirectory::new();
    directory.add(account("Amina Farouk", "29805241234567", "Cairo")).unwrap();

    assert!(directory.find_by_name("amina farouk").is_some());
    assert!(directory.find_by_name("  AMINA FAROUK ").is_some());
    assert!(directory.find_by_name("Nobody").is_none());
}

#[test]
fn test_update_overwrites_mutable_fields_only() {
    let mut directory = CustomerDirectory::new();
    directory.add(account("Amina", "29805241234567", "Cairo")).unwrap();

    let updated = directory.update("MTR-4567", update()).unwrap();
    assert_eq!(updated.identity.name, "Renamed Customer");
    assert_eq!(updated.identity.region, "Giza");
    assert_eq!(updated.identity.phone_number.as_str(), "01198765432");
    // Identity keys are untouched
    assert_eq!(updated.identity.national_id.as_str(), "29805241234567");
    assert_eq!(updated.meter_code.as_str(), "MTR-4567");
}

#[test]
fn test_update_missing_meter_is_not_found() {
    let mut directory = CustomerDirectory::new();
    let err = directory.update("MTR-0000", update()).unwrap_err();
    assert!(matches!(err, CustomerError::NotFound(_)));
}

#[test]
fn test_update_rejects_bad_phone() {
    let mut directory = CustomerDirectory::new();
    directory.add(account("Amina", "29805241234567", "Cairo")).unwrap();

    let mut bad = update();
    bad.phone_number = "123".to_string();
    let err = directory.update("MTR-4567", bad).unwrap_err();
    assert!(matches!(
        err,
        CustomerError::Validation {
            field: "phone_number",
            ..
        }
    ));
}

#[test]
fn test_remove_returns_the_account() {
    let mut directory = CustomerDirectory::new();
    directory.add(account("Amina", "29805241234567", "Cairo")).unwrap();

    let removed = directory.remove_by_meter("mtr-4567").unwrap();
    assert_eq!(removed.identity.name, "Amina");
    assert!(directory.is_empty());
}

#[test]
fn test_remove_missing_meter_leaves_size_unchanged() {
    let mut directory = CustomerDirectory::new();
    directory.add(account("Amina", "29805241234567", "Cairo")).unwrap();

    let err = directory.remove_by_meter("MTR-0000").unwrap_err();
    assert!(matches!(err, CustomerError::NotFound(_)));
    assert_eq!(directory.len(), 1);
}

#[test]
fn test_account_serde_roundtrip() {
    let original = account("Amina", "29805241234567", "Cairo");
    let json = serde_json::to_string(&original).unwrap();
    let back: CustomerAccount = serde_json::from_str(&json).unwrap();
    assert_eq!(original, back);
}

#[test]
fn test_no_cascading_effects_on_remove() {
    let mut directory = CustomerDirectory::new();
    directory.add(account("A", "11111111110001", "Cairo")).unwrap();
    directory.add(account("B", "22222222220002", "Cairo")).unwrap();

    directory.remove_by_meter("MTR-0001").unwrap();
    assert_eq!(directory.len(), 1);
    assert!(directory.find_by_meter("MTR-0002").is_some());
}
