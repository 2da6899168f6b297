//! End-to-end tests for the application context
//!
//! These exercise the full loop the presentation layer drives: mutate
//! through the context, then prove the change reached disk by reloading a
//! second context over the same files.

use core_kernel::Money;
use domain_customer::{ComplaintOutcome, CustomerError, CustomerUpdate};
use interface_app::{AppConfig, AppContext, AppError};
use test_utils::{ApplicationBuilder, StoreFixtures};

fn test_config() -> AppConfig {
    AppConfig {
        customers_path: StoreFixtures::unique_path("ctx-customers")
            .to_string_lossy()
            .into_owned(),
        operators_path: StoreFixtures::unique_path("ctx-operators")
            .to_string_lossy()
            .into_owned(),
        admin_name: "admin".to_string(),
        log_level: "warn".to_string(),
    }
}

fn loaded_context() -> AppContext {
    AppContext::load(test_config()).unwrap()
}

#[test]
fn test_load_with_missing_files_starts_empty() {
    let context = loaded_context();
    assert!(context.customers.is_empty());
    assert!(context.operators.is_empty());
}

#[test]
fn test_full_cycle_register_read_bill_collect_and_reload() {
    let mut context = loaded_context();
    let config = context.config().clone();

    // Register a customer through a pending application
    let id = context.submit_application(ApplicationBuilder::new().build());
    let outcome = context.register(id).unwrap();
    assert!(outcome.is_persisted());
    let meter = outcome.value;
    assert_eq!(meter.as_str(), "MTR-9876");

    // Field operator joins
    context.add_operator("Hassan").unwrap();

    // Reading, tariff, operator-mediated collection
    context.submit_reading(meter.as_str(), 150).unwrap();
    let billed = context
        .apply_tariff(meter.as_str(), Money::from_whole(2))
        .unwrap();
    assert_eq!(billed.value.balance_due, Money::from_whole(300));

    let collected = context
        .collect_payment("hassan", meter.as_str(), Money::from_whole(300))
        .unwrap();
    assert_eq!(collected.value.operator_total, Money::from_whole(300));

    // A second context over the same files sees the persisted state
    let reloaded = AppContext::load(config).unwrap();
    let account = reloaded.find_customer("MTR-9876").unwrap();
    assert_eq!(account.current_reading, 150);
    assert!(account.balance_due.is_zero());
    assert_eq!(account.unpaid_months, 0);
    assert_eq!(
        reloaded.collections_report().total_collected,
        Money::from_whole(300)
    );
}

#[test]
fn test_register_consumes_the_draft() {
    let mut context = loaded_context();
    let id = context.submit_application(ApplicationBuilder::new().build());
    assert_eq!(context.pending_applications().len(), 1);

    context.register(id).unwrap();
    assert!(context.pending_applications().is_empty());

    // Same draft id again: the one-shot guard trips
    let err = context.register(id).unwrap_err();
    assert!(matches!(
        err,
        AppError::Customer(CustomerError::AlreadyRegistered(_))
    ));
    assert_eq!(context.customers.len(), 1);
}

#[test]
fn test_rejected_draft_is_also_consumed() {
    let mut context = loaded_context();
    let id = context.submit_application(
        ApplicationBuilder::new().with_email("not-an-email").build(),
    );

    let err = context.register(id).unwrap_err();
    assert!(matches!(
        err,
        AppError::Customer(CustomerError::Validation { .. })
    ));
    // The draft is gone; the applicant resubmits a fresh form
    assert!(context.pending_applications().is_empty());
}

#[test]
fn test_complaint_via_context_persists() {
    let mut context = loaded_context();
    let config = context.config().clone();
    let id = context.submit_application(ApplicationBuilder::new().build());
    let meter = context.register(id).unwrap().value;

    let first = context.register_complaint(meter.as_str()).unwrap();
    assert_eq!(first.value, ComplaintOutcome::Registered);
    let second = context.register_complaint(meter.as_str()).unwrap();
    assert_eq!(second.value, ComplaintOutcome::AlreadyRegistered);

    let reloaded = AppContext::load(config).unwrap();
    assert!(reloaded.find_customer(meter.as_str()).unwrap().has_complaint);
}

#[test]
fn test_cancellation_requires_an_operator() {
    let mut context = loaded_context();
    let id = context.submit_application(ApplicationBuilder::new().build());
    let meter = context.register(id).unwrap().value;

    let err = context
        .cancel_subscription("Nobody", meter.as_str())
        .unwrap_err();
    assert!(matches!(err, AppError::Billing(_)));

    context.add_operator("Hassan").unwrap();
    let notice = context
        .cancel_subscription("Hassan", meter.as_str())
        .unwrap();
    assert_eq!(notice.value.meter_code, meter);
    assert!(context.find_customer(meter.as_str()).unwrap().is_cancelled);
}

#[test]
fn test_update_and_delete_customer_persist() {
    let mut context = loaded_context();
    let config = context.config().clone();
    let id = context.submit_application(ApplicationBuilder::new().build());
    let meter = context.register(id).unwrap().value;

    context
        .update_customer(
            meter.as_str(),
            CustomerUpdate {
                name: "Omar Renamed".to_string(),
                address: "9 New St".to_string(),
                email: "omar.renamed@example.com".to_string(),
                region: "Aswan".to_string(),
                phone_number: "01234567890".to_string(),
            },
        )
        .unwrap();

    let reloaded = AppContext::load(config.clone()).unwrap();
    assert_eq!(
        reloaded.find_customer(meter.as_str()).unwrap().identity.name,
        "Omar Renamed"
    );

    let removed = context.delete_customer(meter.as_str()).unwrap();
    assert_eq!(removed.value.identity.name, "Omar Renamed");

    let reloaded = AppContext::load(config).unwrap();
    assert!(reloaded.customers.is_empty());
}

#[test]
fn test_operator_rename_changes_lookup_key_on_disk() {
    let mut context = loaded_context();
    let config = context.config().clone();
    context.add_operator("Hassan").unwrap();
    context
        .update_operator("hassan", "Mona", Money::from_whole(50))
        .unwrap();

    let reloaded = AppContext::load(config).unwrap();
    assert!(reloaded.operators.find_by_name("Hassan").is_none());
    assert_eq!(
        reloaded.operators.find_by_name("Mona").unwrap().total_collected,
        Money::from_whole(50)
    );
}

#[test]
fn test_save_failure_is_reported_not_rolled_back() {
    // Point the customer file at a directory so every save fails
    let dir = StoreFixtures::unique_path("ctx-as-dir");
    std::fs::create_dir_all(&dir).unwrap();
    let config = AppConfig {
        customers_path: dir.to_string_lossy().into_owned(),
        operators_path: StoreFixtures::unique_path("ctx-operators")
            .to_string_lossy()
            .into_owned(),
        admin_name: "admin".to_string(),
        log_level: "error".to_string(),
    };

    let mut context = AppContext::new(
        config,
        domain_customer::CustomerDirectory::new(),
        domain_billing::OperatorDirectory::new(),
    );
    let id = context.submit_application(ApplicationBuilder::new().build());
    let outcome = context.register(id).unwrap();

    // The registration succeeded in memory; only the save failed
    assert!(!outcome.is_persisted());
    assert!(outcome.save_failure.is_some());
    assert!(context.find_customer("MTR-9876").is_some());
}

#[test]
fn test_find_administrator_is_case_insensitive() {
    let context = loaded_context();
    assert!(context.find_administrator("ADMIN").is_some());
    assert!(context.find_administrator("nobody").is_none());
}

#[test]
fn test_reports_are_read_only_pass_throughs() {
    let mut context = loaded_context();
    let id = context.submit_application(ApplicationBuilder::new().with_region("Giza").build());
    context.register(id).unwrap();

    assert_eq!(context.bills_by_region("giza").bills.len(), 1);
    assert!(context.bills_by_region("Cairo").is_empty());
    assert_eq!(context.consumption_statistics("Giza").customer_count, 1);
    assert!(context.collections_report().total_collected.is_zero());
}
