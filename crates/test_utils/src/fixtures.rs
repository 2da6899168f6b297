//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities across the billing system.
//! Fixtures are consistent and predictable so assertions can use literal
//! expected values.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use core_kernel::{Money, NationalId, PhoneNumber};
use domain_billing::Operator;
use domain_customer::{CustomerAccount, CustomerIdentity};
use once_cell::sync::Lazy;

/// Fixture for identity test data
pub struct IdentityFixtures;

impl IdentityFixtures {
    /// A valid national ID ending in 4567
    pub fn national_id() -> NationalId {
        NationalId::new("29805241234567").unwrap()
    }

    /// A valid 11-digit phone number with a leading zero
    pub fn phone_number() -> PhoneNumber {
        PhoneNumber::new("01012345678").unwrap()
    }

    /// A complete Cairo-based identity
    pub fn cairo_identity() -> CustomerIdentity {
        CustomerIdentity {
            name: "Amina Farouk".to_string(),
            national_id: Self::national_id(),
            address: "12 Nile St, Zamalek".to_string(),
            email: "amina@example.com".to_string(),
            region: "Cairo".to_string(),
            phone_number: Self::phone_number(),
        }
    }
}

/// Fixture for account test data
pub struct AccountFixtures;

impl AccountFixtures {
    /// A freshly registered Cairo account (all billing state zeroed)
    pub fn fresh() -> CustomerAccount {
        CustomerAccount::open(IdentityFixtures::cairo_identity())
    }

    /// An account mid-cycle: readings 100/150, 100 EGP due, one unpaid month
    pub fn billed() -> CustomerAccount {
        let mut account = Self::fresh();
        account.last_reading = 100;
        account.current_reading = 150;
        account.balance_due = Money::from_whole(100);
        account.unpaid_months = 1;
        account
    }
}

/// Fixture for operator test data
pub struct OperatorFixtures;

impl OperatorFixtures {
    /// An operator with nothing collected yet
    pub fn fresh() -> Operator {
        Operator::new("Hassan").unwrap()
    }

    /// An operator with 300 EGP already collected
    pub fn seasoned() -> Operator {
        Operator::from_parts("Mona", Money::from_whole(300))
    }
}

static FIXTURE_DIR: Lazy<PathBuf> = Lazy::new(|| {
    let dir = std::env::temp_dir().join(format!("ebill-fixtures-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create fixture dir");
    dir
});

static PATH_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Fixture for store file paths
pub struct StoreFixtures;

impl StoreFixtures {
    /// A unique, writable path under the per-process fixture directory
    ///
    /// The file does not exist until a test writes it.
    pub fn unique_path(stem: &str) -> PathBuf {
        let n = PATH_COUNTER.fetch_add(1, Ordering::SeqCst);
        FIXTURE_DIR.join(format!("{}-{}.txt", stem, n))
    }
}
