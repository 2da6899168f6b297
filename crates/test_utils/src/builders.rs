//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use core_kernel::{MeterCode, Money, NationalId, PhoneNumber};
use domain_customer::{CustomerAccount, CustomerApplication, CustomerIdentity};

/// Builder for customer accounts
///
/// Defaults to a fresh Cairo account; billing state is set explicitly.
/// Construction goes through `from_stored`, so builders can produce
/// legacy-shaped data that registration-time validation would reject.
pub struct CustomerAccountBuilder {
    name: String,
    national_id: String,
    address: String,
    email: String,
    region: String,
    phone_number: String,
    current_reading: u32,
    last_reading: u32,
    balance_due: Money,
    unpaid_months: u32,
    has_complaint: bool,
    is_cancelled: bool,
}

impl Default for CustomerAccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerAccountBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            name: "Amina Farouk".to_string(),
            national_id: "29805241234567".to_string(),
            address: "12 Nile St, Zamalek".to_string(),
            email: "amina@example.com".to_string(),
            region: "Cairo".to_string(),
            phone_number: "01012345678".to_string(),
            current_reading: 0,
            last_reading: 0,
            balance_due: Money::zero(),
            unpaid_months: 0,
            has_complaint: false,
            is_cancelled: false,
        }
    }

    /// Sets the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the national ID (and thereby the derived meter code)
    pub fn with_national_id(mut self, national_id: impl Into<String>) -> Self {
        self.national_id = national_id.into();
        self
    }

    /// Sets the region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Sets last and current readings
    pub fn with_readings(mut self, last: u32, current: u32) -> Self {
        self.last_reading = last;
        self.current_reading = current;
        self
    }

    /// Sets the balance due in whole pounds
    pub fn with_balance(mut self, pounds: i64) -> Self {
        self.balance_due = Money::from_whole(pounds);
        self
    }

    /// Sets the unpaid-month counter
    pub fn with_unpaid_months(mut self, months: u32) -> Self {
        self.unpaid_months = months;
        self
    }

    /// Marks the account cancelled
    pub fn cancelled(mut self) -> Self {
        self.is_cancelled = true;
        self
    }

    /// Marks a complaint on file
    pub fn with_complaint(mut self) -> Self {
        self.has_complaint = true;
        self
    }

    /// Builds the account
    pub fn build(self) -> CustomerAccount {
        let national_id = NationalId::from_stored(self.national_id);
        let meter_code = MeterCode::derive(&national_id);
        CustomerAccount::from_parts(
            CustomerIdentity {
                name: self.name,
                national_id,
                address: self.address,
                email: self.email,
                region: self.region,
                phone_number: PhoneNumber::from_stored(self.phone_number),
            },
            meter_code,
            self.current_reading,
            self.last_reading,
            self.balance_due,
            self.unpaid_months,
            self.has_complaint,
            self.is_cancelled,
        )
    }
}

/// Builder for registration applications
pub struct ApplicationBuilder {
    name: String,
    national_id: String,
    address: String,
    email: String,
    region: String,
    phone_number: String,
    contract_reference: String,
}

impl Default for ApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationBuilder {
    /// Creates a builder with valid default fields
    pub fn new() -> Self {
        Self {
            name: "Omar Said".to_string(),
            national_id: "30101011409876".to_string(),
            address: "3 Canal St".to_string(),
            email: "omar@example.com".to_string(),
            region: "Giza".to_string(),
            phone_number: "01198765432".to_string(),
            contract_reference: "/contracts/omar.pdf".to_string(),
        }
    }

    /// Sets the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the claimed national ID
    pub fn with_national_id(mut self, national_id: impl Into<String>) -> Self {
        self.national_id = national_id.into();
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Sets the claimed phone number
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    /// Builds the application
    pub fn build(self) -> CustomerApplication {
        CustomerApplication::new(
            self.name,
            self.national_id,
            self.address,
            self.email,
            self.region,
            self.phone_number,
            self.contract_reference,
        )
    }
}
