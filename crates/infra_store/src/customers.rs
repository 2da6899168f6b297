//! Customer directory persistence
//!
//! Fields are written in a fixed order; loading tolerates missing numeric
//! fields (zero) and skips whole records that are missing a required field
//! or carry an unparsable number, logging a diagnostic for each skip.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use core_kernel::{MeterCode, Money, NationalId, PhoneNumber};
use domain_customer::{CustomerAccount, CustomerDirectory, CustomerIdentity};
use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::record::{BlockReader, RecordBlock, RecordFault};

/// Saves the whole directory, overwriting the file
pub fn save_customers(
    directory: &CustomerDirectory,
    path: impl AsRef<Path>,
) -> Result<(), StoreError> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    for account in directory.iter() {
        customer_block(account).write_to(&mut writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Loads the directory; a missing file means "start empty"
pub fn load_customers(path: impl AsRef<Path>) -> Result<CustomerDirectory, StoreError> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(?path, "customer file not found, starting empty");
            return Ok(CustomerDirectory::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut accounts = Vec::new();
    for block in BlockReader::new(BufReader::new(file)) {
        let block = block?;
        match parse_customer(&block) {
            Ok(account) => accounts.push(account),
            Err(fault) => {
                tracing::warn!(
                    name = block.get("Name").unwrap_or("<unknown>"),
                    %fault,
                    "skipping customer record"
                );
            }
        }
    }
    Ok(CustomerDirectory::from_accounts(accounts))
}

fn customer_block(account: &CustomerAccount) -> RecordBlock {
    let mut block = RecordBlock::new();
    block.push("Name", &account.identity.name);
    block.push("NID", &account.identity.national_id);
    block.push("Address", &account.identity.address);
    block.push("Email", &account.identity.email);
    block.push("Meter Code", &account.meter_code);
    block.push("Region", &account.identity.region);
    block.push("Phone Number", &account.identity.phone_number);
    block.push("Current Reading", account.current_reading);
    block.push("Last Reading", account.last_reading);
    block.push("Balance Due", account.balance_due.amount());
    block.push("Unpaid Months", account.unpaid_months);
    block.push("Complaint", account.has_complaint);
    block.push("Stop and Cancel", account.is_cancelled);
    block
}

fn parse_customer(block: &RecordBlock) -> Result<CustomerAccount, RecordFault> {
    let name = block.require("Name")?;
    let national_id = block.require("NID")?;
    let address = block.require("Address")?;
    let email = block.require("Email")?;
    let meter_code = block.require("Meter Code")?;
    let region = block.require("Region")?;

    // Stored values predate the current format rules; only reject a phone
    // that is not a number at all, mirroring the historical loader.
    let phone = block.get("Phone Number").unwrap_or("0").trim();
    if phone.parse::<u64>().is_err() {
        return Err(RecordFault::UnparsableField {
            label: "Phone Number",
            value: phone.to_string(),
        });
    }

    let identity = CustomerIdentity {
        name: name.to_string(),
        national_id: NationalId::from_stored(national_id),
        address: address.to_string(),
        email: email.to_string(),
        region: region.to_string(),
        phone_number: PhoneNumber::from_stored(phone),
    };

    Ok(CustomerAccount::from_parts(
        identity,
        MeterCode::from_stored(meter_code),
        block.parse_or_default::<u32>("Current Reading")?,
        block.parse_or_default::<u32>("Last Reading")?,
        Money::new(block.parse_or_default::<Decimal>("Balance Due")?),
        block.parse_or_default::<u32>("Unpaid Months")?,
        block.flag("Complaint"),
        block.flag("Stop and Cancel"),
    ))
}
