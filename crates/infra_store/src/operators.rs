//! Operator directory persistence

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use core_kernel::Money;
use domain_billing::{Operator, OperatorDirectory};
use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::record::{BlockReader, RecordBlock, RecordFault};

/// Saves the whole directory, overwriting the file
pub fn save_operators(
    directory: &OperatorDirectory,
    path: impl AsRef<Path>,
) -> Result<(), StoreError> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    for operator in directory.iter() {
        let mut block = RecordBlock::new();
        block.push("Operator Name", &operator.name);
        block.push("Total Collected", operator.total_collected.amount());
        block.write_to(&mut writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Loads the directory; a missing file means "start empty"
pub fn load_operators(path: impl AsRef<Path>) -> Result<OperatorDirectory, StoreError> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(?path, "operator file not found, starting empty");
            return Ok(OperatorDirectory::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut operators = Vec::new();
    for block in BlockReader::new(BufReader::new(file)) {
        let block = block?;
        match parse_operator(&block) {
            Ok(operator) => operators.push(operator),
            Err(fault) => {
                tracing::warn!(
                    name = block.get("Operator Name").unwrap_or("<unknown>"),
                    %fault,
                    "skipping operator record"
                );
            }
        }
    }
    Ok(OperatorDirectory::from_operators(operators))
}

fn parse_operator(block: &RecordBlock) -> Result<Operator, RecordFault> {
    let name = block.require("Operator Name")?;
    let total = block.parse_or_default::<Decimal>("Total Collected")?;
    Ok(Operator::from_parts(name, Money::new(total)))
}
