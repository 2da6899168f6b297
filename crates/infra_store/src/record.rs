//! Labeled record blocks
//!
//! The persisted format is plain text: one block per entity, one
//! `Label: value` line per field, blocks terminated by a fixed dashed
//! separator line. The format carries no schema version; tolerance rules
//! live in the entity loaders, this module only moves blocks in and out.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

/// Separator line between record blocks (50 dashes)
pub const RECORD_SEPARATOR: &str = "--------------------------------------------------";

/// A defect in a single record block, used for skip diagnostics
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordFault {
    /// A required field was absent
    #[error("missing required field {0:?}")]
    MissingField(&'static str),

    /// A field was present but its value would not parse
    #[error("unparsable value {value:?} for field {label:?}")]
    UnparsableField { label: &'static str, value: String },
}

/// An ordered set of labeled fields forming one record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordBlock {
    fields: Vec<(String, String)>,
}

impl RecordBlock {
    /// Creates an empty block
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the block holds no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Appends a field
    pub fn push(&mut self, label: &str, value: impl fmt::Display) {
        self.fields.push((label.to_string(), value.to_string()));
    }

    /// Returns the first value recorded under a label
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    /// Returns a required string field
    pub fn require(&self, label: &'static str) -> Result<&str, RecordFault> {
        self.get(label).ok_or(RecordFault::MissingField(label))
    }

    /// Parses a numeric field, treating absence as the type's default
    ///
    /// Mirrors the historical loader: a missing count or balance means
    /// zero, while a present-but-garbled value poisons the whole record.
    pub fn parse_or_default<T>(&self, label: &'static str) -> Result<T, RecordFault>
    where
        T: FromStr + Default,
    {
        match self.get(label) {
            None => Ok(T::default()),
            Some(value) => value.trim().parse().map_err(|_| RecordFault::UnparsableField {
                label,
                value: value.to_string(),
            }),
        }
    }

    /// Reads a boolean flag; anything but `true` (any casing) is `false`
    pub fn flag(&self, label: &str) -> bool {
        self.get(label)
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    /// Writes the block's fields followed by the separator line
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for (label, value) in &self.fields {
            writeln!(writer, "{}: {}", label, value)?;
        }
        writeln!(writer, "{}", RECORD_SEPARATOR)
    }
}

/// Iterator over the record blocks of a reader
///
/// Lines that are not `Label: value` pairs are ignored; a trailing block
/// without a final separator is still yielded.
pub struct BlockReader<R: BufRead> {
    lines: io::Lines<R>,
    finished: bool,
}

impl<R: BufRead> BlockReader<R> {
    /// Wraps a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            finished: false,
        }
    }
}

impl<R: BufRead> Iterator for BlockReader<R> {
    type Item = io::Result<RecordBlock>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let mut block = RecordBlock::new();
        loop {
            match self.lines.next() {
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                Some(Ok(line)) => {
                    if line.starts_with(RECORD_SEPARATOR) {
                        if !block.is_empty() {
                            return Some(Ok(block));
                        }
                        // Stray separator; keep scanning
                        continue;
                    }
                    if let Some((label, value)) = line.split_once(": ") {
                        block.push(label.trim(), value.trim());
                    }
                }
                None => {
                    self.finished = true;
                    if block.is_empty() {
                        return None;
                    }
                    return Some(Ok(block));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_block_roundtrip() {
        let mut block = RecordBlock::new();
        block.push("Name", "Amina");
        block.push("Balance Due", 100);

        let mut buffer = Vec::new();
        block.write_to(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("Name: Amina\nBalance Due: 100\n"));
        assert!(text.ends_with(&format!("{}\n", RECORD_SEPARATOR)));

        let mut blocks: Vec<_> = BlockReader::new(Cursor::new(text))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(blocks.len(), 1);
        let parsed = blocks.remove(0);
        assert_eq!(parsed.get("Name"), Some("Amina"));
        assert_eq!(parsed.get("Balance Due"), Some("100"));
    }

    #[test]
    fn test_trailing_block_without_separator_is_yielded() {
        let text = "Operator Name: Hassan\nTotal Collected: 50\n";
        let blocks: Vec<_> = BlockReader::new(Cursor::new(text))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].get("Operator Name"), Some("Hassan"));
    }

    #[test]
    fn test_unlabeled_lines_are_ignored() {
        let text = format!("junk line\nName: Amina\n{}\n", RECORD_SEPARATOR);
        let blocks: Vec<_> = BlockReader::new(Cursor::new(text))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].get("Name"), Some("Amina"));
    }

    #[test]
    fn test_parse_or_default_missing_is_zero() {
        let block = RecordBlock::new();
        assert_eq!(block.parse_or_default::<u32>("Unpaid Months"), Ok(0));
    }

    #[test]
    fn test_parse_or_default_garbage_is_fault() {
        let mut block = RecordBlock::new();
        block.push("Current Reading", "ten");
        assert_eq!(
            block.parse_or_default::<u32>("Current Reading"),
            Err(RecordFault::UnparsableField {
                label: "Current Reading",
                value: "ten".to_string()
            })
        );
    }

    #[test]
    fn test_flag_parsing() {
        let mut block = RecordBlock::new();
        block.push("Complaint", "TRUE");
        block.push("Stop and Cancel", "maybe");
        assert!(block.flag("Complaint"));
        assert!(!block.flag("Stop and Cancel"));
        assert!(!block.flag("Missing"));
    }
}
