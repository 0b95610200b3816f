//! Duplicate phone-number detection.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RolodexError};
use crate::normalize::normalize_as;
use crate::schema::{FieldRole, Record, Schema};

use super::report::{DEFAULT_REPORT_LIMIT, format_report};

/// Two (row, field) positions holding the same phone number.
///
/// Rows are 0-based. `first_*` is always the earliest sighting of `number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateEntry {
    pub number: String,
    pub first_row: usize,
    pub first_field: String,
    pub duplicate_row: usize,
    pub duplicate_field: String,
}

impl fmt::Display for DuplicateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: row {} ({}) and row {} ({})",
            self.number,
            self.first_row + 1,
            self.first_field,
            self.duplicate_row + 1,
            self.duplicate_field
        )
    }
}

/// Comparison key for a phone value.
///
/// Values that pass the numbering plan compare in canonical form, so a loaded
/// `0412 345 678` matches an appended `+61412345678`. Anything else compares
/// trimmed. Blank values have no key.
fn number_key(field: &str, value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(normalize_as(FieldRole::Phone, field, trimmed).unwrap_or_else(|_| trimmed.to_string()))
}

/// Find repeated phone numbers across records.
///
/// Records are scanned in order and fields in record order. Each repeat is
/// paired with the first sighting, so three occurrences give two entries.
pub fn find_duplicates<'a, I>(schema: &Schema, records: I) -> Vec<DuplicateEntry>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut seen: HashMap<String, (usize, &'a str)> = HashMap::new();
    let mut duplicates = Vec::new();

    for (row, record) in records.into_iter().enumerate() {
        for (field, value) in record {
            if !schema.is_phone(field) {
                continue;
            }
            let Some(number) = number_key(field, value) else {
                continue;
            };

            match seen.get(&number) {
                Some(&(first_row, first_field)) => duplicates.push(DuplicateEntry {
                    number,
                    first_row,
                    first_field: first_field.to_string(),
                    duplicate_row: row,
                    duplicate_field: field.clone(),
                }),
                None => {
                    seen.insert(number, (row, field.as_str()));
                }
            }
        }
    }

    duplicates
}

/// Sorted, de-duplicated row indexes involved in any entry.
pub fn duplicate_rows(entries: &[DuplicateEntry]) -> BTreeSet<usize> {
    entries
        .iter()
        .flat_map(|e| [e.first_row, e.duplicate_row])
        .collect()
}

/// Fail with the formatted report if any number repeats.
pub fn assert_unique<'a, I>(schema: &Schema, records: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Record>,
{
    let duplicates = find_duplicates(schema, records);
    if duplicates.is_empty() {
        return Ok(());
    }
    Err(RolodexError::DuplicateNumber(format_report(
        &duplicates,
        DEFAULT_REPORT_LIMIT,
    )))
}

/// Fail if two phone fields of one record hold the same number.
pub fn check_record(schema: &Schema, record: &Record) -> Result<()> {
    match find_duplicates(schema, std::iter::once(record)).into_iter().next() {
        None => Ok(()),
        Some(entry) => Err(RolodexError::DuplicateInRecord {
            number: entry.number,
            first_field: entry.first_field,
            second_field: entry.duplicate_field,
        }),
    }
}
