//! The in-memory address book and its public operations.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::RolodexConfig;
use crate::duplicates::{self, DuplicateEntry};
use crate::error::{Result, RolodexError};
use crate::input::{Loader, SourceMetadata};
use crate::normalize;
use crate::output::Writer;
use crate::schema::{Record, Schema};

/// An ordered set of contact records sharing one schema.
///
/// Loading accepts whatever the file contains, duplicate numbers included,
/// and only reports them. Appending is gated: the new record must normalize
/// cleanly and must not introduce a duplicate number.
#[derive(Debug, Clone)]
pub struct AddressBook {
    schema: Schema,
    records: Vec<Record>,
    source: Option<SourceMetadata>,
}

impl AddressBook {
    /// Create an empty address book with an explicit schema.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            records: Vec::new(),
            source: None,
        }
    }

    /// Create an address book from an existing schema and records.
    pub fn from_parts(schema: Schema, records: Vec<Record>) -> Self {
        Self {
            schema,
            records,
            source: None,
        }
    }

    /// Load an export from disk.
    pub fn load(path: impl AsRef<Path>, config: &RolodexConfig) -> Result<Self> {
        let loaded = Loader::with_config(config.loader_config()).load_file(path)?;

        let book = Self {
            schema: loaded.schema,
            records: loaded.records,
            source: Some(loaded.source),
        };

        let duplicates = book.duplicates();
        if !duplicates.is_empty() {
            warn!(
                count = duplicates.len(),
                rows = book.duplicate_rows().len(),
                "loaded address book contains duplicate phone numbers"
            );
        }

        Ok(book)
    }

    /// The schema shared by every record.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Records in order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Metadata for the file this book was loaded from.
    pub fn source(&self) -> Option<&SourceMetadata> {
        self.source.as_ref()
    }

    /// Get a record by 0-based index.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate and canonicalize a raw record against this book's schema.
    pub fn normalize_record(&self, raw: &Record) -> Result<Record> {
        normalize::normalize_record(&self.schema, raw)
    }

    /// Validate, canonicalize and append one record.
    ///
    /// The book is unchanged on any error. A record whose own phone fields
    /// collide is rejected before the comparison with existing records.
    pub fn append(&mut self, raw: &Record) -> Result<&Record> {
        let cleaned = self.normalize_record(raw)?;

        duplicates::check_record(&self.schema, &cleaned)?;
        duplicates::assert_unique(
            &self.schema,
            self.records.iter().chain(std::iter::once(&cleaned)),
        )?;

        self.records.push(cleaned);
        info!(rows = self.records.len(), "appended record");

        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }

    /// Remove the record at a 0-based index, keeping the order of the rest.
    pub fn delete(&mut self, index: usize) -> Result<Record> {
        if index >= self.records.len() {
            return Err(RolodexError::RowOutOfRange {
                index,
                len: self.records.len(),
            });
        }

        let removed = self.records.remove(index);
        info!(index, rows = self.records.len(), "deleted record");
        Ok(removed)
    }

    /// Duplicate phone numbers currently in the book.
    pub fn duplicates(&self) -> Vec<DuplicateEntry> {
        duplicates::find_duplicates(&self.schema, &self.records)
    }

    /// Human-readable duplicate report, empty when there are none.
    pub fn duplicate_report(&self, limit: usize) -> String {
        duplicates::format_report(&self.duplicates(), limit)
    }

    /// Rows involved in any duplicate.
    pub fn duplicate_rows(&self) -> BTreeSet<usize> {
        duplicates::duplicate_rows(&self.duplicates())
    }

    /// Write the book out. Returns the destination path.
    pub fn write(&self, writer: &Writer) -> Result<PathBuf> {
        let path = writer.write(&self.schema, &self.records)?;
        info!(path = %path.display(), rows = self.records.len(), "saved address book");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn book() -> AddressBook {
        AddressBook::new(Schema::new([
            "First Name",
            "Surname",
            "Mobile Number",
            "Home Number",
        ]))
    }

    #[test]
    fn test_append_normalizes() {
        let mut book = book();
        let added = book
            .append(&raw(&[("First Name", "jane"), ("Mobile Number", "0412 345 678")]))
            .unwrap()
            .clone();

        assert_eq!(added["First Name"], "Jane");
        assert_eq!(added["Mobile Number"], "+61412345678");
        assert_eq!(added["Home Number"], "");
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_append_rejects_invalid_field_without_change() {
        let mut book = book();
        let err = book
            .append(&raw(&[("First Name", "Jane"), ("Mobile Number", "12345")]))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(book.is_empty());
    }

    #[test]
    fn test_append_rejects_duplicate_against_existing() {
        let mut book = book();
        book.append(&raw(&[("First Name", "Jane"), ("Mobile Number", "0412345678")]))
            .unwrap();

        let err = book
            .append(&raw(&[("First Name", "John"), ("Home Number", "+61412345678")]))
            .unwrap_err();
        assert!(matches!(err, RolodexError::DuplicateNumber(_)));
        assert!(err.to_string().contains("row 1 (Mobile Number) and row 2 (Home Number)"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_append_rejects_duplicate_inside_record_first() {
        let mut book = book();
        book.append(&raw(&[("Mobile Number", "0412345678")])).unwrap();

        // Collides internally and with row 1; the internal collision wins.
        let err = book
            .append(&raw(&[
                ("Mobile Number", "0412345678"),
                ("Home Number", "61412345678"),
            ]))
            .unwrap_err();
        assert!(matches!(err, RolodexError::DuplicateInRecord { .. }));
        assert!(err.to_string().contains("Mobile Number and Home Number"));
    }

    #[test]
    fn test_loaded_duplicates_survive_but_block_append() {
        let schema = Schema::new(["First Name", "Mobile Number"]);
        let records = vec![
            raw(&[("First Name", "A"), ("Mobile Number", "+61412345678")]),
            raw(&[("First Name", "B"), ("Mobile Number", "+61412345678")]),
        ];
        let mut book = AddressBook::from_parts(schema, records);
        assert_eq!(book.duplicates().len(), 1);

        let err = book
            .append(&raw(&[("First Name", "C"), ("Mobile Number", "0298765432")]))
            .unwrap_err();
        assert!(matches!(err, RolodexError::DuplicateNumber(_)));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut book = book();
        for name in ["Ann", "Bob", "Cat"] {
            book.append(&raw(&[("First Name", name)])).unwrap();
        }

        let removed = book.delete(1).unwrap();
        assert_eq!(removed["First Name"], "Bob");
        let names: Vec<&str> = book.records().iter().map(|r| r["First Name"].as_str()).collect();
        assert_eq!(names, vec!["Ann", "Cat"]);

        assert!(matches!(
            book.delete(2),
            Err(RolodexError::RowOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_duplicate_report() {
        let mut book = book();
        assert_eq!(book.duplicate_report(10), "");

        book.append(&raw(&[("Mobile Number", "0412345678")])).unwrap();
        book.append(&raw(&[("Home Number", "0298765432")])).unwrap();
        assert!(book.duplicate_rows().is_empty());
    }
}
