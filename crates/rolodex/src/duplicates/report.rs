//! Human-readable duplicate report.

use super::detector::DuplicateEntry;

/// Entries shown before the report is truncated.
pub const DEFAULT_REPORT_LIMIT: usize = 10;

/// Render at most `limit` entries, one per line, with 1-based rows.
///
/// Takes entries already found by [`find_duplicates`](super::find_duplicates)
/// so detection and formatting stay separate. To report straight from
/// records, use `AddressBook::duplicate_report` or run detection first.
///
/// Returns an empty string when there are no entries.
pub fn format_report(entries: &[DuplicateEntry], limit: usize) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut report = String::from("Duplicate phone numbers detected:");
    for entry in entries.iter().take(limit) {
        report.push('\n');
        report.push_str(&entry.to_string());
    }
    if entries.len() > limit {
        report.push_str(&format!("\n…and {} more.", entries.len() - limit));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(number: &str, first_row: usize, duplicate_row: usize) -> DuplicateEntry {
        DuplicateEntry {
            number: number.to_string(),
            first_row,
            first_field: "Mobile Number".to_string(),
            duplicate_row,
            duplicate_field: "Home Number".to_string(),
        }
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(format_report(&[], 10), "");
    }

    #[test]
    fn test_rows_are_one_based() {
        let report = format_report(&[entry("+61412345678", 0, 4)], 10);
        assert_eq!(
            report,
            "Duplicate phone numbers detected:\n\
             +61412345678: row 1 (Mobile Number) and row 5 (Home Number)"
        );
    }

    #[test]
    fn test_truncation_suffix() {
        let entries: Vec<_> = (1..=5).map(|i| entry("+61131450", 0, i)).collect();
        let report = format_report(&entries, 2);
        assert_eq!(report.lines().count(), 4);
        assert!(report.ends_with("…and 3 more."));
    }

    #[test]
    fn test_no_suffix_at_limit() {
        let entries: Vec<_> = (1..=2).map(|i| entry("+61131450", 0, i)).collect();
        assert!(!format_report(&entries, 2).contains("more"));
    }

    #[test]
    fn test_report_from_records() {
        use crate::duplicates::find_duplicates;
        use crate::schema::{Record, Schema};

        let schema = Schema::new(["First Name", "Mobile Number", "Home Number"]);
        let records: Vec<Record> = [("Ann", "0412345678", ""), ("Bob", "", "+61412345678")]
            .iter()
            .map(|(name, mobile, home)| {
                let mut record = Record::new();
                record.insert("First Name".to_string(), name.to_string());
                record.insert("Mobile Number".to_string(), mobile.to_string());
                record.insert("Home Number".to_string(), home.to_string());
                record
            })
            .collect();

        let report = format_report(&find_duplicates(&schema, &records), DEFAULT_REPORT_LIMIT);
        assert!(report.contains("+61412345678: row 1 (Mobile Number) and row 2 (Home Number)"));
    }
}
