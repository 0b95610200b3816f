//! Property-based tests for the normalizer, detector and loader.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p rolodex --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p rolodex --test property_tests
//! ```

use proptest::prelude::*;

use rolodex::duplicates::find_duplicates;
use rolodex::{Loader, Record, Schema, normalize};

// =============================================================================
// Test Strategies
// =============================================================================

/// Numbers in every accepted Australian shape.
fn phone_like() -> impl Strategy<Value = String> {
    prop_oneof![
        "04[0-9]{8}",
        "614[0-9]{8}",
        "\\+614[0-9]{8}",
        "0[2378][0-9]{8}",
        "61[2378][0-9]{8}",
        "13[0-9]{4}",
        "1[38]00[0-9]{6}",
        "0[2378] [0-9]{4} [0-9]{4}",
        "04[0-9]{2} [0-9]{3} [0-9]{3}",
    ]
}

/// Names the name rule accepts.
fn name_like() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,12}([ '\\-][A-Za-z]{1,12}){0,3}"
}

/// Arbitrary printable text, including punctuation and non-ASCII.
fn any_text() -> impl Strategy<Value = String> {
    "\\PC{0,40}"
}

// =============================================================================
// Normalizer Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_phone_canonical_form_is_idempotent(raw in phone_like()) {
        let once = normalize("Mobile Number", &raw).unwrap();
        prop_assert!(once.starts_with("+61"));
        prop_assert!(once[1..].chars().all(|c| c.is_ascii_digit()));
        prop_assert_eq!(normalize("Mobile Number", &once).unwrap(), once);
    }

    #[test]
    fn prop_phone_output_is_empty_or_plus_prefixed(raw in any_text()) {
        if let Ok(value) = normalize("Home Number", &raw) {
            prop_assert!(value.is_empty() || value.starts_with('+'));
        }
    }

    #[test]
    fn prop_name_is_idempotent(raw in name_like()) {
        let once = normalize("Surname", &raw).unwrap();
        prop_assert_eq!(once.to_lowercase(), raw.to_lowercase());
        prop_assert_eq!(normalize("Surname", &once).unwrap(), once);
    }

    #[test]
    fn prop_name_rejects_digits(prefix in name_like(), digit in "[0-9]") {
        let raw = format!("{prefix}{digit}");
        prop_assert!(normalize("First Name", &raw).is_err());
    }

    #[test]
    fn prop_normalizer_never_panics(field in any_text(), raw in any_text()) {
        let _ = normalize(&field, &raw);
    }

    #[test]
    fn prop_unknown_fields_pass_through_trimmed(raw in any_text()) {
        prop_assert_eq!(normalize("Notes", &raw).unwrap(), raw.trim());
    }
}

// =============================================================================
// Detector Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_each_repeat_pairs_with_first(numbers in prop::collection::vec(0u8..4, 0..30)) {
        let schema = Schema::new(["Mobile Number"]);
        let records: Vec<Record> = numbers
            .iter()
            .map(|n| {
                let mut record = Record::new();
                record.insert("Mobile Number".to_string(), format!("+6141234567{n}"));
                record
            })
            .collect();

        let dups = find_duplicates(&schema, &records);

        let distinct = {
            let mut seen = numbers.clone();
            seen.sort_unstable();
            seen.dedup();
            seen.len()
        };
        prop_assert_eq!(dups.len(), numbers.len() - distinct);

        for dup in &dups {
            let first = numbers.iter().position(|n| format!("+6141234567{n}") == dup.number).unwrap();
            prop_assert_eq!(dup.first_row, first);
            prop_assert!(dup.duplicate_row > dup.first_row);
        }
    }
}

// =============================================================================
// Loader Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_preamble_never_changes_records(
        preamble in prop::collection::vec("[a-z ,.#]{0,30}", 0..40),
        rows in prop::collection::vec(("[A-Za-z]{1,10}", "[A-Za-z]{1,10}"), 0..20),
    ) {
        let mut text = String::new();
        for line in &preamble {
            text.push_str(line);
            text.push('\n');
        }
        text.push_str("First Name,Surname\n");
        for (first, last) in &rows {
            text.push_str(&format!("{first},{last}\n"));
        }

        let table = Loader::new().parse_str(&text, "generated.csv").unwrap();
        prop_assert_eq!(table.preamble_lines, preamble.len());
        prop_assert_eq!(table.records.len(), rows.len());
        for (record, (first, last)) in table.records.iter().zip(&rows) {
            prop_assert_eq!(&record["First Name"], first);
            prop_assert_eq!(&record["Surname"], last);
        }
    }

    #[test]
    fn prop_loader_never_panics(text in "\\PC{0,200}") {
        let _ = Loader::new().parse_str(&text, "fuzz.csv");
    }
}
