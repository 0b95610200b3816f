//! Duplicate phone-number detection and reporting.
//!
//! Detection returns structured [`DuplicateEntry`] values; formatting is a
//! separate pure step. Duplicates are reported, never removed.

mod detector;
mod report;

pub use detector::{DuplicateEntry, assert_unique, check_record, duplicate_rows, find_duplicates};
pub use report::{DEFAULT_REPORT_LIMIT, format_report};
