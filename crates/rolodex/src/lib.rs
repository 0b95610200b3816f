//! Rolodex: loader, normalizer and duplicate checker for address-book exports.
//!
//! Address-book exports arrive as CSV with an unknown amount of instruction
//! text above the real header row. Rolodex finds the header by content,
//! canonicalizes names, emails and Australian phone numbers, reports phone
//! numbers that appear more than once, and writes the table back out.
//!
//! # Core Principles
//!
//! - **Header by content**: The header row is the first row containing every
//!   required header, wherever it sits in the file
//! - **Canonical values**: Phone numbers are stored in `+61` E.164 form so
//!   they compare exactly
//! - **Report, don't repair**: Duplicate numbers are surfaced with rows and
//!   fields for a person to resolve
//!
//! # Example
//!
//! ```no_run
//! use rolodex::{AddressBook, Record, RolodexConfig, Writer};
//!
//! let config = RolodexConfig::default();
//! let mut book = AddressBook::load("GlobalAddressBook.csv", &config).unwrap();
//! println!("{}", book.duplicate_report(config.report_limit));
//!
//! let mut contact = Record::new();
//! contact.insert("First Name".into(), "jane".into());
//! contact.insert("Mobile Number".into(), "0412 345 678".into());
//! book.append(&contact).unwrap();
//!
//! let saved = book.write(&Writer::with_config(config.writer_config())).unwrap();
//! println!("Saved {}", saved.display());
//! ```

pub mod config;
pub mod duplicates;
pub mod error;
pub mod input;
pub mod normalize;
pub mod output;
pub mod schema;

mod book;

pub use book::AddressBook;
pub use config::RolodexConfig;
pub use duplicates::{DuplicateEntry, find_duplicates, format_report};
pub use error::{ErrorKind, Result, RolodexError};
pub use input::{Loader, LoaderConfig, SourceMetadata, locate_and_parse};
pub use normalize::{normalize, normalize_record};
pub use output::{Writer, WriterConfig};
pub use schema::{FieldRole, Record, RoleTable, Schema};
