//! Example: Inspect an address-book export.
//!
//! Usage:
//!   cargo run --example inspect -- <file_path>

use std::env;
use std::path::Path;

use rolodex::{AddressBook, FieldRole, RolodexConfig};

fn main() -> rolodex::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example inspect -- <file_path>");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    let config = RolodexConfig::default();
    let book = AddressBook::load(path, &config)?;

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Address book: {}", path.display());
    println!("{}", separator);
    println!();

    if let Some(source) = book.source() {
        println!("## Source Metadata");
        println!("  File: {}", source.file);
        println!("  Preamble lines: {}", source.preamble_lines);
        println!("  Header line: {}", source.header_line());
        println!("  Rows: {}", source.row_count);
        println!("  Columns: {}", source.column_count);
        println!("  Hash: {}", source.hash);
        println!();
    }

    println!("## Fields");
    for field in book.schema().fields() {
        let role = book.schema().role_of(field);
        let marker = if role == FieldRole::Phone { " *" } else { "" };
        println!("  {:<24} {}{}", field, role.label(), marker);
    }
    println!();

    println!("## Duplicates");
    let report = book.duplicate_report(config.report_limit);
    if report.is_empty() {
        println!("  none");
    } else {
        println!("{}", report);
    }

    Ok(())
}
