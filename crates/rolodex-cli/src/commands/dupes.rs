//! Dupes command - list every duplicate phone number.

use std::path::Path;

use colored::Colorize;
use rolodex::duplicates::duplicate_rows;
use rolodex::{Record, Schema};

use super::{CommandResult, resolve_config};
use crate::cli::Cli;

pub fn run(file: &Path, json_output: bool, cli: &Cli) -> CommandResult {
    let config = resolve_config(cli)?;
    let book = rolodex::AddressBook::load(file, &config)?;
    let entries = book.duplicates();
    let rows = duplicate_rows(&entries);

    if json_output {
        // Rows are 1-based in the output, as a person counts them.
        let duplicates: Vec<_> = entries
            .iter()
            .map(|e| {
                serde_json::json!({
                    "number": e.number,
                    "first_row": e.first_row + 1,
                    "first_field": e.first_field,
                    "duplicate_row": e.duplicate_row + 1,
                    "duplicate_field": e.duplicate_field,
                })
            })
            .collect();
        let status = serde_json::json!({
            "file": file.display().to_string(),
            "row_count": book.len(),
            "duplicates": duplicates,
            "rows": rows.iter().map(|r| r + 1).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", "No duplicate phone numbers.".green());
        return Ok(());
    }

    println!(
        "{} {}",
        "Duplicate phone numbers in".cyan().bold(),
        file.display().to_string().white()
    );
    println!();

    for entry in &entries {
        println!(
            "  {}  row {} ({}) and row {} ({})",
            entry.number.yellow().bold(),
            entry.first_row + 1,
            entry.first_field,
            entry.duplicate_row + 1,
            entry.duplicate_field
        );
    }

    println!();
    println!("{}", "Rows involved:".yellow().bold());
    for row in &rows {
        if let Some(record) = book.get(*row) {
            let label = row_label(book.schema(), record, &config.required_headers);
            println!("  {:>5}  {}", (row + 1).to_string().white(), label);
        }
    }

    Ok(())
}

/// Join the non-blank values of the identifying headers.
fn row_label(schema: &Schema, record: &Record, headers: &[String]) -> String {
    headers
        .iter()
        .filter_map(|h| schema.resolve(h))
        .filter_map(|f| record.get(f))
        .filter(|v| !v.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
}
