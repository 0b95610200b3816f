//! Append command - add one validated record and write the result.

use std::path::Path;

use colored::Colorize;
use rolodex::Record;

use super::{CommandResult, load_book, resolve_config, save_book};
use crate::cli::Cli;

pub fn run(file: &Path, assignments: &[String], cli: &Cli) -> CommandResult {
    let config = resolve_config(cli)?;
    let mut book = load_book(file, &config, cli.verbose)?;

    let mut raw = Record::new();
    for assignment in assignments {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| format!("Expected FIELD=VALUE, got '{}'", assignment))?;

        let field = book.schema().resolve(name).ok_or_else(|| {
            format!(
                "Unknown field '{}'. Fields: {}",
                name.trim(),
                book.schema().fields().join(", ")
            )
        })?;

        raw.insert(field.to_string(), value.to_string());
    }

    let added = book.append(&raw)?;

    println!("{}", "Appended:".green().bold());
    for (field, value) in added.iter().filter(|(_, v)| !v.is_empty()) {
        println!("  {:<20} {}", field, value.white());
    }

    save_book(&book, &config)?;
    Ok(())
}
