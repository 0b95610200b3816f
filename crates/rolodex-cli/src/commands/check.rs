//! Check command - load an export and report duplicates.

use std::path::Path;

use colored::Colorize;

use super::{CommandResult, load_book, resolve_config};
use crate::cli::Cli;

pub fn run(file: &Path, cli: &Cli) -> CommandResult {
    let config = resolve_config(cli)?;
    let book = load_book(file, &config, cli.verbose)?;

    let report = book.duplicate_report(config.report_limit);
    if report.is_empty() {
        println!("{}", "No duplicate phone numbers.".green());
    } else {
        println!();
        println!("{}", report.yellow());
        println!();
        println!(
            "{} rows involved. Run 'rolodex dupes {}' for the full list.",
            book.duplicate_rows().len().to_string().red().bold(),
            file.display()
        );
    }

    Ok(())
}
