//! Delete command - remove one row and write the result.

use std::path::Path;

use colored::Colorize;

use super::{CommandResult, load_book, resolve_config, save_book};
use crate::cli::Cli;

pub fn run(file: &Path, row: usize, cli: &Cli) -> CommandResult {
    if row == 0 {
        return Err("Rows are numbered from 1".into());
    }

    let config = resolve_config(cli)?;
    let mut book = load_book(file, &config, cli.verbose)?;

    let removed = book.delete(row - 1)?;

    println!("{} row {}", "Deleted".red().bold(), row);
    for (field, value) in removed.iter().filter(|(_, v)| !v.is_empty()) {
        println!("  {:<20} {}", field, value.dimmed());
    }

    save_book(&book, &config)?;
    Ok(())
}
