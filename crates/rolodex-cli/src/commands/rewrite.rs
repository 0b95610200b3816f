//! Rewrite command - load an export and write it back out.

use std::path::Path;

use colored::Colorize;

use super::{CommandResult, load_book, resolve_config, save_book};
use crate::cli::Cli;

pub fn run(file: &Path, cli: &Cli) -> CommandResult {
    let config = resolve_config(cli)?;
    let book = load_book(file, &config, cli.verbose)?;

    if let Some(source) = book.source() {
        if source.preamble_lines > 0 {
            println!(
                "{} {} preamble lines",
                "Dropping".yellow(),
                source.preamble_lines
            );
        }
    }

    save_book(&book, &config)?;
    Ok(())
}
