//! CLI command implementations.

pub mod append;
pub mod check;
pub mod delete;
pub mod dupes;
pub mod normalize;
pub mod rewrite;

use std::path::{Path, PathBuf};

use colored::Colorize;
use rolodex::{AddressBook, RolodexConfig, Writer};
use tracing::debug;

use crate::cli::Cli;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Build the effective configuration: file first, then command-line overrides.
pub fn resolve_config(cli: &Cli) -> Result<RolodexConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => RolodexConfig::load(path)?,
        None => RolodexConfig::default(),
    };

    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    if !cli.require.is_empty() {
        config.required_headers = cli.require.clone();
    }

    config.validate()?;
    debug!(
        required = ?config.required_headers,
        output_dir = %config.output_dir.display(),
        "resolved configuration"
    );
    Ok(config)
}

/// Load `file` and print a one-line summary.
pub fn load_book(file: &Path, config: &RolodexConfig, verbose: bool) -> Result<AddressBook, Box<dyn std::error::Error>> {
    let book = AddressBook::load(file, config)?;

    println!(
        "{} {} ({} rows, {} columns)",
        "Loaded".cyan().bold(),
        file.display().to_string().white(),
        book.len().to_string().white().bold(),
        book.schema().field_count()
    );

    if verbose {
        if let Some(source) = book.source() {
            println!("  Header line: {}", source.header_line());
            println!("  Hash:        {}", source.hash.dimmed());
        }
    }

    Ok(book)
}

/// Write `book` to the configured output directory and report where.
pub fn save_book(book: &AddressBook, config: &RolodexConfig) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = book.write(&Writer::with_config(config.writer_config()))?;
    println!(
        "{} {}",
        "Saved".green().bold(),
        path.display().to_string().white()
    );
    Ok(path)
}
