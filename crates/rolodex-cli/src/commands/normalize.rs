//! Normalize command - print the canonical form of one value.

use colored::Colorize;
use rolodex::normalize::normalize_with;

use super::{CommandResult, resolve_config};
use crate::cli::Cli;

pub fn run(field: &str, value: &str, cli: &Cli) -> CommandResult {
    let config = resolve_config(cli)?;
    let roles = config.roles();

    let canonical = normalize_with(&roles, field, value)?;

    if cli.verbose {
        println!(
            "{} {} ({})",
            "Rule:".cyan(),
            roles.role_of(field).label(),
            field
        );
    }

    if canonical.is_empty() {
        println!("{}", "(blank)".dimmed());
    } else {
        println!("{}", canonical);
    }

    Ok(())
}
