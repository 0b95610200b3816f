//! Rolodex CLI - address-book loader, normalizer and duplicate checker.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Check { file } => commands::check::run(file, &cli),

        Commands::Dupes { file, json } => commands::dupes::run(file, *json, &cli),

        Commands::Normalize { field, value } => commands::normalize::run(field, value, &cli),

        Commands::Append { file, set } => commands::append::run(file, set, &cli),

        Commands::Delete { file, row } => commands::delete::run(file, *row, &cli),

        Commands::Rewrite { file } => commands::rewrite::run(file, &cli),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the fmt subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "rolodex=debug,rolodex_cli=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
