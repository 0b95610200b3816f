//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rolodex: address-book loader, normalizer and duplicate checker
#[derive(Parser)]
#[command(name = "rolodex")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory output files are written to (overrides the config)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Header the header row must contain; repeat for several (overrides the config)
    #[arg(short, long = "require", global = true, value_name = "HEADER")]
    pub require: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load an export and report row count and duplicate numbers
    Check {
        /// Path to the address-book export (CSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List duplicate phone numbers and the rows involved
    Dupes {
        /// Path to the address-book export (CSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the canonical form of a single value
    Normalize {
        /// Field name deciding the rule (e.g. "Mobile Number")
        #[arg(value_name = "FIELD")]
        field: String,

        /// Raw value to normalize
        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// Append one validated record and write the result
    Append {
        /// Path to the address-book export (CSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Field assignment, e.g. --set "Mobile Number=0412 345 678"
        #[arg(short, long, value_name = "FIELD=VALUE", required = true)]
        set: Vec<String>,
    },

    /// Delete one row and write the result
    Delete {
        /// Path to the address-book export (CSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// 1-based data row to delete
        #[arg(long, value_name = "N")]
        row: usize,
    },

    /// Load an export and write it back out in canonical CSV
    Rewrite {
        /// Path to the address-book export (CSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}
