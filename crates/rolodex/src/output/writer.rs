//! Timestamped CSV writer.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::error::{Result, RolodexError};
use crate::schema::{Record, Schema};

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "results";
/// Default output file prefix.
pub const DEFAULT_FILE_PREFIX: &str = "AddressBook";

const EXTENSION: &str = "csv";
const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M";

/// Writer configuration.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Directory output files are written to. Created on demand.
    pub output_dir: PathBuf,
    /// File name prefix, joined to the timestamp with `-`.
    pub file_prefix: String,
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            delimiter: b',',
        }
    }
}

/// Writes records back out as CSV.
///
/// Output names have minute granularity, so two writes in the same minute
/// target the same file and the later one wins.
pub struct Writer {
    config: WriterConfig,
}

impl Writer {
    /// Create a writer with default configuration.
    pub fn new() -> Self {
        Self {
            config: WriterConfig::default(),
        }
    }

    /// Create a writer with custom configuration.
    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Create a writer targeting `output_dir` with the default prefix.
    pub fn in_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_config(WriterConfig {
            output_dir: output_dir.into(),
            ..WriterConfig::default()
        })
    }

    /// Destination for a given timestamp.
    pub fn output_path(&self, timestamp: NaiveDateTime) -> PathBuf {
        self.config.output_dir.join(format!(
            "{}-{}.{}",
            self.config.file_prefix,
            timestamp.format(TIMESTAMP_FORMAT),
            EXTENSION
        ))
    }

    /// Write to a file named after the current local time.
    pub fn write(&self, schema: &Schema, records: &[Record]) -> Result<PathBuf> {
        self.write_at(schema, records, Local::now().naive_local())
    }

    /// Write to a file named after `timestamp`.
    pub fn write_at(
        &self,
        schema: &Schema,
        records: &[Record],
        timestamp: NaiveDateTime,
    ) -> Result<PathBuf> {
        let dir = &self.config.output_dir;
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| RolodexError::io(dir, e))?;
        }

        let path = self.output_path(timestamp);
        let file = File::create(&path).map_err(|e| RolodexError::io(&path, e))?;
        self.write_to(BufWriter::new(file), schema, records)
            .map_err(|e| with_path(e, &path))?;

        debug!(path = %path.display(), rows = records.len(), "wrote address book");
        Ok(path)
    }

    /// Write header and records to any sink.
    ///
    /// Columns follow the schema. Record fields outside the schema are
    /// dropped; schema fields missing from a record are written empty.
    pub fn write_to<W: Write>(&self, sink: W, schema: &Schema, records: &[Record]) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.config.delimiter)
            .from_writer(sink);

        writer.write_record(schema.fields())?;
        for record in records {
            writer.write_record(
                schema
                    .fields()
                    .iter()
                    .map(|field| record.get(field).map(String::as_str).unwrap_or("")),
            )?;
        }

        writer
            .flush()
            .map_err(|e| RolodexError::io(&self.config.output_dir, e))
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// Attach the destination path to a flush failure.
fn with_path(error: RolodexError, path: &Path) -> RolodexError {
    match error {
        RolodexError::Io { source, .. } => RolodexError::io(path, source),
        other => other,
    }
}
