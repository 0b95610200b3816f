//! Configuration for loading, reporting and writing.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::duplicates::DEFAULT_REPORT_LIMIT;
use crate::error::{Result, RolodexError};
use crate::input::{DEFAULT_REQUIRED_HEADERS, LoaderConfig};
use crate::output::{DEFAULT_FILE_PREFIX, DEFAULT_OUTPUT_DIR, WriterConfig};
use crate::schema::RoleTable;

/// Top-level configuration.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```json
/// {
///   "output_dir": "exports",
///   "field_roles": { "Fax Number": "phone" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RolodexConfig {
    /// Cells the header row must contain.
    pub required_headers: Vec<String>,
    /// Directory output files are written to.
    pub output_dir: PathBuf,
    /// Output file name prefix.
    pub file_prefix: String,
    /// Maximum duplicate entries shown in a report.
    pub report_limit: usize,
    /// Role overrides merged over the built-in table.
    pub field_roles: RoleTable,
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            required_headers: DEFAULT_REQUIRED_HEADERS
                .iter()
                .map(|h| h.to_string())
                .collect(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            report_limit: DEFAULT_REPORT_LIMIT,
            field_roles: RoleTable::empty(),
        }
    }
}

impl RolodexConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            RolodexError::Config(format!(
                "Failed to open config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: RolodexConfig = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            RolodexError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.required_headers.iter().all(|h| h.trim().is_empty()) {
            return Err(RolodexError::Config(
                "required_headers must name at least one header".to_string(),
            ));
        }
        if self.file_prefix.trim().is_empty() {
            return Err(RolodexError::Config("file_prefix must not be empty".to_string()));
        }
        Ok(())
    }

    /// Built-in roles with this configuration's overrides applied.
    pub fn roles(&self) -> RoleTable {
        let mut roles = RoleTable::default();
        roles.merge(&self.field_roles);
        roles
    }

    /// Loader configuration derived from this configuration.
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig {
            required_headers: self.required_headers.clone(),
            roles: self.roles(),
            ..LoaderConfig::default()
        }
    }

    /// Writer configuration derived from this configuration.
    pub fn writer_config(&self) -> WriterConfig {
        WriterConfig {
            output_dir: self.output_dir.clone(),
            file_prefix: self.file_prefix.clone(),
            ..WriterConfig::default()
        }
    }
}
