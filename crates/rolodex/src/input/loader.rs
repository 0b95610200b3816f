//! Address-book loader with header-row detection.
//!
//! Exports often start with an arbitrary number of instruction or comment
//! lines. The loader scans line by line for the first row whose cells
//! include every required header, discards everything before it, and parses
//! the rest as the table.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::{Result, RolodexError};
use crate::schema::{Record, RoleTable, Schema};

use super::source::SourceMetadata;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Headers every address-book export is expected to carry.
pub const DEFAULT_REQUIRED_HEADERS: &[&str] = &["First Name", "Surname"];

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Cells the header row must contain (compared trimmed, exact case).
    pub required_headers: Vec<String>,
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
    /// Role table attached to the loaded schema.
    pub roles: RoleTable,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            required_headers: DEFAULT_REQUIRED_HEADERS
                .iter()
                .map(|h| h.to_string())
                .collect(),
            delimiter: b',',
            quote: b'"',
            roles: RoleTable::default(),
        }
    }
}

/// A parsed table: schema, records and where the header was found.
#[derive(Debug, Clone)]
pub struct ParsedTable {
    /// Field names and roles.
    pub schema: Schema,
    /// Records in file order, keyed by schema field.
    pub records: Vec<Record>,
    /// Number of lines before the header row.
    pub preamble_lines: usize,
}

/// A loaded file: the parsed table plus source metadata.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub schema: Schema,
    pub records: Vec<Record>,
    pub source: SourceMetadata,
}

/// Position of the header row within the text.
#[derive(Debug)]
struct HeaderLocation {
    /// 0-based line index.
    line: usize,
    /// Byte offset of the line start.
    offset: usize,
    /// Cleaned header cells, in order, repeats included.
    cells: Vec<String>,
}

/// Loads address-book exports.
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Create a loader with default configuration.
    pub fn new() -> Self {
        Self {
            config: LoaderConfig::default(),
        }
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Create a loader requiring the given headers.
    pub fn requiring<I, S>(required_headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(LoaderConfig {
            required_headers: required_headers.into_iter().map(Into::into).collect(),
            ..LoaderConfig::default()
        })
    }

    /// The loader configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load a file from disk.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<LoadedTable> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(RolodexError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read(path).map_err(|e| RolodexError::io(path, e))?;
        let size_bytes = contents.len() as u64;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let source_name = path.display().to_string();
        let text = String::from_utf8(contents).map_err(|_| RolodexError::Malformed {
            source_name: source_name.clone(),
            message: "file is not valid UTF-8".to_string(),
        })?;

        let parsed = self.parse_str(&text, &source_name)?;

        let source = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            parsed.preamble_lines,
            parsed.records.len(),
            parsed.schema.field_count(),
        );

        info!(
            path = %path.display(),
            rows = source.row_count,
            fields = source.column_count,
            preamble_lines = source.preamble_lines,
            "loaded address book"
        );

        Ok(LoadedTable {
            schema: parsed.schema,
            records: parsed.records,
            source,
        })
    }

    /// Parse text already in memory. `source_name` is used in errors.
    pub fn parse_str(&self, text: &str, source_name: &str) -> Result<ParsedTable> {
        let required = self.required_set()?;

        if text.trim_start_matches(BYTE_ORDER_MARK).trim().is_empty() {
            return Err(RolodexError::Malformed {
                source_name: source_name.to_string(),
                message: "CSV is empty (no headers)".to_string(),
            });
        }

        let location = self.locate_header(text, &required).ok_or_else(|| {
            let mut wanted: Vec<&str> = required.iter().map(String::as_str).collect();
            wanted.sort_unstable();
            RolodexError::Malformed {
                source_name: source_name.to_string(),
                message: format!("could not find header row containing {wanted:?}"),
            }
        })?;

        debug!(
            line = location.line + 1,
            cells = location.cells.len(),
            "located header row"
        );

        let schema = Schema::with_roles(location.cells.iter().cloned(), self.config.roles.clone());
        let records = self.parse_records(&text[location.offset..], &schema, &location.cells)?;

        Ok(ParsedTable {
            schema,
            records,
            preamble_lines: location.line,
        })
    }

    fn required_set(&self) -> Result<HashSet<String>> {
        let required: HashSet<String> = self
            .config
            .required_headers
            .iter()
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .collect();

        if required.is_empty() {
            return Err(RolodexError::Config(
                "at least one required header must be given".to_string(),
            ));
        }
        Ok(required)
    }

    fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(self.config.delimiter)
            .quote(self.config.quote)
            .has_headers(false)
            .flexible(true);
        builder
    }

    /// Scan line by line for the first row that is a superset of `required`.
    fn locate_header(&self, text: &str, required: &HashSet<String>) -> Option<HeaderLocation> {
        let mut offset = 0;
        for (line, raw_line) in text.split_inclusive('\n').enumerate() {
            if let Some(cells) = self.tokenize_line(raw_line) {
                let present: HashSet<&str> = cells.iter().map(String::as_str).collect();
                if required.iter().all(|h| present.contains(h.as_str())) {
                    return Some(HeaderLocation {
                        line,
                        offset,
                        cells,
                    });
                }
            }
            offset += raw_line.len();
        }
        None
    }

    /// Tokenize one physical line as a row and clean its cells.
    fn tokenize_line(&self, line: &str) -> Option<Vec<String>> {
        let mut reader = self.reader_builder().from_reader(line.as_bytes());
        let record = reader.records().next()?.ok()?;
        Some(clean_cells(record.iter()))
    }

    /// Parse data rows from the header line onwards.
    fn parse_records(&self, body: &str, schema: &Schema, header: &[String]) -> Result<Vec<Record>> {
        let mut reader = self.reader_builder().from_reader(body.as_bytes());
        let mut records = Vec::new();

        for result in reader.records().skip(1) {
            let row = result?;
            let mut record = schema.blank_record();
            // Overflow cells fall off the zip; repeated header cells keep the last value.
            for (name, cell) in header.iter().zip(row.iter()) {
                if let Some(slot) = record.get_mut(name) {
                    *slot = cell.to_string();
                }
            }
            records.push(record);
        }

        Ok(records)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Trim every cell and drop a byte-order mark from the first.
fn clean_cells<'a>(cells: impl Iterator<Item = &'a str>) -> Vec<String> {
    cells
        .enumerate()
        .map(|(i, cell)| {
            let cell = if i == 0 {
                cell.trim_start().trim_start_matches(BYTE_ORDER_MARK)
            } else {
                cell
            };
            cell.trim().to_string()
        })
        .collect()
}

/// Load `path`, locating the header row by `required_headers`.
pub fn locate_and_parse<I, S>(path: impl AsRef<Path>, required_headers: I) -> Result<(Schema, Vec<Record>)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let loaded = Loader::requiring(required_headers).load_file(path)?;
    Ok((loaded.schema, loaded.records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<ParsedTable> {
        Loader::new().parse_str(text, "test.csv")
    }

    #[test]
    fn test_header_at_top() {
        let table = parse("First Name,Surname,Email\nJane,Doe,jane@example.com\n").unwrap();
        assert_eq!(table.preamble_lines, 0);
        assert_eq!(table.schema.fields(), &["First Name", "Surname", "Email"]);
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0]["Email"], "jane@example.com");
    }

    #[test]
    fn test_preamble_skipped() {
        let text = "Global Address Book export\n\
                    Do not edit the header row, see https://example.com, for help\n\
                    \n\
                    \"Notes, with quotes\",\"First Name\"\n\
                    First Name,Surname,Mobile Number\n\
                    Jane,Doe,0412345678\n\
                    John,Smith,\n";
        let table = parse(text).unwrap();
        assert_eq!(table.preamble_lines, 4);
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[1]["Surname"], "Smith");
        assert_eq!(table.records[1]["Mobile Number"], "");
    }

    #[test]
    fn test_header_cells_trimmed_and_bom_stripped() {
        let text = "\u{feff}First Name , Surname,Company\nJane,Doe,Acme\n";
        let table = parse(text).unwrap();
        assert_eq!(table.schema.fields(), &["First Name", "Surname", "Company"]);
        assert_eq!(table.records[0]["Company"], "Acme");
    }

    #[test]
    fn test_ragged_rows() {
        let text = "First Name,Surname,Email\nJane\nJohn,Smith,j@s.com,overflow,more\n";
        let table = parse(text).unwrap();
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[0]["Surname"], "");
        assert_eq!(table.records[0]["Email"], "");
        assert_eq!(table.records[1].len(), 3);
        assert_eq!(table.records[1]["Email"], "j@s.com");
    }

    #[test]
    fn test_quoted_fields_with_newlines() {
        let text = "First Name,Surname,Notes\nJane,Doe,\"line one\nline \"\"two\"\"\"\nJohn,Smith,plain\n";
        let table = parse(text).unwrap();
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[0]["Notes"], "line one\nline \"two\"");
        assert_eq!(table.records[1]["First Name"], "John");
    }

    #[test]
    fn test_repeated_header_cell_keeps_last_value() {
        let text = "First Name,Surname,Tag,Tag\nJane,Doe,a,b\n";
        let table = parse(text).unwrap();
        assert_eq!(table.schema.fields(), &["First Name", "Surname", "Tag"]);
        assert_eq!(table.records[0]["Tag"], "b");
    }

    #[test]
    fn test_headers_only() {
        let table = parse("junk\nFirst Name,Surname\n").unwrap();
        assert!(table.records.is_empty());
        assert_eq!(table.schema.field_count(), 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let table = parse("preamble\r\nFirst Name,Surname\r\nJane,Doe\r\n").unwrap();
        assert_eq!(table.preamble_lines, 1);
        assert_eq!(table.records[0]["Surname"], "Doe");
    }

    #[test]
    fn test_empty_input_is_malformed() {
        let err = parse("  \n\n").unwrap_err();
        assert!(matches!(err, RolodexError::Malformed { ref message, .. } if message.contains("no headers")));
    }

    #[test]
    fn test_missing_header_is_malformed() {
        let err = parse("Name,Phone\nJane,0412345678\n").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("test.csv"));
        assert!(message.contains(r#"["First Name", "Surname"]"#));
    }

    #[test]
    fn test_header_match_is_case_sensitive() {
        assert!(parse("first name,surname\nJane,Doe\n").is_err());
    }

    #[test]
    fn test_no_required_headers_is_config_error() {
        let loader = Loader::requiring(Vec::<String>::new());
        assert!(matches!(
            loader.parse_str("a,b\n", "x"),
            Err(RolodexError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = Loader::new().load_file("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, RolodexError::NotFound { .. }));
    }
}
