//! Input loading and source metadata.

mod loader;
mod source;

pub use loader::{
    DEFAULT_REQUIRED_HEADERS, LoadedTable, Loader, LoaderConfig, ParsedTable, locate_and_parse,
};
pub use source::SourceMetadata;
