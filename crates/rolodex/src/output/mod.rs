//! Writing address books back to disk.

mod writer;

pub use writer::{DEFAULT_FILE_PREFIX, DEFAULT_OUTPUT_DIR, Writer, WriterConfig};
