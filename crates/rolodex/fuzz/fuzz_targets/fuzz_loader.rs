//! Fuzz target for the header-locating loader.
//!
//! The loader must never panic, whatever sits above or below the header,
//! and any table it returns must respect its own schema.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rolodex::Loader;
use std::io::Write;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(table) = Loader::new().parse_str(text, "fuzz.csv") {
            for record in &table.records {
                assert_eq!(record.len(), table.schema.field_count());
            }
        }
    }

    // Non-UTF-8 bytes go through the file path
    if let Ok(mut temp_file) = tempfile::NamedTempFile::new() {
        if temp_file.write_all(data).is_ok() {
            let _ = Loader::new().load_file(temp_file.path());
        }
    }
});
