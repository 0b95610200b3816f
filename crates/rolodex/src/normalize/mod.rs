//! Field normalization: per-role validation and canonicalization.
//!
//! Every value is trimmed first. A blank value is always valid and stays
//! blank; anything else is dispatched on the field's [`FieldRole`].
//!
//! ```
//! use rolodex::normalize::normalize;
//!
//! assert_eq!(normalize("Mobile Number", "0412 345 678").unwrap(), "+61412345678");
//! assert_eq!(normalize("First Name", "o'brien").unwrap(), "O'Brien");
//! assert!(normalize("Email", "Not An Email").is_err());
//! ```

mod phone;
mod rules;

pub use rules::Canonicalizer;

use crate::error::{Result, RolodexError};
use crate::schema::{FieldRole, Record, RoleTable, Schema};

/// Normalize a single value using the built-in role table.
pub fn normalize(field: &str, raw: &str) -> Result<String> {
    normalize_with(&RoleTable::default(), field, raw)
}

/// Normalize a single value using a given role table.
pub fn normalize_with(roles: &RoleTable, field: &str, raw: &str) -> Result<String> {
    normalize_as(roles.role_of(field), field, raw)
}

/// Normalize a value as a specific role. `field` is only used for errors.
pub fn normalize_as(role: FieldRole, field: &str, raw: &str) -> Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(String::new());
    }
    (role.canonicalizer())(value).map_err(|message| RolodexError::invalid_field(field, message))
}

/// Normalize a raw record against a schema.
///
/// The result has exactly the schema's fields, in schema order. Raw keys
/// outside the schema are ignored and missing ones count as blank. Fails on
/// the first invalid field.
pub fn normalize_record(schema: &Schema, raw: &Record) -> Result<Record> {
    let mut cleaned = Record::with_capacity(schema.field_count());
    for field in schema.fields() {
        let raw_value = raw.get(field).map(String::as_str).unwrap_or("");
        let value = normalize_with(schema.roles(), field, raw_value)?;
        cleaned.insert(field.clone(), value);
    }
    Ok(cleaned)
}
