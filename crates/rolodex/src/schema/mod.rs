//! Schema types: field names, records and field roles.

mod role;
mod table;

pub use role::{FieldRole, RoleTable, fold};
pub use table::{Record, Schema};
