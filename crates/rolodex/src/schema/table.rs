//! Table-level schema: ordered field names plus their roles.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::role::{FieldRole, RoleTable, fold};

/// One contact: field name to value, in schema order.
pub type Record = IndexMap<String, String>;

/// Schema for an address-book table.
///
/// Established once per load and passed by reference to every operation
/// that needs field names or roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Field names in header order.
    fields: Vec<String>,
    /// Role dispatch table.
    #[serde(default)]
    roles: RoleTable,
}

impl Schema {
    /// Create a schema with the built-in role table.
    ///
    /// Repeated names keep their first position.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_roles(fields, RoleTable::default())
    }

    /// Create a schema with a custom role table.
    pub fn with_roles<I, S>(fields: I, roles: RoleTable) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for field in fields {
            let field = field.into();
            if !unique.contains(&field) {
                unique.push(field);
            }
        }
        Self {
            fields: unique,
            roles,
        }
    }

    /// Field names in header order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The role table.
    pub fn roles(&self) -> &RoleTable {
        &self.roles
    }

    /// Get the number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has an exact field.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f == name)
    }

    /// Find a schema field by folded name.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        let wanted = fold(name);
        self.fields
            .iter()
            .find(|f| fold(f) == wanted)
            .map(|f| f.as_str())
    }

    /// Role of a field.
    pub fn role_of(&self, name: &str) -> FieldRole {
        self.roles.role_of(name)
    }

    /// Whether a field holds phone numbers.
    pub fn is_phone(&self, name: &str) -> bool {
        self.roles.is_phone(name)
    }

    /// Fields holding phone numbers, in schema order.
    pub fn phone_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| self.roles.is_phone(f))
            .map(|f| f.as_str())
    }

    /// A record with every field present and empty.
    pub fn blank_record(&self) -> Record {
        self.fields
            .iter()
            .map(|f| (f.clone(), String::new()))
            .collect()
    }
}
