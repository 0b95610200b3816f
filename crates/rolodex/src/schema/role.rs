//! Field roles and the folded-name role table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Formatting rule class a field belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    /// Personal or organisation name (letters, single separators).
    Name,
    /// Email address.
    Email,
    /// Australian telephone number.
    Phone,
    /// Kept as typed, trimmed.
    #[default]
    Passthrough,
}

impl FieldRole {
    /// Get a human-readable label for the role.
    pub fn label(&self) -> &'static str {
        match self {
            FieldRole::Name => "Name",
            FieldRole::Email => "Email",
            FieldRole::Phone => "Phone",
            FieldRole::Passthrough => "Passthrough",
        }
    }
}

/// Fold a field name for rule dispatch: trimmed and lowercased.
pub fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Built-in folded field names and their roles.
const DEFAULT_ROLES: &[(&str, FieldRole)] = &[
    ("first name", FieldRole::Name),
    ("surname", FieldRole::Name),
    ("job title", FieldRole::Name),
    ("company", FieldRole::Name),
    ("email", FieldRole::Email),
    ("home number", FieldRole::Phone),
    ("business number", FieldRole::Phone),
    ("mobile number", FieldRole::Phone),
    ("company main number", FieldRole::Phone),
    ("source", FieldRole::Passthrough),
    ("external id", FieldRole::Passthrough),
];

/// Mapping from folded field name to [`FieldRole`].
///
/// Names the table has no entry for resolve to [`FieldRole::Passthrough`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, FieldRole>", into = "IndexMap<String, FieldRole>")]
pub struct RoleTable {
    roles: IndexMap<String, FieldRole>,
}

impl RoleTable {
    /// Create an empty table; every field resolves to passthrough.
    pub fn empty() -> Self {
        Self {
            roles: IndexMap::new(),
        }
    }

    /// Add or replace the role for a field name.
    pub fn with_role(mut self, name: &str, role: FieldRole) -> Self {
        self.insert(name, role);
        self
    }

    /// Add or replace the role for a field name.
    pub fn insert(&mut self, name: &str, role: FieldRole) {
        self.roles.insert(fold(name), role);
    }

    /// Merge overrides over this table.
    pub fn merge(&mut self, overrides: &RoleTable) {
        for (name, role) in &overrides.roles {
            self.roles.insert(name.clone(), *role);
        }
    }

    /// Role for a field name, compared folded.
    pub fn role_of(&self, name: &str) -> FieldRole {
        self.roles.get(&fold(name)).copied().unwrap_or_default()
    }

    /// Whether a field name holds phone numbers.
    pub fn is_phone(&self, name: &str) -> bool {
        self.role_of(name) == FieldRole::Phone
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether the table has no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl From<IndexMap<String, FieldRole>> for RoleTable {
    fn from(entries: IndexMap<String, FieldRole>) -> Self {
        let mut table = Self::empty();
        for (name, role) in entries {
            table.insert(&name, role);
        }
        table
    }
}

impl From<RoleTable> for IndexMap<String, FieldRole> {
    fn from(table: RoleTable) -> Self {
        table.roles
    }
}

impl Default for RoleTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for (name, role) in DEFAULT_ROLES {
            table.insert(name, *role);
        }
        table
    }
}
