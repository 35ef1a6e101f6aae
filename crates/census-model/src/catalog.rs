use serde::{Deserialize, Serialize};

/// A state known to at least one loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateCatalogEntry {
    pub name: String,
    /// Padded 2-digit FIPS code.
    pub code: String,
}

/// A jurisdiction offered for selection within a state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JurisdictionOption {
    /// Canonical identifier (GEOID).
    pub code: String,
    pub label: String,
}

impl JurisdictionOption {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}
