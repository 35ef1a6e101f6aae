//! Decoded rows as handed to the indexer.

use std::collections::BTreeMap;

use census_model::JurisdictionType;

/// One decoded row: column name to trimmed cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: BTreeMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from `(column, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = Self::new();
        for (key, value) in pairs {
            row.insert(key, value);
        }
        row
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value: String = value.into();
        self.fields.insert(key.into(), value.trim().to_string());
    }

    /// Non-empty value for `key`; empty cells read as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// All decoded rows of one dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub kind: JurisdictionType,
    /// Where the rows came from (file path or a caller-supplied label).
    pub origin: String,
    pub rows: Vec<RawRow>,
}

impl Dataset {
    pub fn new(kind: JurisdictionType, origin: impl Into<String>, rows: Vec<RawRow>) -> Self {
        Self {
            kind,
            origin: origin.into(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
