//! Dataset sources consumed by the session loader.

use std::path::PathBuf;

use census_model::{EstimateYears, JurisdictionType};

use crate::csv::{read_dataset, read_dataset_from_str};
use crate::error::Result;
use crate::row::{Dataset, RawRow};
use crate::schema::DatasetSchema;

/// Produces the decoded rows of one dataset.
///
/// `decode` is blocking; the loader runs it on a blocking thread.
pub trait DatasetSource: Send + Sync {
    fn kind(&self) -> JurisdictionType;

    fn decode(&self) -> Result<Dataset>;
}

/// A CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
    schema: DatasetSchema,
}

impl CsvFileSource {
    pub fn new(kind: JurisdictionType, path: impl Into<PathBuf>, years: EstimateYears) -> Self {
        Self {
            path: path.into(),
            schema: DatasetSchema::for_kind(kind, years),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl DatasetSource for CsvFileSource {
    fn kind(&self) -> JurisdictionType {
        self.schema.kind
    }

    fn decode(&self) -> Result<Dataset> {
        read_dataset(&self.path, &self.schema)
    }
}

/// CSV text already held in memory.
#[derive(Debug, Clone)]
pub struct CsvTextSource {
    label: String,
    text: String,
    schema: DatasetSchema,
}

impl CsvTextSource {
    pub fn new(
        kind: JurisdictionType,
        label: impl Into<String>,
        text: impl Into<String>,
        years: EstimateYears,
    ) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            schema: DatasetSchema::for_kind(kind, years),
        }
    }
}

impl DatasetSource for CsvTextSource {
    fn kind(&self) -> JurisdictionType {
        self.schema.kind
    }

    fn decode(&self) -> Result<Dataset> {
        read_dataset_from_str(&self.text, &self.schema, &self.label)
    }
}

/// Rows decoded elsewhere.
#[derive(Debug, Clone)]
pub struct MemorySource {
    kind: JurisdictionType,
    rows: Vec<RawRow>,
}

impl MemorySource {
    pub fn new(kind: JurisdictionType, rows: Vec<RawRow>) -> Self {
        Self { kind, rows }
    }
}

impl DatasetSource for MemorySource {
    fn kind(&self) -> JurisdictionType {
        self.kind
    }

    fn decode(&self) -> Result<Dataset> {
        Ok(Dataset::new(self.kind, "memory", self.rows.clone()))
    }
}
