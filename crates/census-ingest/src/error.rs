//! Error types for dataset ingestion.

use std::path::PathBuf;

use census_model::JurisdictionType;
use thiserror::Error;

/// Errors that can occur while decoding a dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is {size} bytes, exceeding the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV content.
    #[error("failed to parse {dataset} CSV from {origin}: {message}")]
    CsvParse {
        dataset: JurisdictionType,
        origin: String,
        message: String,
    },

    /// CSV input has no header row.
    #[error("{dataset} CSV from {origin} is empty")]
    EmptyCsv {
        dataset: JurisdictionType,
        origin: String,
    },

    /// A column the engine reads is absent from the header.
    #[error("required column '{column}' not found in {dataset} CSV from {origin}")]
    MissingColumn {
        column: String,
        dataset: JurisdictionType,
        origin: String,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/sub-est2024.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /data/sub-est2024.csv");
    }

    #[test]
    fn test_missing_column_display() {
        let err = IngestError::MissingColumn {
            column: "SUMLEV".to_string(),
            dataset: JurisdictionType::County,
            origin: "co-est2024-alldata.csv".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "required column 'SUMLEV' not found in county CSV from co-est2024-alldata.csv"
        );
    }
}
