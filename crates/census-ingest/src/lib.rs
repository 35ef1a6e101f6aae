//! Census dataset ingestion.
//!
//! Decodes the place (`SUB-EST`) and county (`CO-EST-ALLDATA`) population
//! estimate files into [`Dataset`]s of [`RawRow`]s for the indexer.
//!
//! # Example
//!
//! ```ignore
//! use census_ingest::{DataConfig, DatasetSource};
//!
//! let config = DataConfig::from_env();
//! let places = config.place_source().decode()?;
//! ```

mod config;
mod csv;
mod error;
mod row;
mod schema;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use crate::csv::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, decode_text, read_dataset,
    read_dataset_from_str,
};

// === Rows and Schemas ===
pub use row::{Dataset, RawRow};
pub use schema::{COUNTY_SUMMARY_LEVEL, DatasetSchema, PLACE_SUMMARY_LEVEL};

// === Sources and Configuration ===
pub use config::{COUNTIES_ENV_VAR, DataConfig, ESTIMATE_YEAR_ENV_VAR, PLACES_ENV_VAR};
pub use source::{CsvFileSource, CsvTextSource, DatasetSource, MemorySource};
