//! Data model for the census jurisdiction lookup engine.
//!
//! - [`geoid`]: canonical identifier codec
//! - [`record`]: typed place and county records
//! - [`enums`]: jurisdiction types, metric kinds, estimate years
//! - [`selection`]: recorded selections and aggregated report rows

pub mod catalog;
pub mod collation;
pub mod enums;
pub mod error;
pub mod format;
pub mod geoid;
pub mod record;
pub mod selection;

pub use catalog::{JurisdictionOption, StateCatalogEntry};
pub use collation::{CollationKey, compare_names};
pub use enums::{EstimateYears, JurisdictionType, MetricKind};
pub use error::{ModelError, Result};
pub use format::{format_thousands, parse_estimate};
pub use geoid::{county_id, pad_state, place_id};
pub use record::{CountyRecord, Estimates, PlaceRecord, RawRecord};
pub use selection::{NO_VALUE, Report, ResultRow, Selection, SelectionEntry, SelectionId};
