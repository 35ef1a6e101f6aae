//! Jurisdiction indexing and query aggregation.
//!
//! # Overview
//!
//! - [`index`]: filters decoded rows and builds per-state and per-code lookups
//! - [`Engine`]: the read-only indices of one load, queried through
//!   [`Engine::options_for`], [`Engine::resolve`] and [`Engine::select`]
//! - [`SelectionLog`]: records selections and aggregates them into report rows
//! - [`Session`]: loads both datasets concurrently and publishes engines
//!
//! # Example
//!
//! ```ignore
//! use census_core::{Session, SelectionLog};
//! use census_ingest::DataConfig;
//! use census_model::{JurisdictionType, MetricKind};
//!
//! let config = DataConfig::from_env();
//! let session = Session::new();
//! session.load(config.place_source(), config.county_source(), config.years).await;
//!
//! let engine = session.engine()?;
//! let options = engine.options_for("06", JurisdictionType::Place);
//! let mut log = SelectionLog::new();
//! log.record(engine.select("06", JurisdictionType::Place, &options[0].code, MetricKind::Code)?);
//! let report = log.aggregate();
//! ```

mod engine;
pub mod error;
pub mod index;
mod query;
pub mod selection;
pub mod session;

pub use engine::Engine;
pub use error::{LoadError, QueryError, Result, SessionError};
pub use index::{IndexStats, IndexedRecord, JurisdictionIndex, SkipReason};
pub use selection::SelectionLog;
pub use session::{
    DiscardReason, LoadHandle, LoadOutcome, LoadStatus, LoadedEngine, Session, load_engine,
};
