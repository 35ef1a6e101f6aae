//! Error types for loading and querying.

use std::sync::Arc;

use census_ingest::IngestError;
use census_model::{JurisdictionType, ModelError};
use thiserror::Error;

/// A dataset could not be loaded. No indices are published.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load {dataset} dataset: {source}")]
    Dataset {
        dataset: JurisdictionType,
        #[source]
        source: IngestError,
    },

    #[error("expected a {expected} dataset but the source produced {found} rows")]
    WrongDataset {
        expected: JurisdictionType,
        found: JurisdictionType,
    },

    #[error("{dataset} load task failed: {message}")]
    Task {
        dataset: JurisdictionType,
        message: String,
    },
}

/// A query could not be answered from the loaded indices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The code was not produced by `options_for` for this jurisdiction type.
    #[error("unknown {kind} jurisdiction '{code}'")]
    UnknownJurisdiction {
        code: String,
        kind: JurisdictionType,
    },

    #[error("{0}")]
    UnknownMetric(#[from] ModelError),
}

/// The session has no published engine.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("datasets have not been loaded")]
    NotLoaded,

    #[error("datasets are still loading")]
    Loading,

    #[error("datasets failed to load: {0}")]
    Failed(Arc<LoadError>),
}

pub type Result<T> = std::result::Result<T, QueryError>;
