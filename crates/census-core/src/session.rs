//! Session loading.
//!
//! Both datasets are decoded and indexed concurrently on blocking threads and
//! joined before the state catalog is built. A finished load is published by
//! swapping the session's engine pointer, so readers see either the previous
//! engine or the new one, never a partial index.
//!
//! Every load carries a [`LoadHandle`]. Before publishing, the session checks
//! that the handle was not cancelled, that the session is still open, and that
//! no newer load has started; otherwise the result is dropped.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use census_ingest::DatasetSource;
use census_model::{EstimateYears, JurisdictionType};

use crate::engine::Engine;
use crate::error::{LoadError, SessionError};
use crate::index::{IndexStats, JurisdictionIndex};

/// Load state visible to callers.
#[derive(Debug, Clone, Default)]
pub enum LoadStatus {
    #[default]
    NotLoaded,
    Loading,
    Ready(Arc<Engine>),
    Failed(Arc<LoadError>),
}

impl LoadStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Why a finished load was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    Cancelled,
    SessionClosed,
    Superseded,
}

/// Result of committing a load.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    Published {
        places: IndexStats,
        counties: IndexStats,
    },
    Failed(Arc<LoadError>),
    Discarded(DiscardReason),
}

/// Ticket for one in-flight load.
#[derive(Debug, Clone)]
pub struct LoadHandle {
    generation: u64,
    cancel_flag: Arc<AtomicBool>,
}

impl LoadHandle {
    /// Request that this load's result be discarded.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::SeqCst)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Indices built by a successful load, with per-dataset counts.
#[derive(Debug)]
pub struct LoadedEngine {
    pub engine: Engine,
    pub places: IndexStats,
    pub counties: IndexStats,
}

/// Visible status plus the status to fall back to if the running load is cancelled.
#[derive(Debug, Default)]
struct StatusCell {
    current: LoadStatus,
    settled: LoadStatus,
}

/// Owner of the published engine for one caller session.
#[derive(Debug, Default)]
pub struct Session {
    status: RwLock<StatusCell>,
    generation: AtomicU64,
    closed: AtomicBool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> LoadStatus {
        self.status
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .current
            .clone()
    }

    /// The published engine, or why there is none.
    pub fn engine(&self) -> Result<Arc<Engine>, SessionError> {
        match self.status() {
            LoadStatus::Ready(engine) => Ok(engine),
            LoadStatus::NotLoaded => Err(SessionError::NotLoaded),
            LoadStatus::Loading => Err(SessionError::Loading),
            LoadStatus::Failed(error) => Err(SessionError::Failed(error)),
        }
    }

    /// Start a new load generation. Older handles become stale.
    ///
    /// An already published engine stays readable until the new load commits.
    pub fn begin_load(&self) -> LoadHandle {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut cell = self.status.write().unwrap_or_else(PoisonError::into_inner);
        if !matches!(cell.current, LoadStatus::Loading) {
            cell.settled = cell.current.clone();
        }
        if !cell.current.is_ready() {
            cell.current = LoadStatus::Loading;
        }
        tracing::debug!(generation, "load started");
        LoadHandle {
            generation,
            cancel_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Apply a finished load if its handle is still current.
    pub fn commit(
        &self,
        handle: &LoadHandle,
        result: Result<LoadedEngine, LoadError>,
    ) -> LoadOutcome {
        let mut cell = self.status.write().unwrap_or_else(PoisonError::into_inner);
        let is_current = self.generation.load(Ordering::SeqCst) == handle.generation;

        let discard = if handle.is_cancelled() {
            Some(DiscardReason::Cancelled)
        } else if self.closed.load(Ordering::SeqCst) {
            Some(DiscardReason::SessionClosed)
        } else if !is_current {
            Some(DiscardReason::Superseded)
        } else {
            None
        };
        if let Some(reason) = discard {
            tracing::debug!(generation = handle.generation, ?reason, "discarded load");
            // No load is running any more; fall back to the status before it.
            if reason == DiscardReason::Cancelled && is_current {
                cell.current = cell.settled.clone();
            }
            return LoadOutcome::Discarded(reason);
        }

        match result {
            Ok(loaded) => {
                cell.current = LoadStatus::Ready(Arc::new(loaded.engine));
                cell.settled = cell.current.clone();
                tracing::info!(generation = handle.generation, "published engine");
                LoadOutcome::Published {
                    places: loaded.places,
                    counties: loaded.counties,
                }
            }
            Err(error) => {
                tracing::error!(generation = handle.generation, %error, "load failed");
                let error = Arc::new(error);
                cell.current = LoadStatus::Failed(Arc::clone(&error));
                cell.settled = cell.current.clone();
                LoadOutcome::Failed(error)
            }
        }
    }

    /// Load both datasets and publish the result.
    pub async fn load<P, C>(&self, places: P, counties: C, years: EstimateYears) -> LoadOutcome
    where
        P: DatasetSource + 'static,
        C: DatasetSource + 'static,
    {
        let handle = self.begin_load();
        let result = load_engine(places, counties, years).await;
        self.commit(&handle, result)
    }

    /// Close the session; loads still in flight will be discarded.
    pub fn shutdown(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

/// Decode and index both datasets concurrently.
pub async fn load_engine<P, C>(
    places: P,
    counties: C,
    years: EstimateYears,
) -> Result<LoadedEngine, LoadError>
where
    P: DatasetSource + 'static,
    C: DatasetSource + 'static,
{
    let place_task = tokio::task::spawn_blocking(move || {
        index_source(&places, JurisdictionType::Place, years)
    });
    let county_task = tokio::task::spawn_blocking(move || {
        index_source(&counties, JurisdictionType::County, years)
    });
    let (place_result, county_result) = tokio::join!(place_task, county_task);

    let (place_index, place_stats) = place_result.map_err(|e| LoadError::Task {
        dataset: JurisdictionType::Place,
        message: e.to_string(),
    })??;
    let (county_index, county_stats) = county_result.map_err(|e| LoadError::Task {
        dataset: JurisdictionType::County,
        message: e.to_string(),
    })??;

    Ok(LoadedEngine {
        engine: Engine::from_indices(place_index, county_index, years),
        places: place_stats,
        counties: county_stats,
    })
}

fn index_source(
    source: &dyn DatasetSource,
    expected: JurisdictionType,
    years: EstimateYears,
) -> Result<(JurisdictionIndex, IndexStats), LoadError> {
    let span = tracing::info_span!("load_dataset", dataset = %expected);
    let _guard = span.enter();

    if source.kind() != expected {
        return Err(LoadError::WrongDataset {
            expected,
            found: source.kind(),
        });
    }
    let dataset = source.decode().map_err(|source| LoadError::Dataset {
        dataset: expected,
        source,
    })?;
    Ok(JurisdictionIndex::build(&dataset, years))
}
