use census_ingest::Dataset;
use census_model::{EstimateYears, JurisdictionType, StateCatalogEntry};

use crate::index::{IndexStats, JurisdictionIndex, build_state_catalog};

/// A complete, read-only set of indices built from one load.
#[derive(Debug, Clone)]
pub struct Engine {
    pub(crate) states: Vec<StateCatalogEntry>,
    pub(crate) places: JurisdictionIndex,
    pub(crate) counties: JurisdictionIndex,
    pub(crate) years: EstimateYears,
}

impl Engine {
    /// Assemble an engine from two already-built indices.
    ///
    /// The state catalog is the only structure that needs both.
    pub fn from_indices(
        places: JurisdictionIndex,
        counties: JurisdictionIndex,
        years: EstimateYears,
    ) -> Self {
        let states = build_state_catalog(&[&places, &counties]);
        tracing::info!(
            states = states.len(),
            places = places.len(),
            counties = counties.len(),
            "built jurisdiction engine"
        );
        Self {
            states,
            places,
            counties,
            years,
        }
    }

    /// Index both datasets on the current thread.
    pub fn build(
        places: &Dataset,
        counties: &Dataset,
        years: EstimateYears,
    ) -> (Self, IndexStats, IndexStats) {
        let (place_index, place_stats) = JurisdictionIndex::build(places, years);
        let (county_index, county_stats) = JurisdictionIndex::build(counties, years);
        (
            Self::from_indices(place_index, county_index, years),
            place_stats,
            county_stats,
        )
    }

    pub fn years(&self) -> EstimateYears {
        self.years
    }

    pub fn index(&self, kind: JurisdictionType) -> &JurisdictionIndex {
        match kind {
            JurisdictionType::Place => &self.places,
            JurisdictionType::County => &self.counties,
        }
    }
}
