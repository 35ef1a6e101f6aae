//! Selections and aggregated report rows.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{JurisdictionType, MetricKind};

/// Marker rendered for a metric column a row has no value for.
pub const NO_VALUE: &str = "-";

/// Identity of a recorded selection, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionId(Uuid);

impl SelectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SelectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SelectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved choice, ready to be recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub state_name: String,
    pub state_code: String,
    pub kind: JurisdictionType,
    pub jurisdiction_name: String,
    pub jurisdiction_code: String,
    pub metric: MetricKind,
    pub metric_label: String,
    pub value: String,
}

/// A recorded selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub id: SelectionId,
    #[serde(flatten)]
    pub entry: SelectionEntry,
}

impl Selection {
    /// Key shared by every selection of the same jurisdiction.
    pub fn group_key(&self) -> (&str, JurisdictionType, &str) {
        (
            &self.entry.state_code,
            self.entry.kind,
            &self.entry.jurisdiction_code,
        )
    }
}

/// One jurisdiction in an aggregated report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub state_name: String,
    pub state_code: String,
    pub kind: JurisdictionType,
    pub jurisdiction_name: String,
    pub jurisdiction_code: String,
    pub code: Option<String>,
    pub prior_population: Option<String>,
    pub current_population: Option<String>,
}

impl ResultRow {
    /// Empty row carrying the identity fields of `selection`.
    pub fn from_selection(selection: &Selection) -> Self {
        let entry = &selection.entry;
        Self {
            state_name: entry.state_name.clone(),
            state_code: entry.state_code.clone(),
            kind: entry.kind,
            jurisdiction_name: entry.jurisdiction_name.clone(),
            jurisdiction_code: entry.jurisdiction_code.clone(),
            code: None,
            prior_population: None,
            current_population: None,
        }
    }

    pub fn slot(&self, metric: MetricKind) -> Option<&str> {
        match metric {
            MetricKind::Code => self.code.as_deref(),
            MetricKind::PriorPopulation => self.prior_population.as_deref(),
            MetricKind::CurrentPopulation => self.current_population.as_deref(),
        }
    }

    pub fn slot_mut(&mut self, metric: MetricKind) -> &mut Option<String> {
        match metric {
            MetricKind::Code => &mut self.code,
            MetricKind::PriorPopulation => &mut self.prior_population,
            MetricKind::CurrentPopulation => &mut self.current_population,
        }
    }

    /// Display text for a metric column, [`NO_VALUE`] when the slot is empty.
    pub fn cell(&self, metric: MetricKind) -> &str {
        self.slot(metric).unwrap_or(NO_VALUE)
    }
}

/// Aggregated view of a selection log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Metric columns present in at least one selection, in column order.
    pub columns: Vec<MetricKind>,
    pub rows: Vec<ResultRow>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
