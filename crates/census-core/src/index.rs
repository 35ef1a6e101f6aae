//! Record indexing.
//!
//! One pass over a decoded [`Dataset`] filters rows to the jurisdiction
//! summary level, adapts them into typed [`RawRecord`]s, and builds two
//! lookups: state code to records (source order) and GEOID to record.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use census_ingest::{Dataset, DatasetSchema, RawRow};
use census_model::{
    CollationKey, CountyRecord, Estimates, EstimateYears, JurisdictionType, PlaceRecord,
    RawRecord, StateCatalogEntry, geoid,
};
use serde::Serialize;

/// Why a row was left out of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Row belongs to another geography level.
    SummaryLevel,
    /// State code, name, or local code is empty.
    MissingField(&'static str),
    /// County `000`: the statewide total embedded in the county file.
    StateAggregate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SummaryLevel => f.write_str("summary level"),
            Self::MissingField(column) => write!(f, "missing {column}"),
            Self::StateAggregate => f.write_str("state aggregate row"),
        }
    }
}

/// Row counts collected while indexing one dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub rows_seen: usize,
    pub retained: usize,
    pub skipped_summary_level: usize,
    pub skipped_missing_fields: usize,
    pub skipped_state_aggregate: usize,
    pub duplicate_codes: usize,
}

impl IndexStats {
    fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::SummaryLevel => self.skipped_summary_level += 1,
            SkipReason::MissingField(_) => self.skipped_missing_fields += 1,
            SkipReason::StateAggregate => self.skipped_state_aggregate += 1,
        }
    }

    pub fn skipped(&self) -> usize {
        self.skipped_summary_level + self.skipped_missing_fields + self.skipped_state_aggregate
    }
}

/// A retained record with the GEOID computed from it at index time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedRecord {
    pub geoid: String,
    pub record: RawRecord,
}

/// Lookups over the retained records of one dataset.
#[derive(Debug, Clone)]
pub struct JurisdictionIndex {
    kind: JurisdictionType,
    records: Vec<IndexedRecord>,
    by_state: HashMap<String, Vec<usize>>,
    by_code: HashMap<String, usize>,
}

impl JurisdictionIndex {
    fn new(kind: JurisdictionType) -> Self {
        Self {
            kind,
            records: Vec::new(),
            by_state: HashMap::new(),
            by_code: HashMap::new(),
        }
    }

    /// Index a decoded dataset.
    pub fn build(dataset: &Dataset, years: EstimateYears) -> (Self, IndexStats) {
        let schema = DatasetSchema::for_kind(dataset.kind, years);
        let mut index = Self::new(dataset.kind);
        let mut stats = IndexStats::default();

        for (line, row) in dataset.rows.iter().enumerate() {
            stats.rows_seen += 1;
            match adapt_row(row, &schema) {
                Ok(record) => {
                    if !index.insert(record) {
                        stats.duplicate_codes += 1;
                    }
                    stats.retained += 1;
                }
                Err(reason) => {
                    tracing::trace!(dataset = %dataset.kind, line, %reason, "skipped row");
                    stats.record_skip(reason);
                }
            }
        }

        if stats.duplicate_codes > 0 {
            tracing::warn!(
                dataset = %dataset.kind,
                duplicates = stats.duplicate_codes,
                "duplicate jurisdiction codes; first occurrence answers lookups"
            );
        }
        tracing::info!(
            dataset = %dataset.kind,
            origin = %dataset.origin,
            rows = stats.rows_seen,
            retained = stats.retained,
            skipped = stats.skipped(),
            states = index.by_state.len(),
            "indexed dataset"
        );

        (index, stats)
    }

    /// Returns false when the GEOID was already present.
    fn insert(&mut self, record: RawRecord) -> bool {
        let position = self.records.len();
        let geoid = record.geoid();
        self.by_state
            .entry(record.state_code())
            .or_default()
            .push(position);
        let fresh = match self.by_code.entry(geoid.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(position);
                true
            }
            Entry::Occupied(_) => false,
        };
        self.records.push(IndexedRecord { geoid, record });
        fresh
    }

    pub fn kind(&self) -> JurisdictionType {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records of a state in source order; empty for unknown states.
    pub fn in_state(&self, state_code: &str) -> impl Iterator<Item = &IndexedRecord> + '_ {
        self.by_state
            .get(&geoid::pad_state(state_code))
            .into_iter()
            .flatten()
            .map(|&position| &self.records[position])
    }

    pub fn get(&self, code: &str) -> Option<&IndexedRecord> {
        self.by_code
            .get(code.trim())
            .map(|&position| &self.records[position])
    }

    pub fn records(&self) -> &[IndexedRecord] {
        &self.records
    }
}

/// Filter one row and adapt it into a typed record.
pub fn adapt_row(row: &RawRow, schema: &DatasetSchema) -> Result<RawRecord, SkipReason> {
    if row.get(schema.summary_level) != Some(schema.retained_level) {
        return Err(SkipReason::SummaryLevel);
    }
    let state_code = required(row, schema.state_code)?;
    let name = required(row, schema.name)?;
    let code = required(row, schema.code)?;

    let state_name = row.get(schema.state_name).unwrap_or_default().to_string();
    let summary_level = schema.retained_level.to_string();
    let estimates = Estimates {
        current: row.get(&schema.current_estimate).map(str::to_string),
        prior: row.get(&schema.prior_estimate).map(str::to_string),
    };

    Ok(match schema.kind {
        JurisdictionType::Place => RawRecord::Place(PlaceRecord {
            state_name,
            state_code,
            name,
            place_code: code,
            summary_level,
            estimates,
        }),
        JurisdictionType::County => {
            if geoid::is_all_zero(&code) {
                return Err(SkipReason::StateAggregate);
            }
            RawRecord::County(CountyRecord {
                state_name,
                state_code,
                name,
                county_code: code,
                summary_level,
                estimates,
            })
        }
    })
}

fn required(row: &RawRow, column: &'static str) -> Result<String, SkipReason> {
    row.get(column)
        .map(str::to_string)
        .ok_or(SkipReason::MissingField(column))
}

/// States seen across the given indices, sorted by name.
///
/// One entry per padded code; the first non-empty state name seen wins, and a
/// state with no name anywhere is listed under its code.
pub fn build_state_catalog(indices: &[&JurisdictionIndex]) -> Vec<StateCatalogEntry> {
    let mut names: HashMap<String, String> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for index in indices {
        for indexed in index.records() {
            let code = indexed.record.state_code();
            let name = indexed.record.state_name();
            match names.entry(code) {
                Entry::Vacant(slot) => {
                    order.push(slot.key().clone());
                    slot.insert(name.to_string());
                }
                Entry::Occupied(mut slot) => {
                    if slot.get().is_empty() && !name.is_empty() {
                        slot.insert(name.to_string());
                    }
                }
            }
        }
    }

    let mut catalog: Vec<(CollationKey, StateCatalogEntry)> = order
        .into_iter()
        .map(|code| {
            // States without any `STNAME` are listed under their code.
            let name = names
                .remove(&code)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| code.clone());
            (CollationKey::new(&name), StateCatalogEntry { name, code })
        })
        .collect();
    catalog.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.code.cmp(&b.1.code)));
    catalog.into_iter().map(|(_, entry)| entry).collect()
}
