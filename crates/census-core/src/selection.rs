//! Selection log and report aggregation.

use std::collections::{BTreeSet, HashMap};

use census_model::{JurisdictionType, Report, ResultRow, Selection, SelectionEntry, SelectionId};

/// Ordered record of the selections a caller has committed.
///
/// Selections are never merged when recorded; grouping happens in
/// [`SelectionLog::aggregate`], which leaves the log untouched.
#[derive(Debug, Clone, Default)]
pub struct SelectionLog {
    selections: Vec<Selection>,
}

impl SelectionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a selection under a fresh identity.
    pub fn record(&mut self, entry: SelectionEntry) -> Selection {
        let selection = Selection {
            id: SelectionId::new(),
            entry,
        };
        tracing::debug!(
            id = %selection.id,
            code = %selection.entry.jurisdiction_code,
            metric = ?selection.entry.metric,
            "recorded selection"
        );
        self.selections.push(selection.clone());
        selection
    }

    /// Remove the selection with `id`. Returns false when none matched.
    pub fn remove(&mut self, id: SelectionId) -> bool {
        let before = self.selections.len();
        self.selections.retain(|selection| selection.id != id);
        before != self.selections.len()
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Group selections into one row per jurisdiction.
    ///
    /// Rows appear in the order their jurisdiction was first selected. A later
    /// selection of the same metric overwrites the earlier value in that row.
    /// Columns are the metric kinds present anywhere in the log.
    pub fn aggregate(&self) -> Report {
        let mut rows: Vec<ResultRow> = Vec::new();
        let mut positions: HashMap<(&str, JurisdictionType, &str), usize> = HashMap::new();
        let mut columns = BTreeSet::new();

        for selection in &self.selections {
            columns.insert(selection.entry.metric);
            let position = *positions.entry(selection.group_key()).or_insert_with(|| {
                rows.push(ResultRow::from_selection(selection));
                rows.len() - 1
            });
            *rows[position].slot_mut(selection.entry.metric) = Some(selection.entry.value.clone());
        }

        Report {
            columns: columns.into_iter().collect(),
            rows,
        }
    }
}
