//! Jurisdiction query facade.

use census_model::{
    CollationKey, JurisdictionOption, JurisdictionType, MetricKind, SelectionEntry,
    StateCatalogEntry, format_thousands, geoid,
};

use crate::engine::Engine;
use crate::error::{QueryError, Result};
use crate::index::IndexedRecord;

impl Engine {
    /// State catalog, sorted by name.
    pub fn states(&self) -> &[StateCatalogEntry] {
        &self.states
    }

    /// Jurisdictions of `kind` in a state, sorted by name.
    ///
    /// Equal names keep source order. Unknown states yield an empty list.
    pub fn options_for(&self, state_code: &str, kind: JurisdictionType) -> Vec<JurisdictionOption> {
        let mut keyed: Vec<(CollationKey, JurisdictionOption)> = self
            .index(kind)
            .in_state(state_code)
            .map(|indexed| {
                let name = indexed.record.name();
                (
                    CollationKey::new(name),
                    JurisdictionOption::new(indexed.geoid.clone(), name),
                )
            })
            .collect();
        // `sort_by` is stable
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        keyed.into_iter().map(|(_, option)| option).collect()
    }

    /// Parse a metric token (`code`, `pop<year>`) against this load's years.
    pub fn metric(&self, token: &str) -> Result<MetricKind> {
        Ok(MetricKind::parse(token, self.years)?)
    }

    /// Display text of `metric` for the jurisdiction with GEOID `code`.
    pub fn resolve(&self, code: &str, kind: JurisdictionType, metric: MetricKind) -> Result<String> {
        let indexed = self.lookup(code, kind)?;
        Ok(metric_value(indexed, metric))
    }

    /// Resolve a choice into an entry ready for [`crate::SelectionLog::record`].
    ///
    /// The state name comes from the catalog, falling back to the record.
    pub fn select(
        &self,
        state_code: &str,
        kind: JurisdictionType,
        code: &str,
        metric: MetricKind,
    ) -> Result<SelectionEntry> {
        let indexed = self.lookup(code, kind)?;
        let state_code = geoid::pad_state(state_code);
        let state_name = self
            .states
            .iter()
            .find(|state| state.code == state_code)
            .map_or_else(
                || indexed.record.state_name().to_string(),
                |state| state.name.clone(),
            );

        Ok(SelectionEntry {
            state_name,
            state_code,
            kind,
            jurisdiction_name: indexed.record.name().to_string(),
            jurisdiction_code: indexed.geoid.clone(),
            metric,
            metric_label: metric.label(self.years),
            value: metric_value(indexed, metric),
        })
    }

    fn lookup(&self, code: &str, kind: JurisdictionType) -> Result<&IndexedRecord> {
        self.index(kind)
            .get(code)
            .ok_or_else(|| QueryError::UnknownJurisdiction {
                code: code.to_string(),
                kind,
            })
    }
}

fn metric_value(indexed: &IndexedRecord, metric: MetricKind) -> String {
    match metric {
        MetricKind::Code => indexed.geoid.clone(),
        MetricKind::PriorPopulation | MetricKind::CurrentPopulation => {
            format_thousands(indexed.record.estimates().value(metric))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use census_ingest::{Dataset, RawRow};
    use census_model::EstimateYears;

    fn engine() -> Engine {
        let places = Dataset::new(
            JurisdictionType::Place,
            "places",
            vec![
                RawRow::from_pairs([
                    ("SUMLEV", "162"),
                    ("STATE", "06"),
                    ("PLACE", "00002"),
                    ("NAME", "Alpine"),
                    ("STNAME", "California"),
                    ("POPESTIMATE2024", "5000"),
                ]),
                RawRow::from_pairs([
                    ("SUMLEV", "162"),
                    ("STATE", "06"),
                    ("PLACE", "00135"),
                    ("NAME", "Adelanto"),
                    ("STNAME", "California"),
                    ("POPESTIMATE2023", "38046"),
                    ("POPESTIMATE2024", "n/a"),
                ]),
            ],
        );
        let counties = Dataset::new(JurisdictionType::County, "counties", Vec::new());
        Engine::build(&places, &counties, EstimateYears::default()).0
    }

    #[test]
    fn options_are_sorted_by_name() {
        let options = engine().options_for("06", JurisdictionType::Place);
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Adelanto", "Alpine"]);
    }

    #[test]
    fn options_for_unknown_state_or_type_are_empty() {
        let engine = engine();
        assert!(engine.options_for("48", JurisdictionType::Place).is_empty());
        assert!(engine.options_for("06", JurisdictionType::County).is_empty());
    }

    #[test]
    fn resolves_population_with_separators() {
        let engine = engine();
        assert_eq!(
            engine
                .resolve("0600002", JurisdictionType::Place, MetricKind::CurrentPopulation)
                .unwrap(),
            "5,000"
        );
        assert_eq!(
            engine
                .resolve("0600135", JurisdictionType::Place, MetricKind::PriorPopulation)
                .unwrap(),
            "38,046"
        );
    }

    #[test]
    fn non_numeric_and_absent_estimates_are_zero() {
        let engine = engine();
        assert_eq!(
            engine
                .resolve("0600135", JurisdictionType::Place, MetricKind::CurrentPopulation)
                .unwrap(),
            "0"
        );
        assert_eq!(
            engine
                .resolve("0600002", JurisdictionType::Place, MetricKind::PriorPopulation)
                .unwrap(),
            "0"
        );
    }

    #[test]
    fn unknown_code_is_an_error() {
        let err = engine()
            .resolve("0600002", JurisdictionType::County, MetricKind::Code)
            .unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownJurisdiction {
                code: "0600002".to_string(),
                kind: JurisdictionType::County,
            }
        );
    }

    #[test]
    fn select_fills_entry() {
        let entry = engine()
            .select("6", JurisdictionType::Place, "0600002", MetricKind::CurrentPopulation)
            .unwrap();
        assert_eq!(entry.state_name, "California");
        assert_eq!(entry.state_code, "06");
        assert_eq!(entry.jurisdiction_name, "Alpine");
        assert_eq!(entry.jurisdiction_code, "0600002");
        assert_eq!(entry.metric_label, "Population 2024");
        assert_eq!(entry.value, "5,000");
    }

    #[test]
    fn metric_tokens_use_loaded_years() {
        let engine = engine();
        assert_eq!(engine.metric("pop2023"), Ok(MetricKind::PriorPopulation));
        assert!(matches!(
            engine.metric("pop1999"),
            Err(QueryError::UnknownMetric(_))
        ));
    }
}
