//! Tests for census-model types.

use census_model::{
    Estimates, JurisdictionType, MetricKind, PlaceRecord, RawRecord, Selection, SelectionEntry,
    SelectionId,
};

#[test]
fn place_record_serializes_with_kind_tag() {
    let record = RawRecord::Place(PlaceRecord {
        state_name: "California".to_string(),
        state_code: "06".to_string(),
        name: "Alpine".to_string(),
        place_code: "00002".to_string(),
        summary_level: "162".to_string(),
        estimates: Estimates {
            current: Some("5000".to_string()),
            prior: None,
        },
    });
    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(json["kind"], "place");
    assert_eq!(json["name"], "Alpine");
    assert_eq!(record.geoid(), "0600002");
}

#[test]
fn selection_serializes_flat() {
    let selection = Selection {
        id: SelectionId::new(),
        entry: SelectionEntry {
            state_name: "California".to_string(),
            state_code: "06".to_string(),
            kind: JurisdictionType::Place,
            jurisdiction_name: "Alpine".to_string(),
            jurisdiction_code: "0600002".to_string(),
            metric: MetricKind::CurrentPopulation,
            metric_label: "Population 2024".to_string(),
            value: "5,000".to_string(),
        },
    };
    let json = serde_json::to_value(&selection).expect("serialize selection");
    assert_eq!(json["metric"], "current_population");
    assert_eq!(json["kind"], "place");
    assert_eq!(json["value"], "5,000");
    assert!(json["id"].is_string());

    let round: Selection = serde_json::from_value(json).expect("deserialize selection");
    assert_eq!(round, selection);
}
