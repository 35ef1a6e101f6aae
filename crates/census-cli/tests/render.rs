//! Report rendering in CSV and JSON.

use census_cli::render::{report_headers, report_to_csv, report_to_json};
use census_model::{EstimateYears, JurisdictionType, MetricKind, Report, ResultRow};

fn row(kind: JurisdictionType, name: &str, code: &str) -> ResultRow {
    ResultRow {
        state_name: "Colorado".to_string(),
        state_code: "08".to_string(),
        kind,
        jurisdiction_name: name.to_string(),
        jurisdiction_code: code.to_string(),
        code: None,
        prior_population: None,
        current_population: None,
    }
}

fn report() -> Report {
    let mut fremont = row(JurisdictionType::County, "Fremont County", "08043");
    fremont.code = Some("08043".to_string());
    fremont.current_population = Some("50,063".to_string());

    let mut canby = row(JurisdictionType::Place, "Canby town", "0811645");
    canby.current_population = Some("1".to_string());

    Report {
        columns: vec![MetricKind::Code, MetricKind::CurrentPopulation],
        rows: vec![fremont, canby],
    }
}

#[test]
fn headers_follow_report_columns() {
    assert_eq!(
        report_headers(&report(), EstimateYears::default()),
        vec!["State", "Type", "Name", "FIPS Code", "Population 2024"]
    );
}

#[test]
fn csv_report() {
    let csv = report_to_csv(&report(), EstimateYears::default()).unwrap();
    insta::assert_snapshot!(csv, @r#"
    State,Type,Name,FIPS Code,Population 2024
    Colorado,County,Fremont County,08043,"50,063"
    Colorado,Place,Canby town,-,1
    "#);
}

#[test]
fn empty_report_has_header_only() {
    let empty = Report::default();
    let csv = report_to_csv(&empty, EstimateYears::default()).unwrap();
    assert_eq!(csv, "State,Type,Name\n");
}

#[test]
fn json_report_uses_null_for_empty_slots() {
    let json = report_to_json(&report(), EstimateYears::ending(2023)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["years"]["current"], 2023);
    assert_eq!(value["columns"][1]["token"], "pop2023");
    assert_eq!(value["columns"][1]["label"], "Population 2023");
    assert_eq!(value["rows"][0]["kind"], "county");
    assert_eq!(value["rows"][0]["current_population"], "50,063");
    assert!(value["rows"][1]["code"].is_null());
}
