//! Integration tests for file-backed dataset sources.

use std::fs;

use census_ingest::{DataConfig, DatasetSource, IngestError};
use census_model::{EstimateYears, JurisdictionType};
use tempfile::TempDir;

const PLACES: &str = "SUMLEV,STATE,COUNTY,PLACE,COUSUB,NAME,STNAME,POPESTIMATE2023,POPESTIMATE2024
162,06,000,00002,00000,Alpine,California,4900,5000
061,06,001,00002,90050,Alpine,California,4900,5000
";

const COUNTIES: &str = "SUMLEV,REGION,DIVISION,STATE,COUNTY,STNAME,CTYNAME,POPESTIMATE2023,POPESTIMATE2024
040,4,9,06,000,California,California,38965193,39431263
050,4,9,06,001,California,Alameda County,1641869,1649060
";

fn write_config(dir: &TempDir) -> DataConfig {
    let places = dir.path().join("sub-est2024.csv");
    let counties = dir.path().join("co-est2024-alldata.csv");
    fs::write(&places, PLACES).unwrap();
    fs::write(&counties, COUNTIES).unwrap();
    DataConfig {
        places,
        counties,
        years: EstimateYears::default(),
    }
}

#[test]
fn config_sources_decode_both_datasets() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    let places = config.place_source().decode().unwrap();
    let counties = config.county_source().decode().unwrap();

    assert_eq!(places.kind, JurisdictionType::Place);
    assert_eq!(places.len(), 2);
    assert_eq!(counties.kind, JurisdictionType::County);
    assert_eq!(counties.rows[1].get("CTYNAME"), Some("Alameda County"));
}

#[test]
fn swapped_files_are_rejected() {
    let dir = TempDir::new().unwrap();
    let mut config = write_config(&dir);
    std::mem::swap(&mut config.places, &mut config.counties);

    let result = config.county_source().decode();

    assert!(matches!(result, Err(IngestError::MissingColumn { .. })));
}

#[test]
fn origin_is_the_file_path() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    let dataset = config.place_source().decode().unwrap();

    assert_eq!(dataset.origin, config.places.display().to_string());
}
