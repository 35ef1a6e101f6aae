//! Dataset location and vintage configuration.

use std::path::PathBuf;

use census_model::{EstimateYears, JurisdictionType};
use serde::{Deserialize, Serialize};

use crate::source::CsvFileSource;

/// Environment variable overriding the place dataset path.
pub const PLACES_ENV_VAR: &str = "CENSUS_PLACES_CSV";
/// Environment variable overriding the county dataset path.
pub const COUNTIES_ENV_VAR: &str = "CENSUS_COUNTIES_CSV";
/// Environment variable overriding the current estimate year.
pub const ESTIMATE_YEAR_ENV_VAR: &str = "CENSUS_ESTIMATE_YEAR";

/// Where the two datasets live and which estimate columns they carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    pub places: PathBuf,
    pub counties: PathBuf,
    #[serde(default)]
    pub years: EstimateYears,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::for_years(EstimateYears::default())
    }
}

impl DataConfig {
    /// Default file names of the Census vintage for `years`.
    pub fn for_years(years: EstimateYears) -> Self {
        Self {
            places: PathBuf::from(format!("data/sub-est{}.csv", years.current)),
            counties: PathBuf::from(format!("data/co-est{}-alldata.csv", years.current)),
            years,
        }
    }

    /// Defaults overridden by `CENSUS_*` environment variables.
    ///
    /// An unparsable year is ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let years = match lookup(ESTIMATE_YEAR_ENV_VAR) {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(year) => EstimateYears::ending(year),
                Err(_) => {
                    tracing::warn!(
                        var = ESTIMATE_YEAR_ENV_VAR,
                        value = %raw,
                        "ignoring invalid estimate year"
                    );
                    EstimateYears::default()
                }
            },
            None => EstimateYears::default(),
        };
        let mut config = Self::for_years(years);
        if let Some(path) = lookup(PLACES_ENV_VAR) {
            config.places = PathBuf::from(path);
        }
        if let Some(path) = lookup(COUNTIES_ENV_VAR) {
            config.counties = PathBuf::from(path);
        }
        config
    }

    pub fn place_source(&self) -> CsvFileSource {
        CsvFileSource::new(JurisdictionType::Place, &self.places, self.years)
    }

    pub fn county_source(&self) -> CsvFileSource {
        CsvFileSource::new(JurisdictionType::County, &self.counties, self.years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_follow_vintage() {
        let config = DataConfig::default();
        assert_eq!(config.places, PathBuf::from("data/sub-est2024.csv"));
        assert_eq!(config.counties, PathBuf::from("data/co-est2024-alldata.csv"));
    }

    #[test]
    fn environment_overrides_paths_and_year() {
        let config = DataConfig::from_lookup(lookup(&[
            (PLACES_ENV_VAR, "/srv/places.csv"),
            (ESTIMATE_YEAR_ENV_VAR, "2023"),
        ]));
        assert_eq!(config.places, PathBuf::from("/srv/places.csv"));
        assert_eq!(config.counties, PathBuf::from("data/co-est2023-alldata.csv"));
        assert_eq!(config.years, EstimateYears::ending(2023));
    }

    #[test]
    fn invalid_year_falls_back_to_default() {
        let config = DataConfig::from_lookup(lookup(&[(ESTIMATE_YEAR_ENV_VAR, "latest")]));
        assert_eq!(config.years, EstimateYears::default());
    }
}
