//! Typed source records.
//!
//! Each retained row of the place or county dataset becomes one of these
//! records. Codes are kept exactly as they appear in the source file (without
//! padding); the canonical identifier is derived through [`crate::geoid`].

use serde::{Deserialize, Serialize};

use crate::enums::{JurisdictionType, MetricKind};
use crate::format::parse_estimate;
use crate::geoid;

/// Population estimate cells, kept as text until a metric is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimates {
    pub current: Option<String>,
    pub prior: Option<String>,
}

impl Estimates {
    /// Integer value for a population metric; absent or non-numeric cells count as zero.
    pub fn value(&self, metric: MetricKind) -> i64 {
        let cell = match metric {
            MetricKind::CurrentPopulation => self.current.as_deref(),
            MetricKind::PriorPopulation => self.prior.as_deref(),
            MetricKind::Code => None,
        };
        cell.map_or(0, parse_estimate)
    }
}

/// An incorporated place row (summary level 162).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub state_name: String,
    pub state_code: String,
    pub name: String,
    pub place_code: String,
    pub summary_level: String,
    pub estimates: Estimates,
}

impl PlaceRecord {
    pub fn geoid(&self) -> String {
        geoid::place_id(&self.state_code, &self.place_code)
    }
}

/// A county row (summary level 050).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyRecord {
    pub state_name: String,
    pub state_code: String,
    pub name: String,
    pub county_code: String,
    pub summary_level: String,
    pub estimates: Estimates,
}

impl CountyRecord {
    pub fn geoid(&self) -> String {
        geoid::county_id(&self.state_code, &self.county_code)
    }
}

/// One decoded source row, tagged by dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawRecord {
    Place(PlaceRecord),
    County(CountyRecord),
}

impl RawRecord {
    pub fn kind(&self) -> JurisdictionType {
        match self {
            Self::Place(_) => JurisdictionType::Place,
            Self::County(_) => JurisdictionType::County,
        }
    }

    pub fn geoid(&self) -> String {
        match self {
            Self::Place(record) => record.geoid(),
            Self::County(record) => record.geoid(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Place(record) => &record.name,
            Self::County(record) => &record.name,
        }
    }

    pub fn state_name(&self) -> &str {
        match self {
            Self::Place(record) => &record.state_name,
            Self::County(record) => &record.state_name,
        }
    }

    /// Padded 2-digit state code.
    pub fn state_code(&self) -> String {
        match self {
            Self::Place(record) => geoid::pad_state(&record.state_code),
            Self::County(record) => geoid::pad_state(&record.state_code),
        }
    }

    pub fn estimates(&self) -> &Estimates {
        match self {
            Self::Place(record) => &record.estimates,
            Self::County(record) => &record.estimates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn county(code: &str) -> CountyRecord {
        CountyRecord {
            state_name: "California".to_string(),
            state_code: "6".to_string(),
            name: "Alameda County".to_string(),
            county_code: code.to_string(),
            summary_level: "050".to_string(),
            estimates: Estimates {
                current: Some("1649060".to_string()),
                prior: None,
            },
        }
    }

    #[test]
    fn county_geoid_is_padded() {
        assert_eq!(county("1").geoid(), "06001");
    }

    #[test]
    fn raw_record_dispatch() {
        let record = RawRecord::County(county("1"));
        assert_eq!(record.kind(), JurisdictionType::County);
        assert_eq!(record.state_code(), "06");
        assert_eq!(record.name(), "Alameda County");
        assert_eq!(record.estimates().value(MetricKind::CurrentPopulation), 1_649_060);
        assert_eq!(record.estimates().value(MetricKind::PriorPopulation), 0);
    }
}
