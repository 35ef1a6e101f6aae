//! Column layout of the Census population estimate files.
//!
//! - Places: `SUB-EST<year>` (all summary levels mixed; incorporated places are `162`)
//! - Counties: `CO-EST<year>-ALLDATA` (state totals `040` and counties `050`)

use census_model::{EstimateYears, JurisdictionType};

/// Summary level of incorporated places.
pub const PLACE_SUMMARY_LEVEL: &str = "162";
/// Summary level of counties.
pub const COUNTY_SUMMARY_LEVEL: &str = "050";

/// Column names the indexer reads from one dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSchema {
    pub kind: JurisdictionType,
    pub summary_level: &'static str,
    pub state_code: &'static str,
    pub state_name: &'static str,
    pub name: &'static str,
    pub code: &'static str,
    pub current_estimate: String,
    pub prior_estimate: String,
    /// Summary level value retained by the indexer.
    pub retained_level: &'static str,
}

impl DatasetSchema {
    pub fn places(years: EstimateYears) -> Self {
        Self {
            kind: JurisdictionType::Place,
            summary_level: "SUMLEV",
            state_code: "STATE",
            state_name: "STNAME",
            name: "NAME",
            code: "PLACE",
            current_estimate: years.current_column(),
            prior_estimate: years.prior_column(),
            retained_level: PLACE_SUMMARY_LEVEL,
        }
    }

    pub fn counties(years: EstimateYears) -> Self {
        Self {
            kind: JurisdictionType::County,
            summary_level: "SUMLEV",
            state_code: "STATE",
            state_name: "STNAME",
            name: "CTYNAME",
            code: "COUNTY",
            current_estimate: years.current_column(),
            prior_estimate: years.prior_column(),
            retained_level: COUNTY_SUMMARY_LEVEL,
        }
    }

    pub fn for_kind(kind: JurisdictionType, years: EstimateYears) -> Self {
        match kind {
            JurisdictionType::Place => Self::places(years),
            JurisdictionType::County => Self::counties(years),
        }
    }

    /// Columns that must exist in a file header. Estimate columns are optional.
    pub fn required_columns(&self) -> [&'static str; 4] {
        [self.summary_level, self.state_code, self.name, self.code]
    }
}
