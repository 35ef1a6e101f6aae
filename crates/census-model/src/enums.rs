//! Type-safe enumerations for jurisdiction queries.
//!
//! Jurisdiction types and metric kinds travel through the CLI and reports as
//! short tokens (`place`, `pop2024`); these enums keep the rest of the code
//! away from raw strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Kind of jurisdiction a dataset describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JurisdictionType {
    /// Incorporated place (city, town, village, borough).
    Place,
    /// County or county-equivalent.
    County,
}

impl JurisdictionType {
    pub const fn all() -> &'static [JurisdictionType] {
        &[Self::Place, Self::County]
    }

    /// Token used on the command line and in serialized output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Place => "place",
            Self::County => "county",
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Place => "Place",
            Self::County => "County",
        }
    }
}

impl fmt::Display for JurisdictionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JurisdictionType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("place") || trimmed.eq_ignore_ascii_case("city") {
            Ok(Self::Place)
        } else if trimmed.eq_ignore_ascii_case("county") {
            Ok(Self::County)
        } else {
            Err(ModelError::InvalidJurisdictionType(s.to_string()))
        }
    }
}

/// The two population estimate vintages a dataset carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EstimateYears {
    pub current: u16,
    pub prior: u16,
}

impl EstimateYears {
    pub const DEFAULT_CURRENT: u16 = 2024;

    /// Years for a vintage whose latest estimate is `current`.
    pub const fn ending(current: u16) -> Self {
        Self {
            current,
            prior: current.saturating_sub(1),
        }
    }

    /// Column holding the current-year estimate (`POPESTIMATE2024`).
    pub fn current_column(&self) -> String {
        format!("POPESTIMATE{}", self.current)
    }

    /// Column holding the prior-year estimate (`POPESTIMATE2023`).
    pub fn prior_column(&self) -> String {
        format!("POPESTIMATE{}", self.prior)
    }
}

impl Default for EstimateYears {
    fn default() -> Self {
        Self::ending(Self::DEFAULT_CURRENT)
    }
}

/// Which value a query asks for.
///
/// Variant order is the report column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// The canonical identifier itself.
    Code,
    /// Prior-year population estimate.
    PriorPopulation,
    /// Current-year population estimate.
    CurrentPopulation,
}

impl MetricKind {
    pub const fn all() -> &'static [MetricKind] {
        &[Self::Code, Self::PriorPopulation, Self::CurrentPopulation]
    }

    /// Token for this metric under the given estimate years (`code`, `pop2023`).
    pub fn token(&self, years: EstimateYears) -> String {
        match self {
            Self::Code => "code".to_string(),
            Self::PriorPopulation => format!("pop{}", years.prior),
            Self::CurrentPopulation => format!("pop{}", years.current),
        }
    }

    /// Display label (`FIPS Code`, `Population 2024`).
    pub fn label(&self, years: EstimateYears) -> String {
        match self {
            Self::Code => "FIPS Code".to_string(),
            Self::PriorPopulation => format!("Population {}", years.prior),
            Self::CurrentPopulation => format!("Population {}", years.current),
        }
    }

    /// Parse a metric token against the configured estimate years.
    pub fn parse(token: &str, years: EstimateYears) -> Result<Self> {
        let trimmed = token.trim();
        Self::all()
            .iter()
            .copied()
            .find(|metric| metric.token(years).eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::InvalidMetric {
                token: token.to_string(),
                expected: Self::all()
                    .iter()
                    .map(|metric| metric.token(years))
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    pub const fn is_population(&self) -> bool {
        matches!(self, Self::PriorPopulation | Self::CurrentPopulation)
    }
}
