//! Parsing of `--select <type>:<geoid>:<metric>` arguments.

use std::str::FromStr;

use anyhow::{Context, Error, Result, bail};
use census_model::{JurisdictionType, geoid::STATE_WIDTH};

/// One requested report cell, before it is resolved against an engine.
///
/// The metric stays a token because `pop<year>` depends on the loaded vintage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest {
    pub kind: JurisdictionType,
    pub code: String,
    pub metric: String,
}

impl SelectionRequest {
    /// State FIPS code carried by the GEOID prefix.
    pub fn state_code(&self) -> Result<&str> {
        self.code
            .get(..STATE_WIDTH)
            .with_context(|| format!("GEOID '{}' is too short to name a state", self.code))
    }
}

impl FromStr for SelectionRequest {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split(':').map(str::trim).collect();
        let [kind, code, metric] = parts.as_slice() else {
            bail!("invalid selection '{raw}' (expected <type>:<geoid>:<metric>)");
        };
        if code.is_empty() || metric.is_empty() {
            bail!("invalid selection '{raw}' (expected <type>:<geoid>:<metric>)");
        }
        let kind = kind
            .parse::<JurisdictionType>()
            .with_context(|| format!("invalid selection '{raw}'"))?;
        Ok(Self {
            kind,
            code: (*code).to_string(),
            metric: (*metric).to_string(),
        })
    }
}
