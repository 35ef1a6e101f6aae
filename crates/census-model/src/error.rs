use thiserror::Error;

/// Errors raised while parsing model tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown jurisdiction type '{0}' (expected 'place' or 'county')")]
    InvalidJurisdictionType(String),
    #[error("unknown metric '{token}' (expected one of: {expected})")]
    InvalidMetric { token: String, expected: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
