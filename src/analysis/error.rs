use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors raised while validating user inputs before an analyze call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A numeric field is out of its domain.
    #[error("invalid `{field}`: {source}")]
    Field {
        /// Wire name of the offending field.
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    #[error("unknown shape `{0}`")]
    UnknownShape(String),

    #[error("unknown material `{0}`")]
    UnknownMaterial(String),

    #[error("unknown fluid `{0}`")]
    UnknownFluid(String),
}

/// Errors raised when an analysis result breaks the collaborator contract.
#[derive(Debug, Error)]
pub enum ContractError {
    /// The response body is not a well-formed analysis result.
    ///
    /// This covers missing fields as well as invalid JSON.
    #[error("malformed analysis result")]
    Malformed(#[from] serde_json::Error),

    #[error("array dimensions must be positive, got {nx} x {ny}")]
    EmptyArray { nx: u32, ny: u32 },

    /// A numeric field is out of its domain.
    #[error("invalid `{field}` in analysis result: {source}")]
    Field {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The frequency and shielding-effectiveness series are not paired.
    #[error("frequency series has {frequencies} entries but shielding series has {shielding}")]
    SeriesLengthMismatch { frequencies: usize, shielding: usize },

    #[error("frequency series is not strictly increasing at index {index}")]
    FrequencyOrder { index: usize },
}
