use std::error::Error as StdError;

use thiserror::Error;

use crate::analysis::ContractError;

/// Errors raised while talking to a collaborator.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request body could not be encoded.
    #[error("failed to encode request")]
    Encode(#[source] serde_json::Error),

    /// The request did not complete.
    #[error("request to `{path}` failed")]
    Network {
        path: &'static str,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The collaborator answered with a non-success status.
    #[error("`{path}` rejected the request with status {status}: {message}")]
    Rejected {
        path: &'static str,
        status: u16,
        message: String,
    },

    /// The analysis result broke its contract.
    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error("expected a PDF document, got `{0}`")]
    UnexpectedContentType(String),

    #[error("report document is empty")]
    EmptyDocument,
}
