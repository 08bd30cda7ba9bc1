use std::error::Error as StdError;

use thiserror::Error;

use crate::{
    analysis::InputError, chart::ChartError, report::ReportError, service::ServiceError,
    sweep::SweepError,
};

/// Errors raised by [`Session`](super::Session) operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid inputs")]
    Input(#[from] InputError),

    #[error("analysis service call failed")]
    Service(#[from] ServiceError),

    #[error("no analysis result to render")]
    NothingToRender,

    #[error("temperature sweep failed")]
    Sweep(#[from] SweepError),

    #[error("chart composition failed")]
    Chart(#[from] ChartError),

    #[error("drawing surface failed")]
    Surface(#[source] Box<dyn StdError + Send + Sync>),

    #[error(transparent)]
    Report(#[from] ReportError),
}

impl SessionError {
    pub(super) fn surface(error: impl StdError + Send + Sync + 'static) -> Self {
        Self::Surface(Box::new(error))
    }
}
