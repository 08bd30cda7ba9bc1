use thiserror::Error;

/// Errors raised while assembling a report payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReportError {
    /// No analysis has completed yet.
    #[error("no analysis result to report")]
    NoResult,

    /// The captured artifacts do not depict the current analysis result.
    #[error("artifacts are stale: snapshot {snapshot}, rendered {rendered:?}")]
    StaleArtifacts {
        /// Generation of the current snapshot.
        snapshot: u64,
        /// Generation the artifacts were drawn for, if any.
        rendered: Option<u64>,
    },
}
