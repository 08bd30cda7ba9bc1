use thiserror::Error;

/// Errors raised while composing chart series.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The analysis result pairs frequency and shielding series of different
    /// lengths, which breaks the collaborator contract.
    #[error("cannot pair {frequencies} frequencies with {shielding} shielding values")]
    DataIntegrity { frequencies: usize, shielding: usize },
}
