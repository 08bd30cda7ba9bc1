//! Analysis inputs and results exchanged with the analysis collaborator.
//!
//! [`AnalyzeInputs`] is what the user submits; [`AnalysisResult`] is what the
//! collaborator returns. Both serialize with the collaborator's JSON field
//! names, and both are validated at the boundary: inputs before they leave
//! ([`InputError`]) and results before they replace the current snapshot
//! ([`ContractError`]).

pub mod catalog;
mod error;
mod inputs;
mod result;

pub use error::{ContractError, InputError};
pub use inputs::AnalyzeInputs;
pub use result::AnalysisResult;
