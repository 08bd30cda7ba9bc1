use serde::Serialize;

use crate::analysis::{AnalysisResult, AnalyzeInputs};

/// Frequency at which shielding effectiveness is checked, Hz.
pub const ATTENUATION_CHECK_HZ: f64 = 1e9;

/// Minimum shielding effectiveness at [`ATTENUATION_CHECK_HZ`], dB.
pub const REQUIRED_ATTENUATION_DB: f64 = 80.0;

/// Pass/fail checks printed in the report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Compliance {
    pub pressure_drop_psi: f64,
    pub pressure_drop_limit_psi: f64,
    pub pressure_drop_ok: bool,

    /// Shielding effectiveness at 1 GHz, if the analysis sampled that frequency.
    pub attenuation_db: Option<f64>,

    /// `None` when the attenuation could not be checked.
    pub attenuation_ok: Option<bool>,
}

impl Compliance {
    #[must_use]
    pub fn evaluate(inputs: &AnalyzeInputs, result: &AnalysisResult) -> Self {
        let attenuation_db = result.shielding_at(ATTENUATION_CHECK_HZ);
        Self {
            pressure_drop_psi: result.pressure_drop_psi,
            pressure_drop_limit_psi: inputs.pressure_drop_limit_psi,
            pressure_drop_ok: result.pressure_drop_psi <= inputs.pressure_drop_limit_psi,
            attenuation_db,
            attenuation_ok: attenuation_db.map(|db| db >= REQUIRED_ATTENUATION_DB),
        }
    }

    /// Whether every check that could run passed.
    #[must_use]
    pub fn passes(&self) -> bool {
        self.pressure_drop_ok && self.attenuation_ok.unwrap_or(true)
    }
}
