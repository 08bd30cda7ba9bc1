use serde::{Deserialize, Serialize};

use crate::support::constraint::{ConstraintResult, finite, finite_non_negative, finite_positive};

use super::ContractError;

/// Output of one analyze call.
///
/// Immutable once received. A new analysis replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// True tube counts `(nx, ny)` along each grid axis.
    pub array_dims: (u32, u32),

    #[serde(rename = "a_in")]
    pub width_in: f64,

    #[serde(rename = "b_in")]
    pub height_in: f64,

    #[serde(rename = "t_in")]
    pub wall_in: f64,

    #[serde(rename = "L_ft")]
    pub length_ft: f64,

    /// Reference velocity, ft/s.
    pub velocity_fts: f64,

    /// Reference pressure drop, psi.
    #[serde(rename = "deltaP_psi")]
    pub pressure_drop_psi: f64,

    pub total_weight_lbm: f64,

    /// Waveguide cutoff frequency, GHz.
    #[serde(rename = "fc_GHz")]
    pub cutoff_ghz: f64,

    /// Frequencies in Hz, strictly increasing.
    #[serde(rename = "freqs")]
    pub frequencies_hz: Vec<f64>,

    /// Shielding effectiveness in dB, paired with `frequencies_hz`.
    #[serde(rename = "SE_db")]
    pub shielding_db: Vec<f64>,
}

impl AnalysisResult {
    /// Decodes a collaborator response body and checks it against the contract.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Malformed`] if the body cannot be decoded, or
    /// any error from [`AnalysisResult::check_contract`].
    pub fn from_json(body: &[u8]) -> Result<Self, ContractError> {
        let result: Self = serde_json::from_slice(body)?;
        result.check_contract()?;
        Ok(result)
    }

    /// Checks the invariants downstream engines rely on.
    ///
    /// # Errors
    ///
    /// Returns a [`ContractError`] describing the first violation found.
    pub fn check_contract(&self) -> Result<(), ContractError> {
        let (nx, ny) = self.array_dims;
        if nx == 0 || ny == 0 {
            return Err(ContractError::EmptyArray { nx, ny });
        }

        field("a_in", finite_positive(self.width_in))?;
        field("b_in", finite_positive(self.height_in))?;
        field("t_in", finite_non_negative(self.wall_in))?;
        field("L_ft", finite_positive(self.length_ft))?;
        field("velocity_fts", finite(self.velocity_fts))?;
        field("deltaP_psi", finite(self.pressure_drop_psi))?;

        if self.frequencies_hz.len() != self.shielding_db.len() {
            return Err(ContractError::SeriesLengthMismatch {
                frequencies: self.frequencies_hz.len(),
                shielding: self.shielding_db.len(),
            });
        }

        for (index, &hz) in self.frequencies_hz.iter().enumerate() {
            field("freqs", finite_positive(hz))?;
            if index > 0 && hz <= self.frequencies_hz[index - 1] {
                return Err(ContractError::FrequencyOrder { index });
            }
        }

        Ok(())
    }

    /// Returns the shielding effectiveness at exactly `hz`, if sampled.
    #[must_use]
    pub fn shielding_at(&self, hz: f64) -> Option<f64> {
        self.frequencies_hz
            .iter()
            .position(|&f| f == hz)
            .and_then(|index| self.shielding_db.get(index).copied())
    }
}

fn field(name: &'static str, result: ConstraintResult<f64>) -> Result<f64, ContractError> {
    result.map_err(|source| ContractError::Field {
        field: name,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_support::result;

    const BODY: &str = r#"{
        "array_dims": [12, 12],
        "velocity_fts": 30.0,
        "deltaP_psi": 0.25,
        "fc_GHz": 3.7,
        "SE_db": [0.1, 0.9, 8.7, 87.0, 870.0, 8700.0],
        "freqs": [100000, 1000000, 10000000, 100000000, 1000000000, 10000000000],
        "total_weight_lbm": 4.2,
        "a_in": 2.0,
        "b_in": 1.5,
        "L_ft": 10.0,
        "t_in": 0.1
    }"#;

    #[test]
    fn decodes_collaborator_response() {
        let result = AnalysisResult::from_json(BODY.as_bytes()).unwrap();
        assert_eq!(result.array_dims, (12, 12));
        assert_eq!(result.frequencies_hz.len(), 6);
        assert_eq!(result.frequencies_hz[4], 1e9);
        assert_eq!(result.pressure_drop_psi, 0.25);
        assert_eq!(result.shielding_at(1e9), Some(870.0));
        assert_eq!(result.shielding_at(2e9), None);
    }

    #[test]
    fn missing_field_is_malformed() {
        let body = BODY.replace(r#""velocity_fts": 30.0,"#, "");
        let err = AnalysisResult::from_json(body.as_bytes()).unwrap_err();
        assert!(matches!(err, ContractError::Malformed(_)));
    }

    #[test]
    fn rejects_unpaired_series() {
        let mut result = result();
        result.shielding_db.pop();
        assert!(matches!(
            result.check_contract(),
            Err(ContractError::SeriesLengthMismatch {
                frequencies: 6,
                shielding: 5
            })
        ));
    }

    #[test]
    fn rejects_unordered_frequencies() {
        let mut result = result();
        result.frequencies_hz.swap(1, 2);
        assert!(matches!(
            result.check_contract(),
            Err(ContractError::FrequencyOrder { index: 2 })
        ));
    }

    #[test]
    fn rejects_empty_array() {
        let mut result = result();
        result.array_dims = (0, 4);
        assert!(matches!(
            result.check_contract(),
            Err(ContractError::EmptyArray { nx: 0, ny: 4 })
        ));
    }

    #[test]
    fn fixture_satisfies_contract() {
        assert!(result().check_contract().is_ok());
    }
}
