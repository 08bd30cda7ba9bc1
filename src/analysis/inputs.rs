use serde::{Deserialize, Serialize};

use crate::{
    support::constraint::{ConstraintResult, finite, finite_non_negative, finite_positive},
    sweep::TemperatureRange,
};

use super::{InputError, catalog};

/// Parameters submitted to the analysis collaborator.
///
/// Field units follow the wire format: cross-section and length in inches,
/// velocity in ft/s, pressure in psi, temperatures in °F.
/// The report echoes this value verbatim, so it is never normalized in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeInputs {
    /// Cross-section width, or diameter for circular tubes.
    #[serde(rename = "a_in")]
    pub width_in: f64,

    #[serde(rename = "b_in")]
    pub height_in: f64,

    #[serde(rename = "t_in")]
    pub wall_in: f64,

    /// Array length along the flow direction.
    ///
    /// The collaborator reports this back in feet (`L_ft`).
    #[serde(rename = "L_in")]
    pub length_in: f64,

    /// Shape descriptor, one of [`catalog::SHAPES`].
    pub shape: String,

    /// Free-form configuration tag.
    pub config: String,

    pub material: String,

    pub fluid: String,

    #[serde(rename = "vel_target_fts")]
    pub target_velocity_fts: f64,

    #[serde(rename = "dp_limit_psi")]
    pub pressure_drop_limit_psi: f64,

    #[serde(rename = "T_min_F")]
    pub temperature_min_f: f64,

    #[serde(rename = "T_max_F")]
    pub temperature_max_f: f64,
}

impl AnalyzeInputs {
    /// Checks every field against its domain.
    ///
    /// Temperatures only need to be finite: an inverted range yields an empty
    /// sweep, and singular temperatures are reported by the sweep itself.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] encountered, in wire-field order.
    pub fn validate(&self) -> Result<(), InputError> {
        field("a_in", finite_positive(self.width_in))?;
        field("b_in", finite_positive(self.height_in))?;
        field("t_in", finite_non_negative(self.wall_in))?;
        field("L_in", finite_positive(self.length_in))?;

        if !catalog::contains(&catalog::SHAPES, &self.shape) {
            return Err(InputError::UnknownShape(self.shape.clone()));
        }
        if !catalog::contains(&catalog::MATERIALS, &self.material) {
            return Err(InputError::UnknownMaterial(self.material.clone()));
        }
        if !catalog::contains(&catalog::FLUIDS, &self.fluid) {
            return Err(InputError::UnknownFluid(self.fluid.clone()));
        }

        field("vel_target_fts", finite_positive(self.target_velocity_fts))?;
        field("dp_limit_psi", finite_positive(self.pressure_drop_limit_psi))?;
        field("T_min_F", finite(self.temperature_min_f))?;
        field("T_max_F", finite(self.temperature_max_f))?;

        Ok(())
    }

    /// Returns the temperature range to sweep.
    #[must_use]
    pub fn temperature_range(&self) -> TemperatureRange {
        TemperatureRange::new(self.temperature_min_f, self.temperature_max_f)
    }
}

fn field(name: &'static str, result: ConstraintResult<f64>) -> Result<f64, InputError> {
    result.map_err(|source| InputError::Field {
        field: name,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;
    use crate::test_support::inputs;

    #[test]
    fn accepts_nominal_inputs() {
        assert_eq!(inputs().validate(), Ok(()));
    }

    #[test]
    fn zero_wall_is_allowed() {
        let zero_wall = AnalyzeInputs {
            wall_in: 0.0,
            ..inputs()
        };
        assert_eq!(zero_wall.validate(), Ok(()));
    }

    #[test]
    fn reports_offending_field() {
        let bad = AnalyzeInputs {
            height_in: 0.0,
            ..inputs()
        };
        assert_eq!(
            bad.validate(),
            Err(InputError::Field {
                field: "b_in",
                source: ConstraintError::Zero,
            })
        );

        let bad = AnalyzeInputs {
            wall_in: -0.1,
            ..inputs()
        };
        assert_eq!(
            bad.validate(),
            Err(InputError::Field {
                field: "t_in",
                source: ConstraintError::Negative,
            })
        );

        let bad = AnalyzeInputs {
            temperature_max_f: f64::INFINITY,
            ..inputs()
        };
        assert_eq!(
            bad.validate(),
            Err(InputError::Field {
                field: "T_max_F",
                source: ConstraintError::NotFinite,
            })
        );
    }

    #[test]
    fn rejects_unknown_catalog_entries() {
        let bad = AnalyzeInputs {
            shape: "Hexagonal".into(),
            ..inputs()
        };
        assert_eq!(
            bad.validate(),
            Err(InputError::UnknownShape("Hexagonal".into()))
        );

        let bad = AnalyzeInputs {
            fluid: "Steam".into(),
            ..inputs()
        };
        assert_eq!(bad.validate(), Err(InputError::UnknownFluid("Steam".into())));
    }

    #[test]
    fn inverted_temperature_range_is_valid_input() {
        let inverted = AnalyzeInputs {
            temperature_min_f: 60.0,
            temperature_max_f: 40.0,
            ..inputs()
        };
        assert_eq!(inverted.validate(), Ok(()));
    }

    #[test]
    fn serializes_with_wire_names() {
        let json = serde_json::to_value(inputs()).unwrap();
        assert_eq!(json["a_in"], 2.0);
        assert_eq!(json["L_in"], 120.0);
        assert_eq!(json["vel_target_fts"], 30.0);
        assert_eq!(json["T_max_F"], 100.0);
        assert_eq!(json["shape"], "Rectangular");
    }
}
