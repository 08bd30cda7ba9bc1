//! Unit systems for displaying wavepack quantities.
//!
//! The analysis collaborator speaks imperial units (inches, feet, ft/s, psi,
//! °F, lbm). Display code picks a [`UnitSystem`] and asks it for both the
//! label text and the converted value, so no view code ever hard-codes a
//! unit string.
//!
//! ```
//! use wavepack_viz::support::units::UnitSystem;
//!
//! let si = UnitSystem::Si;
//! assert_eq!(si.labels().pressure, "kPa");
//! assert!((si.temperature(212.0) - 100.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Length, Mass, Pressure, ThermodynamicTemperature, Velocity},
    length::{foot, inch, meter, millimeter},
    mass::{kilogram, pound},
    pressure::{kilopascal, pound_force_per_square_inch},
    thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
    velocity::{foot_per_second, meter_per_second},
};

/// Unit system used for labels and displayed values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Inches, feet, ft/s, psi, °F, lbm.
    #[default]
    Imperial,
    /// Millimeters, meters, m/s, kPa, °C, kg.
    Si,
}

/// Label text for each displayed quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitLabels {
    /// Tube cross-section and wall dimensions.
    pub cross_section: &'static str,
    /// Array length along the flow direction.
    pub length: &'static str,
    pub velocity: &'static str,
    pub pressure: &'static str,
    pub temperature: &'static str,
    pub weight: &'static str,
}

impl UnitSystem {
    /// Returns the label text for this unit system.
    #[must_use]
    pub const fn labels(self) -> UnitLabels {
        match self {
            Self::Imperial => UnitLabels {
                cross_section: "in",
                length: "ft",
                velocity: "ft/s",
                pressure: "psi",
                temperature: "°F",
                weight: "lbm",
            },
            Self::Si => UnitLabels {
                cross_section: "mm",
                length: "m",
                velocity: "m/s",
                pressure: "kPa",
                temperature: "°C",
                weight: "kg",
            },
        }
    }

    /// Converts a cross-section dimension given in inches.
    #[must_use]
    pub fn cross_section(self, inches: f64) -> f64 {
        let value = Length::new::<inch>(inches);
        match self {
            Self::Imperial => inches,
            Self::Si => value.get::<millimeter>(),
        }
    }

    /// Converts an array length given in feet.
    #[must_use]
    pub fn length(self, feet: f64) -> f64 {
        let value = Length::new::<foot>(feet);
        match self {
            Self::Imperial => feet,
            Self::Si => value.get::<meter>(),
        }
    }

    /// Converts a velocity given in ft/s.
    #[must_use]
    pub fn velocity(self, feet_per_second: f64) -> f64 {
        let value = Velocity::new::<foot_per_second>(feet_per_second);
        match self {
            Self::Imperial => feet_per_second,
            Self::Si => value.get::<meter_per_second>(),
        }
    }

    /// Converts a pressure given in psi.
    #[must_use]
    pub fn pressure(self, psi: f64) -> f64 {
        let value = Pressure::new::<pound_force_per_square_inch>(psi);
        match self {
            Self::Imperial => psi,
            Self::Si => value.get::<kilopascal>(),
        }
    }

    /// Converts a temperature given in °F.
    #[must_use]
    pub fn temperature(self, fahrenheit: f64) -> f64 {
        let value = ThermodynamicTemperature::new::<degree_fahrenheit>(fahrenheit);
        match self {
            Self::Imperial => fahrenheit,
            Self::Si => value.get::<degree_celsius>(),
        }
    }

    /// Converts a weight given in lbm.
    #[must_use]
    pub fn weight(self, pounds: f64) -> f64 {
        let value = Mass::new::<pound>(pounds);
        match self {
            Self::Imperial => pounds,
            Self::Si => value.get::<kilogram>(),
        }
    }
}
