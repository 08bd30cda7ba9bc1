//! Temperature sweep derived from a single reference condition.
//!
//! The analysis collaborator reports one velocity and one pressure drop. The
//! sweep scales both across a temperature range with an ideal-gas density
//! approximation, holding mass flow constant:
//!
//! ```text
//! ρ(T)  = 0.075 · 460 / (T + 460)        lbm/ft³, T in °F
//! v(T)  = v₀ · 0.075 / ρ(T)
//! Δp(T) = Δp₀ · ρ(T) / 0.075
//! ```
//!
//! so `v(T) · ρ(T)` is the same at every point of a sweep.

mod config;
mod error;

pub use config::SweepConfig;
pub use error::SweepError;

use tracing::debug;
use uom::si::{
    f64::{MassDensity, Pressure, Velocity},
    mass_density::pound_per_cubic_foot,
    pressure::pound_force_per_square_inch,
    velocity::foot_per_second,
};

use crate::analysis::AnalysisResult;

/// Air density at the reference condition, lbm/ft³.
pub const REFERENCE_DENSITY: f64 = 0.075;

/// Offset from °F to (approximate) °R.
pub const RANKINE_OFFSET: f64 = 460.0;

/// Inclusive temperature range in °F.
///
/// A range with `max_f < min_f` is allowed and sweeps to nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    pub min_f: f64,
    pub max_f: f64,
}

impl TemperatureRange {
    #[must_use]
    pub const fn new(min_f: f64, max_f: f64) -> Self {
        Self { min_f, max_f }
    }
}

/// Velocity and pressure drop at the reference density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reference {
    pub velocity: Velocity,
    pub pressure_drop: Pressure,
}

impl From<&AnalysisResult> for Reference {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            velocity: Velocity::new::<foot_per_second>(result.velocity_fts),
            pressure_drop: Pressure::new::<pound_force_per_square_inch>(result.pressure_drop_psi),
        }
    }
}

/// One derived point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    /// Swept temperature, °F, exactly `min_f + k·step`.
    pub temperature_f: f64,
    pub density: MassDensity,
    pub velocity: Velocity,
    pub pressure_drop: Pressure,
}

/// Approximate air density at `temperature_f`.
///
/// # Errors
///
/// Returns [`SweepError::InvalidRange`] if `temperature_f` is not finite or is
/// at or below -460 °F, where the approximation is singular.
pub fn density(temperature_f: f64) -> Result<MassDensity, SweepError> {
    let absolute = temperature_f + RANKINE_OFFSET;
    if !temperature_f.is_finite() || absolute <= 0.0 {
        return Err(SweepError::InvalidRange { temperature_f });
    }
    Ok(MassDensity::new::<pound_per_cubic_foot>(
        REFERENCE_DENSITY * (RANKINE_OFFSET / absolute),
    ))
}

/// Sweeps `range` in fixed steps, scaling the reference condition at each point.
///
/// Points are generated at `min_f + k·step` for every `k` that stays within
/// `max_f`, so both ends are included when the span is a whole number of steps.
///
/// # Errors
///
/// Returns [`SweepError::InvalidRange`] if a bound is not finite or any swept
/// temperature is at or below -460 °F, and [`SweepError::TooManyPoints`] if
/// the range would exceed the configured point limit.
pub fn sweep(
    range: TemperatureRange,
    reference: Reference,
    config: &SweepConfig,
) -> Result<Vec<SweepPoint>, SweepError> {
    for bound in [range.min_f, range.max_f] {
        if !bound.is_finite() {
            return Err(SweepError::InvalidRange {
                temperature_f: bound,
            });
        }
    }

    if range.max_f < range.min_f {
        debug!(?range, "inverted temperature range, nothing to sweep");
        return Ok(Vec::new());
    }

    let step = config.step();
    // Tolerance keeps a whole-step span from losing its last point to rounding.
    let steps = ((range.max_f - range.min_f) / step + 1e-9).floor();
    if steps >= config.max_points() as f64 {
        return Err(SweepError::TooManyPoints {
            requested: steps + 1.0,
            max: config.max_points(),
        });
    }

    let v0 = reference.velocity.get::<foot_per_second>();
    let dp0 = reference.pressure_drop.get::<pound_force_per_square_inch>();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let points = (0..=steps as usize)
        .map(|k| -> Result<SweepPoint, SweepError> {
            #[allow(clippy::cast_precision_loss)]
            let t = range.min_f + k as f64 * step;
            let rho = density(t)?.get::<pound_per_cubic_foot>();

            Ok(SweepPoint {
                temperature_f: t,
                density: MassDensity::new::<pound_per_cubic_foot>(rho),
                velocity: Velocity::new::<foot_per_second>(v0 * (REFERENCE_DENSITY / rho)),
                pressure_drop: Pressure::new::<pound_force_per_square_inch>(
                    dp0 * (rho / REFERENCE_DENSITY),
                ),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(points = points.len(), ?range, "temperature sweep complete");
    Ok(points)
}
