//! Chart-ready series built from a sweep and an analysis result.
//!
//! Two charts come out of every analysis:
//!
//! - a temperature chart with velocity on the primary value axis and
//!   pressure drop on the secondary one, and
//! - an attenuation chart with shielding effectiveness over a logarithmic
//!   frequency axis in MHz.

mod error;
mod series;

pub use error::ChartError;
pub use series::{Axes, Chart, ChartSeries, XAxis, YAxis};

use uom::si::{pressure::pound_force_per_square_inch, velocity::foot_per_second};

use crate::{analysis::AnalysisResult, sweep::SweepPoint};

/// Hz per MHz.
const HZ_PER_MHZ: f64 = 1e6;

/// Both charts for one analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Charts {
    pub temperature: Chart,
    pub attenuation: Chart,
}

/// Composes both charts.
///
/// # Errors
///
/// Returns [`ChartError::DataIntegrity`] if the frequency and shielding
/// series in `result` differ in length.
pub fn compose(points: &[SweepPoint], result: &AnalysisResult) -> Result<Charts, ChartError> {
    Ok(Charts {
        temperature: temperature_chart(points),
        attenuation: attenuation_chart(result)?,
    })
}

/// Velocity and pressure drop against temperature.
#[must_use]
pub fn temperature_chart(points: &[SweepPoint]) -> Chart {
    let velocity = points
        .iter()
        .map(|p| (p.temperature_f, p.velocity.get::<foot_per_second>()))
        .collect();

    let pressure_drop = points
        .iter()
        .map(|p| {
            (
                p.temperature_f,
                p.pressure_drop.get::<pound_force_per_square_inch>(),
            )
        })
        .collect();

    Chart {
        title: "Pressure and Velocity vs. Temperature",
        series: vec![
            ChartSeries {
                label: "Velocity".into(),
                points: velocity,
                axes: Axes::new(XAxis::Temperature, YAxis::Velocity),
            },
            ChartSeries {
                label: "ΔP".into(),
                points: pressure_drop,
                axes: Axes::new(XAxis::Temperature, YAxis::PressureDrop),
            },
        ],
    }
}

/// Shielding effectiveness against frequency in MHz.
///
/// # Errors
///
/// Returns [`ChartError::DataIntegrity`] if the series lengths differ.
pub fn attenuation_chart(result: &AnalysisResult) -> Result<Chart, ChartError> {
    let frequencies = &result.frequencies_hz;
    let shielding = &result.shielding_db;

    if frequencies.len() != shielding.len() {
        return Err(ChartError::DataIntegrity {
            frequencies: frequencies.len(),
            shielding: shielding.len(),
        });
    }

    let points = frequencies
        .iter()
        .zip(shielding)
        .map(|(&hz, &db)| (hz / HZ_PER_MHZ, db))
        .collect();

    Ok(Chart {
        title: "Attenuation vs. Frequency",
        series: vec![ChartSeries {
            label: "Shielding Effectiveness".into(),
            points,
            axes: Axes::new(XAxis::Frequency, YAxis::Shielding),
        }],
    })
}
