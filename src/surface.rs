//! Drawing surfaces that turn primitives and series into artifacts.
//!
//! Engines in [`schematic`](crate::schematic) and [`chart`](crate::chart)
//! only produce data. A surface draws that data and hands back the captured
//! [`Artifact`]. Returning the artifact is the completion signal: a caller
//! holding it knows the drawing it depicts has finished.

mod headless;

pub use headless::{ChartRenderError, HeadlessSurface};

use crate::{artifact::Artifact, chart::Chart, schematic::Schematic};

/// A surface that can draw the tube-array schematic.
pub trait SchematicSurface {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Draws `schematic` and captures the result.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if drawing or capture fails.
    fn draw_schematic(&mut self, schematic: &Schematic) -> Result<Artifact, Self::Error>;
}

/// A surface that can draw a chart.
pub trait ChartSurface {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Draws `chart` and captures the result.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if drawing or capture fails.
    fn draw_chart(&mut self, chart: &Chart) -> Result<Artifact, Self::Error>;
}
