//! # Wavepack Viz
//!
//! Visualization core for wavepack tube-array analyses: a pseudo-isometric
//! schematic of the array, temperature sweeps of velocity and pressure drop,
//! chart-ready series, and the payload sent to the report renderer.
//!
//! ## Crate layout
//!
//! - [`analysis`]: Analyze inputs, analysis results, and their validation.
//! - [`schematic`]: Projection and primitive layout of the tube array.
//! - [`sweep`]: Density-scaled temperature sweeps.
//! - [`chart`]: Chart series for the temperature and attenuation plots.
//! - [`surface`]: Drawing surfaces that capture schematics and charts as [`artifact`]s.
//! - [`report`]: Report payload assembly, compliance checks, and text summaries.
//! - [`service`]: Typed client for the analyze and report collaborators.
//! - [`session`]: The current analysis, its rendered view, and the flow between them.
//! - [`support`]: Numeric constraints and unit conversions.
//!
//! ## Flow
//!
//! A [`Session`] validates inputs and requests an analysis through a
//! [`Client`]. Rendering reads that one snapshot, lays out the schematic,
//! sweeps the temperature range, composes both charts, and draws them on a
//! surface. A report can only be assembled from artifacts drawn for the
//! current snapshot.
//!
//! Engines in [`schematic`], [`sweep`], and [`chart`] are pure functions of
//! their inputs and can be used without a session.

pub mod analysis;
pub mod artifact;
pub mod chart;
pub mod report;
pub mod schematic;
pub mod service;
pub mod session;
pub mod support;
pub mod surface;
pub mod sweep;

#[cfg(test)]
mod test_support;

pub use service::Client;
pub use session::Session;
