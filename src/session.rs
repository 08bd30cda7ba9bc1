//! Analysis session state.
//!
//! A [`Session`] holds at most one current analysis [`Snapshot`] and the
//! [`RenderedView`] drawn from it. Every successful analysis gets a new
//! generation number; views and reports carry the generation they were built
//! from, so artifacts from an earlier result can never be reported against a
//! later one.
//!
//! Operations take `&mut self`, so a second analysis cannot start while one is
//! still in flight.

mod error;

pub use error::SessionError;

use tracing::{info, warn};

use crate::{
    analysis::{AnalysisResult, AnalyzeInputs},
    artifact::Artifact,
    chart::{self, Charts},
    report::{self, ReportPayload},
    schematic::{self, RenderConfig, Schematic, TubeShape},
    service::{Client, ReportDocument, Transport},
    surface::{ChartSurface, SchematicSurface},
    sweep::{self, Reference, SweepConfig, SweepPoint},
};

/// An analysis result together with the inputs that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    generation: u64,
    inputs: AnalyzeInputs,
    result: AnalysisResult,
}

impl Snapshot {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn inputs(&self) -> &AnalyzeInputs {
        &self.inputs
    }

    #[must_use]
    pub fn result(&self) -> &AnalysisResult {
        &self.result
    }
}

/// Captured images for one rendered snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifacts {
    pub schematic: Artifact,
    pub temperature_chart: Artifact,
    pub attenuation_chart: Artifact,
}

/// Everything drawn for one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    generation: u64,
    schematic: Schematic,
    sweep: Vec<SweepPoint>,
    charts: Charts,
    artifacts: Artifacts,
}

impl RenderedView {
    /// Generation of the snapshot this view was drawn from.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn schematic(&self) -> &Schematic {
        &self.schematic
    }

    #[must_use]
    pub fn sweep(&self) -> &[SweepPoint] {
        &self.sweep
    }

    #[must_use]
    pub fn charts(&self) -> &Charts {
        &self.charts
    }

    #[must_use]
    pub fn artifacts(&self) -> &Artifacts {
        &self.artifacts
    }
}

/// Current analysis and its rendered view.
#[derive(Debug, Default)]
pub struct Session {
    render_config: RenderConfig,
    sweep_config: SweepConfig,
    generation: u64,
    current: Option<Snapshot>,
    view: Option<RenderedView>,
}

impl Session {
    #[must_use]
    pub fn new(render_config: RenderConfig, sweep_config: SweepConfig) -> Self {
        Self {
            render_config,
            sweep_config,
            ..Self::default()
        }
    }

    /// The most recent successful analysis, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    /// The view drawn for the current snapshot, if it has been rendered.
    #[must_use]
    pub fn view(&self) -> Option<&RenderedView> {
        self.view
            .as_ref()
            .filter(|view| Some(view.generation) == self.current.as_ref().map(|s| s.generation))
    }

    /// Validates `inputs`, requests an analysis, and makes it current.
    ///
    /// On success the previous snapshot and its view are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Input`] if validation fails, or
    /// [`SessionError::Service`] if the request fails. In both cases the
    /// previous snapshot and view are kept.
    pub fn analyze<T: Transport>(
        &mut self,
        client: &Client<T>,
        inputs: AnalyzeInputs,
    ) -> Result<&Snapshot, SessionError> {
        let outcome = inputs
            .validate()
            .map_err(SessionError::from)
            .and_then(|()| client.analyze(&inputs).map_err(SessionError::from));

        let result = match outcome {
            Ok(result) => result,
            Err(error) => {
                warn!(%error, "analysis failed, keeping previous result");
                return Err(error);
            }
        };

        self.generation += 1;
        info!(
            generation = self.generation,
            array_dims = ?result.array_dims,
            "analysis complete"
        );

        self.view = None;
        Ok(self.current.insert(Snapshot {
            generation: self.generation,
            inputs,
            result,
        }))
    }

    /// Draws the schematic and both charts for the current snapshot.
    ///
    /// The view is stored only once every artifact has been captured.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NothingToRender`] before the first analysis,
    /// or the first error raised by the sweep, the chart composer, or the
    /// surface. A failed render leaves the stored view untouched.
    pub fn render<S>(&mut self, surface: &mut S) -> Result<&RenderedView, SessionError>
    where
        S: SchematicSurface + ChartSurface,
    {
        let snapshot = self.current.as_ref().ok_or(SessionError::NothingToRender)?;
        let inputs = &snapshot.inputs;
        let result = &snapshot.result;

        let shape = TubeShape::from_descriptor(&inputs.shape);
        let schematic = schematic::render_array(result, shape, &self.render_config);
        let sweep = sweep::sweep(
            inputs.temperature_range(),
            Reference::from(result),
            &self.sweep_config,
        )?;
        let charts = chart::compose(&sweep, result)?;

        let artifacts = Artifacts {
            schematic: surface
                .draw_schematic(&schematic)
                .map_err(SessionError::surface)?,
            temperature_chart: surface
                .draw_chart(&charts.temperature)
                .map_err(SessionError::surface)?,
            attenuation_chart: surface
                .draw_chart(&charts.attenuation)
                .map_err(SessionError::surface)?,
        };

        Ok(self.view.insert(RenderedView {
            generation: snapshot.generation,
            schematic,
            sweep,
            charts,
            artifacts,
        }))
    }

    /// Assembles the report payload for the current view.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Report`] if there is no result or the view is
    /// stale.
    pub fn assemble_report(&self) -> Result<ReportPayload, SessionError> {
        Ok(report::assemble(self.current.as_ref(), self.view.as_ref())?)
    }

    /// Assembles the report and requests the rendered document.
    ///
    /// # Errors
    ///
    /// Returns the assembly error, or [`SessionError::Service`] if the report
    /// request fails.
    pub fn export<T: Transport>(&self, client: &Client<T>) -> Result<ReportDocument, SessionError> {
        let payload = self.assemble_report()?;
        let document = client.report(&payload)?;
        info!(
            generation = self.generation,
            bytes = document.bytes().len(),
            "report exported"
        );
        Ok(document)
    }
}
