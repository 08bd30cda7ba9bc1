//! Report payload assembly.
//!
//! A [`ReportPayload`] bundles the submitted inputs, the analysis result, and
//! the three artifacts captured from the last render. It is built on demand,
//! handed to the report collaborator, and dropped.

mod compliance;
mod error;
mod summary;

pub use compliance::{ATTENUATION_CHECK_HZ, Compliance, REQUIRED_ATTENUATION_DB};
pub use error::ReportError;
pub use summary::render_summary;

use serde::Serialize;

use crate::{
    analysis::{AnalysisResult, AnalyzeInputs},
    artifact::Artifact,
    session::{RenderedView, Snapshot},
};

/// Body of a report request.
#[derive(Debug, Clone, Serialize)]
pub struct ReportPayload {
    /// Inputs exactly as submitted.
    pub inputs: AnalyzeInputs,

    pub results: AnalysisResult,

    pub schematic: Artifact,

    #[serde(rename = "chartPT")]
    pub temperature_chart: Artifact,

    #[serde(rename = "chartAF")]
    pub attenuation_chart: Artifact,

    /// Whether the schematic shows a sample of the array rather than every tube.
    pub schematic_truncated: bool,

    /// Tube counts drawn in the schematic.
    pub schematic_dims: (u32, u32),

    pub compliance: Compliance,
}

impl ReportPayload {
    /// Encodes the payload as a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Assembles a report payload from the current snapshot and its rendered view.
///
/// # Errors
///
/// Returns [`ReportError::NoResult`] if no analysis has completed, and
/// [`ReportError::StaleArtifacts`] if the view is missing or was drawn for a
/// different snapshot.
pub fn assemble(
    snapshot: Option<&Snapshot>,
    view: Option<&RenderedView>,
) -> Result<ReportPayload, ReportError> {
    let snapshot = snapshot.ok_or(ReportError::NoResult)?;

    let view = view
        .filter(|view| view.generation() == snapshot.generation())
        .ok_or(ReportError::StaleArtifacts {
            snapshot: snapshot.generation(),
            rendered: view.map(RenderedView::generation),
        })?;

    let artifacts = view.artifacts();
    let schematic = view.schematic();

    Ok(ReportPayload {
        inputs: snapshot.inputs().clone(),
        results: snapshot.result().clone(),
        schematic: artifacts.schematic.clone(),
        temperature_chart: artifacts.temperature_chart.clone(),
        attenuation_chart: artifacts.attenuation_chart.clone(),
        schematic_truncated: schematic.truncated,
        schematic_dims: schematic.rendered_dims,
        compliance: Compliance::evaluate(snapshot.inputs(), snapshot.result()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        session::Session,
        surface::HeadlessSurface,
        test_support::{FakeTransport, client, inputs, result},
    };

    fn rendered_session() -> Session {
        let client = client(FakeTransport::analysis(&result()));
        let mut session = Session::default();
        session.analyze(&client, inputs()).unwrap();
        session.render(&mut HeadlessSurface::default()).unwrap();
        session
    }

    #[test]
    fn no_result_before_first_analysis() {
        let session = Session::default();
        assert_eq!(
            assemble(session.current(), session.view()).unwrap_err(),
            ReportError::NoResult
        );
    }

    #[test]
    fn unrendered_snapshot_is_stale() {
        let client = client(FakeTransport::analysis(&result()));
        let mut session = Session::default();
        session.analyze(&client, inputs()).unwrap();

        assert_eq!(
            assemble(session.current(), session.view()).unwrap_err(),
            ReportError::StaleArtifacts {
                snapshot: 1,
                rendered: None,
            }
        );
    }

    #[test]
    fn echoes_inputs_verbatim() {
        let session = rendered_session();
        let payload = assemble(session.current(), session.view()).unwrap();

        assert_eq!(payload.inputs, inputs());
        assert_eq!(payload.results, result());
        assert!(!payload.schematic_truncated);
        assert_eq!(payload.schematic_dims, (12, 12));
    }

    #[test]
    fn serializes_with_wire_names() {
        let session = rendered_session();
        let payload = assemble(session.current(), session.view()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&payload.to_json().unwrap()).unwrap();

        assert_eq!(json["inputs"]["material"], "Stainless Steel");
        assert_eq!(json["results"]["array_dims"], serde_json::json!([12, 12]));
        let schematic = json["schematic"].as_str().unwrap();
        assert!(schematic.starts_with("data:image/svg+xml;base64,"), "{schematic}");
        for key in ["chartPT", "chartAF"] {
            let uri = json[key].as_str().unwrap();
            assert!(uri.starts_with("data:image/png;base64,"), "{key}: {uri}");
        }
        assert_eq!(json["schematic_truncated"], false);
        assert_eq!(json["compliance"]["pressure_drop_ok"], true);
    }
}
