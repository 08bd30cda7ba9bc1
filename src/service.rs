//! Calls to the analysis and report collaborators.
//!
//! The wire is abstracted behind [`Transport`], which posts a JSON body to a
//! path and hands back the raw response. [`Client`] owns the encoding and the
//! contract checks on top of it.

mod error;

pub use error::ServiceError;

use tracing::debug;

use crate::{
    analysis::{AnalysisResult, AnalyzeInputs},
    report::ReportPayload,
};

/// Path of the analyze endpoint.
pub const ANALYZE_PATH: &str = "/analyze";

/// Path of the report endpoint.
pub const REPORT_PATH: &str = "/report";

/// File name offered for a downloaded report.
pub const REPORT_FILE_NAME: &str = "wavepack_report.pdf";

const REPORT_CONTENT_TYPE: &str = "application/pdf";

/// Raw response from a collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl Response {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Posts JSON request bodies to a collaborator.
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Posts `body` as `application/json` to `path`.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the request could not be completed.
    /// A completed request with a non-success status is not an error here.
    fn post_json(&self, path: &str, body: &[u8]) -> Result<Response, Self::Error>;
}

/// Binary report returned by the report collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    content_type: String,
    bytes: Vec<u8>,
}

impl ReportDocument {
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Name to save the document under.
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        REPORT_FILE_NAME
    }
}

/// Typed client over a [`Transport`].
#[derive(Debug, Clone)]
pub struct Client<T> {
    transport: T,
}

impl<T: Transport> Client<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Requests an analysis and checks the result against the contract.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the request fails, is rejected, or the
    /// response breaks the analysis result contract.
    pub fn analyze(&self, inputs: &AnalyzeInputs) -> Result<AnalysisResult, ServiceError> {
        let body = serde_json::to_vec(inputs).map_err(ServiceError::Encode)?;
        let response = self.post(ANALYZE_PATH, &body)?;
        let result = AnalysisResult::from_json(&response.body)?;
        debug!(array_dims = ?result.array_dims, "analysis received");
        Ok(result)
    }

    /// Requests a rendered report document.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the request fails, is rejected, or the
    /// response is not a non-empty PDF document.
    pub fn report(&self, payload: &ReportPayload) -> Result<ReportDocument, ServiceError> {
        let body = payload.to_json().map_err(ServiceError::Encode)?;
        let response = self.post(REPORT_PATH, &body)?;

        if !response.content_type.starts_with(REPORT_CONTENT_TYPE) {
            return Err(ServiceError::UnexpectedContentType(response.content_type));
        }
        if response.body.is_empty() {
            return Err(ServiceError::EmptyDocument);
        }

        debug!(bytes = response.body.len(), "report received");
        Ok(ReportDocument {
            content_type: response.content_type,
            bytes: response.body,
        })
    }

    fn post(&self, path: &'static str, body: &[u8]) -> Result<Response, ServiceError> {
        let response = self
            .transport
            .post_json(path, body)
            .map_err(|source| ServiceError::Network {
                path,
                source: Box::new(source),
            })?;

        if !response.is_success() {
            return Err(ServiceError::Rejected {
                path,
                status: response.status,
                message: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        analysis::ContractError,
        test_support::{FakeTransport, client, inputs, result},
    };

    #[test]
    fn analyze_posts_wire_inputs() {
        let client = client(FakeTransport::analysis(&result()));
        let received = client.analyze(&inputs()).unwrap();

        assert_eq!(received, result());

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        let (path, body) = &requests[0];
        assert_eq!(path, ANALYZE_PATH);
        let json: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(json["a_in"], 2.0);
        assert_eq!(json["L_in"], 120.0);
        assert_eq!(json["T_max_F"], 100.0);
    }

    #[test]
    fn rejected_status_carries_message() {
        let client = client(FakeTransport::respond(Response {
            status: 422,
            content_type: "text/plain".into(),
            body: b"a_in must be positive".to_vec(),
        }));

        match client.analyze(&inputs()).unwrap_err() {
            ServiceError::Rejected {
                path,
                status,
                message,
            } => {
                assert_eq!(path, ANALYZE_PATH);
                assert_eq!(status, 422);
                assert_eq!(message, "a_in must be positive");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn transport_failure_is_network_error() {
        let client = client(FakeTransport::unreachable());
        let error = client.analyze(&inputs()).unwrap_err();
        assert_eq!(
            std::error::Error::source(&error).unwrap().to_string(),
            "connection refused"
        );
        assert!(matches!(
            error,
            ServiceError::Network { path: ANALYZE_PATH, .. }
        ));
    }

    #[test]
    fn contract_violation_is_reported() {
        let mut bad = result();
        bad.shielding_db.pop();
        let client = client(FakeTransport::analysis(&bad));

        assert!(matches!(
            client.analyze(&inputs()).unwrap_err(),
            ServiceError::Contract(ContractError::SeriesLengthMismatch {
                frequencies: 6,
                shielding: 5,
            })
        ));
    }

    #[test]
    fn report_requires_pdf() {
        use crate::{session::Session, surface::HeadlessSurface};

        let transport = FakeTransport::analysis(&result()).then(Response {
            status: 200,
            content_type: "text/html".into(),
            body: b"<html/>".to_vec(),
        });
        let client = client(transport);
        let mut session = Session::default();
        session.analyze(&client, inputs()).unwrap();
        session.render(&mut HeadlessSurface::default()).unwrap();
        let payload = session.assemble_report().unwrap();

        assert!(matches!(
            client.report(&payload).unwrap_err(),
            ServiceError::UnexpectedContentType(content_type) if content_type == "text/html"
        ));
    }
}
