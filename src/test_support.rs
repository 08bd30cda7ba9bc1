//! Shared fixtures for unit tests.

use std::{cell::RefCell, collections::VecDeque};

use thiserror::Error;

use crate::{
    analysis::{AnalysisResult, AnalyzeInputs},
    service::{Client, Response, Transport},
};

/// Nominal rectangular-array inputs.
pub(crate) fn inputs() -> AnalyzeInputs {
    AnalyzeInputs {
        width_in: 2.0,
        height_in: 1.5,
        wall_in: 0.1,
        length_in: 120.0,
        shape: "Rectangular".into(),
        config: "Inline".into(),
        material: "Stainless Steel".into(),
        fluid: "Air".into(),
        target_velocity_fts: 30.0,
        pressure_drop_limit_psi: 0.5,
        temperature_min_f: 0.0,
        temperature_max_f: 100.0,
    }
}

/// A 12 × 12 array result consistent with [`inputs`].
pub(crate) fn result() -> AnalysisResult {
    AnalysisResult {
        array_dims: (12, 12),
        width_in: 2.0,
        height_in: 1.5,
        wall_in: 0.1,
        length_ft: 10.0,
        velocity_fts: 30.0,
        pressure_drop_psi: 0.25,
        total_weight_lbm: 4.2,
        cutoff_ghz: 3.7,
        frequencies_hz: vec![1e5, 1e6, 1e7, 1e8, 1e9, 1e10],
        shielding_db: vec![0.1, 0.9, 8.7, 87.0, 870.0, 8700.0],
    }
}

pub(crate) fn client(transport: FakeTransport) -> Client<FakeTransport> {
    Client::new(transport)
}

#[derive(Debug, Error)]
#[error("connection refused")]
pub(crate) struct Unreachable;

/// Transport that replays scripted responses and records every request.
#[derive(Debug, Default)]
pub(crate) struct FakeTransport {
    script: RefCell<VecDeque<Result<Response, Unreachable>>>,
    requests: RefCell<Vec<(String, Vec<u8>)>>,
}

impl FakeTransport {
    pub(crate) fn respond(response: Response) -> Self {
        Self::default().then(response)
    }

    pub(crate) fn analysis(result: &AnalysisResult) -> Self {
        Self::default().then_analysis(result)
    }

    pub(crate) fn unreachable() -> Self {
        let transport = Self::default();
        transport.script.borrow_mut().push_back(Err(Unreachable));
        transport
    }

    pub(crate) fn then(self, response: Response) -> Self {
        self.script.borrow_mut().push_back(Ok(response));
        self
    }

    pub(crate) fn then_analysis(self, result: &AnalysisResult) -> Self {
        self.then(Response {
            status: 200,
            content_type: "application/json".into(),
            body: serde_json::to_vec(result).unwrap(),
        })
    }

    pub(crate) fn requests(&self) -> Vec<(String, Vec<u8>)> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    type Error = Unreachable;

    fn post_json(&self, path: &str, body: &[u8]) -> Result<Response, Self::Error> {
        self.requests
            .borrow_mut()
            .push((path.to_owned(), body.to_vec()));
        self.script.borrow_mut().pop_front().unwrap_or(Err(Unreachable))
    }
}
