// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Blocking HTTP client for the Fréchet compute service

use super::error::{ComputeError, Result};
use super::request::{SubmitRequest, validate_submission};
use crate::model::ResultPayload;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Anything that turns a pair of paths into a result payload
pub trait ComputeService {
    fn submit(&self, request: &SubmitRequest) -> Result<ResultPayload>;
}

pub struct ComputeClient {
    client: Client,
    endpoint: String,
}

impl ComputeClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ComputeService for ComputeClient {
    /// Validate, post the paths, and decode the result.
    ///
    /// Invalid input fails without touching the network.
    fn submit(&self, request: &SubmitRequest) -> Result<ResultPayload> {
        validate_submission(request)?;

        tracing::info!(
            "Submitting paths to {} (p: {} points, q: {} points)",
            self.endpoint,
            request.p.len(),
            request.q.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ComputeError::Status { status });
        }

        let body = response.text()?;
        decode_response(&body)
    }
}

/// Decode a response body; a body that does not match the payload shape
/// is an error, never a partial result
pub fn decode_response(body: &str) -> Result<ResultPayload> {
    let payload = ResultPayload::from_json(body)?;
    tracing::info!(
        "Received result: {}×{} grid, {} traversals",
        payload.lengths.p,
        payload.lengths.q,
        payload.traversals.len()
    );
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::path_from_xy;

    #[test]
    fn invalid_input_never_reaches_the_network() {
        // nothing listens on this port; a transport error would mean we tried
        let client = ComputeClient::new("http://127.0.0.1:9/frechet").unwrap();
        let request = SubmitRequest {
            p: path_from_xy(&[(0.0, 0.0)]),
            q: path_from_xy(&[(1.0, -1.0), (1.0, 5.0)]),
        };
        let error = client.submit(&request).unwrap_err();
        assert!(matches!(error, ComputeError::InvalidInput { .. }));
    }

    #[test]
    fn decodes_a_service_body() {
        let body = serde_json::to_string(&crate::model::payload::fixtures::two_segment_payload())
            .unwrap();
        let payload = decode_response(&body).unwrap();
        assert_eq!(payload.lengths.p, 2);
        assert_eq!(payload.traversals.len(), 1);
    }

    #[test]
    fn malformed_body_fails_fast() {
        let error = decode_response(r#"{"lengths": {"p": 2, "q": 2}}"#).unwrap_err();
        assert!(matches!(error, ComputeError::Decode(_)));
    }
}
