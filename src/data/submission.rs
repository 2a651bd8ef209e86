// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Submitting the paths and taking in results

use super::{AppState, Redraw};
use crate::compute::{ComputeError, ComputeService, SubmitRequest};
use crate::model::ResultPayload;
use crate::results::FreespaceSlider;
use chrono::Local;

impl AppState {
    /// Send the current paths to `service` and take in the answer.
    ///
    /// Input that fails validation and service failures end up in
    /// `error_message`; a service failure also hides the previous result.
    /// A payload that does not decode is returned as an error.
    pub fn submit(&mut self, service: &dyn ComputeService) -> Result<Redraw, ComputeError> {
        let request = SubmitRequest::from_editor(&self.editor);
        match service.submit(&request) {
            Ok(payload) => {
                self.receive_payload(payload);
                Ok(Redraw::results())
            }
            Err(error @ ComputeError::InvalidInput { .. }) => {
                tracing::warn!("Submission rejected: {}", error);
                self.error_message = Some(error.user_message());
                Ok(Redraw::NONE)
            }
            Err(error) if error.is_transport() => {
                tracing::error!("Submission failed: {}", error);
                self.error_message = Some(error.user_message());
                let had_result = self.result.take().is_some();
                self.slider = None;
                Ok(Redraw {
                    results: had_result,
                    ..Redraw::NONE
                })
            }
            Err(error) => {
                tracing::error!("Unusable result payload: {}", error);
                Err(error)
            }
        }
    }

    /// Replace the current result in full and reset the slider
    pub fn receive_payload(&mut self, payload: ResultPayload) {
        self.slider = Some(FreespaceSlider::for_payload(&payload));
        self.result = Some(payload);
        self.error_message = None;
        self.last_computed = Some(Local::now().format("%H:%M:%S").to_string());
    }
}
