// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Request body for the compute service

use super::error::{ComputeError, Result};
use crate::editing::EditorState;
use crate::model::{Path, PathId};
use crate::settings;
use serde::{Deserialize, Serialize};

/// `{"p": [{x, y}, ..], "q": [{x, y}, ..]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub p: Path,
    pub q: Path,
}

impl SubmitRequest {
    /// Snapshot of the editor's current paths.
    ///
    /// The paths share storage with the editor state, so this is cheap.
    pub fn from_editor(state: &EditorState) -> Self {
        Self {
            p: state.path(PathId::P).clone(),
            q: state.path(PathId::Q).clone(),
        }
    }
}

/// Reject paths too short to compare before anything goes over the wire
pub fn validate_submission(request: &SubmitRequest) -> Result<()> {
    for (id, path) in [(PathId::P, &request.p), (PathId::Q, &request.q)] {
        if path.len() < settings::editing::MIN_PATH_POINTS {
            return Err(ComputeError::InvalidInput {
                path: id,
                points: path.len(),
                min: settings::editing::MIN_PATH_POINTS,
            });
        }
    }
    Ok(())
}
