// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

use crate::model::PathId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ComputeError>;

/// Why a submission produced no result
#[derive(Debug, Error)]
pub enum ComputeError {
    /// Caught before anything is sent
    #[error("path {path} needs at least {min} points, it has {points}")]
    InvalidInput {
        path: PathId,
        points: usize,
        min: usize,
    },

    #[error("compute service answered {status}")]
    Status { status: reqwest::StatusCode },

    #[error("could not reach the compute service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed result payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ComputeError {
    /// Failures of the service or the connection to it, as opposed to bad
    /// local input or a broken payload contract
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Transport(_))
    }

    /// Message shown to the user
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput { .. } => self.to_string(),
            Self::Status { .. } | Self::Transport(_) => format!(
                "Computation failed: {self}. Please report this error together with the input paths."
            ),
            Self::Decode(_) => format!("Computation returned an unexpected result: {self}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_names_the_path() {
        let error = ComputeError::InvalidInput {
            path: PathId::Q,
            points: 1,
            min: 2,
        };
        assert_eq!(error.to_string(), "path q needs at least 2 points, it has 1");
        assert!(!error.is_transport());
        assert_eq!(error.user_message(), error.to_string());
    }

    #[test]
    fn status_errors_offer_a_report() {
        let error = ComputeError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert!(error.is_transport());
        assert!(error.user_message().contains("report this error"));
        assert!(error.to_string().contains("500"));
    }

    #[test]
    fn decode_errors_convert() {
        let json_error = serde_json::from_str::<u32>("nope").unwrap_err();
        let error: ComputeError = json_error.into();
        assert!(matches!(error, ComputeError::Decode(_)));
        assert!(!error.is_transport());
    }
}
