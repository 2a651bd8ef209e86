// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Submission of the input paths to the external compute service

pub mod client;
pub mod error;
pub mod request;

pub use client::{ComputeClient, ComputeService, decode_response};
pub use error::ComputeError;
pub use request::{SubmitRequest, validate_submission};
