// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Data model: the two input paths and the compute service's result

pub mod path;
pub mod payload;

pub use path::{Axis, Path, PathId, path_from_xy};
pub use payload::ResultPayload;
