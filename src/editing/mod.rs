// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod edit_types;
pub mod marker;
pub mod range;
pub mod session;
pub mod viewport;

pub use edit_types::EditCommand;
pub use marker::Marker;
pub use range::{Extent, InputRange};
pub use session::EditorState;
pub use viewport::{Margins, Scale};
