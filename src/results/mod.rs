// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Result view: visibility toggles, the freespace ε slider and the renderer

pub mod render;
pub mod slider;
pub mod visibility;

pub use render::{RenderModel, RendererConfig, render, render_with};
pub use slider::FreespaceSlider;
pub use visibility::{Setting, VisibilitySettings};

/// A single interaction with the result view
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultCommand {
    /// Checkbox flipped
    Toggle(Setting),
    /// Slider thumb dragged to ε
    SlideEpsilon(f64),
    /// Slider thumb released at ε
    CommitEpsilon(f64),
}
