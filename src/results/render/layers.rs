// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawable layer descriptions handed to the charting sink.
//!
//! These are plain data: geometry plus fixed styling. They serialize to
//! JSON close to what a plotly-style charting library expects, but nothing
//! here depends on a particular drawing API.

use crate::theme;
use peniko::Color;
use serde::Serialize;

/// What a layer shows; lets adapters and tests pick layers by role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Heatmap,
    LLine,
    CriticalEvent,
    Traversal,
    EpsilonPoints,
    CellBorder,
    Surface,
    CrossSection,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "markers")]
    Markers,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dash {
    Solid,
    Dash,
    Dot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
    pub dash: Dash,
}

impl LineStyle {
    pub fn new(color: Color, width: f64, dash: Dash) -> Self {
        Self {
            color: theme::css(color),
            width,
            dash,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub color: String,
    pub size: f64,
}

impl MarkerStyle {
    pub fn new(color: Color, size: f64) -> Self {
        Self {
            color: theme::css(color),
            size,
        }
    }
}

/// Hover behaviour of a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Hover {
    /// Name plus per-point text
    NameText,
    /// Per-point text only
    Text,
    /// No hover label
    Skip,
    /// Coordinates
    Xyz,
}

/// Contour banding: levels from `start` to `end` every `size`.
///
/// `start == end` with `size == 0` is a single level set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contours {
    pub start: f64,
    pub end: f64,
    pub size: f64,
}

impl Contours {
    pub fn is_level_set(&self) -> bool {
        self.size == 0.0 && self.start == self.end
    }
}

/// The ε grid of the free-space diagram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapLayer {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
    /// `None` draws the raw grid without banding
    pub contours: Option<Contours>,
}

/// A 2D polyline and/or marker trace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub kind: LayerKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerStyle>,
    /// Hover text, either one per point or a single shared entry
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    pub hover: Hover,
}

/// A layer of the main 2D plot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layer2d {
    Heatmap(HeatmapLayer),
    Trace(Trace),
}

impl Layer2d {
    pub fn kind(&self) -> LayerKind {
        match self {
            Layer2d::Heatmap(_) => LayerKind::Heatmap,
            Layer2d::Trace(trace) => trace.kind,
        }
    }
}

/// Straight line overlaid on the 2D plot in data coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    pub kind: LayerKind,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub line: LineStyle,
}

/// The ε surface of the 3D view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceLayer {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
}

/// A 3D polyline and/or marker trace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace3d {
    pub kind: LayerKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerStyle>,
}

/// A layer of the 3D scene
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layer3d {
    Surface(SurfaceLayer),
    Trace(Trace3d),
}

impl Layer3d {
    pub fn kind(&self) -> LayerKind {
        match self {
            Layer3d::Surface(_) => LayerKind::Surface,
            Layer3d::Trace(trace) => trace.kind,
        }
    }
}
