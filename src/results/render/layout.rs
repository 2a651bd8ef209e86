// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Plot layouts: axes, sizes, 3D aspect and camera

use crate::model::payload::{Bounds, Lengths};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotMargin {
    pub l: f64,
    pub r: f64,
    pub t: f64,
    pub b: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotAxis {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nticks: Option<u32>,
    /// Lock this axis' scale to another axis (`"x"`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_anchor: Option<String>,
}

impl PlotAxis {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            range: None,
            nticks: None,
            scale_anchor: None,
        }
    }

    fn range(mut self, min: f64, max: f64) -> Self {
        self.range = Some([min, max]);
        self
    }

    fn nticks(mut self, n: u32) -> Self {
        self.nticks = Some(n);
        self
    }

    fn anchored_to(mut self, axis: &str) -> Self {
        self.scale_anchor = Some(axis.to_string());
        self
    }
}

/// Layout of the main free-space diagram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MainLayout {
    pub width: f64,
    pub height: f64,
    pub margin: PlotMargin,
    pub xaxis: PlotAxis,
    pub yaxis: PlotAxis,
    pub hovermode: String,
    pub showlegend: bool,
}

impl MainLayout {
    /// Axes span the grid, y is locked to x so cells stay square
    pub fn new(lengths: Lengths, width: f64) -> Self {
        Self {
            width,
            height: width * 2.0 / 3.0,
            margin: PlotMargin {
                l: 40.0,
                r: 0.0,
                t: 20.0,
                b: 40.0,
            },
            xaxis: PlotAxis::new("Path P")
                .range(0.0, lengths.p as f64)
                .nticks(10),
            yaxis: PlotAxis::new("Path Q")
                .range(0.0, lengths.q as f64)
                .anchored_to("x"),
            hovermode: "closest".to_string(),
            showlegend: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    pub center: Vec3,
    pub eye: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            center: Vec3::new(0.0, 0.0, 0.0),
            eye: Vec3::new(-0.5, -1.5, 0.1),
            up: Vec3::new(0.0, 0.0, 1.0),
        }
    }
}

/// Layout of the 3D ε surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLayout {
    pub width: f64,
    pub height: f64,
    pub aspectratio: Vec3,
    pub xaxis: PlotAxis,
    pub yaxis: PlotAxis,
    pub zaxis: PlotAxis,
    pub camera: Camera,
}

impl SceneLayout {
    /// One unit along P, Q and ε should look comparable, so the aspect
    /// ratio is normalized by the length of P.
    pub fn new(lengths: Lengths, bounds: Bounds, width: f64) -> Self {
        let p = (lengths.p as f64).max(1.0);
        Self {
            width,
            height: width * 2.0 / 3.0,
            aspectratio: Vec3::new(1.0, lengths.q as f64 / p, bounds.span() / p),
            xaxis: PlotAxis::new("Path P")
                .range(0.0, lengths.p as f64)
                .nticks(10),
            yaxis: PlotAxis::new("Path Q")
                .range(0.0, lengths.q as f64)
                .nticks(10),
            zaxis: PlotAxis::new("ε")
                .range(bounds.min(), bounds.max())
                .nticks(10),
            camera: Camera::default(),
        }
    }
}

/// Layout of the traversal cross-section plot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossSectionLayout {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub margin: PlotMargin,
    pub xaxis: PlotAxis,
    pub yaxis: PlotAxis,
    pub showlegend: bool,
}

impl CrossSectionLayout {
    pub fn new(bounds: Bounds, width: f64) -> Self {
        Self {
            title: "Traversal Cross Section".to_string(),
            width,
            height: width / 3.0,
            margin: PlotMargin {
                l: 40.0,
                r: 0.0,
                t: 40.0,
                b: 40.0,
            },
            xaxis: PlotAxis::new("time").nticks(10),
            yaxis: PlotAxis::new("ε").range(bounds.min(), bounds.max()),
            showlegend: true,
        }
    }
}
