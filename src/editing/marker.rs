// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Direction markers drawn at every path vertex.
//!
//! Each vertex gets a chevron pointing along the path. The heading of
//! vertex `i > 0` is the incoming segment `point[i] - point[i-1]`; the
//! first vertex borrows the heading of the first segment. A path with a
//! single point has no heading and its marker stays unrotated.

use super::viewport::Scale;
use kurbo::{Affine, BezPath, Point, Vec2};

/// SVG path data of the chevron, tip at the origin, pointing along +x
pub const CHEVRON_SVG: &str = "M-10 -10 L0 0 L-10 10";

/// The chevron as a kurbo path
pub fn chevron() -> BezPath {
    let mut path = BezPath::new();
    path.move_to((-10.0, -10.0));
    path.line_to((0.0, 0.0));
    path.line_to((-10.0, 10.0));
    path
}

/// Direction of travel at vertex `index`, in data space
pub fn heading(points: &[Point], index: usize) -> Option<Vec2> {
    if points.len() <= 1 || index >= points.len() {
        return None;
    }
    if index == 0 {
        Some(points[1] - points[0])
    } else {
        Some(points[index] - points[index - 1])
    }
}

/// Screen rotation (degrees, clockwise) for the marker at `index`.
///
/// Screen y points down, so the data-space angle is negated.
pub fn rotation_degrees(points: &[Point], index: usize) -> f64 {
    match heading(points, index) {
        Some(dir) => -dir.y.atan2(dir.x).to_degrees(),
        None => 0.0,
    }
}

/// A placed marker in plot-area coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub position: Point,
    pub rotation: f64,
}

impl Marker {
    /// Transform placing the chevron at this marker
    pub fn transform(&self) -> Affine {
        Affine::translate(self.position.to_vec2()) * Affine::rotate(self.rotation.to_radians())
    }

    /// SVG `transform` attribute equivalent
    pub fn svg_transform(&self) -> String {
        if self.rotation == 0.0 {
            format!("translate({},{})", self.position.x, self.position.y)
        } else {
            format!(
                "translate({},{}) rotate({})",
                self.position.x, self.position.y, self.rotation
            )
        }
    }
}

/// Markers for every vertex of `points` under `scale`
pub fn markers(points: &[Point], scale: &Scale) -> Vec<Marker> {
    points
        .iter()
        .enumerate()
        .map(|(i, &pt)| Marker {
            position: scale.forward(pt),
            rotation: rotation_degrees(points, i),
        })
        .collect()
}
