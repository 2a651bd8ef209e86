// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Immutable polyline values for the two input curves.
//!
//! `Path` wraps an `Arc<Vec<Point>>` so snapshots of the editor state can be
//! cloned for free. Every edit builds a new vector and a new `Arc`; the
//! points behind an existing `Path` are never touched, so a previously
//! rendered or submitted snapshot stays valid after later edits.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Which of the two input curves an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathId {
    P,
    Q,
}

impl PathId {
    /// Lowercase key used on the wire and in the point list
    pub fn key(self) -> &'static str {
        match self {
            PathId::P => "p",
            PathId::Q => "q",
        }
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Coordinate axis of a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// An ordered sequence of points; order encodes traversal direction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Point>", into = "Vec<Point>")]
pub struct Path {
    points: Arc<Vec<Point>>,
}

impl Path {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points: Arc::new(points),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Whether `self` and `other` share the same point storage
    pub fn shares_storage(&self, other: &Path) -> bool {
        Arc::ptr_eq(&self.points, &other.points)
    }

    /// A new path with `point` appended at the end
    pub fn with_pushed(&self, point: Point) -> Self {
        let mut points = Vec::with_capacity(self.len() + 1);
        points.extend_from_slice(&self.points);
        points.push(point);
        Self::new(points)
    }

    /// A new path with `point` inserted at `index`.
    ///
    /// Indices past the end append.
    pub fn with_inserted(&self, index: usize, point: Point) -> Self {
        let mut points = (*self.points).clone();
        points.insert(index.min(points.len()), point);
        Self::new(points)
    }

    /// A new path without the point at `index`, or `None` if out of range
    pub fn without(&self, index: usize) -> Option<Self> {
        if index >= self.len() {
            return None;
        }
        let mut points = (*self.points).clone();
        points.remove(index);
        Some(Self::new(points))
    }

    /// A new path with one coordinate of one point replaced, or `None` if
    /// `index` is out of range
    pub fn with_coordinate(&self, index: usize, axis: Axis, value: f64) -> Option<Self> {
        if index >= self.len() {
            return None;
        }
        let mut points = (*self.points).clone();
        match axis {
            Axis::X => points[index].x = value,
            Axis::Y => points[index].y = value,
        }
        Some(Self::new(points))
    }

    /// Axis-aligned bounds of all points, `None` for an empty path
    pub fn bounds(&self) -> Option<Rect> {
        let first = *self.points.first()?;
        let init = Rect::from_points(first, first);
        Some(
            self.points
                .iter()
                .fold(init, |rect, &pt| rect.union_pt(pt)),
        )
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl From<Path> for Vec<Point> {
    fn from(path: Path) -> Self {
        Arc::unwrap_or_clone(path.points)
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Build a path from `(x, y)` tuples
pub fn path_from_xy(coords: &[(f64, f64)]) -> Path {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}
