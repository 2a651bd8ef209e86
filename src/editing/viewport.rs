// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Data ↔ screen transform for the input canvas.
//!
//! The transform is a pair of linear maps: x grows to the right, y grows
//! upward in data space but downward on screen. Screen coordinates here are
//! relative to the plot area, i.e. the canvas minus its margins; use
//! [`Scale::to_canvas`] and [`Scale::from_canvas`] to cross the margin.

use super::range::InputRange;
use crate::settings;
use kurbo::{Affine, Point, Size, Vec2};

/// Margins between the canvas edge and the plot area (pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Margins {
    pub fn uniform(margin: f64) -> Self {
        Self {
            left: margin,
            top: margin,
            right: margin,
            bottom: margin,
        }
    }

    fn offset(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(settings::canvas::MARGIN)
    }
}

/// Invertible data → plot-area mapping
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    range: InputRange,
    inner: Size,
    margins: Margins,
    transform: Affine,
    inverse: Affine,
}

impl Scale {
    /// Build the mapping `range → [0, inner_width] × [inner_height, 0]` for
    /// a canvas of `canvas` pixels with the given margins.
    pub fn new(range: InputRange, canvas: Size, margins: Margins) -> Self {
        let inner = Size::new(
            (canvas.width - margins.left - margins.right).max(0.0),
            (canvas.height - margins.top - margins.bottom).max(0.0),
        );

        // The range always covers [0, 10], but keep a zero span from
        // producing NaNs if a caller hands in something else.
        let sx = inner.width / nonzero(range.x.span());
        let sy = inner.height / nonzero(range.y.span());

        // screen.x = (x - x_min) * sx
        // screen.y = inner_height - (y - y_min) * sy
        let transform = Affine::new([
            sx,
            0.0,
            0.0,
            -sy,
            -range.x.min * sx,
            inner.height + range.y.min * sy,
        ]);

        Self {
            range,
            inner,
            margins,
            transform,
            inverse: transform.inverse(),
        }
    }

    pub fn range(&self) -> &InputRange {
        &self.range
    }

    pub fn inner_size(&self) -> Size {
        self.inner
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// The data → plot-area transform
    pub fn affine(&self) -> Affine {
        self.transform
    }

    /// Data point to plot-area pixel
    pub fn forward(&self, point: Point) -> Point {
        self.transform * point
    }

    /// Plot-area pixel to data point
    pub fn invert(&self, pixel: Point) -> Point {
        self.inverse * pixel
    }

    /// Plot-area pixel to canvas pixel
    pub fn to_canvas(&self, pixel: Point) -> Point {
        pixel + self.margins.offset()
    }

    /// Canvas pixel to plot-area pixel
    pub fn from_canvas(&self, pixel: Point) -> Point {
        pixel - self.margins.offset()
    }
}

fn nonzero(span: f64) -> f64 {
    if span.abs() < f64::EPSILON { 1.0 } else { span }
}
