// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual settings that never change at runtime.
//! Visual styling (colors, widths) belongs in `theme.rs`, user-tunable
//! values (server URL, canvas size) in `config.rs`.

// ============================================================================
// INPUT RANGE SETTINGS
// ============================================================================
/// Padding added on each side of the squared data window (fraction of span)
const RANGE_PADDING: f64 = 0.05;

/// The input range always contains `[0, REFERENCE_EXTENT]` on both axes
const RANGE_REFERENCE_EXTENT: f64 = 10.0;

// ============================================================================
// INPUT CANVAS SETTINGS
// ============================================================================
/// Default canvas size in pixels (square)
const CANVAS_SIZE: f64 = 500.0;

/// Margin around the plot area on every side (pixels)
const CANVAS_MARGIN: f64 = 5.0;

/// Decimal places kept when a click is converted to a data point
const CLICK_PRECISION: i32 = 2;

// ============================================================================
// PATH EDITING SETTINGS
// ============================================================================
/// Minimum number of points a path keeps in the point list editor, and
/// the minimum the compute service accepts
const MIN_PATH_POINTS: usize = 2;

// ============================================================================
// RESULT RENDERING SETTINGS
// ============================================================================
/// Number of equal contour bands spanning `bounds_l`
const CONTOUR_BANDS: u32 = 10;

/// Height added to 3D traversal lines so they stay above the surface
const TRAVERSAL_Z_LIFT: f64 = 0.01;

/// Decimal places shown in ε hover labels
const HOVER_PRECISION: i32 = 2;

/// Decimal places of the Fréchet distance shown on epsilon point markers
const DISTANCE_PRECISION: i32 = 6;

/// Default plot width (pixels); heights derive from it
const PLOT_WIDTH: f64 = 900.0;

// ============================================================================
// FREESPACE SLIDER SETTINGS
// ============================================================================
/// Number of discrete slider steps across `bounds_l`
const SLIDER_STEPS: u32 = 1000;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Data window computation
pub mod range {
    /// Padding fraction applied to both axes
    pub const PADDING: f64 = super::RANGE_PADDING;

    /// Upper end of the always-visible reference square `[0, N]²`
    pub const REFERENCE_EXTENT: f64 = super::RANGE_REFERENCE_EXTENT;
}

/// Input canvas geometry
pub mod canvas {
    pub const SIZE: f64 = super::CANVAS_SIZE;
    pub const MARGIN: f64 = super::CANVAS_MARGIN;
    pub const CLICK_PRECISION: i32 = super::CLICK_PRECISION;
}

/// Path editing limits
pub mod editing {
    /// Removal is rejected below this length
    pub const MIN_PATH_POINTS: usize = super::MIN_PATH_POINTS;
}

/// Result rendering constants
pub mod render {
    pub const CONTOUR_BANDS: u32 = super::CONTOUR_BANDS;
    pub const TRAVERSAL_Z_LIFT: f64 = super::TRAVERSAL_Z_LIFT;
    pub const HOVER_PRECISION: i32 = super::HOVER_PRECISION;
    pub const DISTANCE_PRECISION: i32 = super::DISTANCE_PRECISION;
    pub const PLOT_WIDTH: f64 = super::PLOT_WIDTH;
}

/// Freespace level-set slider
pub mod slider {
    /// Quantization of the slider range
    pub const STEPS: u32 = super::SLIDER_STEPS;
}

/// Round `value` to `places` decimal places.
///
/// Halves round toward positive infinity, so `-0.125` becomes `-0.12`
/// and `0.125` becomes `0.13`.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor + 0.5).floor() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_two_places() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(2.005_1, 2), 2.01);
        assert_eq!(round_to(-1.234, 1), -1.2);
    }

    #[test]
    fn halves_round_up_for_negative_values() {
        assert_eq!(round_to(-0.125, 2), -0.12);
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-2.5, 0), -2.0);
    }

    #[test]
    fn round_to_six_places() {
        assert_eq!(round_to(3.162_277_66, 6), 3.162278);
    }
}
