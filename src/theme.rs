// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use `Color::from_rgba8(0xRR, 0xGG, 0xBB, 0xAA)`. The charting
//! sink receives them as CSS `rgba()` strings, see [`css`].

use crate::model::PathId;
use peniko::Color;

// ============================================================================
// INPUT PATHS
// ============================================================================
const PATH_P: Color = Color::from_rgb8(0x1f, 0x77, 0xb4);
const PATH_Q: Color = Color::from_rgb8(0xff, 0x7f, 0x0e);

// ============================================================================
// FREE-SPACE DIAGRAM OVERLAYS
// ============================================================================
const TRAVERSAL_LINE: Color = Color::from_rgba8(0xff, 0x00, 0x00, 0xff);
const CELL_BORDER: Color = Color::from_rgba8(0xff, 0xff, 0xff, 0x66); // α 0.4
const L_LINE: Color = Color::from_rgba8(0x22, 0xa7, 0x1f, 0xff);
const CRITICAL_EVENT: Color = Color::from_rgba8(0x00, 0x00, 0xff, 0xff);
const EPSILON_POINT: Color = Color::from_rgba8(0x00, 0x00, 0x00, 0xff);

// ============================================================================
// CATEGORY PALETTE (cross sections, indexed by traversal)
// ============================================================================
const PALETTE: [Color; 10] = [
    Color::from_rgb8(0x1f, 0x77, 0xb4),
    Color::from_rgb8(0xff, 0x7f, 0x0e),
    Color::from_rgb8(0x2c, 0xa0, 0x2c),
    Color::from_rgb8(0xd6, 0x27, 0x28),
    Color::from_rgb8(0x94, 0x67, 0xbd),
    Color::from_rgb8(0x8c, 0x56, 0x4b),
    Color::from_rgb8(0xe3, 0x77, 0xc2),
    Color::from_rgb8(0x7f, 0x7f, 0x7f),
    Color::from_rgb8(0xbc, 0xbd, 0x22),
    Color::from_rgb8(0x17, 0xbe, 0xcf),
];

// ============================================================================
// SIZES
// ============================================================================
const TRAVERSAL_WIDTH: f64 = 4.0;
const OVERLAY_WIDTH: f64 = 2.0;
const CRITICAL_MARKER_SIZE: f64 = 10.0;
const EPSILON_MARKER_SIZE: f64 = 8.0;
const SCENE_MARKER_SIZE: f64 = 4.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

pub mod input {
    use super::*;
    pub const PATH_P_COLOR: Color = PATH_P;
    pub const PATH_Q_COLOR: Color = PATH_Q;
}

pub mod diagram {
    use super::*;
    pub const TRAVERSAL_COLOR: Color = TRAVERSAL_LINE;
    pub const TRAVERSAL_WIDTH: f64 = super::TRAVERSAL_WIDTH;
    pub const BORDER_COLOR: Color = CELL_BORDER;
    pub const BORDER_WIDTH: f64 = OVERLAY_WIDTH;
    pub const L_LINE_COLOR: Color = L_LINE;
    pub const L_LINE_WIDTH: f64 = OVERLAY_WIDTH;
    pub const CRITICAL_COLOR: Color = CRITICAL_EVENT;
    pub const CRITICAL_WIDTH: f64 = OVERLAY_WIDTH;
    pub const CRITICAL_MARKER_SIZE: f64 = super::CRITICAL_MARKER_SIZE;
    pub const EPSILON_POINT_COLOR: Color = EPSILON_POINT;
    pub const EPSILON_MARKER_SIZE: f64 = super::EPSILON_MARKER_SIZE;
    pub const SCENE_MARKER_SIZE: f64 = super::SCENE_MARKER_SIZE;
}

/// Stroke and marker color of an input path
pub fn path_color(id: PathId) -> Color {
    match id {
        PathId::P => input::PATH_P_COLOR,
        PathId::Q => input::PATH_Q_COLOR,
    }
}

/// Category color for traversal `index`, cycling every ten entries
pub fn palette(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Format a color as a CSS `rgba()` string.
///
/// Alpha is written with at most two decimals, so `0x66` becomes `0.4`.
pub fn css(color: Color) -> String {
    let rgba = color.to_rgba8();
    let alpha = (f64::from(rgba.a) / 255.0 * 100.0).round() / 100.0;
    format!("rgba({}, {}, {}, {})", rgba.r, rgba.g, rgba.b, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_formats_opaque_and_translucent() {
        assert_eq!(css(diagram::TRAVERSAL_COLOR), "rgba(255, 0, 0, 1)");
        assert_eq!(css(diagram::BORDER_COLOR), "rgba(255, 255, 255, 0.4)");
        assert_eq!(css(diagram::L_LINE_COLOR), "rgba(34, 167, 31, 1)");
    }

    #[test]
    fn input_paths_match_first_palette_entries() {
        assert_eq!(css(path_color(PathId::P)), css(palette(0)));
        assert_eq!(css(path_color(PathId::Q)), css(palette(1)));
    }

    #[test]
    fn palette_wraps_after_ten() {
        assert_eq!(css(palette(0)), css(palette(10)));
        assert_eq!(css(palette(3)), css(palette(23)));
        assert_ne!(css(palette(0)), css(palette(1)));
    }
}
