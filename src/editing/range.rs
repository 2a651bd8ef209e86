// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Data window of the input canvas.
//!
//! The window is derived from both paths on every edit and is never stored
//! independently. It is square in data units and always contains the
//! reference square `[0, 10]²`, so tiny or degenerate inputs still get a
//! sensible grid.

use crate::model::Path;
use crate::settings;
use kurbo::{Point, Rect};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Closed interval on one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Grow symmetrically around the center until the span is `span`
    fn widened_to(self, span: f64) -> Self {
        let extra = span - self.span();
        if extra <= 0.0 {
            return self;
        }
        Self::new(self.min - 0.5 * extra, self.max + 0.5 * extra)
    }

    fn padded(self, amount: f64) -> Self {
        Self::new(self.min - amount, self.max + amount)
    }

    fn including(self, min: f64, max: f64) -> Self {
        Self::new(self.min.min(min), self.max.max(max))
    }

    /// Value at fraction `t` of the way from `min` to `max`
    fn lerp(&self, t: f64) -> f64 {
        self.min + t * self.span()
    }
}

/// Square data window shown on the input canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRange {
    pub x: Extent,
    pub y: Extent,
}

impl InputRange {
    /// The reference square `[0, 10]²` on its own
    pub fn reference() -> Self {
        let extent = Extent::new(0.0, settings::range::REFERENCE_EXTENT);
        Self {
            x: extent,
            y: extent,
        }
    }

    /// Compute the window for the current pair of paths.
    ///
    /// 1. raw bounds over both paths;
    /// 2. the shorter axis is widened symmetrically to the longer span;
    /// 3. both axes are padded by 5 % of that span;
    /// 4. each axis is extended to cover `[0, 10]`;
    /// 5. if step 4 made the spans differ, the shorter axis is widened
    ///    symmetrically again so the window stays square.
    pub fn from_paths(p: &Path, q: &Path) -> Self {
        let bounds = match (p.bounds(), q.bounds()) {
            (Some(a), Some(b)) => a.union(b),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => return Self::reference(),
        };

        let x = Extent::new(bounds.x0, bounds.x1);
        let y = Extent::new(bounds.y0, bounds.y1);
        let span = x.span().max(y.span());
        let pad = span * settings::range::PADDING;

        let reference = settings::range::REFERENCE_EXTENT;
        let x = x.widened_to(span).padded(pad).including(0.0, reference);
        let y = y.widened_to(span).padded(pad).including(0.0, reference);

        let span = x.span().max(y.span());
        Self {
            x: x.widened_to(span),
            y: y.widened_to(span),
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y)
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x.min, self.y.min, self.x.max, self.y.max)
    }

    /// A point drawn uniformly from the window
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let tx: f64 = rng.random();
        let ty: f64 = rng.random();
        Point::new(self.x.lerp(tx), self.y.lerp(ty))
    }
}

impl Default for InputRange {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::path_from_xy;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    fn assert_square_and_covers_reference(range: &InputRange) {
        assert_close(range.x.span(), range.y.span());
        assert!(range.x.min <= 0.0 && range.x.max >= 10.0);
        assert!(range.y.min <= 0.0 && range.y.max >= 10.0);
    }

    #[test]
    fn small_paths_fall_back_to_reference_square() {
        let p = path_from_xy(&[(1.0, 1.0), (9.0, 9.0)]);
        let q = path_from_xy(&[(1.0, 9.0), (9.0, 1.0)]);
        assert_eq!(InputRange::from_paths(&p, &q), InputRange::reference());
    }

    #[test]
    fn wide_paths_expand_the_short_axis() {
        let p = path_from_xy(&[(-20.0, 0.0), (20.0, 2.0)]);
        let q = path_from_xy(&[(0.0, 1.0)]);
        let range = InputRange::from_paths(&p, &q);

        // x: span 40 padded by 2 on each side
        assert_close(range.x.min, -22.0);
        assert_close(range.x.max, 22.0);
        // y: centered on 1.0 with the same span
        assert_close(range.y.min, 1.0 - 22.0);
        assert_close(range.y.max, 1.0 + 22.0);
        assert_square_and_covers_reference(&range);
    }

    #[test]
    fn demo_paths_stay_square_after_reference_extension() {
        let p = path_from_xy(&[(0.0, 0.0), (6.0, 0.0), (0.0, 0.0)]);
        let q = path_from_xy(&[(1.0, -1.0), (1.0, 5.0), (1.0, -1.0)]);
        let range = InputRange::from_paths(&p, &q);

        assert_square_and_covers_reference(&range);
        assert!(range.contains(kurbo::Point::new(1.0, -1.0)));
        assert!(range.contains(kurbo::Point::new(6.0, 0.0)));
    }

    #[test]
    fn single_point_paths_do_not_degenerate() {
        let p = path_from_xy(&[(3.0, 3.0)]);
        let q = path_from_xy(&[(3.0, 3.0)]);
        let range = InputRange::from_paths(&p, &q);
        assert_eq!(range, InputRange::reference());
    }

    #[test]
    fn far_away_points_are_covered() {
        let p = path_from_xy(&[(100.0, 50.0), (120.0, 52.0)]);
        let q = path_from_xy(&[(110.0, 60.0)]);
        let range = InputRange::from_paths(&p, &q);
        assert_square_and_covers_reference(&range);
        for pt in p.iter().chain(q.iter()) {
            assert!(range.contains(*pt));
        }
    }

    #[test]
    fn random_points_land_inside() {
        let range = InputRange::from_paths(
            &path_from_xy(&[(-4.0, 2.0), (12.0, 3.0)]),
            &path_from_xy(&[(0.0, 0.0)]),
        );
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(range.contains(range.random_point(&mut rng)));
        }
    }
}
