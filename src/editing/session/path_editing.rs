// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Path editing methods for EditorState: canvas clicks, point list
//! add/remove, coordinate edits and the derived marker geometry

use super::EditorState;
use crate::editing::marker::{self, Marker};
use crate::model::{Axis, PathId};
use crate::settings;
use kurbo::Point;
use rand::Rng;

impl EditorState {
    /// Append the clicked point to the selected path.
    ///
    /// `pixel` is in plot-area coordinates. The data point is rounded to
    /// two decimals per axis. Clicks only ever append.
    pub fn on_canvas_click(&self, pixel: Point) -> Self {
        let data = self.scale().invert(pixel);
        let precision = settings::canvas::CLICK_PRECISION;
        let point = Point::new(
            settings::round_to(data.x, precision),
            settings::round_to(data.y, precision),
        );

        let id = self.selected();
        tracing::debug!("Click at {:?} appends {:?} to path {}", pixel, point, id);
        self.with_path(id, self.path(id).with_pushed(point))
    }

    /// Insert a random point right after `after_index`.
    ///
    /// The point is drawn uniformly from the current input range, not from
    /// the path's own geometry.
    pub fn add_point<R: Rng + ?Sized>(&self, id: PathId, after_index: usize, rng: &mut R) -> Self {
        let point = self.input_range().random_point(rng);
        let path = self.path(id).with_inserted(after_index.saturating_add(1), point);
        tracing::debug!("Added {:?} to path {} after index {}", point, id, after_index);
        self.with_path(id, path)
    }

    /// Remove the point at `index`, unless that would leave fewer than two
    /// points. Rejected removals return an identical record.
    pub fn remove_point(&self, id: PathId, index: usize) -> Self {
        let path = self.path(id);
        if path.len() <= settings::editing::MIN_PATH_POINTS {
            tracing::debug!(
                "Ignoring removal from path {}: only {} points left",
                id,
                path.len()
            );
            return self.clone();
        }
        match path.without(index) {
            Some(path) => self.with_path(id, path),
            None => self.clone(),
        }
    }

    /// Replace one coordinate of one point. Non-finite values are rejected
    /// and return an identical record.
    pub fn set_coordinate(&self, id: PathId, index: usize, axis: Axis, value: f64) -> Self {
        if !value.is_finite() {
            tracing::warn!(
                "Ignoring non-finite coordinate {} for point {} on path {}",
                value,
                index,
                id
            );
            return self.clone();
        }
        match self.path(id).with_coordinate(index, axis, value) {
            Some(path) => self.with_path(id, path),
            None => {
                tracing::debug!("No point {} on path {}", index, id);
                self.clone()
            }
        }
    }

    /// Direction markers for path `id`, in plot-area coordinates
    pub fn markers(&self, id: PathId) -> Vec<Marker> {
        marker::markers(self.path(id).points(), &self.scale())
    }

    /// Vertices of path `id` in plot-area coordinates
    pub fn screen_polyline(&self, id: PathId) -> Vec<Point> {
        let scale = self.scale();
        self.path(id).iter().map(|&pt| scale.forward(pt)).collect()
    }
}
