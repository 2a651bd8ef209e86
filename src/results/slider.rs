// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! ε selection for the freespace level-set view.
//!
//! The slider spans `bounds_l` in 1000 steps. Dragging only updates the
//! pending value; releasing commits it. A commit asks for a re-render only
//! while the freespace view is switched on.

use super::visibility::VisibilitySettings;
use crate::model::payload::{Bounds, ResultPayload};
use crate::settings;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreespaceSlider {
    bounds: Bounds,
    value: f64,
    pending: Option<f64>,
}

impl FreespaceSlider {
    /// Slider for a freshly received payload.
    ///
    /// Starts at the first traversal's Fréchet distance, or `0` when the
    /// payload has no traversals.
    pub fn for_payload(payload: &ResultPayload) -> Self {
        let value = payload.frechet_distance().unwrap_or(0.0);
        tracing::debug!("Freespace slider reset to ε = {}", value);
        Self {
            bounds: payload.bounds_l,
            value,
            pending: None,
        }
    }

    /// Committed ε, the one the renderer uses
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value under the thumb while dragging, if it differs from the
    /// committed one
    pub fn pending(&self) -> Option<f64> {
        self.pending
    }

    /// Position shown by the thumb
    pub fn display_value(&self) -> f64 {
        self.pending.unwrap_or(self.value)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Width of one slider step
    pub fn step(&self) -> f64 {
        self.bounds.span() / f64::from(settings::slider::STEPS)
    }

    /// Clamp `value` into the bounds and snap it to the nearest step
    pub fn quantize(&self, value: f64) -> f64 {
        let step = self.step();
        let clamped = self.bounds.clamp(value);
        if step <= 0.0 {
            return self.bounds.min();
        }
        let steps = ((clamped - self.bounds.min()) / step).round();
        self.bounds.clamp(self.bounds.min() + steps * step)
    }

    /// Thumb moved; nothing is re-rendered
    pub fn slide(&self, value: f64) -> Self {
        Self {
            pending: Some(self.quantize(value)),
            ..*self
        }
    }

    /// Thumb released at `value`.
    ///
    /// Returns the committed slider and whether the result view must be
    /// rendered again.
    pub fn commit(&self, value: f64, visibility: &VisibilitySettings) -> (Self, bool) {
        let committed = Self {
            value: self.quantize(value),
            pending: None,
            ..*self
        };
        let rerender = visibility.show_freespace;
        (committed, rerender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::payload::fixtures::{empty_payload, two_segment_payload};
    use crate::results::visibility::Setting;

    #[test]
    fn starts_at_frechet_distance() {
        let slider = FreespaceSlider::for_payload(&two_segment_payload());
        assert_eq!(slider.value(), 5.0990195);
        assert_eq!(slider.pending(), None);
    }

    #[test]
    fn starts_at_zero_without_traversals() {
        let slider = FreespaceSlider::for_payload(&empty_payload());
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn quantizes_to_thousand_steps() {
        let slider = FreespaceSlider::for_payload(&two_segment_payload());
        // bounds [1, 6] → step 0.005
        assert!((slider.step() - 0.005).abs() < 1e-12);
        assert!((slider.quantize(2.0012) - 2.0).abs() < 1e-9);
        assert!((slider.quantize(2.0038) - 2.005).abs() < 1e-9);
        assert_eq!(slider.quantize(-4.0), 1.0);
        assert_eq!(slider.quantize(100.0), 6.0);
    }

    #[test]
    fn slide_only_updates_pending() {
        let slider = FreespaceSlider::for_payload(&two_segment_payload());
        let dragged = slider.slide(3.0);
        assert_eq!(dragged.value(), slider.value());
        assert!((dragged.display_value() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn commit_rerenders_only_in_freespace_mode() {
        let slider = FreespaceSlider::for_payload(&two_segment_payload());

        let hidden = VisibilitySettings::default();
        let (committed, rerender) = slider.slide(3.0).commit(3.0, &hidden);
        assert!(!rerender);
        assert!((committed.value() - 3.0).abs() < 1e-9);
        assert_eq!(committed.pending(), None);

        let shown = hidden.with(Setting::Freespace, true);
        let (_, rerender) = slider.commit(3.0, &shown);
        assert!(rerender);
    }

    #[test]
    fn degenerate_bounds_pin_to_min() {
        let mut payload = empty_payload();
        payload.bounds_l = Bounds(2.0, 2.0);
        let slider = FreespaceSlider::for_payload(&payload);
        assert_eq!(slider.quantize(7.0), 2.0);
    }
}
