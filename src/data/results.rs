// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Result view controls for AppState

use super::{AppState, Redraw};
use crate::results::{RenderModel, ResultCommand, render_with};

impl AppState {
    pub(super) fn apply_result_command(&mut self, command: ResultCommand) -> Redraw {
        match command {
            ResultCommand::Toggle(setting) => {
                self.visibility = self.visibility.toggled(setting);
                tracing::debug!("{} → {}", setting, self.visibility.get(setting));
                if self.has_result() {
                    Redraw::results()
                } else {
                    Redraw::NONE
                }
            }
            ResultCommand::SlideEpsilon(value) => {
                if let Some(slider) = &mut self.slider {
                    *slider = slider.slide(value);
                }
                Redraw::NONE
            }
            ResultCommand::CommitEpsilon(value) => {
                let Some(slider) = self.slider else {
                    return Redraw::NONE;
                };
                let (committed, rerender) = slider.commit(value, &self.visibility);
                self.slider = Some(committed);
                if rerender {
                    Redraw::results()
                } else {
                    Redraw::NONE
                }
            }
        }
    }

    /// Freespace ε the renderer uses
    pub fn freespace_epsilon(&self) -> f64 {
        self.slider.map(|s| s.value()).unwrap_or(0.0)
    }

    /// Layers for the current result, `None` while there is none
    pub fn render_model(&self) -> Option<RenderModel> {
        let payload = self.result.as_ref()?;
        Some(render_with(
            &self.renderer,
            payload,
            &self.visibility,
            self.freespace_epsilon(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::test_state;
    use crate::model::payload::fixtures::two_segment_payload;
    use crate::results::render::layers::LayerKind;
    use crate::results::{ResultCommand, Setting};

    #[test]
    fn toggles_without_result_only_change_settings() {
        let mut state = test_state();
        let redraw = state.dispatch(ResultCommand::Toggle(Setting::LLines));
        assert!(!redraw.any());
        assert!(!state.visibility.show_l_lines);
        assert!(state.render_model().is_none());
    }

    #[test]
    fn toggle_rerenders_without_new_submission() {
        let mut state = test_state();
        state.receive_payload(two_segment_payload());
        let before = state.render_model().unwrap();

        let redraw = state.dispatch(ResultCommand::Toggle(Setting::Traversals));
        assert!(redraw.results);
        let after = state.render_model().unwrap();
        assert!(before.main_kinds().contains(&LayerKind::Traversal));
        assert!(!after.main_kinds().contains(&LayerKind::Traversal));
        assert_eq!(after.main.shapes, before.main.shapes);
    }

    #[test]
    fn sliding_never_rerenders() {
        let mut state = test_state();
        state.receive_payload(two_segment_payload());
        state.dispatch(ResultCommand::Toggle(Setting::Freespace));

        let redraw = state.dispatch(ResultCommand::SlideEpsilon(2.0));
        assert!(!redraw.any());
        assert_eq!(state.freespace_epsilon(), 5.0990195);
        assert!((state.slider.unwrap().display_value() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn commit_rerenders_in_freespace_mode() {
        let mut state = test_state();
        state.receive_payload(two_segment_payload());

        let redraw = state.dispatch(ResultCommand::CommitEpsilon(2.0));
        assert!(!redraw.results);
        assert!((state.freespace_epsilon() - 2.0).abs() < 1e-9);

        state.dispatch(ResultCommand::Toggle(Setting::Freespace));
        let redraw = state.dispatch(ResultCommand::CommitEpsilon(3.0));
        assert!(redraw.results);

        let model = state.render_model().unwrap();
        let contours = model.heatmap().and_then(|h| h.contours).unwrap();
        assert!((contours.start - 3.0).abs() < 1e-9);
        assert!(contours.is_level_set());
    }

    #[test]
    fn commit_without_result_is_ignored() {
        let mut state = test_state();
        assert!(!state.dispatch(ResultCommand::CommitEpsilon(1.0)).any());
        assert!(state.slider.is_none());
    }
}
