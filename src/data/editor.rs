// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Path editing for AppState

use super::{AppState, Redraw};
use crate::editing::EditCommand;

impl AppState {
    /// Apply an edit to the current snapshot.
    ///
    /// Edits never touch the result view; a new result needs a new
    /// submission. Rejected edits leave the snapshot as it was and ask for
    /// no redraw.
    pub(super) fn apply_edit(&mut self, command: EditCommand) -> Redraw {
        let next = command.apply(&self.editor, &mut self.rng);
        if next == self.editor {
            tracing::debug!("Edit {:?} left the paths unchanged", command);
            return Redraw::NONE;
        }
        self.editor = next;
        if command.changes_geometry() {
            let range = self.editor.input_range();
            tracing::debug!(
                "Input range x [{}, {}], y [{}, {}]",
                range.x.min,
                range.x.max,
                range.y.min,
                range.y.max
            );
        }
        Redraw::editor()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::test_state;
    use crate::editing::EditCommand;
    use crate::model::{Axis, PathId};
    use kurbo::Point;

    #[test]
    fn click_appends_to_selected_path() {
        let mut state = test_state();
        let before = state.editor.clone();
        let target = state.editor.scale().forward(Point::new(2.0, 2.0));

        let redraw = state.dispatch(EditCommand::Click(target));
        assert!(redraw.editor);
        assert!(!redraw.results);

        let p = state.editor.path(PathId::P);
        assert_eq!(p.len(), 4);
        assert_eq!(p.get(3), Some(Point::new(2.0, 2.0)));
        // the previous snapshot is untouched
        assert_eq!(before.path(PathId::P).len(), 3);
    }

    #[test]
    fn rejected_remove_asks_for_no_redraw() {
        let mut state = test_state();
        state.dispatch(EditCommand::RemovePoint {
            path: PathId::Q,
            index: 0,
        });
        assert_eq!(state.editor.path(PathId::Q).len(), 2);

        let redraw = state.dispatch(EditCommand::RemovePoint {
            path: PathId::Q,
            index: 0,
        });
        assert!(!redraw.any());
        assert_eq!(state.editor.path(PathId::Q).len(), 2);
    }

    #[test]
    fn add_point_lands_inside_the_range() {
        let mut state = test_state();
        let range = state.editor.input_range();
        state.dispatch(EditCommand::AddPoint {
            path: PathId::P,
            after: 0,
        });
        let added = state.editor.path(PathId::P).get(1).unwrap();
        assert!(range.contains(added));
    }

    #[test]
    fn select_and_set_coordinate() {
        let mut state = test_state();
        assert!(state.dispatch(EditCommand::SelectPath(PathId::Q)).editor);
        assert_eq!(state.editor.selected(), PathId::Q);

        state.dispatch(EditCommand::SetCoordinate {
            path: PathId::Q,
            index: 1,
            axis: Axis::Y,
            value: 7.5,
        });
        assert_eq!(state.editor.path(PathId::Q).get(1), Some(Point::new(1.0, 7.5)));
    }
}
