// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit commands for the path editor
//!
//! The canvas and the point list never touch `EditorState` directly; they
//! emit an `EditCommand`, and the dispatcher applies it to produce the next
//! state.

use super::session::EditorState;
use crate::model::{Axis, PathId};
use kurbo::Point;
use rand::Rng;

/// A single user edit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditCommand {
    /// Pointer click on the input canvas (plot-area pixels)
    Click(Point),

    /// Point list "add" button next to point `after`
    AddPoint { path: PathId, after: usize },

    /// Point list "remove" button on point `index`
    RemovePoint { path: PathId, index: usize },

    /// Numeric input edit of one coordinate
    SetCoordinate {
        path: PathId,
        index: usize,
        axis: Axis,
        value: f64,
    },

    /// Point list header click
    SelectPath(PathId),
}

impl EditCommand {
    /// Apply the command, returning the next editor state
    pub fn apply<R: Rng + ?Sized>(self, state: &EditorState, rng: &mut R) -> EditorState {
        match self {
            EditCommand::Click(pixel) => state.on_canvas_click(pixel),
            EditCommand::AddPoint { path, after } => state.add_point(path, after, rng),
            EditCommand::RemovePoint { path, index } => state.remove_point(path, index),
            EditCommand::SetCoordinate {
                path,
                index,
                axis,
                value,
            } => state.set_coordinate(path, index, axis, value),
            EditCommand::SelectPath(path) => state.select_path(path),
        }
    }

    /// Whether the command can change path geometry (and so the range)
    pub fn changes_geometry(&self) -> bool {
        !matches!(self, EditCommand::SelectPath(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn commands_route_to_editor_operations() {
        let mut rng = SmallRng::seed_from_u64(3);
        let state = EditorState::default();

        let selected = EditCommand::SelectPath(PathId::Q).apply(&state, &mut rng);
        assert_eq!(selected.selected(), PathId::Q);

        let added = EditCommand::AddPoint {
            path: PathId::P,
            after: 2,
        }
        .apply(&state, &mut rng);
        assert_eq!(added.path(PathId::P).len(), 4);

        let removed = EditCommand::RemovePoint {
            path: PathId::Q,
            index: 0,
        }
        .apply(&state, &mut rng);
        assert_eq!(removed.path(PathId::Q).len(), 2);

        let edited = EditCommand::SetCoordinate {
            path: PathId::P,
            index: 0,
            axis: Axis::Y,
            value: -2.0,
        }
        .apply(&state, &mut rng);
        assert_eq!(edited.path(PathId::P).get(0), Some(Point::new(0.0, -2.0)));
    }

    #[test]
    fn only_selection_leaves_geometry_alone() {
        assert!(!EditCommand::SelectPath(PathId::P).changes_geometry());
        assert!(EditCommand::Click(Point::ZERO).changes_geometry());
    }
}
