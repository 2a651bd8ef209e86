// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - the immutable state record of the path editor
//!
//! `EditorState` owns the two input paths, which one is selected, and the
//! canvas geometry. Every operation takes `&self` and returns a new record;
//! the paths of the old record are left untouched (see `model::path`), so
//! the caller can keep the previous snapshot around for diffing.

mod path_editing;

use super::range::InputRange;
use super::viewport::{Margins, Scale};
use crate::model::{Path, PathId, path_from_xy};
use crate::settings;
use kurbo::Size;

/// State of the interactive path editor
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    p: Path,
    q: Path,

    /// Path receiving canvas clicks
    selected: PathId,

    /// Full canvas size in pixels, margins included
    canvas: Size,
    margins: Margins,
}

impl EditorState {
    /// Create an editor over the given paths with the default canvas
    pub fn new(p: Path, q: Path) -> Self {
        Self {
            p,
            q,
            selected: PathId::P,
            canvas: Size::new(settings::canvas::SIZE, settings::canvas::SIZE),
            margins: Margins::default(),
        }
    }

    /// The same editor on a canvas of a different size
    pub fn with_canvas(&self, canvas: Size, margins: Margins) -> Self {
        Self {
            canvas,
            margins,
            ..self.clone()
        }
    }

    pub fn path(&self, id: PathId) -> &Path {
        match id {
            PathId::P => &self.p,
            PathId::Q => &self.q,
        }
    }

    pub fn selected(&self) -> PathId {
        self.selected
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Data window for the current paths
    pub fn input_range(&self) -> InputRange {
        InputRange::from_paths(&self.p, &self.q)
    }

    /// Transform for the current paths and canvas
    pub fn scale(&self) -> Scale {
        Scale::new(self.input_range(), self.canvas, self.margins)
    }

    /// Select the path that receives canvas clicks. Path data is unchanged.
    pub fn select_path(&self, id: PathId) -> Self {
        tracing::debug!("Selected path {}", id);
        Self {
            selected: id,
            ..self.clone()
        }
    }

    /// The record with path `id` replaced
    fn with_path(&self, id: PathId, path: Path) -> Self {
        let mut next = self.clone();
        match id {
            PathId::P => next.p = path,
            PathId::Q => next.q = path,
        }
        next
    }
}

impl Default for EditorState {
    /// The demo input the editor opens with
    fn default() -> Self {
        Self::new(
            path_from_xy(&[(0.0, 0.0), (6.0, 0.0), (0.0, 0.0)]),
            path_from_xy(&[(1.0, -1.0), (1.0, 5.0), (1.0, -1.0)]),
        )
    }
}
