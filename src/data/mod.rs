// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Central application state (`AppState`).
//!
//! `AppState` owns the editor snapshot, the last result payload and the
//! result view controls. User input arrives as a [`Command`]; dispatching it
//! swaps in the next editor snapshot or result control state and reports
//! which view has to be drawn again. Sub-modules split the methods by
//! domain: path editing, submission, result view, and file I/O.

mod editor;
mod file_io;
mod results;
mod submission;

use crate::config::Config;
use crate::editing::{EditCommand, EditorState, Margins};
use crate::model::ResultPayload;
use crate::results::{FreespaceSlider, RendererConfig, ResultCommand, VisibilitySettings};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Any user interaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Edit(EditCommand),
    Result(ResultCommand),
}

impl From<EditCommand> for Command {
    fn from(command: EditCommand) -> Self {
        Command::Edit(command)
    }
}

impl From<ResultCommand> for Command {
    fn from(command: ResultCommand) -> Self {
        Command::Result(command)
    }
}

/// Views to draw again after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Redraw {
    /// Input canvas and point lists
    pub editor: bool,
    /// Result plots
    pub results: bool,
}

impl Redraw {
    pub const NONE: Redraw = Redraw {
        editor: false,
        results: false,
    };

    pub fn editor() -> Self {
        Self {
            editor: true,
            ..Self::NONE
        }
    }

    pub fn results() -> Self {
        Self {
            results: true,
            ..Self::NONE
        }
    }

    pub fn any(&self) -> bool {
        self.editor || self.results
    }
}

/// Main application state
pub struct AppState {
    /// Current editor snapshot
    pub editor: EditorState,

    /// Last successful result, if any. Hidden again when a submission fails.
    pub result: Option<ResultPayload>,

    /// Result layer toggles
    pub visibility: VisibilitySettings,

    /// Freespace ε; reset with every new result
    pub slider: Option<FreespaceSlider>,

    /// Error message to display, if any
    pub error_message: Option<String>,

    /// When the current result arrived (formatted time string for UI)
    pub last_computed: Option<String>,

    pub renderer: RendererConfig,

    /// Source of randomly placed points
    rng: SmallRng,
}

impl AppState {
    /// Create a fresh state with the demo session
    pub fn new(config: &Config) -> Self {
        Self::with_rng(config, SmallRng::from_os_rng())
    }

    /// Same as [`AppState::new`] with a given random source
    pub fn with_rng(config: &Config, rng: SmallRng) -> Self {
        Self {
            editor: EditorState::default().with_canvas(config.canvas.size(), Margins::default()),
            result: None,
            visibility: config.visibility,
            slider: None,
            error_message: None,
            last_computed: None,
            renderer: config.renderer(),
            rng,
        }
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// Apply one user interaction
    pub fn dispatch(&mut self, command: impl Into<Command>) -> Redraw {
        match command.into() {
            Command::Edit(edit) => self.apply_edit(edit),
            Command::Result(result) => self.apply_result_command(result),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::compute::{ComputeError, ComputeService, SubmitRequest, validate_submission};
    use std::cell::{Cell, RefCell};

    pub(crate) fn test_state() -> AppState {
        AppState::with_rng(&Config::default(), SmallRng::seed_from_u64(7))
    }

    /// What the fake service answers
    pub(crate) enum Reply {
        Payload(ResultPayload),
        Status(u16),
        Malformed,
    }

    /// In-process stand-in for the compute service
    pub(crate) struct FakeService {
        pub(crate) reply: Reply,
        pub(crate) calls: Cell<usize>,
        /// Last request that made it past validation
        pub(crate) last_request: RefCell<Option<SubmitRequest>>,
    }

    impl FakeService {
        pub(crate) fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: Cell::new(0),
                last_request: RefCell::new(None),
            }
        }
    }

    impl ComputeService for FakeService {
        fn submit(&self, request: &SubmitRequest) -> crate::compute::error::Result<ResultPayload> {
            validate_submission(request)?;
            self.calls.set(self.calls.get() + 1);
            self.last_request.replace(Some(request.clone()));
            match &self.reply {
                Reply::Payload(payload) => Ok(payload.clone()),
                Reply::Status(code) => Err(ComputeError::Status {
                    status: reqwest::StatusCode::from_u16(*code)
                        .unwrap_or(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
                }),
                Reply::Malformed => Ok(crate::compute::decode_response("{}")?),
            }
        }
    }
}
