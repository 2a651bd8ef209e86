// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Layer visibility toggles for the result view.
//!
//! A flat set of booleans; every combination is valid. Toggling one flag
//! only changes the presence of the layers that flag controls.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which result layers are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilitySettings {
    pub show_l_lines: bool,
    pub show_contours: bool,
    pub show_critical_events: bool,
    pub show_cell_borders: bool,
    pub show_traversals: bool,
    /// Draw the single level set at the slider's ε instead of bands
    pub show_freespace: bool,
}

impl Default for VisibilitySettings {
    fn default() -> Self {
        Self {
            show_l_lines: true,
            show_contours: true,
            show_critical_events: true,
            show_cell_borders: true,
            show_traversals: true,
            show_freespace: false,
        }
    }
}

/// One named toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Setting {
    #[serde(rename = "show_l_lines")]
    LLines,
    #[serde(rename = "show_contours")]
    Contours,
    #[serde(rename = "show_critical_events")]
    CriticalEvents,
    #[serde(rename = "show_cell_borders")]
    CellBorders,
    #[serde(rename = "show_traversals")]
    Traversals,
    #[serde(rename = "show_freespace")]
    Freespace,
}

impl Setting {
    pub const ALL: [Setting; 6] = [
        Setting::LLines,
        Setting::Contours,
        Setting::CriticalEvents,
        Setting::CellBorders,
        Setting::Traversals,
        Setting::Freespace,
    ];

    /// Field name, as used in config files and checkbox names
    pub fn name(self) -> &'static str {
        match self {
            Setting::LLines => "show_l_lines",
            Setting::Contours => "show_contours",
            Setting::CriticalEvents => "show_critical_events",
            Setting::CellBorders => "show_cell_borders",
            Setting::Traversals => "show_traversals",
            Setting::Freespace => "show_freespace",
        }
    }

    /// Checkbox label
    pub fn label(self) -> &'static str {
        match self {
            Setting::LLines => "show l-lines",
            Setting::Contours => "show contours",
            Setting::CriticalEvents => "show critical events",
            Setting::CellBorders => "show cell borders",
            Setting::Traversals => "show traversals",
            Setting::Freespace => "show freespace",
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Setting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Setting::ALL
            .into_iter()
            .find(|setting| setting.name() == s)
            .ok_or_else(|| format!("unknown setting: {s}"))
    }
}

impl VisibilitySettings {
    pub fn get(&self, setting: Setting) -> bool {
        match setting {
            Setting::LLines => self.show_l_lines,
            Setting::Contours => self.show_contours,
            Setting::CriticalEvents => self.show_critical_events,
            Setting::CellBorders => self.show_cell_borders,
            Setting::Traversals => self.show_traversals,
            Setting::Freespace => self.show_freespace,
        }
    }

    /// The same settings with `setting` set to `value`
    pub fn with(mut self, setting: Setting, value: bool) -> Self {
        let flag = match setting {
            Setting::LLines => &mut self.show_l_lines,
            Setting::Contours => &mut self.show_contours,
            Setting::CriticalEvents => &mut self.show_critical_events,
            Setting::CellBorders => &mut self.show_cell_borders,
            Setting::Traversals => &mut self.show_traversals,
            Setting::Freespace => &mut self.show_freespace,
        };
        *flag = value;
        self
    }

    /// The same settings with exactly `setting` flipped
    pub fn toggled(self, setting: Setting) -> Self {
        self.with(setting, !self.get(setting))
    }

    /// Everything on, including the freespace level set
    pub fn all() -> Self {
        Setting::ALL
            .into_iter()
            .fold(Self::default(), |settings, s| settings.with(s, true))
    }
}
