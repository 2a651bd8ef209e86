// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration loaded from an optional TOML file.
//!
//! Every key is optional. `FRECHET_SERVER_URL` in the environment wins
//! over the file's `server_url`.

use crate::results::{RendererConfig, VisibilitySettings};
use crate::settings;
use anyhow::{Context, Result};
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding [`Config::server_url`]
pub const SERVER_URL_ENV: &str = "FRECHET_SERVER_URL";

const DEFAULT_SERVER_URL: &str = "http://localhost:5000/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint of the compute service
    pub server_url: String,
    pub canvas: CanvasConfig,
    pub plot_width: f64,
    pub include_scene: bool,
    /// Initial result layer toggles
    pub visibility: VisibilitySettings,
    /// Where the render model is written; stdout when unset
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: settings::canvas::SIZE,
            height: settings::canvas::SIZE,
        }
    }
}

impl CanvasConfig {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            canvas: CanvasConfig::default(),
            plot_width: settings::render::PLOT_WIDTH,
            include_scene: true,
            visibility: VisibilitySettings::default(),
            output: None,
        }
    }
}

impl Config {
    /// Load from `path`, or use the defaults when no path is given.
    /// The environment override is applied either way.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config: {}", path.display()))?;
                Self::from_toml(&text)
                    .with_context(|| format!("Failed to parse config: {}", path.display()))?
            }
            None => Self::default(),
        };
        Ok(config.with_server_override(std::env::var(SERVER_URL_ENV).ok()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Replace the server URL if `url` is set and non-empty
    pub fn with_server_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            tracing::debug!("Server URL overridden from {}: {}", SERVER_URL_ENV, url);
            self.server_url = url;
        }
        self
    }

    pub fn renderer(&self) -> RendererConfig {
        RendererConfig {
            plot_width: self.plot_width,
            include_scene: self.include_scene,
        }
    }
}
