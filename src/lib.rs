// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Frechet Explorer: path input and free-space diagram rendering for
//! Fréchet distance results

use anyhow::Result;
use std::path::PathBuf;

pub mod compute;
pub mod config;
pub mod data;
pub mod editing;
pub mod model;
pub mod results;
pub mod settings;
pub mod theme;

use compute::ComputeClient;
use config::Config;
use data::AppState;

/// Entry point for the Frechet Explorer command line tool
pub fn run() -> Result<()> {
    // Logs go to stderr so the render model can own stdout
    // (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("frechet_explorer=info".parse()?),
        )
        .init();

    let args = CommandLine::parse(std::env::args().skip(1));
    let config = Config::load(args.config.as_deref())?;
    let mut state = AppState::new(&config);

    if let Some(input) = &args.input {
        state.load_paths(input)?;
    }

    let client = ComputeClient::new(config.server_url.clone())?;
    tracing::info!("Using compute service at {}", client.endpoint());
    state.submit(&client)?;
    if let Some(message) = &state.error_message {
        anyhow::bail!("{message}");
    }

    state.write_render_model(config.output.as_deref())
}

/// `frechet-explorer [config.toml] [input.json]`
#[derive(Debug, Default, PartialEq)]
struct CommandLine {
    config: Option<PathBuf>,
    input: Option<PathBuf>,
}

impl CommandLine {
    /// `.toml` arguments name the config, anything else the input paths
    fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut command_line = Self::default();
        for arg in args {
            let path = PathBuf::from(arg);
            if path.extension().is_some_and(|ext| ext == "toml") {
                command_line.config = Some(path);
            } else {
                command_line.input = Some(path);
            }
        }
        command_line
    }
}
