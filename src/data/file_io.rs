// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! File I/O for AppState (input paths, render model output)

use super::AppState;
use crate::compute::SubmitRequest;
use crate::editing::EditorState;
use crate::model::PathId;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

impl AppState {
    /// Replace the editor paths with the `{p, q}` JSON at `path`.
    ///
    /// Canvas geometry and the selected path are kept. Input with an empty
    /// path is refused and the current paths stay as they are.
    pub fn load_paths(&mut self, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input paths: {}", path.display()))?;
        let input: SubmitRequest = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse input paths: {}", path.display()))?;

        for (id, points) in [(PathId::P, &input.p), (PathId::Q, &input.q)] {
            if points.is_empty() {
                tracing::warn!("Refusing {}: path {} has no points", path.display(), id);
                anyhow::bail!("Path {} in {} has no points", id, path.display());
            }
        }

        tracing::info!(
            "Loaded paths from {} (p: {} points, q: {} points)",
            path.display(),
            input.p.len(),
            input.q.len()
        );

        let selected = self.editor.selected();
        self.editor = EditorState::new(input.p, input.q)
            .with_canvas(self.editor.canvas(), self.editor.margins())
            .select_path(selected);
        Ok(())
    }

    /// Write the current render model as pretty JSON to `output`, or to
    /// stdout when no path is given
    pub fn write_render_model(&self, output: Option<&Path>) -> Result<()> {
        let model = self
            .render_model()
            .context("No result to write; submit the paths first")?;
        let json = serde_json::to_string_pretty(&model)?;

        match output {
            Some(path) => {
                std::fs::write(path, json)
                    .with_context(|| format!("Failed to write render model: {}", path.display()))?;
                tracing::info!("Wrote render model to {}", path.display());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{json}").context("Failed to write render model to stdout")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::test_state;
    use crate::model::payload::fixtures::two_segment_payload;
    use crate::model::{PathId, path_from_xy};
    use std::path::PathBuf;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("frechet-explorer-{}-{name}", std::process::id()))
    }

    #[test]
    fn loads_paths_from_json() {
        let file = temp_file("input.json");
        std::fs::write(
            &file,
            r#"{"p": [{"x": 0, "y": 0}, {"x": 6, "y": 0}], "q": [{"x": 1, "y": -1}, {"x": 1, "y": 5}]}"#,
        )
        .unwrap();

        let mut state = test_state();
        state.load_paths(&file).unwrap();
        std::fs::remove_file(&file).ok();

        assert_eq!(
            state.editor.path(PathId::P),
            &path_from_xy(&[(0.0, 0.0), (6.0, 0.0)])
        );
        assert_eq!(state.editor.path(PathId::Q).len(), 2);
    }

    #[test]
    fn bad_input_reports_the_file() {
        let file = temp_file("broken.json");
        std::fs::write(&file, "{\"p\": 3}").unwrap();

        let mut state = test_state();
        let error = state.load_paths(&file).unwrap_err();
        std::fs::remove_file(&file).ok();

        assert!(error.to_string().contains("Failed to parse input paths"));
        assert_eq!(state.editor.path(PathId::P).len(), 3);
    }

    #[test]
    fn empty_path_is_refused() {
        let file = temp_file("empty.json");
        std::fs::write(&file, r#"{"p": [], "q": [{"x": 1, "y": -1}, {"x": 1, "y": 5}]}"#)
            .unwrap();

        let mut state = test_state();
        let before = state.editor.clone();
        let error = state.load_paths(&file).unwrap_err();
        std::fs::remove_file(&file).ok();

        assert!(error.to_string().contains("Path p"));
        assert_eq!(state.editor, before);
    }

    #[test]
    fn writes_render_model() {
        let file = temp_file("model.json");
        let mut state = test_state();
        assert!(state.write_render_model(Some(file.as_path())).is_err());

        state.receive_payload(two_segment_payload());
        state.write_render_model(Some(file.as_path())).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
        std::fs::remove_file(&file).ok();

        assert_eq!(written["main"]["layers"][0]["type"], "heatmap");
        assert_eq!(written["cross_section"]["layout"]["title"], "Traversal Cross Section");
    }
}
