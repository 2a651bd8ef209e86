// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Result payload → drawable layers.
//!
//! [`render`] is a pure function of the payload, the visibility toggles and
//! the freespace ε. It rebuilds the whole [`RenderModel`] on every call;
//! each toggle only decides whether its own layers are pushed, so flipping
//! one leaves every other layer identical.
//!
//! Layer order in the main plot is fixed: heatmap, l-lines, critical
//! events, traversals (line, then its ε markers). Cell borders are shapes,
//! kept apart from the traces.

pub mod layers;
pub mod layout;

use self::layers::{
    Contours, Dash, Hover, HeatmapLayer, Layer2d, Layer3d, LayerKind, LineStyle, MarkerStyle,
    Mode, Shape, SurfaceLayer, Trace, Trace3d,
};
use self::layout::{CrossSectionLayout, MainLayout, SceneLayout};
use super::visibility::VisibilitySettings;
use crate::model::payload::{CriticalEvent, LLine, ResultPayload, Traversal};
use crate::settings::{self, round_to};
use crate::theme::{self, diagram};
use serde::{Deserialize, Serialize};

/// Everything the charting sink draws for one result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub main: MainPlot,
    /// Present when the 3D view is requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<ScenePlot>,
    pub cross_section: CrossSectionPlot,
}

/// The 2D free-space diagram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MainPlot {
    pub layers: Vec<Layer2d>,
    pub shapes: Vec<Shape>,
    pub layout: MainLayout,
}

/// The 3D ε surface with traversals lifted onto it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenePlot {
    pub layers: Vec<Layer3d>,
    pub layout: SceneLayout,
}

/// ε along each traversal over time, plus its profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossSectionPlot {
    pub traces: Vec<Trace>,
    pub layout: CrossSectionLayout,
}

impl RenderModel {
    /// Kinds of the main plot's layers, in draw order
    pub fn main_kinds(&self) -> Vec<LayerKind> {
        self.main.layers.iter().map(Layer2d::kind).collect()
    }

    /// The heatmap layer (always the first main layer)
    pub fn heatmap(&self) -> Option<&HeatmapLayer> {
        self.main.layers.iter().find_map(|layer| match layer {
            Layer2d::Heatmap(heatmap) => Some(heatmap),
            Layer2d::Trace(_) => None,
        })
    }
}

/// Renderer options that do not change between renders
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Width of every plot; heights derive from it
    pub plot_width: f64,
    /// Build the 3D scene
    pub include_scene: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            plot_width: settings::render::PLOT_WIDTH,
            include_scene: true,
        }
    }
}

/// Render with the default renderer options
pub fn render(
    payload: &ResultPayload,
    visibility: &VisibilitySettings,
    freespace_epsilon: f64,
) -> RenderModel {
    render_with(&RendererConfig::default(), payload, visibility, freespace_epsilon)
}

/// Build the full layer set for `payload`
pub fn render_with(
    config: &RendererConfig,
    payload: &ResultPayload,
    visibility: &VisibilitySettings,
    freespace_epsilon: f64,
) -> RenderModel {
    let mut layers = vec![Layer2d::Heatmap(heatmap_layer(
        payload,
        visibility,
        freespace_epsilon,
    ))];
    let mut shapes = Vec::new();
    let mut scene_layers = vec![Layer3d::Surface(surface_layer(payload))];
    let mut cross_section = Vec::new();

    if visibility.show_l_lines {
        layers.extend(payload.l_lines.iter().map(l_line_trace).map(Layer2d::Trace));
    }

    if visibility.show_cell_borders {
        shapes.extend(border_shapes(payload));
    }

    if visibility.show_critical_events {
        layers.extend(
            payload
                .critical_events
                .iter()
                .map(critical_event_trace)
                .map(Layer2d::Trace),
        );
        scene_layers.extend(
            payload
                .critical_events
                .iter()
                .map(critical_event_trace_3d)
                .map(Layer3d::Trace),
        );
    }

    if visibility.show_traversals {
        for (i, traversal) in payload.traversals.iter().enumerate() {
            layers.push(Layer2d::Trace(traversal_trace(i, traversal)));
            layers.push(Layer2d::Trace(epsilon_points_trace(traversal)));
            scene_layers.push(Layer3d::Trace(traversal_trace_3d(i, traversal)));
            scene_layers.push(Layer3d::Trace(epsilon_points_trace_3d(traversal)));
            cross_section.push(cross_section_trace(i, traversal));
            cross_section.push(profile_trace(i, traversal));
        }
    }

    tracing::debug!(
        "Rendered {} main layers, {} shapes, {} cross-section traces",
        layers.len(),
        shapes.len(),
        cross_section.len()
    );

    let width = config.plot_width;
    RenderModel {
        main: MainPlot {
            layers,
            shapes,
            layout: MainLayout::new(payload.lengths, width),
        },
        scene: config.include_scene.then(|| ScenePlot {
            layers: scene_layers,
            layout: SceneLayout::new(payload.lengths, payload.bounds_l, width),
        }),
        cross_section: CrossSectionPlot {
            traces: cross_section,
            layout: CrossSectionLayout::new(payload.bounds_l, width),
        },
    }
}

// ============================================================================
// HEATMAP
// ============================================================================

fn heatmap_layer(
    payload: &ResultPayload,
    visibility: &VisibilitySettings,
    freespace_epsilon: f64,
) -> HeatmapLayer {
    let bounds = payload.bounds_l;
    let contours = if visibility.show_freespace {
        Some(Contours {
            start: freespace_epsilon,
            end: freespace_epsilon,
            size: 0.0,
        })
    } else if visibility.show_contours {
        Some(Contours {
            start: bounds.min(),
            end: bounds.max(),
            size: bounds.span() / f64::from(settings::render::CONTOUR_BANDS),
        })
    } else {
        None
    };

    HeatmapLayer {
        x: payload.heatmap.x_axis(),
        y: payload.heatmap.y_axis(),
        z: payload.heatmap.z().to_vec(),
        contours,
    }
}

fn surface_layer(payload: &ResultPayload) -> SurfaceLayer {
    SurfaceLayer {
        x: payload.heatmap.x_axis(),
        y: payload.heatmap.y_axis(),
        z: payload.heatmap.z().to_vec(),
    }
}

// ============================================================================
// OVERLAYS
// ============================================================================

fn border_shapes(payload: &ResultPayload) -> Vec<Shape> {
    let max_p = payload.lengths.p as f64;
    let max_q = payload.lengths.q as f64;
    let style = LineStyle::new(diagram::BORDER_COLOR, diagram::BORDER_WIDTH, Dash::Solid);

    let vertical = payload.borders.vertical().iter().map(|&b| Shape {
        kind: LayerKind::CellBorder,
        x0: b,
        y0: 0.0,
        x1: b,
        y1: max_q,
        line: style.clone(),
    });
    let horizontal = payload.borders.horizontal().iter().map(|&b| Shape {
        kind: LayerKind::CellBorder,
        x0: 0.0,
        y0: b,
        x1: max_p,
        y1: b,
        line: style.clone(),
    });
    vertical.chain(horizontal).collect()
}

fn l_line_trace(l_line: &LLine) -> Trace {
    Trace {
        kind: LayerKind::LLine,
        name: None,
        x: l_line.0.clone(),
        y: l_line.1.clone(),
        mode: Mode::Lines,
        line: Some(LineStyle::new(
            diagram::L_LINE_COLOR,
            diagram::L_LINE_WIDTH,
            Dash::Dot,
        )),
        marker: None,
        text: Vec::new(),
        hover: Hover::Skip,
    }
}

fn critical_event_trace(event: &CriticalEvent) -> Trace {
    Trace {
        kind: LayerKind::CriticalEvent,
        name: None,
        x: event.xs().to_vec(),
        y: event.ys().to_vec(),
        mode: Mode::LinesMarkers,
        line: Some(LineStyle::new(
            diagram::CRITICAL_COLOR,
            diagram::CRITICAL_WIDTH,
            Dash::Dash,
        )),
        marker: Some(MarkerStyle::new(
            diagram::CRITICAL_COLOR,
            diagram::CRITICAL_MARKER_SIZE,
        )),
        text: vec![epsilon_label(event.epsilon())],
        hover: Hover::Text,
    }
}

fn critical_event_trace_3d(event: &CriticalEvent) -> Trace3d {
    Trace3d {
        kind: LayerKind::CriticalEvent,
        name: Some(epsilon_label(event.epsilon())),
        x: event.xs().to_vec(),
        y: event.ys().to_vec(),
        z: vec![event.epsilon(); event.xs().len()],
        mode: Mode::LinesMarkers,
        line: Some(LineStyle::new(
            diagram::CRITICAL_COLOR,
            diagram::CRITICAL_WIDTH,
            Dash::Dash,
        )),
        marker: Some(MarkerStyle::new(
            diagram::CRITICAL_COLOR,
            diagram::SCENE_MARKER_SIZE,
        )),
    }
}

// ============================================================================
// TRAVERSALS
// ============================================================================

fn traversal_name(index: usize) -> String {
    format!("#{index}")
}

/// `ε: 1.23`
fn epsilon_label(epsilon: f64) -> String {
    format!(
        "ε: {}",
        round_to(epsilon, settings::render::HOVER_PRECISION)
    )
}

/// Fréchet distance at micro precision, empty if the traversal has none
fn distance_label(traversal: &Traversal) -> String {
    traversal
        .frechet_distance()
        .map(|d| round_to(d, settings::render::DISTANCE_PRECISION).to_string())
        .unwrap_or_default()
}

fn lifted(zs: &[f64]) -> Vec<f64> {
    zs.iter()
        .map(|z| z + settings::render::TRAVERSAL_Z_LIFT)
        .collect()
}

fn traversal_trace(index: usize, traversal: &Traversal) -> Trace {
    Trace {
        kind: LayerKind::Traversal,
        name: Some(traversal_name(index)),
        x: traversal.x.clone(),
        y: traversal.y.clone(),
        mode: Mode::Lines,
        line: Some(LineStyle::new(
            diagram::TRAVERSAL_COLOR,
            diagram::TRAVERSAL_WIDTH,
            Dash::Solid,
        )),
        marker: None,
        text: traversal.z.iter().copied().map(epsilon_label).collect(),
        hover: Hover::NameText,
    }
}

fn epsilon_points_trace(traversal: &Traversal) -> Trace {
    let points = &traversal.epsilon_points;
    Trace {
        kind: LayerKind::EpsilonPoints,
        name: Some(distance_label(traversal)),
        x: points.0.clone(),
        y: points.1.clone(),
        mode: Mode::Markers,
        line: None,
        marker: Some(MarkerStyle::new(
            diagram::EPSILON_POINT_COLOR,
            diagram::EPSILON_MARKER_SIZE,
        )),
        text: points.2.iter().copied().map(epsilon_label).collect(),
        hover: Hover::NameText,
    }
}

fn traversal_trace_3d(index: usize, traversal: &Traversal) -> Trace3d {
    Trace3d {
        kind: LayerKind::Traversal,
        name: Some(traversal_name(index)),
        x: traversal.x.clone(),
        y: traversal.y.clone(),
        z: lifted(&traversal.z),
        mode: Mode::LinesMarkers,
        line: Some(LineStyle::new(
            diagram::TRAVERSAL_COLOR,
            diagram::TRAVERSAL_WIDTH,
            Dash::Solid,
        )),
        marker: Some(MarkerStyle::new(
            diagram::TRAVERSAL_COLOR,
            diagram::SCENE_MARKER_SIZE,
        )),
    }
}

fn epsilon_points_trace_3d(traversal: &Traversal) -> Trace3d {
    let points = &traversal.epsilon_points;
    Trace3d {
        kind: LayerKind::EpsilonPoints,
        name: Some(distance_label(traversal)),
        x: points.0.clone(),
        y: points.1.clone(),
        z: lifted(&points.2),
        mode: Mode::Markers,
        line: None,
        marker: Some(MarkerStyle::new(
            diagram::EPSILON_POINT_COLOR,
            diagram::SCENE_MARKER_SIZE,
        )),
    }
}

fn cross_section_trace(index: usize, traversal: &Traversal) -> Trace {
    let color = theme::palette(index);
    Trace {
        kind: LayerKind::CrossSection,
        name: Some(traversal_name(index)),
        x: traversal.t.clone(),
        y: traversal.z.clone(),
        mode: Mode::Lines,
        line: Some(LineStyle::new(color, diagram::BORDER_WIDTH, Dash::Solid)),
        marker: None,
        text: Vec::new(),
        hover: Hover::Xyz,
    }
}

fn profile_trace(index: usize, traversal: &Traversal) -> Trace {
    let color = theme::palette(index);
    Trace {
        kind: LayerKind::Profile,
        name: Some(format!("{} profile", traversal_name(index))),
        x: traversal.profile.0.clone(),
        y: traversal.profile.1.clone(),
        mode: Mode::Lines,
        line: Some(LineStyle::new(color, diagram::BORDER_WIDTH, Dash::Dash)),
        marker: None,
        text: Vec::new(),
        hover: Hover::Xyz,
    }
}
