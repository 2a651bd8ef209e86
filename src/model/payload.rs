// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Result payload returned by the Fréchet compute service.
//!
//! The payload is immutable once received and always replaces the previous
//! one in full. Its shape follows the service's JSON: most compound values
//! are positional arrays (`[xs, ys, z]`, `[[x0, x1], [y0, y1], ε]`), which
//! map onto tuple structs here. A body that does not match fails to decode;
//! nothing is patched up after the fact.

use serde::{Deserialize, Serialize};

/// Complete result of one Fréchet computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPayload {
    /// Grid extents (vertex counts of the submitted paths)
    pub lengths: Lengths,
    /// ε range spanned by the heatmap
    pub bounds_l: Bounds,
    pub heatmap: Heatmap,
    pub traversals: Vec<Traversal>,
    pub critical_events: Vec<CriticalEvent>,
    pub l_lines: Vec<LLine>,
    pub borders: Borders,
}

impl ResultPayload {
    /// Decode a payload from the service's JSON body
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Fréchet distance of the first traversal, if there is one
    pub fn frechet_distance(&self) -> Option<f64> {
        self.traversals.first().and_then(Traversal::frechet_distance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lengths {
    pub p: usize,
    pub q: usize,
}

/// `[min, max]` of ε over the diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds(pub f64, pub f64);

impl Bounds {
    pub fn min(&self) -> f64 {
        self.0
    }

    pub fn max(&self) -> f64 {
        self.1
    }

    pub fn span(&self) -> f64 {
        self.1 - self.0
    }

    /// Clamp `value` into `[min, max]`
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.0).min(self.1)
    }
}

/// `[xs, ys, z]` mesh grids of the sampled free-space diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heatmap(pub Vec<Vec<f64>>, pub Vec<Vec<f64>>, pub Vec<Vec<f64>>);

impl Heatmap {
    /// Sample positions along P (first row of the x mesh)
    pub fn x_axis(&self) -> Vec<f64> {
        self.0.first().cloned().unwrap_or_default()
    }

    /// Sample positions along Q (first column of the y mesh)
    pub fn y_axis(&self) -> Vec<f64> {
        self.1.iter().filter_map(|row| row.first().copied()).collect()
    }

    /// ε values, one row per y sample
    pub fn z(&self) -> &[Vec<f64>] {
        &self.2
    }
}

/// One monotone traversal through the diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traversal {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    /// Parametrization ("time") along the traversal
    pub t: Vec<f64>,
    pub epsilon: Vec<f64>,
    pub epsilon_points: EpsilonPoints,
    pub profile: Profile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
}

impl Traversal {
    /// The traversal's overall Fréchet distance (`epsilon[0]`)
    pub fn frechet_distance(&self) -> Option<f64> {
        self.epsilon.first().copied()
    }
}

/// `[xs, ys, zs]` of the points where the traversal attains its ε values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpsilonPoints(pub Vec<f64>, pub Vec<f64>, pub Vec<f64>);

/// `[t', z']` cumulative ε profile of a traversal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile(pub Vec<f64>, pub Vec<f64>);

/// `[[x0, x1], [y0, y1], ε]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalEvent(pub Vec<f64>, pub Vec<f64>, pub f64);

impl CriticalEvent {
    pub fn xs(&self) -> &[f64] {
        &self.0
    }

    pub fn ys(&self) -> &[f64] {
        &self.1
    }

    pub fn epsilon(&self) -> f64 {
        self.2
    }
}

/// `[[x0, x1], [y0, y1]]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LLine(pub Vec<f64>, pub Vec<f64>);

/// `[vertical cut positions, horizontal cut positions]`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Borders(pub Vec<f64>, pub Vec<f64>);

impl Borders {
    pub fn vertical(&self) -> &[f64] {
        &self.0
    }

    pub fn horizontal(&self) -> &[f64] {
        &self.1
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn decodes_service_shape() {
        let payload = two_segment_payload();
        assert_eq!(payload.lengths, Lengths { p: 2, q: 2 });
        assert_eq!(payload.bounds_l.span(), 5.0);
        assert_eq!(payload.traversals.len(), 1);
        assert_eq!(payload.critical_events[0].epsilon(), 3.16227766);
        assert_eq!(payload.borders.vertical(), &[0.0, 1.0]);
    }

    #[test]
    fn heatmap_axes_come_from_mesh_grids() {
        let payload = two_segment_payload();
        assert_eq!(payload.heatmap.x_axis(), vec![0.0, 0.5, 1.0]);
        assert_eq!(payload.heatmap.y_axis(), vec![0.0, 0.5, 1.0]);
        assert_eq!(payload.heatmap.z().len(), 3);
    }

    #[test]
    fn frechet_distance_is_first_epsilon() {
        assert_eq!(two_segment_payload().frechet_distance(), Some(5.0990195));
        assert_eq!(empty_payload().frechet_distance(), None);
    }

    #[test]
    fn traversal_length_is_optional() {
        let mut traversal = two_segment_payload().traversals[0].clone();
        traversal.length = None;
        let json = serde_json::to_value(&traversal).unwrap();
        assert!(json.get("length").is_none());
        let back: Traversal = serde_json::from_value(json).unwrap();
        assert_eq!(back.length, None);
    }

    #[test]
    fn malformed_body_is_rejected() {
        assert!(ResultPayload::from_json(r#"{"lengths": {"p": 2}}"#).is_err());
        assert!(ResultPayload::from_json("not json").is_err());
    }

    #[test]
    fn bounds_clamp() {
        let bounds = Bounds(1.0, 6.0);
        assert_eq!(bounds.clamp(0.0), 1.0);
        assert_eq!(bounds.clamp(7.0), 6.0);
        assert_eq!(bounds.clamp(2.5), 2.5);
    }
}
