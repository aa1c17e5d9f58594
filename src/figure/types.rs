//! Serializable chart primitives: traces and their style attributes.
//!
//! Field names and value spellings follow the Plotly JSON schema so a
//! `Figure` serializes directly into `Plotly.newPlot` inputs.

use crate::models::Metric;
use chrono::NaiveDate;
use serde::Serialize;

/// Identity of a trace, independent of its insertion position. Visibility
/// masks are derived from this key, never from trace order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceKey {
    pub country: String,
    pub metric: Metric,
}

/// Line dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineDash {
    Solid,
    Dash,
    Dot,
}

/// Marker shape for data points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerShape {
    Circle,
    Square,
    Diamond,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Line {
    pub color: &'static str,
    pub width: u32,
    pub dash: LineDash,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Marker {
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<MarkerShape>,
}

/// One renderable line-and-marker series on a chart panel.
///
/// Created once at composition time; `visible` is the only field toggled
/// afterwards (declaratively, via the selector's precomputed masks).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
    pub name: String,
    pub mode: &'static str,
    pub line: Line,
    pub marker: Marker,
    pub visible: bool,
    /// Axis anchors selecting the panel ("x"/"y", "x2"/"y2", "x3"/"y3").
    pub xaxis: &'static str,
    pub yaxis: &'static str,
    #[serde(skip)]
    pub key: TraceKey,
}
