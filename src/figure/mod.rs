//! Compose the interactive figure: three stacked panels (one per metric),
//! one line-and-marker trace per (country, metric) pair, and a country
//! dropdown that toggles trace visibility.

pub mod html;
pub mod layout;
pub mod selector;
pub mod style;
pub mod types;

pub use layout::Layout;
pub use types::{Trace, TraceKey};

use crate::models::AggregatedRow;
use crate::series;
use serde::Serialize;

/// A fully composed chart: data traces plus layout. Serializes into the two
/// `Plotly.newPlot` inputs.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    #[serde(rename = "data")]
    pub traces: Vec<Trace>,
    pub layout: Layout,
    /// Distinct countries, in the order used for both trace insertion and the
    /// selector control.
    #[serde(skip)]
    pub countries: Vec<String>,
}

/// Build the figure from aggregated rows. All traces start hidden; the
/// dropdown reveals one country at a time.
pub fn compose(rows: &[AggregatedRow]) -> Figure {
    let countries = series::distinct_countries(rows);
    let traces: Vec<Trace> = series::country_series(rows)
        .into_iter()
        .map(|s| {
            // Countries come from the same enumeration, so the lookup cannot miss.
            let country_index = countries.iter().position(|c| *c == s.country).unwrap_or(0);
            let panel = s.metric.panel();
            let (xs, ys): (Vec<_>, Vec<_>) = s.points.iter().copied().unzip();
            Trace {
                kind: "scatter",
                x: xs,
                y: ys,
                name: format!("{} in {}", s.metric.label(), s.country),
                mode: "lines+markers",
                line: style::metric_line(s.metric, country_index),
                marker: style::metric_marker(s.metric),
                visible: false,
                xaxis: panel_x_anchor(panel),
                yaxis: panel_y_anchor(panel),
                key: TraceKey {
                    country: s.country,
                    metric: s.metric,
                },
            }
        })
        .collect();

    let updatemenus = selector::build_selector(&traces, &countries);
    Figure {
        traces,
        layout: Layout::standard(updatemenus),
        countries,
    }
}

fn panel_x_anchor(panel: usize) -> &'static str {
    match panel {
        1 => "x",
        2 => "x2",
        _ => "x3",
    }
}

fn panel_y_anchor(panel: usize) -> &'static str {
    match panel {
        1 => "y",
        2 => "y2",
        _ => "y3",
    }
}
