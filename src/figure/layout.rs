//! Figure layout: panel arrangement, presentation defaults, and the
//! country-selector control.

use serde::Serialize;
use serde_json::{json, Value};

/// Number of stacked panels (one per metric).
pub const PANELS: usize = 3;
/// Vertical gap between panel domains, as a fraction of figure height.
const PANEL_GAP: f64 = 0.1;

pub const CHART_TITLE: &str = "Sales Data by Country";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

impl Font {
    pub fn black(size: Option<u32>) -> Self {
        Self {
            size,
            color: Some("black"),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    /// Counterpart axis this one is anchored to ("y" for an x-axis, etc.).
    pub anchor: &'static str,
    pub domain: [f64; 2],
    pub title: Title,
    pub tickfont: Font,
}

/// Subplot title, positioned in paper coordinates above its panel.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Annotation {
    pub text: &'static str,
    pub x: f64,
    pub y: f64,
    pub xref: &'static str,
    pub yref: &'static str,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
    pub showarrow: bool,
    pub font: Font,
}

/// Per-trace update applied by a selector option: one visibility flag per
/// trace, in trace order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VisibilityUpdate {
    pub visible: Vec<bool>,
}

/// Layout update applied by a selector option.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TitleUpdate {
    pub title: String,
}

/// One entry in the country dropdown: a visibility mask plus a title.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SelectorOption {
    pub label: String,
    pub method: &'static str,
    /// Serializes as the two-element `args` array Plotly expects.
    pub args: (VisibilityUpdate, TitleUpdate),
}

/// The dropdown control, positioned above the panels.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UpdateMenu {
    pub buttons: Vec<SelectorOption>,
    pub direction: &'static str,
    pub showactive: bool,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Layout {
    pub title: Title,
    pub template: Value,
    pub hovermode: &'static str,
    pub margin: Margin,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub font: Font,
    pub xaxis: Axis,
    pub xaxis2: Axis,
    pub xaxis3: Axis,
    pub yaxis: Axis,
    pub yaxis2: Axis,
    pub yaxis3: Axis,
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updatemenus: Vec<UpdateMenu>,
}

/// Vertical [bottom, top] domain of a 1-based panel row (row 1 on top).
pub fn panel_domain(panel: usize) -> [f64; 2] {
    debug_assert!((1..=PANELS).contains(&panel));
    let height = (1.0 - (PANELS as f64 - 1.0) * PANEL_GAP) / PANELS as f64;
    let top = 1.0 - (panel as f64 - 1.0) * (height + PANEL_GAP);
    [top - height, top]
}

fn x_axis(anchor: &'static str) -> Axis {
    Axis {
        anchor,
        domain: [0.0, 1.0],
        title: Title {
            text: "Date".to_string(),
            font: Some(Font::black(None)),
        },
        tickfont: Font::black(None),
    }
}

fn y_axis(anchor: &'static str, panel: usize) -> Axis {
    Axis {
        anchor,
        domain: panel_domain(panel),
        title: Title {
            text: "Value".to_string(),
            font: Some(Font::black(None)),
        },
        tickfont: Font::black(None),
    }
}

fn panel_title(text: &'static str, panel: usize) -> Annotation {
    Annotation {
        text,
        x: 0.5,
        y: panel_domain(panel)[1],
        xref: "paper",
        yref: "paper",
        xanchor: "center",
        yanchor: "bottom",
        showarrow: false,
        font: Font::black(Some(12)),
    }
}

/// Subset of the `plotly_dark` template: dark panel chrome that the explicit
/// transparent backgrounds and black fonts below then override.
fn dark_template() -> Value {
    json!({
        "layout": {
            "paper_bgcolor": "rgb(17,17,17)",
            "plot_bgcolor": "rgb(17,17,17)",
            "font": { "color": "#f2f5fa" },
            "xaxis": { "gridcolor": "#283442", "zerolinecolor": "#283442" },
            "yaxis": { "gridcolor": "#283442", "zerolinecolor": "#283442" }
        }
    })
}

impl Layout {
    /// The fixed presentation configuration: dark theme, unified hover
    /// readout, tight margins, transparent backgrounds, black text.
    pub fn standard(updatemenus: Vec<UpdateMenu>) -> Self {
        Self {
            title: Title {
                text: CHART_TITLE.to_string(),
                font: Some(Font::black(Some(20))),
            },
            template: dark_template(),
            hovermode: "x unified",
            margin: Margin {
                l: 20,
                r: 20,
                t: 40,
                b: 20,
            },
            paper_bgcolor: "rgba(0,0,0,0)",
            plot_bgcolor: "rgba(0,0,0,0)",
            font: Font::black(None),
            xaxis: x_axis("y"),
            xaxis2: x_axis("y2"),
            xaxis3: x_axis("y3"),
            yaxis: y_axis("x", 1),
            yaxis2: y_axis("x2", 2),
            yaxis3: y_axis("x3", 3),
            annotations: vec![
                panel_title("Sales", 1),
                panel_title("Average Price", 2),
                panel_title("Quantity Ordered", 3),
            ],
            updatemenus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_domains_stack_without_overlap() {
        let d1 = panel_domain(1);
        let d2 = panel_domain(2);
        let d3 = panel_domain(3);
        assert!((d1[1] - 1.0).abs() < 1e-12);
        assert!((d3[0] - 0.0).abs() < 1e-12);
        assert!(d2[1] < d1[0]);
        assert!(d3[1] < d2[0]);
    }

    #[test]
    fn empty_updatemenus_are_omitted_from_json() {
        let v = serde_json::to_value(Layout::standard(Vec::new())).unwrap();
        assert!(v.get("updatemenus").is_none());
        assert_eq!(v["hovermode"], "x unified");
        assert_eq!(v["paper_bgcolor"], "rgba(0,0,0,0)");
    }
}
