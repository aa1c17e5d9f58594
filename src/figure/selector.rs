//! Build the country-selection dropdown.
//!
//! Each option's visibility mask is derived from trace identity (`TraceKey`),
//! so a trace is shown iff its country matches the selected option, no matter
//! where the trace sits in the insertion order.

use crate::figure::layout::{SelectorOption, TitleUpdate, UpdateMenu, VisibilityUpdate};
use crate::figure::types::Trace;

/// Layout title shown once a country is selected.
pub fn selected_title(country: &str) -> String {
    format!(
        "Sales, Average Price, and Quantity Ordered Over Time: {}",
        country
    )
}

/// Visibility mask for one country: true exactly for that country's traces.
pub fn visibility_mask(traces: &[Trace], country: &str) -> Vec<bool> {
    traces.iter().map(|t| t.key.country == country).collect()
}

/// One dropdown option per country. Zero countries yields no control at all.
pub fn build_selector(traces: &[Trace], countries: &[String]) -> Vec<UpdateMenu> {
    if countries.is_empty() {
        return Vec::new();
    }
    let buttons = countries
        .iter()
        .map(|country| SelectorOption {
            label: country.clone(),
            method: "update",
            args: (
                VisibilityUpdate {
                    visible: visibility_mask(traces, country),
                },
                TitleUpdate {
                    title: selected_title(country),
                },
            ),
        })
        .collect();
    vec![UpdateMenu {
        buttons,
        direction: "down",
        showactive: true,
        x: 0.5,
        y: 1.2,
    }]
}
