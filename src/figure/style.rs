//! Pure style assignment: country index → color, metric → line/marker style.
//!
//! Colors cycle over a fixed 3-color palette, so they are not unique once the
//! country count exceeds the palette size; collisions are expected. Metric
//! styles are fixed regardless of country, giving redundant visual encoding
//! across panels.

use crate::figure::types::{Line, LineDash, Marker, MarkerShape};
use crate::models::Metric;

/// Repeating series palette, indexed by country position modulo its length.
pub const PALETTE: [&str; 3] = ["blue", "green", "red"];

const LINE_WIDTH: u32 = 2;
const MARKER_SIZE: u32 = 6;

/// Deterministic color for the country at `country_index`.
pub fn country_color(country_index: usize) -> &'static str {
    PALETTE[country_index % PALETTE.len()]
}

/// Fixed per-metric line style: revenue dashed, average price dotted,
/// quantity solid.
pub fn metric_line(metric: Metric, country_index: usize) -> Line {
    let dash = match metric {
        Metric::Sales => LineDash::Dash,
        Metric::AveragePrice => LineDash::Dot,
        Metric::QuantityOrdered => LineDash::Solid,
    };
    Line {
        color: country_color(country_index),
        width: LINE_WIDTH,
        dash,
    }
}

/// Fixed per-metric marker: diamonds for average price, squares for
/// quantity, default symbol for revenue.
pub fn metric_marker(metric: Metric) -> Marker {
    let symbol = match metric {
        Metric::Sales => None,
        Metric::AveragePrice => Some(MarkerShape::Diamond),
        Metric::QuantityOrdered => Some(MarkerShape::Square),
    };
    Marker {
        size: MARKER_SIZE,
        symbol,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_modulo_three() {
        assert_eq!(country_color(0), "blue");
        assert_eq!(country_color(1), "green");
        assert_eq!(country_color(2), "red");
        assert_eq!(country_color(3), "blue");
        assert_eq!(country_color(7), "green");
    }

    #[test]
    fn metric_styles_are_fixed_per_metric() {
        for idx in 0..5 {
            assert_eq!(metric_line(Metric::Sales, idx).dash, LineDash::Dash);
            assert_eq!(metric_line(Metric::AveragePrice, idx).dash, LineDash::Dot);
            assert_eq!(metric_line(Metric::QuantityOrdered, idx).dash, LineDash::Solid);
        }
        assert_eq!(metric_marker(Metric::Sales).symbol, None);
        assert_eq!(
            metric_marker(Metric::AveragePrice).symbol,
            Some(MarkerShape::Diamond)
        );
        assert_eq!(
            metric_marker(Metric::QuantityOrdered).symbol,
            Some(MarkerShape::Square)
        );
    }
}
