//! Build per-country, per-metric time series from aggregated rows.

use crate::models::{AggregatedRow, Metric, Series};

/// Distinct countries in ascending order.
///
/// Aggregated rows arrive sorted by (country, month), so deduplicating
/// adjacent countries preserves that order.
pub fn distinct_countries(rows: &[AggregatedRow]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for r in rows {
        if out.last().map(String::as_str) != Some(r.key.country.as_str()) {
            out.push(r.key.country.clone());
        }
    }
    out
}

/// Emit three series (one per metric) for every distinct country, each
/// sharing the same month axis, months strictly ascending.
pub fn country_series(rows: &[AggregatedRow]) -> Vec<Series> {
    let mut out = Vec::new();
    for country in distinct_countries(rows) {
        let country_rows: Vec<&AggregatedRow> = rows
            .iter()
            .filter(|r| r.key.country == country)
            .collect();
        for metric in Metric::ALL {
            out.push(Series {
                country: country.clone(),
                metric,
                points: country_rows
                    .iter()
                    .map(|r| (r.key.month, metric.value(r)))
                    .collect(),
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GroupKey;
    use chrono::NaiveDate;

    fn row(country: &str, y: i32, m: u32, sales: f64) -> AggregatedRow {
        AggregatedRow {
            key: GroupKey {
                country: country.into(),
                month: NaiveDate::from_ymd_opt(y, m, 1).unwrap(),
            },
            total_sales: sales,
            avg_price: 1.0,
            total_quantity: 1,
        }
    }

    #[test]
    fn three_series_per_country_months_ascending() {
        let rows = vec![
            row("France", 2023, 1, 10.0),
            row("France", 2023, 2, 20.0),
            row("USA", 2023, 1, 30.0),
        ];
        let series = country_series(&rows);
        assert_eq!(series.len(), 6);
        assert_eq!(series[0].country, "France");
        assert_eq!(series[0].metric, Metric::Sales);
        assert_eq!(series[0].points.len(), 2);
        assert!(series[0].points[0].0 < series[0].points[1].0);
        // USA has a single month: length-1 series per metric.
        assert!(series[3..].iter().all(|s| s.points.len() == 1));
    }

    #[test]
    fn countries_deduplicated_in_order() {
        let rows = vec![
            row("France", 2023, 1, 1.0),
            row("France", 2023, 2, 1.0),
            row("USA", 2023, 1, 1.0),
        ];
        assert_eq!(distinct_countries(&rows), vec!["France", "USA"]);
        assert!(distinct_countries(&[]).is_empty());
    }
}
