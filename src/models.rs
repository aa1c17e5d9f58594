use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One row of the source table (one order line). Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleRecord {
    pub country: String,
    pub order_date: NaiveDate,
    /// Revenue amount for the order line.
    pub sales: f64,
    /// Unit price of the ordered item.
    pub price_each: f64,
    pub quantity_ordered: i64,
}

/// Grouping key used in aggregation and plotting: one country, one calendar
/// month (normalized to its first day).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub country: String,
    pub month: NaiveDate,
}

impl GroupKey {
    /// Key for a record: the order date truncated to the first of its month.
    pub fn for_record(r: &SaleRecord) -> Self {
        Self {
            country: r.country.clone(),
            month: month_start(r.order_date),
        }
    }
}

/// Truncate a date to the first day of its month.
pub fn month_start(d: NaiveDate) -> NaiveDate {
    // Day 1 always exists for a valid (year, month).
    NaiveDate::from_ymd_opt(d.year(), d.month(), 1).unwrap()
}

/// One (country, month) summary record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregatedRow {
    pub key: GroupKey,
    /// Sum of `sales` over the group.
    pub total_sales: f64,
    /// Arithmetic mean of `price_each`, unweighted by quantity.
    pub avg_price: f64,
    /// Sum of `quantity_ordered` over the group.
    pub total_quantity: i64,
}

/// The three plotted metrics, one chart panel each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    Sales,
    AveragePrice,
    QuantityOrdered,
}

impl Metric {
    /// All metrics in panel order (top to bottom).
    pub const ALL: [Metric; 3] = [Metric::Sales, Metric::AveragePrice, Metric::QuantityOrdered];

    /// Panel title, also used in trace names.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Sales => "Sales",
            Metric::AveragePrice => "Average Price",
            Metric::QuantityOrdered => "Quantity Ordered",
        }
    }

    /// 1-based panel row (top panel is row 1).
    pub fn panel(&self) -> usize {
        match self {
            Metric::Sales => 1,
            Metric::AveragePrice => 2,
            Metric::QuantityOrdered => 3,
        }
    }

    /// Extract this metric's value from an aggregated row.
    pub fn value(&self, row: &AggregatedRow) -> f64 {
        match self {
            Metric::Sales => row.total_sales,
            Metric::AveragePrice => row.avg_price,
            Metric::QuantityOrdered => row.total_quantity as f64,
        }
    }
}

/// A named, month-ordered sequence of (date, value) pairs, scoped to one
/// (country, metric) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    pub country: String,
    pub metric: Metric,
    /// Strictly ascending in date, no duplicate months.
    pub points: Vec<(NaiveDate, f64)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_start_truncates_to_day_one() {
        let d = NaiveDate::from_ymd_opt(2023, 5, 17).unwrap();
        assert_eq!(month_start(d), NaiveDate::from_ymd_opt(2023, 5, 1).unwrap());
        assert_eq!(month_start(month_start(d)), month_start(d));
    }

    #[test]
    fn metric_panels_cover_three_rows() {
        let panels: Vec<usize> = Metric::ALL.iter().map(|m| m.panel()).collect();
        assert_eq!(panels, vec![1, 2, 3]);
    }
}
