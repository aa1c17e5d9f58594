//! salesviz
//!
//! A lightweight Rust library for loading, aggregating, and visualizing
//! tabular auto-sales data. Pairs with the `salesviz` CLI.
//!
//! ### Features
//! - Load sales records from a delimited file with a header row
//! - Aggregate by (country, calendar month): revenue sum, mean unit price, quantity sum
//! - Compose a three-panel interactive chart with a country-selection dropdown
//! - Export the chart as a standalone HTML file, and the aggregates as CSV or JSON
//!
//! ### Example
//! ```no_run
//! let records = salesviz::loader::load_records("Auto_Sales_data.csv")?;
//! let rows = salesviz::stats::aggregate(&records);
//! let figure = salesviz::figure::compose(&rows);
//! salesviz::figure::html::render_html(&figure, "sales_chart.html")?;
//! salesviz::storage::save_csv(&rows, "sales_by_country_month.csv")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod figure;
pub mod loader;
pub mod models;
pub mod series;
pub mod stats;
pub mod storage;

pub use loader::{LoadError, load_records};
pub use models::{AggregatedRow, GroupKey, Metric, SaleRecord, Series};
