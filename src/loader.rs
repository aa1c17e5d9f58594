//! Load sale records from a delimited text file with a header row.
//!
//! Required columns (located by header name, extra columns ignored):
//! `COUNTRY`, `ORDERDATE`, `SALES`, `PRICEEACH`, `QUANTITYORDERED`.
//! Order dates must match the `%d/%m/%Y` pattern; any mismatch aborts the
//! whole load. Row indices in errors are 1-based data rows (header excluded).

use crate::models::SaleRecord;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::path::Path;
use thiserror::Error;

/// Date pattern for the ORDERDATE column (day/month/year).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

const REQUIRED_COLUMNS: [&str; 5] =
    ["COUNTRY", "ORDERDATE", "SALES", "PRICEEACH", "QUANTITYORDERED"];

/// Errors raised while loading the input table. All are fatal; there is no
/// partial recovery.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: csv::Error,
    },
    /// The header row lacks a required column.
    #[error("missing required column {column:?} in {path}")]
    MissingColumn { column: &'static str, path: String },
    /// An ORDERDATE value does not match the expected day/month/year pattern.
    #[error("row {row}: invalid order date {value:?} (expected day/month/year)")]
    Date {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    /// A numeric field failed to parse.
    #[error("row {row}: invalid {column} value {value:?}")]
    Number {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Positions of the required columns within the header row.
struct ColumnIndex {
    country: usize,
    order_date: usize,
    sales: usize,
    price_each: usize,
    quantity_ordered: usize,
}

impl ColumnIndex {
    fn locate(headers: &csv::StringRecord, path: &str) -> Result<Self, LoadError> {
        let find = |column: &'static str| -> Result<usize, LoadError> {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(column))
                .ok_or_else(|| LoadError::MissingColumn {
                    column,
                    path: path.to_string(),
                })
        };
        Ok(Self {
            country: find(REQUIRED_COLUMNS[0])?,
            order_date: find(REQUIRED_COLUMNS[1])?,
            sales: find(REQUIRED_COLUMNS[2])?,
            price_each: find(REQUIRED_COLUMNS[3])?,
            quantity_ordered: find(REQUIRED_COLUMNS[4])?,
        })
    }
}

/// Load all records from `path`. Zero data rows is valid and yields an empty
/// vector; any malformed date or number fails the whole load.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<SaleRecord>, LoadError> {
    let path_str = path.as_ref().to_string_lossy().into_owned();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path.as_ref())
        .map_err(|source| LoadError::Io {
            path: path_str.clone(),
            source,
        })?;

    let headers = rdr
        .headers()
        .map_err(|source| LoadError::Io {
            path: path_str.clone(),
            source,
        })?
        .clone();
    let idx = ColumnIndex::locate(&headers, &path_str)?;

    let mut out = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let row = i + 1;
        let record = record.map_err(|source| LoadError::Io {
            path: path_str.clone(),
            source,
        })?;

        let date_str = record.get(idx.order_date).unwrap_or("").trim();
        let order_date =
            NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|source| LoadError::Date {
                row,
                value: date_str.to_string(),
                source,
            })?;

        out.push(SaleRecord {
            country: record.get(idx.country).unwrap_or("").trim().to_string(),
            order_date,
            sales: parse_number(&record, idx.sales, "SALES", row)?,
            price_each: parse_number(&record, idx.price_each, "PRICEEACH", row)?,
            quantity_ordered: parse_integer(&record, idx.quantity_ordered, "QUANTITYORDERED", row)?,
        });
    }
    Ok(out)
}

fn parse_number(
    record: &csv::StringRecord,
    idx: usize,
    column: &'static str,
    row: usize,
) -> Result<f64, LoadError> {
    let raw = record.get(idx).unwrap_or("").trim();
    raw.parse::<f64>().map_err(|_| LoadError::Number {
        row,
        column,
        value: raw.to_string(),
    })
}

fn parse_integer(
    record: &csv::StringRecord,
    idx: usize,
    column: &'static str,
    row: usize,
) -> Result<i64, LoadError> {
    let raw = record.get(idx).unwrap_or("").trim();
    raw.parse::<i64>().map_err(|_| LoadError::Number {
        row,
        column,
        value: raw.to_string(),
    })
}
