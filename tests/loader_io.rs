use salesviz::loader::{self, LoadError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("temp file");
    f.write_all(contents.as_bytes()).expect("write csv");
    f
}

#[test]
fn loads_records_and_ignores_extra_columns() {
    let f = write_csv(
        "ORDERNUMBER,COUNTRY,ORDERDATE,SALES,PRICEEACH,QUANTITYORDERED,STATUS\n\
         10107,USA,24/02/2023,2871.0,95.7,30,Shipped\n\
         10121,France,07/05/2023,2765.9,81.35,34,Shipped\n",
    );
    let records = loader::load_records(f.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].country, "USA");
    assert_eq!(records[0].order_date.to_string(), "2023-02-24");
    assert!((records[0].sales - 2871.0).abs() < 1e-9);
    assert!((records[1].price_each - 81.35).abs() < 1e-9);
    assert_eq!(records[1].quantity_ordered, 34);
}

#[test]
fn header_only_file_yields_zero_records() {
    let f = write_csv("COUNTRY,ORDERDATE,SALES,PRICEEACH,QUANTITYORDERED\n");
    let records = loader::load_records(f.path()).unwrap();
    assert!(records.is_empty());
}

#[test]
fn missing_column_is_a_schema_error() {
    let f = write_csv("COUNTRY,ORDERDATE,SALES,PRICEEACH\nUSA,24/02/2023,1.0,1.0\n");
    let err = loader::load_records(f.path()).unwrap_err();
    match err {
        LoadError::MissingColumn { column, .. } => assert_eq!(column, "QUANTITYORDERED"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn month_first_date_is_a_parse_error() {
    // 24/02 is day/month; 02/24 must fail (no month 24).
    let f = write_csv(
        "COUNTRY,ORDERDATE,SALES,PRICEEACH,QUANTITYORDERED\n\
         USA,24/02/2023,1.0,1.0,1\n\
         USA,02/24/2023,1.0,1.0,1\n",
    );
    let err = loader::load_records(f.path()).unwrap_err();
    match err {
        LoadError::Date { row, value, .. } => {
            assert_eq!(row, 2);
            assert_eq!(value, "02/24/2023");
        }
        other => panic!("expected Date, got {other:?}"),
    }
}

#[test]
fn malformed_number_reports_row_and_column() {
    let f = write_csv(
        "COUNTRY,ORDERDATE,SALES,PRICEEACH,QUANTITYORDERED\n\
         USA,24/02/2023,not-a-number,1.0,1\n",
    );
    let err = loader::load_records(f.path()).unwrap_err();
    match err {
        LoadError::Number { row, column, value } => {
            assert_eq!(row, 1);
            assert_eq!(column, "SALES");
            assert_eq!(value, "not-a-number");
        }
        other => panic!("expected Number, got {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = loader::load_records("definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
