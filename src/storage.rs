use crate::models::AggregatedRow;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save aggregated rows as CSV with header.
pub fn save_csv<P: AsRef<Path>>(rows: &[AggregatedRow], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("country", "month", "total_sales", "avg_price", "total_quantity"))?;
    for r in rows {
        wtr.serialize((
            &r.key.country,
            r.key.month,
            r.total_sales,
            r.avg_price,
            r.total_quantity,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save aggregated rows as a pretty JSON array.
pub fn save_json<P: AsRef<Path>>(rows: &[AggregatedRow], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(rows)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
