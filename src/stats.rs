use crate::models::{AggregatedRow, GroupKey, SaleRecord};
use std::collections::BTreeMap;

/// Per-group accumulator. Groups are never empty by construction, so the
/// price mean has no division-by-zero case.
#[derive(Debug, Default)]
struct Accum {
    sales_sum: f64,
    price_sum: f64,
    price_count: usize,
    quantity_sum: i64,
}

/// Aggregate records by (country, month).
///
/// Computes sum of `sales`, arithmetic mean of `price_each` (unweighted by
/// quantity), and sum of `quantity_ordered` per group. The BTreeMap keying
/// yields a deterministic output order: country ascending, then month
/// ascending, which is also the order required for plotting.
pub fn aggregate(records: &[SaleRecord]) -> Vec<AggregatedRow> {
    let mut groups: BTreeMap<GroupKey, Accum> = BTreeMap::new();
    for r in records {
        let acc = groups.entry(GroupKey::for_record(r)).or_default();
        acc.sales_sum += r.sales;
        acc.price_sum += r.price_each;
        acc.price_count += 1;
        acc.quantity_sum += r.quantity_ordered;
    }

    groups
        .into_iter()
        .map(|(key, acc)| AggregatedRow {
            key,
            total_sales: acc.sales_sum,
            avg_price: acc.price_sum / acc.price_count as f64,
            total_quantity: acc.quantity_sum,
        })
        .collect()
}
