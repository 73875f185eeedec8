//! Per-day category breakdown table

use super::Aggregator;
use crate::store::Snapshot;
use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Line items for one category on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDetailRow {
    /// Purchase day
    pub date: NaiveDate,
    /// Product category
    pub category: String,
    /// Line items sharing the day and category
    pub count: u64,
}

/// Table of (date, category, count), newest day first, then busiest category
///
/// Rows with equal date and count keep the order in which their pair first
/// appears in the snapshot. Records without a category are not counted.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderDetailByDateAndCategory;

impl Aggregator for OrderDetailByDateAndCategory {
    type Output = Vec<OrderDetailRow>;

    const NAME: &'static str = "order_detail";

    fn aggregate(&self, snapshot: &Snapshot<'_>) -> Self::Output {
        let mut rows: Vec<OrderDetailRow> = Vec::new();
        let mut index: FxHashMap<(NaiveDate, &str), usize> = FxHashMap::default();

        for record in snapshot.iter() {
            let Some(category) = record.product_category.as_deref() else {
                continue;
            };
            let date = record.purchase_date();
            let slot = *index.entry((date, category)).or_insert_with(|| {
                rows.push(OrderDetailRow {
                    date,
                    category: category.to_string(),
                    count: 0,
                });
                rows.len() - 1
            });
            rows[slot].count += 1;
        }

        // Stable sort keeps encounter order among ties
        rows.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.count.cmp(&a.count)));
        rows
    }
}
