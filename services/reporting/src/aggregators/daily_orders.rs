//! Line items per purchase day

use super::Aggregator;
use crate::store::Snapshot;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of line items purchased on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    /// Purchase day
    pub date: NaiveDate,
    /// Line items on that day
    pub count: u64,
}

/// Time series of line items per day, ascending by date
///
/// Counts line items, not distinct orders: an order spanning several
/// categories contributes once per item.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyOrderCounts;

impl Aggregator for DailyOrderCounts {
    type Output = Vec<DailyCount>;

    const NAME: &'static str = "daily_orders";

    fn aggregate(&self, snapshot: &Snapshot<'_>) -> Self::Output {
        let mut by_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for record in snapshot.iter() {
            *by_day.entry(record.purchase_date()).or_default() += 1;
        }

        by_day
            .into_iter()
            .map(|(date, count)| DailyCount { date, count })
            .collect()
    }
}
