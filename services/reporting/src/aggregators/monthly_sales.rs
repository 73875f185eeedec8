//! Line items per calendar month

use super::Aggregator;
use crate::store::Snapshot;
use commerce_common::YearMonth;
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of line items purchased in one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    /// Calendar month, labelled `YYYY-MM`
    pub month: YearMonth,
    /// Line items in that month
    pub count: u64,
}

/// Monthly sales bars, ascending by month
///
/// Only months with at least one record appear; gaps are not zero-filled.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlySales;

impl Aggregator for MonthlySales {
    type Output = Vec<MonthlyCount>;

    const NAME: &'static str = "monthly_sales";

    fn aggregate(&self, snapshot: &Snapshot<'_>) -> Self::Output {
        let mut by_month: BTreeMap<YearMonth, u64> = BTreeMap::new();
        for record in snapshot.iter() {
            *by_month.entry(record.year_month()).or_default() += 1;
        }

        by_month
            .into_iter()
            .map(|(month, count)| MonthlyCount { month, count })
            .collect()
    }
}
