//! Record store and filtered snapshots
//!
//! The store owns the full record collection for the lifetime of the
//! process. Every range query borrows from it and yields a [`Snapshot`];
//! the underlying records are never mutated or reordered.

use chrono::NaiveDate;
use commerce_common::{DateRange, OrderRecord, ReportResult};
use tracing::debug;

/// Immutable collection of order line items
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<OrderRecord>,
}

impl RecordStore {
    /// Take ownership of a loaded record set
    #[must_use]
    pub fn new(records: Vec<OrderRecord>) -> Self {
        Self { records }
    }

    /// Number of records held
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in load order
    #[must_use]
    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    /// Span of purchase dates, `None` for an empty store
    #[must_use]
    pub fn full_range(&self) -> Option<DateRange> {
        let mut dates = self.records.iter().map(OrderRecord::purchase_date);
        let first = dates.next()?;
        let (min, max) = dates.fold((first, first), |(min, max), date| {
            (min.min(date), max.max(date))
        });
        DateRange::new(min, max).ok()
    }

    /// Records purchased on days in `[start, end]`
    ///
    /// # Errors
    /// Returns [`commerce_common::ReportError::InvalidRange`] when `start > end`.
    pub fn filter(&self, start: NaiveDate, end: NaiveDate) -> ReportResult<Snapshot<'_>> {
        let range = DateRange::new(start, end)?;
        Ok(self.filter_range(range))
    }

    /// Records purchased on days inside an already validated range
    #[must_use]
    pub fn filter_range(&self, range: DateRange) -> Snapshot<'_> {
        let records: Vec<&OrderRecord> = self
            .records
            .iter()
            .filter(|record| range.contains(&record.purchase_timestamp))
            .collect();

        debug!(
            "Filtered {} of {} records for {}",
            records.len(),
            self.records.len(),
            range
        );

        Snapshot {
            range: Some(range),
            records,
        }
    }

    /// Unfiltered view over every record
    #[must_use]
    pub fn all(&self) -> Snapshot<'_> {
        Snapshot::of(&self.records)
    }
}

/// Read-only view of the records selected by one filter call
///
/// Records keep their load order. A snapshot is what every aggregator
/// consumes, so all views of one report see the same rows.
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    range: Option<DateRange>,
    records: Vec<&'a OrderRecord>,
}

impl<'a> Snapshot<'a> {
    /// View over a slice without any range restriction
    #[must_use]
    pub fn of(records: &'a [OrderRecord]) -> Self {
        Self {
            range: None,
            records: records.iter().collect(),
        }
    }

    /// Range used to select the records, `None` for unfiltered views
    #[must_use]
    pub const fn range(&self) -> Option<DateRange> {
        self.range
    }

    /// Number of records in the view
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the view selected nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in load order
    pub fn iter(&self) -> impl Iterator<Item = &'a OrderRecord> + '_ {
        self.records.iter().copied()
    }

    /// Borrowed records in load order
    #[must_use]
    pub fn records(&self) -> &[&'a OrderRecord] {
        &self.records
    }
}
