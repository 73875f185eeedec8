//! Commerce Reporting
//!
//! Date-range aggregation pipeline behind the order dashboard:
//! - `RecordStore` owns the loaded line items and hands out filtered snapshots
//! - seven aggregators turn one snapshot into chart and table data
//! - `ReportAssembler` filters once and bundles every view
//!
//! Everything here is synchronous and free of shared mutable state; the
//! presentation layer re-runs `build_report` on every range change.

pub mod aggregators;
pub mod analytics;
pub mod config;
pub mod error;
pub mod loader;
pub mod store;

pub use aggregators::Aggregator;
pub use config::ReportingConfig;
pub use error::{LoadError, LoadResult};
pub use store::{RecordStore, Snapshot};

use aggregators::{
    CategoryCount, DailyCount, DailyOrderCounts, InstallmentPoint, InstallmentsVsValue,
    MonthlyCount, MonthlySales, OrderDetailByDateAndCategory, OrderDetailRow, PaymentSummary,
    PaymentValueDistribution, ProductDescriptionSalesCorrelation, ProductSalesTable,
    TopCategories,
};
use chrono::NaiveDate;
use commerce_common::{DateRange, ReportResult};
use serde::Serialize;
use tracing::debug;

/// How the presentation layer draws a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    /// Time-series line chart
    LineChart,
    /// Plain categorical table
    Table,
    /// Ranked top-N table
    RankedTable,
    /// Bar chart over discrete buckets
    BarChart,
    /// One box per category
    BoxPlot,
    /// Scatter plot coloured by category
    ScatterPlot,
    /// Scatter plot with sized and coloured markers
    SizedScatterPlot,
}

/// Name, kind and size of one view in a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewDescriptor {
    /// Stable view name
    pub name: &'static str,
    /// Rendering hint
    pub kind: ViewKind,
    /// Number of rows, points or groups in the view
    pub rows: usize,
}

/// Every view computed from one filtered snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportBundle {
    /// Range the snapshot was filtered with, `None` when unfiltered
    pub range: Option<DateRange>,
    /// Records in the snapshot, for empty-state messaging
    pub record_count: usize,
    /// Line items per day
    pub daily_orders: Vec<DailyCount>,
    /// Line items per day and category
    pub order_detail: Vec<OrderDetailRow>,
    /// Best-selling categories
    pub top_categories: Vec<CategoryCount>,
    /// Line items per month
    pub monthly_sales: Vec<MonthlyCount>,
    /// Payment value spread per payment type
    pub payment_distribution: Vec<PaymentSummary>,
    /// Installments against payment value
    pub installments_vs_value: Vec<InstallmentPoint>,
    /// Product attributes against sales
    pub product_sales: ProductSalesTable,
}

impl ReportBundle {
    /// Whether the range selected no records
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Descriptors for every view, in dashboard order
    #[must_use]
    pub fn views(&self) -> Vec<ViewDescriptor> {
        vec![
            ViewDescriptor {
                name: DailyOrderCounts::NAME,
                kind: ViewKind::LineChart,
                rows: self.daily_orders.len(),
            },
            ViewDescriptor {
                name: OrderDetailByDateAndCategory::NAME,
                kind: ViewKind::Table,
                rows: self.order_detail.len(),
            },
            ViewDescriptor {
                name: TopCategories::NAME,
                kind: ViewKind::RankedTable,
                rows: self.top_categories.len(),
            },
            ViewDescriptor {
                name: MonthlySales::NAME,
                kind: ViewKind::BarChart,
                rows: self.monthly_sales.len(),
            },
            ViewDescriptor {
                name: PaymentValueDistribution::NAME,
                kind: ViewKind::BoxPlot,
                rows: self.payment_distribution.len(),
            },
            ViewDescriptor {
                name: InstallmentsVsValue::NAME,
                kind: ViewKind::ScatterPlot,
                rows: self.installments_vs_value.len(),
            },
            ViewDescriptor {
                name: ProductDescriptionSalesCorrelation::NAME,
                kind: ViewKind::SizedScatterPlot,
                rows: self.product_sales.len(),
            },
        ]
    }
}

/// Builds report bundles from a record store
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportAssembler {
    top_categories: TopCategories,
    payment_distribution: PaymentValueDistribution,
}

impl ReportAssembler {
    /// Create an assembler with the configured view parameters
    #[must_use]
    pub fn new(config: &ReportingConfig) -> Self {
        Self {
            top_categories: TopCategories::new(config.top_categories),
            payment_distribution: PaymentValueDistribution::new(config.whisker_factor),
        }
    }

    /// Filter the store to `[start, end]` once and compute every view
    ///
    /// # Errors
    /// Propagates [`commerce_common::ReportError::InvalidRange`] from the store.
    pub fn build_report(
        &self,
        store: &RecordStore,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ReportResult<ReportBundle> {
        let snapshot = store.filter(start, end)?;
        Ok(self.assemble(&snapshot))
    }

    /// Report over the full span of the loaded data
    #[must_use]
    pub fn build_default_report(&self, store: &RecordStore) -> ReportBundle {
        match store.full_range() {
            Some(range) => self.assemble(&store.filter_range(range)),
            None => self.assemble(&store.all()),
        }
    }

    /// Compute every view over one snapshot
    #[must_use]
    pub fn assemble(&self, snapshot: &Snapshot<'_>) -> ReportBundle {
        let bundle = ReportBundle {
            range: snapshot.range(),
            record_count: snapshot.len(),
            daily_orders: DailyOrderCounts.aggregate(snapshot),
            order_detail: OrderDetailByDateAndCategory.aggregate(snapshot),
            top_categories: self.top_categories.aggregate(snapshot),
            monthly_sales: MonthlySales.aggregate(snapshot),
            payment_distribution: self.payment_distribution.aggregate(snapshot),
            installments_vs_value: InstallmentsVsValue.aggregate(snapshot),
            product_sales: ProductDescriptionSalesCorrelation.aggregate(snapshot),
        };

        debug!(
            "Assembled report: {} records, {} days, {} products",
            bundle.record_count,
            bundle.daily_orders.len(),
            bundle.product_sales.len()
        );
        bundle
    }
}
