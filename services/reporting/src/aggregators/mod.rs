//! Aggregator implementations
//!
//! Each aggregator is a pure function of a [`Snapshot`]: it reads the
//! borrowed records and returns a freshly allocated result. Every one of
//! them is total, so an empty snapshot yields an empty result.

pub mod daily_orders;
pub mod installments;
pub mod monthly_sales;
pub mod order_detail;
pub mod payment_distribution;
pub mod product_sales;
pub mod top_categories;

pub use daily_orders::{DailyCount, DailyOrderCounts};
pub use installments::{InstallmentPoint, InstallmentsVsValue};
pub use monthly_sales::{MonthlyCount, MonthlySales};
pub use order_detail::{OrderDetailByDateAndCategory, OrderDetailRow};
pub use payment_distribution::{PaymentSummary, PaymentValueDistribution};
pub use product_sales::{ProductDescriptionSalesCorrelation, ProductSalesRow, ProductSalesTable};
pub use top_categories::{CategoryCount, TopCategories};

use crate::store::Snapshot;

/// One derived view over a filtered snapshot
pub trait Aggregator {
    /// Result handed to the presentation layer
    type Output;

    /// Stable view name used in report bundles
    const NAME: &'static str;

    /// Compute the view
    fn aggregate(&self, snapshot: &Snapshot<'_>) -> Self::Output;
}
