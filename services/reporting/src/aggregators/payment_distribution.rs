//! Payment value spread per payment method

use super::Aggregator;
use crate::analytics::BoxPlotSummary;
use crate::store::Snapshot;
use commerce_common::PaymentType;
use commerce_common::constants::DEFAULT_WHISKER_FACTOR;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Box-plot summary of payment values for one payment type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentSummary {
    /// Payment method
    pub payment_type: PaymentType,
    /// Distribution of amounts paid with it
    #[serde(flatten)]
    pub summary: BoxPlotSummary,
}

/// One box per payment type present, in order of first appearance
#[derive(Debug, Clone, Copy)]
pub struct PaymentValueDistribution {
    whisker_factor: f64,
}

impl Default for PaymentValueDistribution {
    fn default() -> Self {
        Self::new(DEFAULT_WHISKER_FACTOR)
    }
}

impl PaymentValueDistribution {
    /// Flag outliers beyond `whisker_factor` × IQR from the quartiles
    #[must_use]
    pub const fn new(whisker_factor: f64) -> Self {
        Self { whisker_factor }
    }

    /// IQR multiplier used for the fences
    #[must_use]
    pub const fn whisker_factor(&self) -> f64 {
        self.whisker_factor
    }
}

impl Aggregator for PaymentValueDistribution {
    type Output = Vec<PaymentSummary>;

    const NAME: &'static str = "payment_distribution";

    fn aggregate(&self, snapshot: &Snapshot<'_>) -> Self::Output {
        let mut groups: Vec<(PaymentType, Vec<f64>)> = Vec::new();
        let mut index: FxHashMap<PaymentType, usize> = FxHashMap::default();

        for record in snapshot.iter() {
            let slot = *index.entry(record.payment_type).or_insert_with(|| {
                groups.push((record.payment_type, Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(record.payment_value.as_f64());
        }

        groups
            .into_iter()
            .map(|(payment_type, values)| PaymentSummary {
                payment_type,
                summary: BoxPlotSummary::from_values(&values, self.whisker_factor),
            })
            .collect()
    }
}
