//! Raw installments/value scatter data

use super::Aggregator;
use crate::store::Snapshot;
use commerce_common::{Money, PaymentType};
use serde::Serialize;

/// One scatter point, coloured by payment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstallmentPoint {
    /// Number of installments
    pub installments: u32,
    /// Amount paid
    pub payment_value: Money,
    /// Payment method
    pub payment_type: PaymentType,
}

/// One point per record, in snapshot order
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallmentsVsValue;

impl Aggregator for InstallmentsVsValue {
    type Output = Vec<InstallmentPoint>;

    const NAME: &'static str = "installments_vs_value";

    fn aggregate(&self, snapshot: &Snapshot<'_>) -> Self::Output {
        snapshot
            .iter()
            .map(|record| InstallmentPoint {
                installments: record.payment_installments,
                payment_value: record.payment_value,
                payment_type: record.payment_type,
            })
            .collect()
    }
}
