//! Tests for per-payment-type box-plot summaries

use commerce_common::{Money, OrderRecord, PaymentType};
use commerce_reporting::Snapshot;
use commerce_reporting::aggregators::{Aggregator, PaymentSummary, PaymentValueDistribution};
use pretty_assertions::assert_eq;
use rstest::*;
use test_utils::{OrderRecordFactory, date, payment_mix};

fn summary_for(groups: &[PaymentSummary], payment_type: PaymentType) -> &PaymentSummary {
    groups
        .iter()
        .find(|group| group.payment_type == payment_type)
        .expect("payment type present")
}

#[rstest]
fn test_groups_follow_first_appearance(payment_mix: Vec<OrderRecord>) {
    let groups = PaymentValueDistribution::default().aggregate(&Snapshot::of(&payment_mix));
    let order: Vec<PaymentType> = groups.iter().map(|group| group.payment_type).collect();
    assert_eq!(
        order,
        vec![PaymentType::CreditCard, PaymentType::Boleto, PaymentType::Voucher]
    );
}

#[rstest]
fn test_median_of_five_values(payment_mix: Vec<OrderRecord>) {
    let groups = PaymentValueDistribution::default().aggregate(&Snapshot::of(&payment_mix));
    let card = &summary_for(&groups, PaymentType::CreditCard).summary;
    assert_eq!(card.count, 5);
    assert_eq!(card.median, 30.0);
    assert_eq!(card.q1, 20.0);
    assert_eq!(card.q3, 40.0);
    assert_eq!(card.min, 10.0);
    assert_eq!(card.max, 50.0);
    assert!(card.outliers.is_empty());
}

#[rstest]
fn test_two_points_flag_no_outliers(payment_mix: Vec<OrderRecord>) {
    let groups = PaymentValueDistribution::default().aggregate(&Snapshot::of(&payment_mix));
    let boleto = &summary_for(&groups, PaymentType::Boleto).summary;
    assert_eq!(boleto.count, 2);
    assert!(boleto.outliers.is_empty());
    assert_eq!(boleto.min, 5.0);
    assert_eq!(boleto.max, 100.0);
}

#[rstest]
fn test_single_value_is_degenerate(payment_mix: Vec<OrderRecord>) {
    let groups = PaymentValueDistribution::default().aggregate(&Snapshot::of(&payment_mix));
    let voucher = &summary_for(&groups, PaymentType::Voucher).summary;
    for statistic in [voucher.min, voucher.q1, voucher.median, voucher.q3, voucher.max] {
        assert_eq!(statistic, 12.5);
    }
}

#[rstest]
#[case(1.5, vec![1000.0])]
#[case(1000.0, vec![])]
fn test_whisker_factor_controls_outliers(#[case] factor: f64, #[case] expected: Vec<f64>) {
    let mut factory = OrderRecordFactory::new();
    let records: Vec<OrderRecord> = [20.0, 22.0, 21.0, 23.0, 1000.0]
        .into_iter()
        .map(|value| {
            let mut record = factory.build_on(date(2024, 1, 1));
            record.payment_value = Money::new(value);
            record
        })
        .collect();

    let groups = PaymentValueDistribution::new(factor).aggregate(&Snapshot::of(&records));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].summary.outliers, expected);
}

#[rstest]
fn test_empty_snapshot_has_no_groups() {
    let records: Vec<OrderRecord> = Vec::new();
    let groups = PaymentValueDistribution::default().aggregate(&Snapshot::of(&records));
    assert!(groups.is_empty());
}

#[rstest]
fn test_summary_serializes_flat(payment_mix: Vec<OrderRecord>) {
    let groups = PaymentValueDistribution::default().aggregate(&Snapshot::of(&payment_mix));
    let json = serde_json::to_value(&groups[0]).unwrap();
    assert_eq!(json["payment_type"], "credit_card");
    assert_eq!(json["median"], 30.0);
    assert!(json["outliers"].as_array().unwrap().is_empty());
}
