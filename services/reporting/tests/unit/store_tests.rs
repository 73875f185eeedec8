//! Range filtering tests for the record store

use chrono::Duration;
use commerce_common::{DateRange, OrderRecord, ReportError};
use commerce_reporting::RecordStore;
use pretty_assertions::assert_eq;
use rstest::*;
use test_utils::{OrderRecordFactory, date, january_orders, quarter_orders, timestamp};

fn order_ids<'a>(records: impl IntoIterator<Item = &'a OrderRecord>) -> Vec<String> {
    records.into_iter().map(|r| r.order_id.clone()).collect()
}

#[rstest]
fn test_full_span_returns_everything_in_order(quarter_orders: Vec<OrderRecord>) {
    let expected = order_ids(&quarter_orders);
    let store = RecordStore::new(quarter_orders);
    let range = store.full_range().expect("non-empty store");

    let snapshot = store.filter(range.start(), range.end()).unwrap();

    assert_eq!(snapshot.len(), store.len());
    assert_eq!(order_ids(snapshot.iter()), expected);
}

#[rstest]
fn test_boundaries_are_inclusive_on_whole_days() {
    let mut factory = OrderRecordFactory::new();
    let store = RecordStore::new(vec![
        factory.build_at(timestamp(2024, 1, 9, 23, 59)),  // start - 1
        factory.build_at(timestamp(2024, 1, 10, 0, 0)),   // start
        factory.build_at(timestamp(2024, 1, 20, 23, 59)), // end
        factory.build_at(timestamp(2024, 1, 21, 0, 0)),   // end + 1
    ]);

    let snapshot = store.filter(date(2024, 1, 10), date(2024, 1, 20)).unwrap();

    assert_eq!(
        order_ids(snapshot.iter()),
        vec!["order-000002".to_string(), "order-000003".to_string()]
    );
    let range = snapshot.range().unwrap();
    assert!(snapshot.iter().all(|r| range.contains(&r.purchase_timestamp)));
}

#[rstest]
fn test_single_day_range(january_orders: Vec<OrderRecord>) {
    let store = RecordStore::new(january_orders);
    let snapshot = store.filter(date(2024, 1, 5), date(2024, 1, 5)).unwrap();
    assert_eq!(snapshot.len(), 2);
}

#[rstest]
fn test_reversed_range_is_rejected(january_orders: Vec<OrderRecord>) {
    let store = RecordStore::new(january_orders);
    let result = store.filter(date(2024, 1, 31), date(2024, 1, 1));
    assert_eq!(
        result.map(|snapshot| snapshot.len()),
        Err(ReportError::InvalidRange {
            start: date(2024, 1, 31),
            end: date(2024, 1, 1),
        })
    );
}

#[rstest]
fn test_filter_leaves_store_untouched(january_orders: Vec<OrderRecord>) {
    let store = RecordStore::new(january_orders.clone());
    let _ = store.filter(date(2024, 1, 6), date(2024, 1, 6)).unwrap();
    let _ = store.filter(date(2024, 2, 1), date(2024, 2, 28)).unwrap();
    assert_eq!(store.records(), january_orders.as_slice());
}

#[rstest]
fn test_range_days_match_filter_window(quarter_orders: Vec<OrderRecord>) {
    let store = RecordStore::new(quarter_orders);
    let range = DateRange::new(date(2024, 2, 1), date(2024, 2, 29)).unwrap();
    let snapshot = store.filter_range(range);

    assert_eq!(range.days(), 29);
    for record in snapshot.iter() {
        let day = record.purchase_date();
        assert!(day >= range.start() && day <= range.start() + Duration::days(28));
    }
}
