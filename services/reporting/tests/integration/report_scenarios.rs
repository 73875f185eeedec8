//! End-to-end report scenarios over the assembler

use commerce_common::{OrderRecord, ReportError, YearMonth};
use commerce_reporting::aggregators::{CategoryCount, DailyCount, MonthlyCount};
use commerce_reporting::loader::{LoadOptions, read_orders};
use commerce_reporting::{RecordStore, ReportAssembler, ReportingConfig, ViewKind};
use pretty_assertions::assert_eq;
use rstest::*;
use test_utils::{date, january_orders, quarter_orders};

#[fixture]
fn january_store(january_orders: Vec<OrderRecord>) -> RecordStore {
    RecordStore::new(january_orders)
}

#[rstest]
fn test_january_report(january_store: RecordStore) {
    let bundle = ReportAssembler::default()
        .build_report(&january_store, date(2024, 1, 1), date(2024, 1, 31))
        .unwrap();

    assert_eq!(bundle.record_count, 3);
    assert_eq!(
        bundle.daily_orders,
        vec![
            DailyCount {
                date: date(2024, 1, 5),
                count: 2
            },
            DailyCount {
                date: date(2024, 1, 6),
                count: 1
            },
        ]
    );
    assert_eq!(
        bundle.monthly_sales,
        vec![MonthlyCount {
            month: YearMonth::new(2024, 1).unwrap(),
            count: 3
        }]
    );
    assert_eq!(
        bundle.top_categories,
        vec![
            CategoryCount {
                category: "toys".to_string(),
                count: 2
            },
            CategoryCount {
                category: "books".to_string(),
                count: 1
            },
        ]
    );
}

#[rstest]
fn test_empty_window_yields_empty_views(january_store: RecordStore) {
    let bundle = ReportAssembler::default()
        .build_report(&january_store, date(2023, 6, 1), date(2023, 6, 30))
        .unwrap();

    assert!(bundle.is_empty());
    assert!(bundle.views().iter().all(|view| view.rows == 0));
    assert_eq!(bundle.product_sales.description_correlation(), 0.0);
}

#[rstest]
fn test_reversed_range_is_rejected(january_store: RecordStore) {
    let err = ReportAssembler::default()
        .build_report(&january_store, date(2024, 1, 31), date(2024, 1, 1))
        .unwrap_err();
    assert_eq!(
        err,
        ReportError::InvalidRange {
            start: date(2024, 1, 31),
            end: date(2024, 1, 1)
        }
    );
}

#[rstest]
fn test_default_report_spans_all_data(january_store: RecordStore) {
    let bundle = ReportAssembler::default().build_default_report(&january_store);
    let range = bundle.range.unwrap();
    assert_eq!(range.start(), date(2024, 1, 5));
    assert_eq!(range.end(), date(2024, 2, 10));
    assert_eq!(bundle.record_count, 4);
    assert_eq!(bundle.monthly_sales.len(), 2);
}

#[rstest]
fn test_views_agree_on_one_snapshot(quarter_orders: Vec<OrderRecord>) {
    let store = RecordStore::new(quarter_orders);
    let bundle = ReportAssembler::default()
        .build_report(&store, date(2024, 2, 1), date(2024, 2, 29))
        .unwrap();

    let daily_total: u64 = bundle.daily_orders.iter().map(|row| row.count).sum();
    let monthly_total: u64 = bundle.monthly_sales.iter().map(|row| row.count).sum();
    let grouped_total: usize = bundle
        .payment_distribution
        .iter()
        .map(|group| group.summary.count)
        .sum();

    assert_eq!(daily_total, bundle.record_count as u64);
    assert_eq!(monthly_total, bundle.record_count as u64);
    assert_eq!(grouped_total, bundle.record_count);
    assert_eq!(bundle.installments_vs_value.len(), bundle.record_count);
    let in_february = |row: &DailyCount| row.date.format("%Y-%m").to_string() == "2024-02";
    assert!(bundle.daily_orders.iter().all(in_february));
}

#[rstest]
fn test_configured_top_limit_applies(quarter_orders: Vec<OrderRecord>) {
    let store = RecordStore::new(quarter_orders);
    let config = ReportingConfig {
        top_categories: 2,
        ..ReportingConfig::default()
    };
    let bundle = ReportAssembler::new(&config).build_default_report(&store);
    assert_eq!(bundle.top_categories.len(), 2);
}

#[rstest]
fn test_bundle_json_shape(january_store: RecordStore) {
    let bundle = ReportAssembler::default()
        .build_report(&january_store, date(2024, 1, 1), date(2024, 1, 31))
        .unwrap();
    let json = serde_json::to_value(&bundle).unwrap();

    assert_eq!(json["range"]["start"], "2024-01-01");
    assert_eq!(json["range"]["end"], "2024-01-31");
    assert_eq!(json["daily_orders"][0]["date"], "2024-01-05");
    assert_eq!(json["monthly_sales"][0]["month"], "2024-01");
    assert_eq!(json["top_categories"][0]["category"], "toys");
    assert_eq!(json["payment_distribution"][0]["payment_type"], "credit_card");
    assert!(json["product_sales"].is_array());
}

#[rstest]
fn test_view_kinds_follow_dashboard_order(january_store: RecordStore) {
    let bundle = ReportAssembler::default().build_default_report(&january_store);
    let kinds: Vec<ViewKind> = bundle.views().iter().map(|view| view.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ViewKind::LineChart,
            ViewKind::Table,
            ViewKind::RankedTable,
            ViewKind::BarChart,
            ViewKind::BoxPlot,
            ViewKind::ScatterPlot,
            ViewKind::SizedScatterPlot,
        ]
    );
}

#[rstest]
fn test_csv_to_report() {
    let data = "\
order_id,order_purchase_timestamp,product_category_name_english,product_id,payment_type,payment_value,payment_installments,product_photos_qty,product_description_lenght
a,2024-01-05 09:00:00,toys,p1,credit_card,10.00,2,1,200
b,2024-01-05 18:30:00,toys,p1,boleto,20.00,1,3,250
c,2024-01-06 11:15:00,books,p2,voucher,5.00,1,2,120";
    let store = RecordStore::new(read_orders(data.as_bytes(), &LoadOptions::default()).unwrap());
    let bundle = ReportAssembler::default().build_default_report(&store);

    assert_eq!(bundle.record_count, 3);
    assert_eq!(bundle.daily_orders.len(), 2);
    let p1 = bundle.product_sales.get("p1").unwrap();
    assert_eq!(p1.total_sales, 2);
    assert_eq!(p1.photos_qty, Some(1));
    assert_eq!(p1.description_length, Some(200));
}
