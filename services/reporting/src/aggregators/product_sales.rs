//! Product attributes against sales volume

use super::Aggregator;
use crate::analytics::StatisticalAnalyzer;
use crate::store::Snapshot;
use serde::Serialize;
use std::collections::BTreeMap;

/// Sales and listing attributes of one product
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSalesRow {
    /// Product identifier
    pub product_id: String,
    /// Line items sold
    pub total_sales: u64,
    /// Number of photos on the listing
    pub photos_qty: Option<u32>,
    /// Description length in characters
    pub description_length: Option<u32>,
}

/// Per-product table, ascending by product id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProductSalesTable {
    rows: Vec<ProductSalesRow>,
}

impl ProductSalesTable {
    /// Rows ascending by product id
    #[must_use]
    pub fn rows(&self) -> &[ProductSalesRow] {
        &self.rows
    }

    /// Number of distinct products
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no product was sold
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for one product
    #[must_use]
    pub fn get(&self, product_id: &str) -> Option<&ProductSalesRow> {
        self.rows
            .binary_search_by(|row| row.product_id.as_str().cmp(product_id))
            .ok()
            .map(|at| &self.rows[at])
    }

    /// Pearson correlation of description length with sales
    ///
    /// Products without a known description length are left out.
    #[must_use]
    pub fn description_correlation(&self) -> f64 {
        self.correlation_with(|row| row.description_length)
    }

    /// Pearson correlation of photo count with sales
    #[must_use]
    pub fn photos_correlation(&self) -> f64 {
        self.correlation_with(|row| row.photos_qty)
    }

    #[allow(clippy::cast_precision_loss)]
    fn correlation_with(&self, attribute: impl Fn(&ProductSalesRow) -> Option<u32>) -> f64 {
        let (x, y): (Vec<f64>, Vec<f64>) = self
            .rows
            .iter()
            .filter_map(|row| {
                attribute(row).map(|value| (f64::from(value), row.total_sales as f64))
            })
            .unzip();
        StatisticalAnalyzer::correlation(&x, &y)
    }
}

/// Sales count per product with its listing attributes
///
/// All records of one product are expected to carry the same photo count
/// and description length. When they diverge the first record carrying a
/// value wins; later values are ignored, not reconciled.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductDescriptionSalesCorrelation;

impl Aggregator for ProductDescriptionSalesCorrelation {
    type Output = ProductSalesTable;

    const NAME: &'static str = "product_sales";

    fn aggregate(&self, snapshot: &Snapshot<'_>) -> Self::Output {
        let mut by_product: BTreeMap<&str, ProductSalesRow> = BTreeMap::new();

        for record in snapshot.iter() {
            let row = by_product
                .entry(record.product_id.as_str())
                .or_insert_with(|| ProductSalesRow {
                    product_id: record.product_id.clone(),
                    total_sales: 0,
                    photos_qty: None,
                    description_length: None,
                });
            row.total_sales += 1;
            if row.photos_qty.is_none() {
                row.photos_qty = record.product_photos_qty;
            }
            if row.description_length.is_none() {
                row.description_length = record.product_description_length;
            }
        }

        ProductSalesTable {
            rows: by_product.into_values().collect(),
        }
    }
}
