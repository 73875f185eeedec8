//! Order dataset loader
//!
//! Reads the merged order CSV (optionally gzip-compressed) into
//! [`OrderRecord`]s. Column names follow the source export, including its
//! `product_description_lenght` spelling. Unused columns are ignored.

use crate::config::ReportingConfig;
use crate::error::{LoadError, LoadResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use commerce_common::constants::{DATE_FORMAT, TIMESTAMP_FORMAT};
use commerce_common::{Money, OrderRecord, PaymentType};
use flate2::read::GzDecoder;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

/// Rejected rows logged individually before only the total is reported
const MAX_LOGGED_ROW_ERRORS: usize = 10;

/// Loader behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Skip malformed rows instead of failing on the first one
    pub skip_invalid_rows: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            skip_invalid_rows: true,
        }
    }
}

impl From<&ReportingConfig> for LoadOptions {
    fn from(config: &ReportingConfig) -> Self {
        Self {
            skip_invalid_rows: config.skip_invalid_rows,
        }
    }
}

/// One CSV row as exported by the source pipeline
#[derive(Debug, Deserialize)]
struct RawOrderRow {
    order_id: String,
    order_purchase_timestamp: Option<String>,
    product_category_name_english: Option<String>,
    product_id: String,
    payment_type: Option<String>,
    payment_value: Option<String>,
    payment_installments: Option<String>,
    product_photos_qty: Option<String>,
    product_description_lenght: Option<String>,
}

impl RawOrderRow {
    fn into_record(self, line: u64) -> LoadResult<OrderRecord> {
        let timestamp = self.order_purchase_timestamp.unwrap_or_default();
        let purchase_timestamp =
            parse_timestamp(&timestamp).ok_or(LoadError::InvalidTimestamp {
                line,
                value: timestamp,
            })?;

        let payment_label = self.payment_type.unwrap_or_default();
        let payment_type = payment_label
            .parse::<PaymentType>()
            .map_err(|_| LoadError::InvalidPaymentType {
                line,
                value: payment_label,
            })?;

        let amount = self.payment_value.unwrap_or_default();
        let payment_value = parse_amount(&amount).ok_or(LoadError::InvalidAmount {
            line,
            value: amount,
        })?;

        let payment_installments =
            parse_count(line, "payment_installments", self.payment_installments)?.ok_or(
                LoadError::InvalidCount {
                    line,
                    field: "payment_installments",
                    value: String::new(),
                },
            )?;

        Ok(OrderRecord {
            order_id: self.order_id,
            purchase_timestamp,
            product_category: self
                .product_category_name_english
                .map(|category| category.trim().to_string())
                .filter(|category| !category.is_empty()),
            product_id: self.product_id,
            payment_type,
            payment_value,
            payment_installments,
            product_photos_qty: parse_count(line, "product_photos_qty", self.product_photos_qty)?,
            product_description_length: parse_count(
                line,
                "product_description_lenght",
                self.product_description_lenght,
            )?,
        })
    }
}

/// Full timestamp, or a bare date taken as midnight
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

fn parse_amount(value: &str) -> Option<Money> {
    let amount = value.trim().parse::<f64>().ok()?;
    (amount.is_finite() && amount >= 0.0).then(|| Money::new(amount))
}

/// Non-negative whole number; float exports such as `3.0` are accepted
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
fn parse_count(line: u64, field: &'static str, value: Option<String>) -> LoadResult<Option<u32>> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let parsed = raw.trim().parse::<f64>().ok().filter(|count| {
        count.is_finite() && *count >= 0.0 && count.fract() == 0.0 && *count <= f64::from(u32::MAX)
    });
    match parsed {
        Some(count) => Ok(Some(count as u32)),
        None => Err(LoadError::InvalidCount {
            line,
            field,
            value: raw,
        }),
    }
}

/// Load records from a CSV file; `.gz` files are decompressed on the fly
pub fn load_orders(path: &Path, options: &LoadOptions) -> LoadResult<Vec<OrderRecord>> {
    info!("Loading order records from: {:?}", path);

    let file = File::open(path)?;
    let is_gzip = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("gz"));

    if is_gzip {
        read_orders(GzDecoder::new(BufReader::new(file)), options)
    } else {
        read_orders(BufReader::new(file), options)
    }
}

/// Read records from any CSV source with a header row
pub fn read_orders<R: Read>(reader: R, options: &LoadOptions) -> LoadResult<Vec<OrderRecord>> {
    // Rows with a wrong field count fail in deserialization, under the skip policy
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    let mut row = csv::StringRecord::new();
    let mut error_count = 0usize;

    while reader.read_record(&mut row)? {
        let line = row.position().map_or(0, csv::Position::line);
        let parsed = row
            .deserialize::<RawOrderRow>(Some(&headers))
            .map_err(LoadError::from)
            .and_then(|raw| raw.into_record(line));

        match parsed {
            Ok(record) => records.push(record),
            Err(e) if options.skip_invalid_rows => {
                error_count += 1;
                if error_count <= MAX_LOGGED_ROW_ERRORS {
                    warn!("Skipping row: {}", e);
                }
            }
            Err(e) => return Err(e),
        }
    }

    if error_count > 0 {
        warn!("Total skipped rows: {}", error_count);
    }

    info!("Loaded {} order records", records.len());
    Ok(records)
}
