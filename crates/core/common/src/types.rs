//! Core types for the commerce reporting pipeline

use crate::constants::{MONEY_SCALE, MONEY_SCALE_F64};
use crate::errors::{InvalidYearMonth, ReportError, ReportResult, UnknownPaymentType};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Monetary amount (stored as i64 cents for determinism, 2 decimal places)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64); // Internal: amount in cents

impl Money {
    /// Create an amount from f64 (rounds to the nearest cent)
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(value: f64) -> Self {
        Self((value * MONEY_SCALE_F64).round() as i64)
    }

    /// Get the amount as f64
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / MONEY_SCALE_F64
    }

    /// Get the amount in cents
    #[must_use]
    pub const fn as_cents(&self) -> i64 {
        self.0
    }

    /// Create from cents
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Zero amount
    pub const ZERO: Self = Self(0);
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        let scale = MONEY_SCALE.unsigned_abs();
        write!(f, "{sign}{}.{:02}", cents / scale, cents % scale)
    }
}

/// Payment method recorded on a line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// Credit card
    CreditCard,
    /// Boleto bancario (bank slip)
    Boleto,
    /// Store voucher
    Voucher,
    /// Debit card
    DebitCard,
    /// Source marks the method as not defined
    NotDefined,
}

impl PaymentType {
    /// Every payment type, in declaration order
    pub const ALL: [Self; 5] = [
        Self::CreditCard,
        Self::Boleto,
        Self::Voucher,
        Self::DebitCard,
        Self::NotDefined,
    ];

    /// Dataset label for this payment type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit_card",
            Self::Boleto => "boleto",
            Self::Voucher => "voucher",
            Self::DebitCard => "debit_card",
            Self::NotDefined => "not_defined",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = UnknownPaymentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == label)
            .ok_or_else(|| UnknownPaymentType(label.to_string()))
    }
}

/// Calendar month used to bucket monthly sales
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    /// Calendar year
    pub year: i32,
    /// Month of year, 1-12
    pub month: u32,
}

impl YearMonth {
    /// Create a year-month, `None` when the month is out of range
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Option<Self> {
        if month >= 1 && month <= 12 {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Month containing the given date or timestamp
    #[must_use]
    pub fn of<T: Datelike>(value: &T) -> Self {
        Self {
            year: value.year(),
            month: value.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = InvalidYearMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidYearMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

// Charts label months as `YYYY-MM`
impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(D::Error::custom)
    }
}

/// Inclusive range of calendar days
///
/// `end` covers the whole final day: a timestamp matches when its date
/// component lies in `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

/// Unchecked bounds as they arrive over the wire
#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = ReportError;

    fn try_from(raw: RawDateRange) -> ReportResult<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Create a range, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> ReportResult<Self> {
        if start > end {
            return Err(ReportError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Single-day range
    #[must_use]
    pub const fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// First day of the range
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range (inclusive)
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether the timestamp falls on a day inside the range
    #[must_use]
    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        self.contains_date(timestamp.date())
    }

    /// Whether the calendar day is inside the range
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// One line item of the order dataset
///
/// An order with several products contributes one record per item, all
/// sharing the same `order_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Order identifier, repeated across the order's line items
    pub order_id: String,
    /// Purchase time
    pub purchase_timestamp: NaiveDateTime,
    /// Product category label, absent for uncategorised products
    pub product_category: Option<String>,
    /// Product identifier
    pub product_id: String,
    /// Payment method
    pub payment_type: PaymentType,
    /// Amount paid
    pub payment_value: Money,
    /// Number of installments
    pub payment_installments: u32,
    /// Number of product photos, when known
    pub product_photos_qty: Option<u32>,
    /// Length of the product description in characters, when known
    pub product_description_length: Option<u32>,
}

impl OrderRecord {
    /// Calendar day of the purchase
    #[must_use]
    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_timestamp.date()
    }

    /// Calendar month of the purchase
    #[must_use]
    pub fn year_month(&self) -> YearMonth {
        YearMonth::of(&self.purchase_timestamp)
    }
}
