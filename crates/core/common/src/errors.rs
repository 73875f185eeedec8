//! Error types for the reporting core

use chrono::NaiveDate;
use thiserror::Error;

/// Failures surfaced by range filtering and report assembly
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Range start falls after range end
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// Requested first day
        start: NaiveDate,
        /// Requested last day
        end: NaiveDate,
    },
}

/// Type alias for reporting results
pub type ReportResult<T> = Result<T, ReportError>;

/// A payment label outside the known set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown payment type: {0}")]
pub struct UnknownPaymentType(pub String);

/// A year-month label that is not `YYYY-MM`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid year-month label: {0}")]
pub struct InvalidYearMonth(pub String);
