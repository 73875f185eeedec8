//! Core types for the commerce reporting pipeline
//!
//! Order line items, date ranges and the error taxonomy shared by the
//! reporting service and its tests.

pub mod constants;
pub mod errors;
pub mod types;

pub use errors::{InvalidYearMonth, ReportError, ReportResult, UnknownPaymentType};
pub use types::{DateRange, Money, OrderRecord, PaymentType, YearMonth};
