//! Constants shared across the reporting pipeline

/// Fixed-point scale for monetary amounts (2 decimal places)
pub const MONEY_SCALE: i64 = 100;
/// Fixed-point scale as f64
pub const MONEY_SCALE_F64: f64 = 100.0;

/// Number of categories returned by the top-categories view unless configured
pub const DEFAULT_TOP_CATEGORIES: usize = 5;

/// IQR multiplier for box-plot whiskers (Tukey fences)
pub const DEFAULT_WHISKER_FACTOR: f64 = 1.5;

/// Timestamp layout used by the source dataset
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Calendar date layout used for range bounds
pub const DATE_FORMAT: &str = "%Y-%m-%d";
