//! Error types for dataset loading

use thiserror::Error;

/// Failures while reading the source dataset
#[derive(Error, Debug)]
pub enum LoadError {
    /// File could not be opened or read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV framing or field decoding failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Purchase timestamp missing or unparseable
    #[error("Invalid purchase timestamp on line {line}: {value:?}")]
    InvalidTimestamp {
        /// Source line number
        line: u64,
        /// Raw field content
        value: String,
    },

    /// Payment type missing or unknown
    #[error("Invalid payment type on line {line}: {value:?}")]
    InvalidPaymentType {
        /// Source line number
        line: u64,
        /// Raw field content
        value: String,
    },

    /// Payment value missing, negative or not a number
    #[error("Invalid payment value on line {line}: {value:?}")]
    InvalidAmount {
        /// Source line number
        line: u64,
        /// Raw field content
        value: String,
    },

    /// Count field negative or fractional
    #[error("Invalid {field} on line {line}: {value:?}")]
    InvalidCount {
        /// Source line number
        line: u64,
        /// Column name
        field: &'static str,
        /// Raw field content
        value: String,
    },
}

/// Type alias for loader results
pub type LoadResult<T> = Result<T, LoadError>;
