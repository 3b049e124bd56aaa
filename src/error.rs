//! Error types for the rental statement engine.

use crate::movie::TariffCategory;
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, RentalError>;

/// Errors that can occur while pricing rentals or building statements.
#[derive(Error, Debug)]
pub enum RentalError {
    /// Price code tag that does not name a known tariff category
    #[error("Invalid tariff category '{tag}'")]
    InvalidCategory { tag: String },

    /// Rental duration outside the positive day range
    #[error("Invalid rental duration: {days} days")]
    InvalidDuration { days: i64 },

    /// The same title was registered under two different categories
    #[error("Movie '{title}' is already registered as {existing}, not {requested}")]
    ConflictingCategory {
        title: String,
        existing: TariffCategory,
        requested: TariffCategory,
    },

    /// Invalid rental record in a ledger file
    #[error("Invalid rental record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: rental-statement <rentals.csv> [--breakdown]")]
    MissingArgument,

    /// Unrecognized command-line argument
    #[error("Unrecognized argument '{0}'. Usage: rental-statement <rentals.csv> [--breakdown]")]
    InvalidArgument(String),

    /// One or more customers' statements could not be produced
    #[error("{count} statement(s) aborted due to invalid rentals")]
    StatementsAborted { count: usize },
}
