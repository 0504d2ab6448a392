//! Expense dashboard is a transaction aggregation and filtering engine for a
//! personal finance dashboard.
//!
//! Given a collection of transactions and the filter parameters chosen by the
//! user, it produces the datasets behind three charts (expenses scattered over
//! a month, monthly expense totals over a year and expenses per category over
//! a date range) plus summary totals. The datasets can be written as JSON or
//! rendered as a self-contained HTML page.

#![warn(missing_docs)]

pub mod calendar;
pub mod dashboard;
pub mod filters;
mod html;
pub mod palette;
pub mod source;
pub mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use dashboard::{DashboardReport, dashboard_page};
pub use filters::{FilterParameter, FilterQuery};
pub use transaction::{Transaction, TransactionBuilder, TransactionId, TransactionType, UserId};

/// The errors that may occur in the application.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// A filter parameter was present but could not be parsed.
    ///
    /// Only the dataset that depends on the parameter fails, the other
    /// datasets are still built.
    #[error("invalid {parameter} \"{value}\", expected {expected}", expected = .parameter.expected_format())]
    InvalidParameter {
        /// The parameter that was malformed.
        parameter: FilterParameter,
        /// The text that was supplied.
        value: String,
    },

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The transaction file could not be read.
    #[error("could not read \"{0}\": {1}")]
    ReadError(String, String),

    /// The transaction file is neither JSON nor CSV.
    #[error("unsupported file type \"{0}\", expected a .json or .csv file")]
    UnsupportedFileType(String),

    /// The transaction file had issues that prevented it from being parsed.
    #[error("could not parse the transactions in \"{0}\": {1}")]
    InvalidTransactionFile(String, String),

    /// A transaction had a negative, infinite or NaN amount.
    ///
    /// Amounts are finite magnitudes, the direction of the money is given by
    /// the transaction type.
    #[error("transaction \"{0}\" has the invalid amount {1}, expected a finite, non-negative number")]
    InvalidAmount(TransactionId, f64),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// The report could not be written to its destination.
    #[error("could not write to \"{0}\": {1}")]
    WriteError(String, String),
}
