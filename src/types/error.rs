//! Error types for the Rabobank to QIF converter
//!
//! Errors come in two layers:
//!
//! - [`RowError`]: why a single CSV row could not be turned into a
//!   [`Transaction`](crate::types::Transaction). Always recoverable.
//! - [`ConvertError`]: anything that happens while converting a file. Some
//!   variants wrap a skipped row and are recoverable, the rest abort the
//!   conversion of that file.

use thiserror::Error;

/// Reason a CSV row was rejected by the record builder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// The row does not have the fixed number of columns
    ///
    /// Expected for the summary footer some exports carry.
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Number of columns in the export format
        expected: usize,
        /// Number of fields in the row
        found: usize,
    },

    /// The interest date is not a valid `YYYYMMDD` or `YYYY-MM-DD` date
    #[error("invalid date '{value}'")]
    InvalidDate {
        /// The raw date field
        value: String,
    },

    /// The amount is not a decimal number after comma normalisation
    #[error("invalid amount '{value}'")]
    InvalidAmount {
        /// The raw amount field
        value: String,
    },
}

impl RowError {
    /// Create a FieldCount error
    pub fn field_count(expected: usize, found: usize) -> Self {
        RowError::FieldCount { expected, found }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(value: &str) -> Self {
        RowError::InvalidDate {
            value: value.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(value: &str) -> Self {
        RowError::InvalidAmount {
            value: value.to_string(),
        }
    }
}

/// Main error type for converting a file
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// Input file not found at the specified path
    ///
    /// Fatal for the file, the next input is still attempted.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading the input or writing the output
    ///
    /// Fatal for the file.
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A row could not be decoded by the CSV layer (e.g. invalid UTF-8)
    ///
    /// Recoverable - the row is skipped.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A row was rejected by the record builder
    ///
    /// Recoverable - the row is skipped.
    #[error("Failed to parse line {line} ({reason}): {row:?}")]
    SkippedRow {
        /// Line number of the row in the input file
        line: u64,
        /// The raw fields of the row
        row: Vec<String>,
        /// Why the row was rejected
        reason: RowError,
    },
}

impl ConvertError {
    /// Whether the conversion of the file can continue past this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ConvertError::ParseError { .. } | ConvertError::SkippedRow { .. }
        )
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        ConvertError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a SkippedRow error
    pub fn skipped_row(line: u64, row: Vec<String>, reason: RowError) -> Self {
        ConvertError::SkippedRow { line, row, reason }
    }
}

// Conversion from io::Error to ConvertError
impl From<std::io::Error> for ConvertError {
    fn from(error: std::io::Error) -> Self {
        ConvertError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to ConvertError
impl From<csv::Error> for ConvertError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return ConvertError::IoError {
                message: error.to_string(),
            };
        }

        ConvertError::ParseError {
            line: error.position().map(|pos| pos.line()),
            message: error.to_string(),
        }
    }
}
