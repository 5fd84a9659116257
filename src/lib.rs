//! Rabobank CSV to QIF converter
//! # Overview
//!
//! This library converts Rabobank consumer CSV exports into QIF (Quicken
//! Interchange Format) files. Every input file produces one output file,
//! named by appending `.qif` to the input path.
//!
//! # Architecture
//!
//! The conversion is a linear pipeline per file:
//!
//! - [`io::rabo_reader`] - Streams the data rows of an export, skipping the header
//! - [`io::rabo_format`] - Builds a [`Transaction`] from one row (column schema,
//!   date and amount parsing)
//! - [`io::qif_format`] - Renders transactions as QIF blocks
//! - [`convert`] - Drives the pipeline per file and over a list of files
//! - [`types`] - The transaction record and error types
//! - [`cli`] - CLI arguments parsing
//!
//! # Error Handling
//!
//! Rows that cannot be converted (wrong column count, invalid date, invalid
//! amount) are logged and skipped; exports usually end with such a line.
//! Failing to open the input or write the output aborts that file only.

// Module declarations
pub mod cli;
pub mod convert;
pub mod io;
pub mod logging;
pub mod types;

pub use convert::{convert_all, convert_file, output_path_for, RunSummary, QIF_SUFFIX};
pub use types::{ConvertError, RowError, Transaction};
