//! I/O module
//!
//! Handles reading Rabobank CSV exports and writing QIF.
//!
//! # Components
//!
//! - `rabo_format` - Rabobank column schema and row-to-record conversion
//! - `rabo_reader` - Streaming CSV reader with iterator interface
//! - `qif_format` - QIF serialization

pub mod qif_format;
pub mod rabo_format;
pub mod rabo_reader;

pub use qif_format::{to_qif, write_qif};
pub use rabo_format::{build_transaction, parse_amount, parse_interest_date, COLUMN_COUNT};
pub use rabo_reader::RaboReader;
