//! Streaming reader over a Rabobank CSV export
//!
//! Provides an iterator of transactions from a CSV file. Delegates the
//! column schema and field parsing to the `rabo_format` module.
//!
//! # Design
//!
//! RaboReader wraps a `csv::Reader` configured for the bank format: comma
//! delimited, double-quote quoting, one header line that is discarded, and
//! flexible field counts so that rows of the wrong width reach the record
//! builder instead of failing inside the CSV layer. Rows are read one at a
//! time into a reused buffer.
//!
//! # Iterator Interface
//!
//! RaboReader yields `Result<Transaction, ConvertError>` for each data row:
//!
//! ```no_run
//! use rabo2qif::io::rabo_reader::RaboReader;
//! use std::path::Path;
//!
//! let reader = RaboReader::from_path(Path::new("statement.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(transaction) => println!("{}", transaction),
//!         Err(e) if e.is_recoverable() => eprintln!("Skipping: {}", e),
//!         Err(e) => panic!("{}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Failing to open the file is returned from `from_path()`
//! - Rows rejected by the record builder are yielded as `SkippedRow`,
//!   carrying the line number and the raw fields
//! - Rows the CSV layer cannot decode are yielded as `ParseError`
//! - Read failures are yielded as `IoError`; the caller should stop

use crate::io::rabo_format::build_transaction;
use crate::types::{ConvertError, Transaction};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Streaming reader over the data rows of a Rabobank CSV export
#[derive(Debug)]
pub struct RaboReader<R = File> {
    reader: csv::Reader<R>,
    record: StringRecord,
}

impl RaboReader<File> {
    /// Open a Rabobank CSV file for reading
    ///
    /// # Returns
    ///
    /// * `Ok(RaboReader)` if the file opened successfully
    /// * `Err(ConvertError::FileNotFound)` if the path does not exist
    /// * `Err(ConvertError::IoError)` for any other open failure
    pub fn from_path(path: &Path) -> Result<Self, ConvertError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConvertError::file_not_found(&path.display().to_string()),
            _ => ConvertError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: Read> RaboReader<R> {
    /// Wrap any byte source holding a Rabobank CSV export
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .delimiter(b',')
            .quote(b'"')
            .has_headers(true)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(source);

        Self {
            reader,
            record: StringRecord::new(),
        }
    }
}

impl<R: Read> Iterator for RaboReader<R> {
    type Item = Result<Transaction, ConvertError>;

    /// Read the next data row and build a transaction from it
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Transaction))` - Successfully built record
    /// * `Some(Err(ConvertError))` - Skipped row, undecodable row or read failure
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let line = self.record.position().map_or(0, |pos| pos.line());
                Some(build_transaction(&self.record).map_err(|reason| {
                    let row = self.record.iter().map(str::to_string).collect();
                    ConvertError::skipped_row(line, row, reason)
                }))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
