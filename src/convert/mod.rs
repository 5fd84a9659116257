//! File conversion module
//!
//! Drives the conversion of Rabobank CSV exports into QIF files. Each input
//! path is converted on its own, strictly in the order given, with no state
//! shared between files.
//!
//! - `file` - conversion of a single file (output naming, row streaming)

pub mod file;

pub use file::{convert_file, convert_rows, convert_to_writer, output_path_for, QIF_SUFFIX};

use crate::types::ConvertError;
use std::path::{Path, PathBuf};
use tracing::error;

/// Row counts for one converted file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Transactions written to the output
    pub converted: usize,
    /// Rows that could not be converted and were skipped
    pub skipped: usize,
}

/// Result of converting one file to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// The CSV file that was read
    pub input: PathBuf,
    /// The QIF file that was written
    pub output: PathBuf,
    /// Row counts
    pub report: ConversionReport,
}

/// Outcome of converting a list of files
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Files converted successfully, in input order
    pub converted: Vec<FileReport>,
    /// Files that failed, in input order, with the fatal error
    pub failed: Vec<(PathBuf, ConvertError)>,
}

impl RunSummary {
    /// Whether any file could not be converted
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Convert every input file in order
///
/// A fatal error for one file is logged and recorded, and the next file is
/// still attempted.
pub fn convert_all<I, P>(inputs: I) -> RunSummary
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut summary = RunSummary::default();

    for input in inputs {
        let input = input.as_ref();
        match convert_file(input) {
            Ok(report) => summary.converted.push(report),
            Err(e) => {
                error!("Failed to convert {}: {}", input.display(), e);
                summary.failed.push((input.to_path_buf(), e));
            }
        }
    }

    summary
}
