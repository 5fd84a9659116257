//! Conversion of a single Rabobank CSV file into a QIF file
//!
//! This module orchestrates one file at a time, delegating:
//! - row reading and record building to `RaboReader`
//! - QIF rendering to `qif_format::write_qif`
//!
//! Rows that cannot be converted are logged and skipped. Failing to open the
//! input or to write the output aborts the file.
//!
//! The output is written in place with no atomic rename, so an interrupted
//! run can leave a partial `.qif` file behind.

use crate::convert::{ConversionReport, FileReport};
use crate::io::qif_format::write_qif;
use crate::io::rabo_reader::RaboReader;
use crate::types::ConvertError;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Suffix appended to the input path to name the output file
pub const QIF_SUFFIX: &str = ".qif";

/// Derive the output path by appending [`QIF_SUFFIX`] to the input path
///
/// `statement.csv` becomes `statement.csv.qif`.
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut path = OsString::from(input.as_os_str());
    path.push(QIF_SUFFIX);
    PathBuf::from(path)
}

/// Convert all rows from a reader and write them as QIF to `output`
///
/// Recoverable row failures are logged at warn level and counted. The first
/// fatal error stops the conversion and is returned.
pub fn convert_rows<R: Read>(
    reader: RaboReader<R>,
    output: &mut dyn Write,
) -> Result<ConversionReport, ConvertError> {
    let mut skipped = 0;
    let mut fatal = None;

    let transactions = reader
        .map_while(|result| match result {
            Ok(transaction) => {
                debug!("Converted {}", transaction);
                Some(Some(transaction))
            }
            Err(e) if e.is_recoverable() => {
                warn!("{} (this is normal for the last line in the file)", e);
                skipped += 1;
                Some(None)
            }
            Err(e) => {
                fatal = Some(e);
                None
            }
        })
        .flatten();

    let converted = write_qif(transactions, output)?;

    match fatal {
        Some(e) => Err(e),
        None => Ok(ConversionReport { converted, skipped }),
    }
}

/// Convert the CSV file at `input` and write the QIF result to `output`
pub fn convert_to_writer(
    input: &Path,
    output: &mut dyn Write,
) -> Result<ConversionReport, ConvertError> {
    let reader = RaboReader::from_path(input)?;
    convert_rows(reader, output)
}

/// Convert the CSV file at `input` into `<input>.qif`
///
/// The input is opened before the output is created, so a missing input
/// never leaves an empty output file behind.
pub fn convert_file(input: &Path) -> Result<FileReport, ConvertError> {
    let reader = RaboReader::from_path(input)?;

    let output_path = output_path_for(input);
    let file = File::create(&output_path).map_err(|e| ConvertError::IoError {
        message: format!("Failed to create file '{}': {}", output_path.display(), e),
    })?;

    let mut writer = BufWriter::new(file);
    let report = convert_rows(reader, &mut writer)?;
    writer.flush()?;

    info!("Saved transactions to {}", output_path.display());

    Ok(FileReport {
        input: input.to_path_buf(),
        output: output_path,
        report,
    })
}
