//! rabo2qif CLI
//!
//! Converts Rabobank CSV exports into QIF files.
//!
//! # Usage
//!
//! ```bash
//! rabo2qif export.csv              # writes export.csv.qif
//! rabo2qif jan.csv feb.csv mar.csv # one .qif per input
//! RUST_LOG=debug rabo2qif export.csv
//! ```
//!
//! # Exit Codes
//!
//! - 0: Every file converted (skipped rows do not count as failures)
//! - 1: At least one file could not be converted; the others were still attempted
//! - 2: Invalid command line

use rabo2qif::{cli, convert, logging};
use std::process;

fn main() {
    let args = cli::parse_args();

    logging::setup_logging();

    let summary = convert::convert_all(&args.files);
    if summary.has_failures() {
        process::exit(1);
    }
}
