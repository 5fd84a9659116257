use clap::Parser;
use std::path::PathBuf;

/// Convert Rabobank CSV exports to QIF files
#[derive(Parser, Debug)]
#[command(name = "rabo2qif", version)]
#[command(
    about = "Convert Rabobank CSV exports to QIF files",
    long_about = "Convert Rabobank CSV exports to QIF files.\n\n\
                  For each CSV file a new QIF file with the same name and the added \
                  extension .qif is created. Log verbosity is read from RUST_LOG \
                  (default: info)."
)]
pub struct CliArgs {
    /// Rabobank CSV files to convert
    #[arg(value_name = "FILES", help = "Rabobank CSV files to convert")]
    pub files: Vec<PathBuf>,
}
