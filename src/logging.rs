//! Logging setup
//!
//! Diagnostics (skipped rows, saved files, failed files) go to stdout through
//! a tracing fmt layer. Verbosity comes from `RUST_LOG`, defaulting to info.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Build the filter from `RUST_LOG`, falling back to `default_level`
pub fn env_filter(default_level: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy()
}

/// Install the global subscriber
pub fn setup_logging() {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stdout)
        .with_filter(env_filter(LevelFilter::INFO));

    tracing_subscriber::registry().with(terminal_log).init();
}
