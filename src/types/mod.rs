//! Types module
//!
//! Contains core data structures used throughout the application.
//! - `transaction`: the transaction record built from one CSV row
//! - `error`: row-level and file-level error types

pub mod error;
pub mod transaction;

pub use error::{ConvertError, RowError};
pub use transaction::Transaction;
