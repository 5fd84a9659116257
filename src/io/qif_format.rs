//! QIF output serialization
//!
//! Every transaction is written as its own `!Account` section followed by a
//! `!Type:Bank` entry. Repeating the account header per transaction lets a
//! single QIF file hold transactions for several accounts.

use crate::types::{ConvertError, Transaction};
use chrono::Datelike;
use rust_decimal::RoundingStrategy;
use std::io::Write;

/// Render one transaction as a QIF block
///
/// The block has no trailing newline:
///
/// ```text
/// !Account
/// NNL00RABO0123456789
/// TBank
/// ^
/// !Type:Bank
/// D1/5/2018
/// T12.34
/// NTransfer
/// PGroceries
/// ^
/// ```
pub fn to_qif(transaction: &Transaction) -> String {
    let date = transaction.interest_date;
    let amount = transaction
        .amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    [
        "!Account".to_string(),
        format!("N{}", transaction.account),
        "TBank".to_string(),
        "^".to_string(),
        "!Type:Bank".to_string(),
        format!("D{}/{}/{}", date.month(), date.day(), date.year()),
        format!("T{:.2}", amount),
        "NTransfer".to_string(),
        format!("P{}", transaction.description),
        "^".to_string(),
    ]
    .join("\n")
}

/// Write transactions as QIF blocks, each followed by a newline
///
/// # Returns
///
/// * `Ok(usize)` - Number of transactions written
/// * `Err(ConvertError::IoError)` if the output could not be written
pub fn write_qif<I>(transactions: I, output: &mut dyn Write) -> Result<usize, ConvertError>
where
    I: IntoIterator<Item = Transaction>,
{
    let mut written = 0;
    for transaction in transactions {
        writeln!(output, "{}", to_qif(&transaction))?;
        written += 1;
    }
    Ok(written)
}
