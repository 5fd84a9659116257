//! Transaction record for the Rabobank to QIF converter
//!
//! One [`Transaction`] is built per data row of a Rabobank CSV export. Most
//! columns are carried through verbatim, only the interest date, amount,
//! account and description make it into the QIF output.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::fmt;

/// A single transaction from a Rabobank CSV export
///
/// Built once by [`build_transaction`](crate::io::rabo_format::build_transaction),
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// IBAN of the exported account
    pub account: String,
    /// Currency code (e.g. "EUR"). Not used in the output
    pub currency: String,
    /// BIC of the exported account. Not used in the output
    pub bic: String,
    /// Sequence number of the transaction. Not used in the output
    pub sequence_number: String,
    /// Booking date, kept as the raw field. Not used in the output
    pub booking_date: String,
    /// Interest (value) date, used as the QIF transaction date
    pub interest_date: NaiveDate,
    /// Signed amount, negative for debits
    pub amount: Decimal,
    /// Balance after the transaction. Not used in the output
    pub balance_after: String,
    /// Counterparty account number, if any. Not used in the output
    pub payee_account: String,
    /// All description fields joined by single spaces
    pub description: String,
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}-{}-{}] {:.2} '{}'",
            self.interest_date.day(),
            self.interest_date.month(),
            self.interest_date.year(),
            self.amount,
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_summary() {
        let transaction = Transaction {
            account: "NL00RABO0123456789".to_string(),
            currency: "EUR".to_string(),
            bic: "RABONL2U".to_string(),
            sequence_number: "000000000000001".to_string(),
            booking_date: "2018-01-05".to_string(),
            interest_date: NaiveDate::from_ymd_opt(2018, 1, 5).unwrap(),
            amount: Decimal::new(-1234, 2),
            balance_after: "+100,00".to_string(),
            payee_account: String::new(),
            description: "Groceries   ".to_string(),
        };

        assert_eq!(transaction.to_string(), "[5-1-2018] -12.34 'Groceries   '");
    }
}
