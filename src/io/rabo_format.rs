//! Rabobank CSV format handling
//!
//! This module centralizes the knowledge of the Rabobank export layout:
//! - the fixed column schema (26 columns since the Q1 2018 format)
//! - conversion of one CSV row into a [`Transaction`]
//! - date and amount normalisation
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{RowError, Transaction};
use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;
use std::ops::Range;
use std::str::FromStr;

/// Number of columns in a Rabobank CSV data row
pub const COLUMN_COUNT: usize = 26;

/// Column positions used by the converter
pub mod column {
    pub const ACCOUNT: usize = 0;
    pub const CURRENCY: usize = 1;
    pub const BIC: usize = 2;
    pub const SEQUENCE_NUMBER: usize = 3;
    pub const BOOKING_DATE: usize = 4;
    pub const INTEREST_DATE: usize = 5;
    pub const AMOUNT: usize = 6;
    pub const BALANCE_AFTER: usize = 7;
    pub const PAYEE_ACCOUNT: usize = 8;
    /// Counterparty name, the first part of the description
    pub const DESCRIPTION_0: usize = 9;
    pub const DESCRIPTION_1: usize = 19;
    pub const DESCRIPTION_2: usize = 20;
    pub const DESCRIPTION_3: usize = 21;

    /// Description columns in the order they are joined
    pub const DESCRIPTIONS: [usize; 4] =
        [DESCRIPTION_0, DESCRIPTION_1, DESCRIPTION_2, DESCRIPTION_3];
}

/// Build a Transaction from one CSV data row
///
/// Rejects the row if it does not have exactly [`COLUMN_COUNT`] fields, or if
/// the interest date or amount cannot be parsed. Fields not used in the QIF
/// output are copied verbatim.
///
/// # Arguments
///
/// * `record` - One data row as read by the CSV reader
///
/// # Returns
///
/// * `Ok(Transaction)` - Successfully built record
/// * `Err(RowError)` - The reason the row was rejected
pub fn build_transaction(record: &StringRecord) -> Result<Transaction, RowError> {
    if record.len() != COLUMN_COUNT {
        return Err(RowError::field_count(COLUMN_COUNT, record.len()));
    }

    // Arity checked above, every index is in range
    let field = |index: usize| record.get(index).unwrap_or_default();

    let interest_date = parse_interest_date(field(column::INTEREST_DATE))?;
    let amount = parse_amount(field(column::AMOUNT))?;

    let description = column::DESCRIPTIONS
        .iter()
        .map(|&index| field(index))
        .collect::<Vec<_>>()
        .join(" ");

    Ok(Transaction {
        account: field(column::ACCOUNT).to_string(),
        currency: field(column::CURRENCY).to_string(),
        bic: field(column::BIC).to_string(),
        sequence_number: field(column::SEQUENCE_NUMBER).to_string(),
        booking_date: field(column::BOOKING_DATE).to_string(),
        interest_date,
        amount,
        balance_after: field(column::BALANCE_AFTER).to_string(),
        payee_account: field(column::PAYEE_ACCOUNT).to_string(),
        description,
    })
}

/// Parse an interest date in `YYYYMMDD` or `YYYY-MM-DD` form
///
/// The ten character form is read by position, so any non-digit separator
/// is accepted.
pub fn parse_interest_date(value: &str) -> Result<NaiveDate, RowError> {
    let trimmed = value.trim();

    let parts = match trimmed.len() {
        8 => Some((0..4, 4..6, 6..8)),
        10 if is_separator(trimmed, 4) && is_separator(trimmed, 7) => Some((0..4, 5..7, 8..10)),
        _ => None,
    };

    parts
        .and_then(|(year, month, day)| {
            let year = date_part(trimmed, year)?;
            let month = date_part(trimmed, month)?;
            let day = date_part(trimmed, day)?;
            NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
        })
        .ok_or_else(|| RowError::invalid_date(value))
}

/// Parse an amount that uses a comma as decimal separator
///
/// `"-12,34"` becomes -12.34. A leading `+` is accepted, as the bank writes
/// credits that way.
pub fn parse_amount(value: &str) -> Result<Decimal, RowError> {
    let normalized = value.trim().replace(',', ".");
    let unsigned = normalized.strip_prefix('+').unwrap_or(&normalized);

    Decimal::from_str(unsigned).map_err(|_| RowError::invalid_amount(value))
}

fn is_separator(value: &str, index: usize) -> bool {
    value
        .as_bytes()
        .get(index)
        .is_some_and(|byte| !byte.is_ascii_digit())
}

fn date_part(value: &str, range: Range<usize>) -> Option<u32> {
    let part = value.get(range)?;
    if !part.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Build a full-width row with the given key fields, other columns filled
    /// with placeholder values
    fn row(date: &str, amount: &str, descriptions: [&str; 4]) -> StringRecord {
        let mut fields: Vec<String> = (0..COLUMN_COUNT).map(|i| format!("col{}", i)).collect();
        fields[column::ACCOUNT] = "NL00RABO0123456789".to_string();
        fields[column::CURRENCY] = "EUR".to_string();
        fields[column::INTEREST_DATE] = date.to_string();
        fields[column::AMOUNT] = amount.to_string();
        for (&index, text) in column::DESCRIPTIONS.iter().zip(descriptions) {
            fields[index] = text.to_string();
        }
        StringRecord::from(fields)
    }

    #[test]
    fn test_build_transaction_valid_row() {
        let record = row("20180105", "12,34", ["Groceries", "", "", ""]);

        let transaction = build_transaction(&record).unwrap();

        assert_eq!(transaction.account, "NL00RABO0123456789");
        assert_eq!(transaction.currency, "EUR");
        assert_eq!(transaction.bic, "col2");
        assert_eq!(transaction.sequence_number, "col3");
        assert_eq!(transaction.booking_date, "col4");
        assert_eq!(transaction.balance_after, "col7");
        assert_eq!(transaction.payee_account, "col8");
        assert_eq!(
            transaction.interest_date,
            NaiveDate::from_ymd_opt(2018, 1, 5).unwrap()
        );
        assert_eq!(transaction.amount, Decimal::new(1234, 2));
        assert_eq!(transaction.description, "Groceries   ");
    }

    #[rstest]
    #[case::all_filled(["Albert Heijn", "Pinbetaling", "Amsterdam", "NL"], "Albert Heijn Pinbetaling Amsterdam NL")]
    #[case::middle_empty(["Albert Heijn", "", "Amsterdam", ""], "Albert Heijn  Amsterdam ")]
    #[case::all_empty(["", "", "", ""], "   ")]
    fn test_build_transaction_joins_descriptions_in_order(
        #[case] descriptions: [&str; 4],
        #[case] expected: &str,
    ) {
        let record = row("2018-01-05", "-1,00", descriptions);

        let transaction = build_transaction(&record).unwrap();
        assert_eq!(transaction.description, expected);
    }

    #[test]
    fn test_build_transaction_ignores_unused_columns() {
        let mut fields: Vec<String> = row("20180105", "1,00", ["a", "b", "c", "d"])
            .iter()
            .map(str::to_string)
            .collect();
        fields[10] = "Ultimate party".to_string();
        fields[18] = "Payment reference".to_string();
        fields[25] = "1,0000".to_string();

        let transaction = build_transaction(&StringRecord::from(fields)).unwrap();
        assert_eq!(transaction.description, "a b c d");
    }

    #[rstest]
    #[case::too_few(1)]
    #[case::one_short(COLUMN_COUNT - 1)]
    #[case::one_extra(COLUMN_COUNT + 1)]
    fn test_build_transaction_rejects_wrong_field_count(#[case] count: usize) {
        let record = StringRecord::from(vec!["x"; count]);

        let result = build_transaction(&record);
        assert_eq!(result, Err(RowError::field_count(COLUMN_COUNT, count)));
    }

    #[test]
    fn test_build_transaction_rejects_invalid_date() {
        let record = row("2018-02-30", "1,00", ["", "", "", ""]);

        let result = build_transaction(&record);
        assert_eq!(result, Err(RowError::invalid_date("2018-02-30")));
    }

    #[test]
    fn test_build_transaction_rejects_invalid_amount() {
        let record = row("20180105", "twaalf", ["", "", "", ""]);

        let result = build_transaction(&record);
        assert_eq!(result, Err(RowError::invalid_amount("twaalf")));
    }

    #[rstest]
    #[case::compact("20180105", 2018, 1, 5)]
    #[case::dashed("2018-01-05", 2018, 1, 5)]
    #[case::slashed("2018/12/31", 2018, 12, 31)]
    #[case::leap_day("20200229", 2020, 2, 29)]
    #[case::whitespace(" 20180105 ", 2018, 1, 5)]
    fn test_parse_interest_date_valid(
        #[case] value: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        assert_eq!(
            parse_interest_date(value),
            Ok(NaiveDate::from_ymd_opt(year, month, day).unwrap())
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::short("2018015")]
    #[case::month_out_of_range("20181305")]
    #[case::not_a_leap_year("20190229")]
    #[case::letters("2018ab05")]
    #[case::signed_parts("2018-+1-05")]
    #[case::ten_digits("2018010512")]
    #[case::day_first("05-01-2018")]
    fn test_parse_interest_date_invalid(#[case] value: &str) {
        assert_eq!(parse_interest_date(value), Err(RowError::invalid_date(value)));
    }

    #[rstest]
    #[case::decimal_comma("12,34", Decimal::new(1234, 2))]
    #[case::negative("-12,34", Decimal::new(-1234, 2))]
    #[case::explicit_plus("+12,34", Decimal::new(1234, 2))]
    #[case::decimal_point("12.34", Decimal::new(1234, 2))]
    #[case::integer("100", Decimal::new(100, 0))]
    #[case::whitespace(" -0,50 ", Decimal::new(-50, 2))]
    fn test_parse_amount_valid(#[case] value: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(value), Ok(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::text("abc")]
    #[case::thousands_separator("1.234,56")]
    #[case::sign_only("-")]
    fn test_parse_amount_invalid(#[case] value: &str) {
        assert_eq!(parse_amount(value), Err(RowError::invalid_amount(value)));
    }
}
