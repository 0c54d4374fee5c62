use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::error::{Result, TallyError};
use crate::models::{RawTransaction, StatementDateRange, Transaction, TransactionBatch};

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

/// "STATEMENT FROM MAR 20 TO APR 22, 2019". The start year is optional.
const PERIOD_PATTERN: &str = r"STATEMENT FROM (\D{3} \d{2}(, \d{4})?) TO (\D{3} \d{2}, \d{4})";

/// Transaction date, posting date (ignored), description, a reference number
/// line and the amount, e.g.
///
/// ```text
/// MAR 22 MAR 25 TIM HORTONS TORONTO ON
///
/// 55134429082100195781044
///
/// $44.71
/// ```
const TRANSACTION_PATTERN: &str = r"(\D{3} \d{2}) \D{3} \d{2} (.+)\n+\d+\n+(-?\$\d+\.\d+)";

fn period_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PERIOD_PATTERN).expect("period pattern compiles"))
}

fn transaction_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TRANSACTION_PATTERN).expect("transaction pattern compiles"))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Strip the currency symbol and thousands separators, keeping the sign.
pub fn parse_amount(raw: &str) -> f64 {
    let s = raw.replace(['$', ','], "");
    s.trim().parse().unwrap_or(0.0)
}

fn parse_full_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%b %d, %Y")
        .map_err(|_| TallyError::InvalidDate(raw.to_string()))
}

fn month_abbrev(date: NaiveDate) -> String {
    date.format("%b").to_string().to_uppercase()
}

// ---------------------------------------------------------------------------
// Statement period
// ---------------------------------------------------------------------------

/// Find the statement period. When the start date has no year it takes the
/// end date's year.
pub fn get_statement_dates(statement_text: &str) -> Result<StatementDateRange> {
    let caps = period_re()
        .captures(statement_text)
        .ok_or(TallyError::PatternNotFound)?;

    let end_date = parse_full_date(&caps[3])?;
    let start_text = if caps.get(2).is_some() {
        caps[1].to_string()
    } else {
        format!("{}, {}", &caps[1], end_date.year())
    };
    let start_date = parse_full_date(&start_text)?;

    Ok(StatementDateRange {
        start_date,
        end_date,
    })
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

/// Every transaction fragment in document order, dates still without a year.
pub fn find_raw_transactions(statement_text: &str) -> Result<Vec<RawTransaction>> {
    let raw: Vec<RawTransaction> = transaction_re()
        .captures_iter(statement_text)
        .map(|caps| RawTransaction {
            partial_date: caps[1].split_whitespace().collect::<Vec<_>>().join(" "),
            description: caps[2].trim().to_string(),
            amount: parse_amount(&caps[3]),
        })
        .collect();

    if raw.is_empty() {
        return Err(TallyError::EmptyStatement);
    }
    Ok(raw)
}

/// Attach a year to a "MON DD" date: the start year if the month is the
/// statement's starting month, otherwise the end year.
pub fn resolve_date(partial_date: &str, range: &StatementDateRange) -> Result<NaiveDate> {
    let month = partial_date.split_whitespace().next().unwrap_or_default();
    let year = if month.eq_ignore_ascii_case(&month_abbrev(range.start_date)) {
        range.start_date.year()
    } else {
        range.end_date.year()
    };
    let complete = format!("{partial_date} {year}");
    NaiveDate::parse_from_str(&complete, "%b %d %Y").map_err(|_| TallyError::InvalidDate(complete))
}

pub fn get_transactions(statement_text: &str, range: &StatementDateRange) -> Result<TransactionBatch> {
    find_raw_transactions(statement_text)?
        .into_iter()
        .map(|raw| -> Result<Transaction> {
            Ok(Transaction {
                date: resolve_date(&raw.partial_date, range)?,
                description: raw.description,
                amount: raw.amount,
            })
        })
        .collect()
}

/// Period first, then line items, so a missing header is reported before an
/// empty body.
pub fn parse_statement_text(statement_text: &str) -> Result<(StatementDateRange, TransactionBatch)> {
    let range = get_statement_dates(statement_text)?;
    let batch = get_transactions(statement_text, &range)?;
    Ok((range, batch))
}
