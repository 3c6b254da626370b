//! Field-level parsing and validation for the seed CSV.

use crate::models::{RawPostRow, StockRecord};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("row {row}: missing `{field}`")]
    MissingField { row: usize, field: &'static str },

    #[error("row {row}: invalid {field} `{value}`")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("row {row}: {field} must be a positive finite number, got {value}")]
    BadPrice {
        row: usize,
        field: &'static str,
        value: f64,
    },

    #[error("row {row}: duplicate ticker `{ticker}`")]
    DuplicateTicker { row: usize, ticker: String },

    #[error("failed to read dataset")]
    Csv(#[from] csv::Error),
}

// ── Parsers ───────────────────────────────────────────────────────────────────

/// Parse price: strip everything except digits, dot, minus.
/// "$1,234.56" → 1234.56 | "88" → 88.0
pub fn parse_price(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse().ok()
}

pub fn parse_pct(s: &str) -> Option<f64> {
    let s = s.trim().replace('%', "").replace(',', "");
    if s.is_empty() {
        return None;
    }
    s.parse().ok()
}

/// Parse dates: ISO first, then the spreadsheet formats posts arrive in.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%b %d, %Y") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%m/%d/%Y") {
        return Some(d);
    }

    None
}

pub fn normalise_symbol(s: &str) -> String {
    s.trim().to_uppercase()
}

// ── Raw row → StockRecord ─────────────────────────────────────────────────────

fn require<'a>(
    value: &'a Option<String>,
    row: usize,
    field: &'static str,
) -> Result<&'a str, DatasetError> {
    match value.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(DatasetError::MissingField { row, field }),
    }
}

/// Price fields must be positive and finite.
fn price_field(
    value: &Option<String>,
    row: usize,
    field: &'static str,
) -> Result<f64, DatasetError> {
    let s = require(value, row, field)?;
    let n = parse_price(s).ok_or_else(|| DatasetError::InvalidField {
        row,
        field,
        value: s.to_string(),
    })?;
    if !n.is_finite() || n <= 0.0 {
        return Err(DatasetError::BadPrice { row, field, value: n });
    }
    Ok(n)
}

/// Percent fields are signed but must be finite.
fn pct_field(
    value: &Option<String>,
    row: usize,
    field: &'static str,
) -> Result<f64, DatasetError> {
    let s = require(value, row, field)?;
    match parse_pct(s) {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(DatasetError::InvalidField {
            row,
            field,
            value: s.to_string(),
        }),
    }
}

/// Validate one raw CSV row into a `StockRecord`. Any malformed field fails
/// the whole load with row context.
pub fn row_to_record(raw: &RawPostRow, row: usize) -> Result<StockRecord, DatasetError> {
    let date_str = require(&raw.post_date, row, "post_date")?;
    let post_date = parse_date(date_str).ok_or_else(|| DatasetError::InvalidField {
        row,
        field: "post_date",
        value: date_str.to_string(),
    })?;

    Ok(StockRecord {
        post_date,
        company: require(&raw.company, row, "company")?.to_string(),
        ticker: normalise_symbol(require(&raw.ticker, row, "ticker")?),
        target: price_field(&raw.target, row, "target")?,
        current_price: price_field(&raw.current_price, row, "current_price")?,
        post_price: price_field(&raw.post_price, row, "post_price")?,
        upside: pct_field(&raw.upside, row, "upside")?,
        price_change_after_post: pct_field(&raw.price_change_after_post, row, "price_change_after_post")?,
        current_to_target: pct_field(&raw.current_to_target, row, "current_to_target")?,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_row() -> RawPostRow {
        RawPostRow {
            post_date: Some("2025-06-13".into()),
            company: Some("FORTIVE".into()),
            ticker: Some("ftv".into()),
            target: Some("$88".into()),
            current_price: Some("51".into()),
            post_price: Some("71".into()),
            upside: Some("23.94%".into()),
            price_change_after_post: Some("-38.81".into()),
            current_to_target: Some("72.04".into()),
        }
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("$1,234.56"), Some(1234.56));
        assert_eq!(parse_price("88"), Some(88.0));
        assert_eq!(parse_price("  610.00 "), Some(610.0));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("n/a"), None);
    }

    #[test]
    fn test_parse_pct() {
        assert_eq!(parse_pct("-38.81%"), Some(-38.81));
        assert_eq!(parse_pct("23.94"), Some(23.94));
        assert_eq!(parse_pct("—"), None);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 6, 13).unwrap();
        assert_eq!(parse_date("2025-06-13"), Some(expected));
        assert_eq!(parse_date("Jun 13, 2025"), Some(expected));
        assert_eq!(parse_date("13/06/2025"), Some(expected));
        assert_eq!(parse_date("13-06-2025"), None);
    }

    #[test]
    fn test_row_to_record_normalises_ticker() {
        let record = row_to_record(&raw_row(), 2).unwrap();
        assert_eq!(record.ticker, "FTV");
        assert_eq!(record.target, 88.0);
        assert_eq!(record.upside, 23.94);
    }

    #[test]
    fn test_missing_field_fails() {
        let mut raw = raw_row();
        raw.ticker = Some("   ".into());
        let err = row_to_record(&raw, 3).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingField { row: 3, field: "ticker" }
        ));
    }

    #[test]
    fn test_unparseable_date_fails() {
        let mut raw = raw_row();
        raw.post_date = Some("13th June".into());
        let err = row_to_record(&raw, 2).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidField { field: "post_date", .. }
        ));
    }

    #[test]
    fn test_non_positive_price_fails() {
        let mut raw = raw_row();
        raw.target = Some("-88".into());
        let err = row_to_record(&raw, 2).unwrap_err();
        assert!(matches!(err, DatasetError::BadPrice { field: "target", .. }));
    }

    #[test]
    fn test_non_finite_pct_fails() {
        let mut raw = raw_row();
        raw.current_to_target = Some("inf".into());
        let err = row_to_record(&raw, 2).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidField { field: "current_to_target", .. }
        ));
    }
}
