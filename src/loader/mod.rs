//! Seed dataset loading.
//!
//! The post list is an external artifact, not compiled-in state: one CSV,
//! loaded once at startup. Malformed rows and duplicate tickers reject the
//! whole load — a bad dataset should be fixed, not silently thinned.

pub mod parse;

pub use parse::DatasetError;

use crate::models::{RawPostRow, StockRecord};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Load and validate the seed CSV:
/// post_date, company, ticker, target, current_price, post_price, upside,
/// price_change_after_post, current_to_target
pub fn load_records(path: &Path) -> Result<Vec<StockRecord>, DatasetError> {
    debug!("Loading dataset from {:?}", path);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::new();
    let mut seen = HashSet::new();

    for (i, result) in reader.records().enumerate() {
        let row = i + 2; // 1-based, header is row 1
        let record = result?;

        let raw = RawPostRow {
            post_date: record.get(0).map(|s| s.to_string()),
            company: record.get(1).map(|s| s.to_string()),
            ticker: record.get(2).map(|s| s.to_string()),
            target: record.get(3).map(|s| s.to_string()),
            current_price: record.get(4).map(|s| s.to_string()),
            post_price: record.get(5).map(|s| s.to_string()),
            upside: record.get(6).map(|s| s.to_string()),
            price_change_after_post: record.get(7).map(|s| s.to_string()),
            current_to_target: record.get(8).map(|s| s.to_string()),
        };

        let stock = parse::row_to_record(&raw, row)?;

        if !seen.insert(stock.ticker.clone()) {
            return Err(DatasetError::DuplicateTicker {
                row,
                ticker: stock.ticker,
            });
        }

        records.push(stock);
    }

    info!("{} records loaded from {:?}", records.len(), path);
    Ok(records)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "post_date,company,ticker,target,current_price,post_price,upside,price_change_after_post,current_to_target";

    fn write_csv(rows: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        file
    }

    #[test]
    fn test_load_valid_dataset() {
        let file = write_csv(&[
            "2025-06-13,FORTIVE,FTV,88,51,71,23.94,-38.81,72.04",
            "2025-06-12,TESLA,TSLA,405,311,326,24.23,-4.90,30.32",
        ]);

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ticker, "FTV");
        assert_eq!(records[1].price_change_after_post, -4.9);
    }

    #[test]
    fn test_duplicate_ticker_rejected() {
        let file = write_csv(&[
            "2025-06-13,FORTIVE,FTV,88,51,71,23.94,-38.81,72.04",
            "2025-06-12,FORTIVE AGAIN,ftv,90,52,72,25.0,-37.0,73.0",
        ]);

        let err = load_records(file.path()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::DuplicateTicker { row: 3, ref ticker } if ticker == "FTV"
        ));
    }

    #[test]
    fn test_malformed_row_rejects_load() {
        let file = write_csv(&[
            "2025-06-13,FORTIVE,FTV,88,51,71,23.94,-38.81,72.04",
            "2025-06-12,TESLA,TSLA,not-a-price,311,326,24.23,-4.90,30.32",
        ]);

        let err = load_records(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidField { row: 3, field: "target", .. }));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_records(Path::new("data/does-not-exist.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Csv(_)));
    }

    #[test]
    fn test_empty_dataset_is_ok() {
        let file = write_csv(&[]);
        let records = load_records(file.path()).unwrap();
        assert!(records.is_empty());
    }
}
