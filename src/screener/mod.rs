//! Scoring orchestrator: ties loader → score engine together.
//!
//! One invocation stamps a single reference date and draws one noise value
//! per record, so every record in a run is scored against the same clock.

use crate::analysis;
use crate::config::AppConfig;
use crate::loader;
use crate::models::{Recommendation, ScoredRecord, StockRecord};
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use rand::Rng;
use std::path::Path;
use tracing::info;

pub struct Screener {
    config: AppConfig,
}

impl Screener {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Load the dataset from `path`, falling back to the configured default.
    pub fn load(&self, path: Option<&Path>) -> Result<Vec<StockRecord>> {
        let path = path.unwrap_or(&self.config.dataset.path);
        let records = loader::load_records(path)
            .with_context(|| format!("Failed to load dataset {:?}", path))?;
        Ok(records)
    }

    /// Score every record against today's date.
    pub fn score_records(&self, records: Vec<StockRecord>) -> Vec<ScoredRecord> {
        let mut rng = rand::rng();
        self.score_records_at(records, &mut rng, Utc::now().date_naive())
    }

    /// Deterministic variant: caller supplies the rng and the reference date.
    pub fn score_records_at<R: Rng>(
        &self,
        records: Vec<StockRecord>,
        rng: &mut R,
        today: NaiveDate,
    ) -> Vec<ScoredRecord> {
        let scored: Vec<ScoredRecord> = records
            .into_iter()
            .map(|record| {
                let analysis = analysis::analyze(&record, rng, today);
                ScoredRecord { record, analysis }
            })
            .collect();

        info!("{} records scored (as of {})", scored.len(), today);
        scored
    }
}

// ── Dataset stats ─────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct DatasetStats {
    pub records: usize,
    pub first_post: Option<NaiveDate>,
    pub last_post: Option<NaiveDate>,
    pub strong_buys: usize,
    pub buys: usize,
    pub holds: usize,
    pub waits: usize,
}

pub fn dataset_stats(scored: &[ScoredRecord]) -> DatasetStats {
    let mut stats = DatasetStats {
        records: scored.len(),
        first_post: scored.iter().map(|s| s.record.post_date).min(),
        last_post: scored.iter().map(|s| s.record.post_date).max(),
        strong_buys: 0,
        buys: 0,
        holds: 0,
        waits: 0,
    };

    for s in scored {
        match s.analysis.recommendation {
            Recommendation::StrongBuy => stats.strong_buys += 1,
            Recommendation::Buy => stats.buys += 1,
            Recommendation::Hold => stats.holds += 1,
            Recommendation::Wait => stats.waits += 1,
        }
    }

    stats
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn record(ticker: &str, post_date: NaiveDate, drift: f64, ctt: f64) -> StockRecord {
        StockRecord {
            post_date,
            company: ticker.to_string(),
            ticker: ticker.to_string(),
            target: 100.0,
            current_price: 80.0,
            post_price: 90.0,
            upside: 11.1,
            price_change_after_post: drift,
            current_to_target: ctt,
        }
    }

    #[test]
    fn test_score_records_keeps_input_order() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 13).unwrap();
        let posted = NaiveDate::from_ymd_opt(2025, 6, 13).unwrap();
        let screener = Screener::new(AppConfig::default());

        let records = vec![
            record("FTV", posted, -38.81, 72.04),
            record("TSLA", posted, -4.9, 30.32),
        ];
        let scored =
            screener.score_records_at(records, &mut StdRng::seed_from_u64(11), today);

        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].record.ticker, "FTV");
        assert_eq!(scored[1].record.ticker, "TSLA");
    }

    #[test]
    fn test_dataset_stats_tallies_tiers() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 13).unwrap();
        let screener = Screener::new(AppConfig::default());

        let records = vec![
            // Fresh, deep upside, hard dip: lands in STRONG BUY regardless of
            // the rsi band draw (floor 1 + 3 + 2 + 2 = 8).
            record("A", NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(), -15.0, 40.0),
            // Stale, no upside, positive drift: 1..=3 depending on the band.
            record("B", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 5.0, 0.0),
        ];
        let scored =
            screener.score_records_at(records, &mut StdRng::seed_from_u64(3), today);
        let stats = dataset_stats(&scored);

        assert_eq!(stats.records, 2);
        assert_eq!(stats.strong_buys, 1);
        assert_eq!(stats.strong_buys + stats.buys + stats.holds + stats.waits, 2);
        assert_eq!(stats.first_post, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(stats.last_post, NaiveDate::from_ymd_opt(2025, 7, 1));
    }

    #[test]
    fn test_stats_on_empty_list() {
        let stats = dataset_stats(&[]);
        assert_eq!(stats.records, 0);
        assert_eq!(stats.first_post, None);
        assert_eq!(stats.last_post, None);
    }
}
