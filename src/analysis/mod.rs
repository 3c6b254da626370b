//! Heuristic entry scoring for stock posts.
//!
//! The indicators here are synthetic: RSI is a bounded approximation seeded
//! from a baseline noise draw plus post-drift, MACD is reduced to a
//! sign/magnitude read of the drift. Real indicator math needs price history,
//! which post records don't carry.

use crate::models::{
    Analysis, MacdSignal, MacdStrength, Recommendation, StockRecord, VolumeScore,
};
use chrono::NaiveDate;
use rand::Rng;
use rand::RngExt;

const RSI_FLOOR: f64 = 20.0;
const RSI_CEIL: f64 = 80.0;

/// Score a record. The RSI baseline is drawn uniformly from [0, 100) — pass a
/// seeded rng for reproducible output.
pub fn analyze<R: Rng>(record: &StockRecord, rng: &mut R, today: NaiveDate) -> Analysis {
    analyze_with_noise(record, rng.random_range(0.0..100.0), today)
}

/// Deterministic core: `noise` is the RSI baseline in [0, 100), `today` the
/// reference date for the recency bucket.
pub fn analyze_with_noise(record: &StockRecord, noise: f64, today: NaiveDate) -> Analysis {
    let drift = record.price_change_after_post;

    let rsi = (noise + drift * 0.5).clamp(RSI_FLOOR, RSI_CEIL).round() as i32;

    let macd_signal = if drift > 0.0 {
        MacdSignal::Bullish
    } else {
        MacdSignal::Bearish
    };
    let macd_strength = if drift.abs() > 10.0 {
        MacdStrength::Strong
    } else {
        MacdStrength::Weak
    };
    let volume_score = if record.current_to_target.abs() > 20.0 {
        VolumeScore::High
    } else {
        VolumeScore::Normal
    };

    let days_ago = (today - record.post_date).num_days();
    let entry_score = rsi_points(rsi)
        + upside_points(record.current_to_target)
        + drift_points(drift)
        + recency_points(days_ago);

    Analysis {
        rsi,
        macd_signal,
        macd_strength,
        volume_score,
        entry_score,
        recommendation: recommend(entry_score),
    }
}

// ── Score components ──────────────────────────────────────────────────────────

/// Neutral-band RSI is the best entry; oversold beats overbought.
fn rsi_points(rsi: i32) -> u8 {
    if (30..=70).contains(&rsi) {
        3
    } else if rsi < 30 {
        2
    } else {
        1
    }
}

fn upside_points(current_to_target: f64) -> u8 {
    if current_to_target > 30.0 {
        3
    } else if current_to_target > 15.0 {
        2
    } else if current_to_target > 5.0 {
        1
    } else {
        0
    }
}

/// A dip since the post counts in favor of entering now.
fn drift_points(drift: f64) -> u8 {
    if drift < -10.0 {
        2
    } else if drift < 0.0 {
        1
    } else {
        0
    }
}

/// Fresh posts score higher. Future-dated posts land in the `< 30` bucket.
fn recency_points(days_ago: i64) -> u8 {
    if days_ago < 30 {
        2
    } else if days_ago < 60 {
        1
    } else {
        0
    }
}

/// Inclusive lower bounds, first match wins.
fn recommend(entry_score: u8) -> Recommendation {
    if entry_score >= 7 {
        Recommendation::StrongBuy
    } else if entry_score >= 5 {
        Recommendation::Buy
    } else if entry_score >= 3 {
        Recommendation::Hold
    } else {
        Recommendation::Wait
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
