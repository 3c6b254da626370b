use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ── Stock post record ─────────────────────────────────────────────────────────

/// One analyst stock post, as loaded from the seed CSV.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockRecord {
    pub post_date: NaiveDate,
    pub company: String,
    pub ticker: String,
    /// Analyst target price.
    pub target: f64,
    pub current_price: f64,
    /// Price at the time the post was published.
    pub post_price: f64,
    /// Upside at post time. Display-only; scoring uses `current_to_target`.
    pub upside: f64,
    /// Signed percent drift since the post was published.
    pub price_change_after_post: f64,
    /// Signed percent distance remaining to the target.
    pub current_to_target: f64,
}

// ── Raw CSV row ───────────────────────────────────────────────────────────────

/// Seed CSV: post_date, company, ticker, target, current_price, post_price,
/// upside, price_change_after_post, current_to_target
#[derive(Debug, Clone, Default)]
pub struct RawPostRow {
    pub post_date: Option<String>,
    pub company: Option<String>,
    pub ticker: Option<String>,
    pub target: Option<String>,
    pub current_price: Option<String>,
    pub post_price: Option<String>,
    pub upside: Option<String>,
    pub price_change_after_post: Option<String>,
    pub current_to_target: Option<String>,
}

// ── Technical analysis ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacdSignal {
    Bullish,
    Bearish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacdStrength {
    Strong,
    Weak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeScore {
    High,
    Normal,
}

/// Entry recommendation tiers. Variant order follows score thresholds, so
/// deriving `Ord` makes a higher score never map to a lower tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "WAIT")]
    Wait,
    #[serde(rename = "HOLD")]
    Hold,
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
}

/// Derived indicators and entry score for one record. Recomputed on every
/// scoring run, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Synthetic RSI, clamped to [20, 80].
    pub rsi: i32,
    pub macd_signal: MacdSignal,
    pub macd_strength: MacdStrength,
    pub volume_score: VolumeScore,
    pub entry_score: u8,
    pub recommendation: Recommendation,
}

/// A record together with its analysis, as rendered by the view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: StockRecord,
    pub analysis: Analysis,
}

// ── Display ───────────────────────────────────────────────────────────────────

impl fmt::Display for MacdSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MacdSignal::Bullish => "bullish",
            MacdSignal::Bearish => "bearish",
        })
    }
}

impl fmt::Display for MacdStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MacdStrength::Strong => "strong",
            MacdStrength::Weak => "weak",
        })
    }
}

impl fmt::Display for VolumeScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VolumeScore::High => "high",
            VolumeScore::Normal => "normal",
        })
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Recommendation::Wait => "WAIT",
            Recommendation::Hold => "HOLD",
            Recommendation::Buy => "BUY",
            Recommendation::StrongBuy => "STRONG BUY",
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
