//! Sort-mode selection for the ranked view.
//!
//! All orderings run through `slice::sort_by`, which is stable: records with
//! equal keys keep their input order.

use crate::models::ScoredRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Descending entry score.
    #[default]
    EntryScore,
    /// Descending remaining distance to target.
    Upside,
    /// RSI closest to the neutral 50 line first.
    Rsi,
}

impl SortMode {
    /// Parse a user-supplied mode string. Unrecognized input falls back to
    /// the entry-score ordering instead of erroring.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "upside" => SortMode::Upside,
            "rsi" => SortMode::Rsi,
            _ => SortMode::EntryScore,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortMode::EntryScore => "entry-score",
            SortMode::Upside => "upside",
            SortMode::Rsi => "rsi",
        })
    }
}

pub fn comparator(mode: SortMode) -> fn(&ScoredRecord, &ScoredRecord) -> Ordering {
    match mode {
        SortMode::EntryScore => by_entry_score_desc,
        SortMode::Upside => by_upside_desc,
        SortMode::Rsi => by_rsi_neutrality,
    }
}

fn by_entry_score_desc(a: &ScoredRecord, b: &ScoredRecord) -> Ordering {
    b.analysis.entry_score.cmp(&a.analysis.entry_score)
}

fn by_upside_desc(a: &ScoredRecord, b: &ScoredRecord) -> Ordering {
    b.record
        .current_to_target
        .total_cmp(&a.record.current_to_target)
}

fn by_rsi_neutrality(a: &ScoredRecord, b: &ScoredRecord) -> Ordering {
    (a.analysis.rsi - 50).abs().cmp(&(b.analysis.rsi - 50).abs())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
