//! Ranked-list view.
//!
//! `RankedView` is the whole of the view state: the scored records and the
//! active sort mode. Changing the mode re-derives the order in place.

use crate::models::ScoredRecord;
use crate::sort::{self, SortMode};
use crate::utils::{fmt_money, fmt_pct};
use std::fmt::Write;

#[derive(Debug, Clone)]
pub struct RankedView {
    records: Vec<ScoredRecord>,
    sort_mode: SortMode,
}

impl RankedView {
    pub fn new(records: Vec<ScoredRecord>, sort_mode: SortMode) -> Self {
        let mut view = Self { records, sort_mode };
        view.resort();
        view
    }

    /// Switch the active ordering and re-derive the ranked order.
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
        self.resort();
    }

    fn resort(&mut self) {
        self.records.sort_by(sort::comparator(self.sort_mode));
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn records(&self) -> &[ScoredRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, ticker: &str) -> Option<&ScoredRecord> {
        self.records
            .iter()
            .find(|s| s.record.ticker.eq_ignore_ascii_case(ticker.trim()))
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

const RULE: &str = "──────────────────────────────────────────────────";

/// Render the ranked list, optionally truncated to the top `limit` records.
pub fn render_list(view: &RankedView, limit: Option<usize>) -> String {
    let mut out = String::new();

    writeln!(out, "{RULE}").unwrap();
    writeln!(out, "  Entry Screener — ranked by {}", view.sort_mode()).unwrap();
    writeln!(out, "{RULE}").unwrap();

    if view.is_empty() {
        writeln!(out, "  No records — check the dataset path.").unwrap();
        return out;
    }

    let shown = limit.unwrap_or(usize::MAX).min(view.records().len());
    for (i, s) in view.records()[..shown].iter().enumerate() {
        let a = &s.analysis;
        let r = &s.record;

        writeln!(out, "  #{} {} ({})  posted {}", i + 1, r.company, r.ticker, r.post_date).unwrap();
        writeln!(out, "     {} (score {}/10)", a.recommendation, a.entry_score).unwrap();
        writeln!(
            out,
            "     target {} | current {} | RSI {} | MACD {} ({})",
            fmt_money(r.target),
            fmt_money(r.current_price),
            a.rsi,
            a.macd_signal,
            a.macd_strength,
        )
        .unwrap();
        writeln!(
            out,
            "     upside {} | since post {}",
            fmt_pct(r.current_to_target),
            fmt_pct(r.price_change_after_post),
        )
        .unwrap();
        writeln!(out).unwrap();
    }

    if shown < view.records().len() {
        writeln!(out, "  … {} more (raise --limit)", view.records().len() - shown).unwrap();
    }

    out
}

/// Render the detail card for one record.
pub fn render_detail(s: &ScoredRecord) -> String {
    let a = &s.analysis;
    let r = &s.record;
    let mut out = String::new();

    writeln!(out, "{RULE}").unwrap();
    writeln!(out, "  {} ({})", r.company, r.ticker).unwrap();
    writeln!(out, "{RULE}").unwrap();
    writeln!(out, "  Posted       : {}", r.post_date).unwrap();
    writeln!(out, "  Verdict      : {} (score {}/10)", a.recommendation, a.entry_score).unwrap();
    writeln!(out, "  Target       : {}", fmt_money(r.target)).unwrap();
    writeln!(out, "  Current      : {}", fmt_money(r.current_price)).unwrap();
    writeln!(out, "  At post      : {}", fmt_money(r.post_price)).unwrap();
    writeln!(out, "  RSI          : {}", a.rsi).unwrap();
    writeln!(out, "  MACD         : {} ({})", a.macd_signal, a.macd_strength).unwrap();
    writeln!(out, "  Volume       : {}", a.volume_score).unwrap();
    writeln!(out, "  Upside now   : {}", fmt_pct(r.current_to_target)).unwrap();
    writeln!(out, "  Upside @post : {}", fmt_pct(r.upside)).unwrap();
    writeln!(out, "  Since post   : {}", fmt_pct(r.price_change_after_post)).unwrap();
    writeln!(out, "{RULE}").unwrap();

    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
