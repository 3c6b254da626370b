use std::time::{Duration, Instant};
use tracing::info;

/// A simple wall-clock timer for logging elapsed time.
pub struct Timer {
    label: String,
    start: Instant,
}

impl Timer {
    pub fn start(label: impl Into<String>) -> Self {
        let label = label.into();
        info!("⏱  Starting: {}", label);
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        info!(
            "⏱  Finished: {} (took {:.2?})",
            self.label,
            self.start.elapsed()
        );
    }
}

/// Format a price with a dollar sign, thousands separators, two decimals.
pub fn fmt_money(v: f64) -> String {
    let cents = (v.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if v < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

/// Format a percent value with two decimals; the sign comes from the value.
pub fn fmt_pct(v: f64) -> String {
    format!("{v:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_money() {
        assert_eq!(fmt_money(88.0), "$88.00");
        assert_eq!(fmt_money(1234.5), "$1,234.50");
        assert_eq!(fmt_money(1_000_000.0), "$1,000,000.00");
        assert_eq!(fmt_money(-42.125), "-$42.13");
    }

    #[test]
    fn test_fmt_pct() {
        assert_eq!(fmt_pct(72.04), "72.04%");
        assert_eq!(fmt_pct(-38.81), "-38.81%");
        assert_eq!(fmt_pct(0.0), "0.00%");
    }
}
