//! Summary metrics over the filtered portfolio series.
//!
//! Win rate compares each visible point against its predecessor in the full
//! history, not in the filtered window, so a one-month window still counts
//! whether that month beat the month before it.

use serde::{Deserialize, Serialize};

use crate::domain::{Money, PortfolioPoint};

/// The three numbers shown on the summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metrics {
    /// Last value in the window, 0 when the window is empty.
    pub total_value: Money,
    /// Last value minus the one before it; a missing value counts as 0.
    pub daily_pl: Money,
    /// Percentage of points that rose over their historical predecessor.
    pub win_rate: u32,
}

/// Compute card metrics for `filtered`, using `history` as the comparison
/// baseline for win rate.
///
/// `history` must be sorted ascending by date.
pub fn compute_metrics(history: &[PortfolioPoint], filtered: &[PortfolioPoint]) -> Metrics {
    let latest = filtered.last().map_or(0, |p| p.value);
    let previous = filtered
        .len()
        .checked_sub(2)
        .and_then(|i| filtered.get(i))
        .map_or(0, |p| p.value);

    let metrics = Metrics {
        total_value: latest,
        daily_pl: latest - previous,
        win_rate: win_rate(history, filtered),
    };
    tracing::debug!(points = filtered.len(), ?metrics, "computed metrics");
    metrics
}

/// Rounded percentage of `filtered` points whose value beats the preceding
/// point in `history`. The earliest point is compared against 0. An empty
/// window reports 0.
pub fn win_rate(history: &[PortfolioPoint], filtered: &[PortfolioPoint]) -> u32 {
    if filtered.is_empty() {
        return 0;
    }
    let wins = filtered
        .iter()
        .filter(|p| p.value > historical_predecessor(history, p))
        .count();
    round_percent(wins, filtered.len())
}

fn historical_predecessor(history: &[PortfolioPoint], point: &PortfolioPoint) -> Money {
    let idx = history.partition_point(|h| h.date < point.date);
    idx.checked_sub(1)
        .and_then(|i| history.get(i))
        .map_or(0, |h| h.value)
}

/// `part / whole` as a percentage, rounded half up.
fn round_percent(part: usize, whole: usize) -> u32 {
    let pct = part as f64 / whole as f64 * 100.0;
    (pct + 0.5).floor() as u32
}
