//! Strategy performance records. Never time-filtered.

use serde::{Deserialize, Serialize};

/// ROI per strategy, plotted on the Strategies tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRecord {
    pub label: String,
    pub roi_percent: f64,
}

/// One row of the strategy details table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyDetail {
    pub label: String,
    pub roi_percent: f64,
    pub cagr_percent: f64,
    /// Peak-to-trough loss, stored as a negative percentage.
    pub drawdown_percent: f64,
}
