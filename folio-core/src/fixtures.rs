//! Built-in sample dataset.
//!
//! Every collection is created once from static literals and never mutated:
//! - Six months of portfolio value (Jan–Jun 2025)
//! - Allocation snapshot across five asset classes
//! - ROI per strategy for the bar chart, plus the details table rows
//! - Four dated market headlines, newest first

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{
    AllocationSlice, MarketUpdate, Money, Month, PortfolioPoint, Sentiment, StrategyDetail,
    StrategyRecord,
};

/// All data the dashboard renders.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    /// Sorted ascending by date.
    pub portfolio: Vec<PortfolioPoint>,
    pub allocation: Vec<AllocationSlice>,
    pub strategies: Vec<StrategyRecord>,
    pub strategy_details: Vec<StrategyDetail>,
    /// Display order, not necessarily chronological.
    pub market_updates: Vec<MarketUpdate>,
}

const PORTFOLIO: [(i32, u32, Money); 6] = [
    (2025, 1, 10_000),
    (2025, 2, 12_000),
    (2025, 3, 11_500),
    (2025, 4, 13_000),
    (2025, 5, 14_500),
    (2025, 6, 14_000),
];

const ALLOCATION: [(&str, f64); 5] = [
    ("Stocks", 45.0),
    ("Bonds", 25.0),
    ("Crypto", 15.0),
    ("Real Estate", 10.0),
    ("Cash", 5.0),
];

const STRATEGIES: [(&str, f64); 4] = [
    ("Value Investing", 15.0),
    ("Growth Stocks", 22.0),
    ("Dividend Strategy", 12.0),
    ("Index Funds", 18.0),
];

// (label, roi, cagr, drawdown)
const STRATEGY_DETAILS: [(&str, f64, f64, f64); 3] = [
    ("Value Investing", 15.0, 12.0, -5.0),
    ("Growth Stocks", 22.0, 18.0, -8.0),
    ("Dividend Strategy", 12.0, 10.0, -3.0),
];

const MARKET_UPDATES: [(u32, &str, Sentiment); 4] = [
    (15, "Market rallied by 2% on positive economic data", Sentiment::Positive),
    (14, "Tech sector experiences minor correction", Sentiment::Negative),
    (13, "New regulations boost fintech stocks", Sentiment::Positive),
    (12, "Global markets show strong momentum", Sentiment::Positive),
];

impl Dataset {
    /// The sample dataset shipped with the dashboard.
    pub fn sample() -> Self {
        let portfolio = PORTFOLIO
            .iter()
            .filter_map(|&(y, m, value)| Month::new(y, m).map(|p| PortfolioPoint::new(p, value)))
            .collect();

        let allocation = ALLOCATION
            .iter()
            .map(|&(label, pct)| AllocationSlice::new(label, pct))
            .collect();

        let strategies = STRATEGIES
            .iter()
            .map(|&(label, roi)| StrategyRecord {
                label: label.to_string(),
                roi_percent: roi,
            })
            .collect();

        let strategy_details = STRATEGY_DETAILS
            .iter()
            .map(|&(label, roi, cagr, dd)| StrategyDetail {
                label: label.to_string(),
                roi_percent: roi,
                cagr_percent: cagr,
                drawdown_percent: dd,
            })
            .collect();

        let market_updates = MARKET_UPDATES
            .iter()
            .filter_map(|&(day, headline, sentiment)| {
                NaiveDate::from_ymd_opt(2025, 1, day).map(|date| MarketUpdate {
                    date,
                    headline: headline.to_string(),
                    sentiment,
                })
            })
            .collect();

        Self {
            portfolio,
            allocation,
            strategies,
            strategy_details,
            market_updates,
        }
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_every_literal() {
        let ds = Dataset::sample();
        assert_eq!(ds.portfolio.len(), 6);
        assert_eq!(ds.allocation.len(), 5);
        assert_eq!(ds.strategies.len(), 4);
        assert_eq!(ds.strategy_details.len(), 3);
        assert_eq!(ds.market_updates.len(), 4);
    }

    #[test]
    fn portfolio_is_sorted_by_date() {
        let ds = Dataset::sample();
        assert!(ds.portfolio.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(ds.portfolio[0].period.to_string(), "2025-01");
        assert_eq!(ds.portfolio[5].value, 14_000);
    }

    #[test]
    fn news_keeps_display_order() {
        let ds = Dataset::sample();
        let days: Vec<String> = ds
            .market_updates
            .iter()
            .map(|u| u.date.format("%d").to_string())
            .collect();
        assert_eq!(days, vec!["15", "14", "13", "12"]);
        assert_eq!(ds.market_updates[1].sentiment, Sentiment::Negative);
    }

    #[test]
    fn allocation_sums_to_100_in_sample() {
        let ds = Dataset::sample();
        let total: f64 = ds.allocation.iter().map(|s| s.percent).sum();
        assert_eq!(total, 100.0);
    }
}
