//! Selection state and the derived dashboard view.
//!
//! The UI owns exactly two inputs: the anchor date and the range. They live in
//! an immutable [`Selection`]; every transition produces a new value, and the
//! view is a pure function of (selection, dataset).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{MarketUpdate, PortfolioPoint};
use crate::filter::filter_by_interval;
use crate::fixtures::Dataset;
use crate::metrics::{compute_metrics, Metrics};
use crate::range::{resolve, DateInterval, TimeRange};

/// The user's anchor date and look-back range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: Option<NaiveDate>,
    pub range: TimeRange,
}

impl Selection {
    pub fn new(anchor: Option<NaiveDate>, range: TimeRange) -> Self {
        Self { anchor, range }
    }

    pub fn with_anchor(self, anchor: NaiveDate) -> Self {
        Self {
            anchor: Some(anchor),
            ..self
        }
    }

    pub fn cleared_anchor(self) -> Self {
        Self {
            anchor: None,
            ..self
        }
    }

    pub fn with_range(self, range: TimeRange) -> Self {
        Self { range, ..self }
    }

    pub fn interval(&self) -> Option<DateInterval> {
        resolve(self.anchor, self.range)
    }
}

/// The three mutually exclusive chart views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartTab {
    #[default]
    Overview,
    Allocation,
    Strategies,
}

impl ChartTab {
    pub const VARIANTS: [ChartTab; 3] = [
        ChartTab::Overview,
        ChartTab::Allocation,
        ChartTab::Strategies,
    ];

    pub fn index(self) -> usize {
        match self {
            ChartTab::Overview => 0,
            ChartTab::Allocation => 1,
            ChartTab::Strategies => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::VARIANTS.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            ChartTab::Overview => "Overview",
            ChartTab::Allocation => "Allocation",
            ChartTab::Strategies => "Strategies",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartTab::Overview => "Portfolio Growth",
            ChartTab::Allocation => "Asset Allocation",
            ChartTab::Strategies => "Strategy Performance",
        }
    }

    pub fn next(self) -> ChartTab {
        Self::VARIANTS[(self.index() + 1) % Self::VARIANTS.len()]
    }

    pub fn prev(self) -> ChartTab {
        Self::VARIANTS[(self.index() + Self::VARIANTS.len() - 1) % Self::VARIANTS.len()]
    }
}

/// Everything on screen that depends on the selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub interval: Option<DateInterval>,
    pub portfolio: Vec<PortfolioPoint>,
    pub news: Vec<MarketUpdate>,
    pub metrics: Metrics,
}

/// Run the resolve → filter → metrics chain.
pub fn derive_view(selection: &Selection, dataset: &Dataset) -> DashboardView {
    let interval = selection.interval();
    let portfolio = filter_by_interval(&dataset.portfolio, interval);
    let news = filter_by_interval(&dataset.market_updates, interval);
    let metrics = compute_metrics(&dataset.portfolio, &portfolio);
    DashboardView {
        interval,
        portfolio,
        news,
        metrics,
    }
}

/// Memoized [`derive_view`], keyed by the selection.
///
/// Recomputes only when asked for a selection different from the cached one.
#[derive(Debug, Default)]
pub struct ViewCache {
    entry: Option<(Selection, DashboardView)>,
    recomputes: usize,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, selection: Selection, dataset: &Dataset) -> &DashboardView {
        if matches!(&self.entry, Some((key, _)) if *key != selection) {
            self.entry = None;
        }
        let recomputes = &mut self.recomputes;
        let (_, view) = self.entry.get_or_insert_with(|| {
            tracing::debug!(?selection, "recomputing dashboard view");
            *recomputes += 1;
            (selection, derive_view(&selection, dataset))
        });
        view
    }

    /// Number of times the view has been derived.
    pub fn recomputes(&self) -> usize {
        self.recomputes
    }
}
