//! Folio Core: fixtures, date-range resolution, filtering and metrics for the
//! portfolio dashboard.
//!
//! The derivation chain is pure and infallible:
//! - [`range::resolve`] turns an anchor date and [`TimeRange`] into an interval
//! - [`filter::filter_by_interval`] narrows the portfolio series and news feed
//! - [`metrics::compute_metrics`] derives the three summary-card numbers
//!
//! [`view::ViewCache`] memoizes the chain per [`Selection`]. Config loading is
//! the only fallible surface ([`FolioError`]).

pub mod chart;
pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod format;
pub mod metrics;
pub mod range;
pub mod view;

pub use config::{ConfigSource, FolioConfig, LoadedConfig};
pub use error::FolioError;
pub use fixtures::Dataset;
pub use metrics::Metrics;
pub use range::{DateInterval, TimeRange};
pub use view::{ChartTab, DashboardView, Selection, ViewCache};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the dataset and derived view can cross threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Dataset>();
        require_sync::<Dataset>();
        require_send::<DashboardView>();
        require_sync::<DashboardView>();
        require_send::<Selection>();
        require_sync::<Selection>();
        require_send::<FolioConfig>();
        require_sync::<FolioConfig>();
    }
}
