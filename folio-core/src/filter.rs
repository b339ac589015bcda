//! Interval filter over dated series.

use chrono::NaiveDate;

use crate::domain::{MarketUpdate, PortfolioPoint};
use crate::range::DateInterval;

/// Anything that sits at a calendar date.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for PortfolioPoint {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for MarketUpdate {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Keep the elements whose date lies inside `interval`, in input order.
///
/// With no interval the series passes through unchanged.
pub fn filter_by_interval<T: Dated + Clone>(series: &[T], interval: Option<DateInterval>) -> Vec<T> {
    match interval {
        None => series.to_vec(),
        Some(iv) => series
            .iter()
            .filter(|item| iv.contains(item.date()))
            .cloned()
            .collect(),
    }
}
