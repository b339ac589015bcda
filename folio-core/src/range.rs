//! Date-range resolution: anchor date + range keyword → closed interval.
//!
//! An absent anchor, or the `all` keyword, resolves to "unbounded" (`None`).
//! Every bounded interval ends on the last day of the anchor's month.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FolioError;

/// Discrete look-back window selected in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    #[default]
    All,
    OneYear,
    SixMonths,
    OneMonth,
}

impl TimeRange {
    pub const VARIANTS: [TimeRange; 4] = [
        TimeRange::All,
        TimeRange::OneYear,
        TimeRange::SixMonths,
        TimeRange::OneMonth,
    ];

    /// Parse a range keyword. Anything unrecognized means `All`.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "1y" => TimeRange::OneYear,
            "6m" => TimeRange::SixMonths,
            "1m" => TimeRange::OneMonth,
            _ => TimeRange::All,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            TimeRange::All => "all",
            TimeRange::OneYear => "1y",
            TimeRange::SixMonths => "6m",
            TimeRange::OneMonth => "1m",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::All => "All Time",
            TimeRange::OneYear => "Last Year",
            TimeRange::SixMonths => "Last 6 Months",
            TimeRange::OneMonth => "Last Month",
        }
    }

    /// Months between the start of the window and the anchor's month.
    /// `None` for the unbounded range.
    pub fn months_back(self) -> Option<u32> {
        match self {
            TimeRange::All => None,
            TimeRange::OneYear => Some(12),
            TimeRange::SixMonths => Some(6),
            TimeRange::OneMonth => Some(0),
        }
    }

    pub fn index(self) -> usize {
        match self {
            TimeRange::All => 0,
            TimeRange::OneYear => 1,
            TimeRange::SixMonths => 2,
            TimeRange::OneMonth => 3,
        }
    }

    pub fn next(self) -> TimeRange {
        Self::VARIANTS[(self.index() + 1) % Self::VARIANTS.len()]
    }

    pub fn prev(self) -> TimeRange {
        Self::VARIANTS[(self.index() + Self::VARIANTS.len() - 1) % Self::VARIANTS.len()]
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl Serialize for TimeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.keyword())
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(TimeRange::from_keyword(&s))
    }
}

/// Closed date range `[start, end]`, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateInterval {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Parse a user-supplied anchor: `YYYY-MM-DD`, or `today` (resolved against
/// `today`).
pub fn parse_anchor(input: &str, today: NaiveDate) -> Result<NaiveDate, FolioError> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("today") {
        return Ok(today);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| FolioError::InvalidDate {
        input: input.to_string(),
    })
}

/// Resolve the filter window for an anchor date and range.
///
/// Returns `None` ("show everything") when there is no anchor or the range is
/// `All`.
pub fn resolve(anchor: Option<NaiveDate>, range: TimeRange) -> Option<DateInterval> {
    let anchor = anchor?;
    let months = range.months_back()?;

    let first = start_of_month(anchor);
    let start = first
        .checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN);
    let end = end_of_month(anchor);

    tracing::debug!(%anchor, %range, %start, %end, "resolved date interval");
    Some(DateInterval { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn one_month_covers_anchor_month() {
        let iv = resolve(Some(d(2025, 3, 17)), TimeRange::OneMonth).unwrap();
        assert_eq!(iv.start, d(2025, 3, 1));
        assert_eq!(iv.end, d(2025, 3, 31));
    }

    #[test]
    fn six_months_starts_six_months_back() {
        let iv = resolve(Some(d(2025, 3, 17)), TimeRange::SixMonths).unwrap();
        assert_eq!(iv.start, d(2024, 9, 1));
        assert_eq!(iv.end, d(2025, 3, 31));
    }

    #[test]
    fn one_year_starts_twelve_months_back() {
        let iv = resolve(Some(d(2025, 6, 30)), TimeRange::OneYear).unwrap();
        assert_eq!(iv.start, d(2024, 6, 1));
        assert_eq!(iv.end, d(2025, 6, 30));
    }

    #[test]
    fn month_end_on_31st_does_not_clamp_start() {
        // Aug 31 minus six months lands in February; start is still Feb 1.
        let iv = resolve(Some(d(2025, 8, 31)), TimeRange::SixMonths).unwrap();
        assert_eq!(iv.start, d(2025, 2, 1));
    }

    #[test]
    fn february_end_respects_leap_years() {
        assert_eq!(end_of_month(d(2024, 2, 10)), d(2024, 2, 29));
        assert_eq!(end_of_month(d(2025, 2, 10)), d(2025, 2, 28));
        assert_eq!(end_of_month(d(2025, 12, 5)), d(2025, 12, 31));
    }

    #[test]
    fn all_and_missing_anchor_are_unbounded() {
        assert!(resolve(Some(d(2025, 3, 1)), TimeRange::All).is_none());
        for range in TimeRange::VARIANTS {
            assert!(resolve(None, range).is_none());
        }
    }

    #[test]
    fn unknown_keyword_falls_back_to_all() {
        assert_eq!(TimeRange::from_keyword("3w"), TimeRange::All);
        assert_eq!(TimeRange::from_keyword(""), TimeRange::All);
        assert_eq!(TimeRange::from_keyword(" 6M "), TimeRange::SixMonths);
    }

    #[test]
    fn keyword_round_trips() {
        for range in TimeRange::VARIANTS {
            assert_eq!(TimeRange::from_keyword(range.keyword()), range);
        }
    }

    #[test]
    fn cycle_wraps() {
        assert_eq!(TimeRange::All.next(), TimeRange::OneYear);
        assert_eq!(TimeRange::OneMonth.next(), TimeRange::All);
        assert_eq!(TimeRange::All.prev(), TimeRange::OneMonth);
    }

    #[test]
    fn anchor_parsing() {
        let today = d(2026, 10, 16);
        assert_eq!(parse_anchor("2025-03-15", today).unwrap(), d(2025, 3, 15));
        assert_eq!(parse_anchor("Today", today).unwrap(), today);
        assert!(matches!(
            parse_anchor("15/03/2025", today),
            Err(FolioError::InvalidDate { .. })
        ));
    }

    #[test]
    fn interval_is_inclusive() {
        let iv = DateInterval {
            start: d(2025, 1, 13),
            end: d(2025, 1, 15),
        };
        assert!(iv.contains(d(2025, 1, 13)));
        assert!(iv.contains(d(2025, 1, 15)));
        assert!(!iv.contains(d(2025, 1, 12)));
        assert!(!iv.contains(d(2025, 1, 16)));
    }
}
