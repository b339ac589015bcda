//! Portfolio value series.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FolioError;

/// Whole-dollar amount.
pub type Money = i64;

/// A calendar month, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn first_day(self) -> NaiveDate {
        // Constructors guarantee the (year, month) pair is valid.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FolioError::InvalidMonth { input: s.to_string() };
        let (y, m) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = y.parse().map_err(|_| invalid())?;
        let month: u32 = m.parse().map_err(|_| invalid())?;
        Month::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Portfolio value at the start of a month.
///
/// `date` is derived from `period` once, at construction, and never
/// recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioPoint {
    pub period: Month,
    pub value: Money,
    pub date: NaiveDate,
}

impl PortfolioPoint {
    pub fn new(period: Month, value: Money) -> Self {
        Self {
            period,
            value,
            date: period.first_day(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_parses_and_displays() {
        let m: Month = "2025-03".parse().unwrap();
        assert_eq!(m.year(), 2025);
        assert_eq!(m.month(), 3);
        assert_eq!(m.to_string(), "2025-03");
        assert_eq!(m.first_day(), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    #[test]
    fn month_rejects_garbage() {
        assert!("2025".parse::<Month>().is_err());
        assert!("2025-13".parse::<Month>().is_err());
        assert!("abcd-01".parse::<Month>().is_err());
    }

    #[test]
    fn point_date_is_first_of_period() {
        let p = PortfolioPoint::new(Month::new(2025, 6).unwrap(), 14_000);
        assert_eq!(p.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn month_serializes_as_string() {
        let json = serde_json::to_string(&Month::new(2025, 1).unwrap()).unwrap();
        assert_eq!(json, "\"2025-01\"");
        let back: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Month::new(2025, 1).unwrap());
    }
}
