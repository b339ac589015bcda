//! Market news items.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Two-valued tone of a news item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
        }
    }
}

/// A dated market headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketUpdate {
    pub date: NaiveDate,
    pub headline: String,
    pub sentiment: Sentiment,
}
