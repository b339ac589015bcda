//! Domain types for the Folio dashboard

pub mod allocation;
pub mod market;
pub mod portfolio;
pub mod strategy;

pub use allocation::AllocationSlice;
pub use market::{MarketUpdate, Sentiment};
pub use portfolio::{Money, Month, PortfolioPoint};
pub use strategy::{StrategyDetail, StrategyRecord};
