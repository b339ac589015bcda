//! Folio TUI - terminal portfolio dashboard
//!
//! One screen, driven entirely by the keyboard:
//! - Summary cards (total value, daily P&L, win rate)
//! - Chart tabs: growth line, allocation pie, strategy bars
//! - Strategy details table and a scrollable market news feed
//! - Range selector and a calendar overlay for the anchor date

pub mod app;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::{App, AppState, Screen};
pub use input::handle_key;
pub use theme::Theme;
