//! Application state, owned by the main loop.
//!
//! `AppState` holds what the user controls (selection, tab, overlay, scroll).
//! `App` pairs it with the read-only dataset and the view cache, and hands the
//! renderer a [`Screen`] borrowing all three.

use chrono::{Months, NaiveDate};

use folio_core::{ChartTab, DashboardView, Dataset, FolioConfig, Selection, TimeRange, ViewCache};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    /// Calendar with the highlighted day.
    DatePicker { cursor: NaiveDate },
}

/// Everything the user can change.
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub selection: Selection,
    pub tab: ChartTab,
    pub overlay: Overlay,
    pub news_scroll: usize,
    pub status_message: Option<(String, StatusLevel)>,
    /// Reference day for "today" shortcuts.
    pub today: NaiveDate,
}

impl AppState {
    pub fn new(selection: Selection, tab: ChartTab, today: NaiveDate) -> Self {
        Self {
            running: true,
            selection,
            tab,
            overlay: Overlay::None,
            news_scroll: 0,
            status_message: None,
            today,
        }
    }

    pub fn from_config(config: &FolioConfig, today: NaiveDate) -> Self {
        Self::new(config.initial_selection(today), config.dashboard.tab, today)
    }

    pub fn set_range(&mut self, range: TimeRange) {
        self.apply(self.selection.with_range(range));
        self.set_status(format!("Range: {}", range.label()));
    }

    pub fn set_anchor(&mut self, anchor: NaiveDate) {
        self.apply(self.selection.with_anchor(anchor));
        self.set_status(format!("Anchor: {anchor}"));
    }

    pub fn clear_anchor(&mut self) {
        self.apply(self.selection.cleared_anchor());
        self.set_warning("Anchor cleared: showing all data");
    }

    pub fn set_tab(&mut self, tab: ChartTab) {
        self.tab = tab;
    }

    /// Open the calendar on the current anchor, or today.
    pub fn open_date_picker(&mut self) {
        let cursor = self.selection.anchor.unwrap_or(self.today);
        self.overlay = Overlay::DatePicker { cursor };
    }

    pub fn scroll_news(&mut self, delta: isize, news_len: usize) {
        let max = news_len.saturating_sub(1);
        self.news_scroll = self.news_scroll.saturating_add_signed(delta).min(max);
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    fn apply(&mut self, selection: Selection) {
        if selection != self.selection {
            tracing::info!(
                anchor = ?selection.anchor,
                range = %selection.range,
                "selection changed"
            );
            self.news_scroll = 0;
        }
        self.selection = selection;
    }
}

/// Move a date by whole months, keeping it valid (Jan 31 + 1 month → Feb 28).
pub fn shift_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    shifted.unwrap_or(date)
}

pub fn shift_days(date: NaiveDate, delta: i64) -> NaiveDate {
    date.checked_add_signed(chrono::Duration::days(delta))
        .unwrap_or(date)
}

/// Borrowed view of everything a frame needs.
pub struct Screen<'a> {
    pub state: &'a AppState,
    pub dataset: &'a Dataset,
    pub view: &'a DashboardView,
}

/// Top-level application: state plus the data it derives from.
pub struct App {
    pub state: AppState,
    pub dataset: Dataset,
    cache: ViewCache,
}

impl App {
    pub fn new(state: AppState, dataset: Dataset) -> Self {
        Self {
            state,
            dataset,
            cache: ViewCache::new(),
        }
    }

    /// Derive (or reuse) the view for the current selection.
    pub fn screen(&mut self) -> Screen<'_> {
        let view = self.cache.get(self.state.selection, &self.dataset);
        Screen {
            state: &self.state,
            dataset: &self.dataset,
            view,
        }
    }

    /// Number of filtered news items for the current selection.
    pub fn news_len(&mut self) -> usize {
        self.cache.get(self.state.selection, &self.dataset).news.len()
    }

    pub fn recomputes(&self) -> usize {
        self.cache.recomputes()
    }
}
