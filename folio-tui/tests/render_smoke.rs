use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proptest::prelude::*;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use folio_core::{ChartTab, Dataset, Selection, TimeRange};
use folio_tui::{handle_key, ui, App, AppState};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn app_at(anchor: NaiveDate, range: TimeRange) -> App {
    let state = AppState::new(
        Selection::new(Some(anchor), range),
        ChartTab::Overview,
        d(2026, 10, 16),
    );
    App::new(state, Dataset::sample())
}

fn press(app: &mut App, c: char) {
    handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
}

/// Render one frame and return the screen as text, one line per row.
fn render(app: &mut App) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, &app.screen())).unwrap();

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn overview_shows_cards_table_and_news() {
    let mut app = app_at(d(2025, 6, 15), TimeRange::All);
    let screen = render(&mut app);

    assert!(screen.contains("Portfolio Analytics"));
    assert!(screen.contains("$14,000"));
    assert!(screen.contains("-500"));
    assert!(screen.contains("67%"));
    assert!(screen.contains("Portfolio Growth"));
    assert!(screen.contains("Strategy Details"));
    assert!(screen.contains("Value Investing"));
    assert!(screen.contains("+15%"));
    assert!(screen.contains("Market Updates"));
    assert!(screen.contains("Positive"));
}

#[test]
fn single_month_window() {
    let mut app = app_at(d(2025, 3, 20), TimeRange::OneMonth);
    let screen = render(&mut app);

    assert!(screen.contains("$11,500"));
    assert!(screen.contains("+11,500"));
    assert!(screen.contains("0%"));
    assert!(screen.contains("No updates in the selected range."));
}

#[test]
fn allocation_tab_shows_legend() {
    let mut app = app_at(d(2025, 6, 15), TimeRange::All);
    press(&mut app, '2');
    let screen = render(&mut app);

    assert!(screen.contains("Asset Allocation"));
    assert!(screen.contains("Stocks"));
    assert!(screen.contains("45%"));
    assert!(screen.contains("Real Estate"));
}

#[test]
fn strategies_tab_shows_bars() {
    let mut app = app_at(d(2025, 6, 15), TimeRange::All);
    press(&mut app, '3');
    let screen = render(&mut app);

    assert!(screen.contains("Strategy Performance"));
    assert!(screen.contains("22%"));
}

#[test]
fn empty_window_renders_placeholder() {
    let mut app = app_at(d(2030, 1, 1), TimeRange::OneMonth);
    let screen = render(&mut app);

    assert!(screen.contains("No portfolio data in the selected range."));
    assert!(screen.contains("$0"));
}

#[test]
fn overlays_render() {
    let mut app = app_at(d(2025, 6, 15), TimeRange::All);
    press(&mut app, 'd');
    let screen = render(&mut app);
    assert!(screen.contains("Pick a date"));
    assert!(screen.contains("June 2025"));

    handle_key(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    press(&mut app, '?');
    let screen = render(&mut app);
    assert!(screen.contains("Date picker (d)"));
}

#[test]
fn range_label_follows_selection() {
    let mut app = app_at(d(2025, 6, 15), TimeRange::All);
    press(&mut app, 'r');
    let screen = render(&mut app);
    assert!(screen.contains("Last Year"));
    assert!(screen.contains("Range: Last Year"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn any_key_sequence_renders(keys in prop::collection::vec(
        prop::sample::select(vec!['r', 'R', '1', '2', '3', 'd', 'h', 'l', 'j', 'k', '[', ']', 'x', 't', '?']),
        0..40,
    )) {
        let mut app = app_at(d(2025, 3, 15), TimeRange::All);
        for c in keys {
            press(&mut app, c);
        }
        let screen = render(&mut app);
        prop_assert!(screen.contains("Portfolio Analytics"));
    }
}
