//! Keyboard input. Overlays get first look at every key.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use folio_core::ChartTab;

use crate::app::{shift_days, shift_months, App, Overlay};

/// Handle a key event against the whole app.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.state.overlay {
        Overlay::Help => {
            app.state.overlay = Overlay::None;
            return;
        }
        Overlay::DatePicker { .. } => {
            handle_date_picker(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Dashboard keys.
    let state = &mut app.state;
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.running = false;
        }
        KeyCode::Char('r') => state.set_range(state.selection.range.next()),
        KeyCode::Char('R') => state.set_range(state.selection.range.prev()),
        KeyCode::Char('1') => state.set_tab(ChartTab::Overview),
        KeyCode::Char('2') => state.set_tab(ChartTab::Allocation),
        KeyCode::Char('3') => state.set_tab(ChartTab::Strategies),
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                state.set_tab(state.tab.prev());
            } else {
                state.set_tab(state.tab.next());
            }
        }
        KeyCode::BackTab => state.set_tab(state.tab.prev()),
        KeyCode::Char('d') => state.open_date_picker(),
        KeyCode::Char('t') => {
            let today = state.today;
            state.set_anchor(today);
        }
        KeyCode::Char('x') => state.clear_anchor(),
        KeyCode::Char('?') => state.overlay = Overlay::Help,
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.news_len();
            app.state.scroll_news(1, len);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            let len = app.news_len();
            app.state.scroll_news(-1, len);
        }
        _ => {}
    }
}

fn handle_date_picker(app: &mut App, key: KeyEvent) {
    let state = &mut app.state;
    let Overlay::DatePicker { cursor } = state.overlay else {
        return;
    };

    let moved = match key.code {
        KeyCode::Char('h') | KeyCode::Left => Some(shift_days(cursor, -1)),
        KeyCode::Char('l') | KeyCode::Right => Some(shift_days(cursor, 1)),
        KeyCode::Char('k') | KeyCode::Up => Some(shift_days(cursor, -7)),
        KeyCode::Char('j') | KeyCode::Down => Some(shift_days(cursor, 7)),
        KeyCode::Char('[') | KeyCode::PageUp => Some(shift_months(cursor, -1)),
        KeyCode::Char(']') | KeyCode::PageDown => Some(shift_months(cursor, 1)),
        KeyCode::Char('t') => Some(state.today),
        KeyCode::Enter => {
            state.overlay = Overlay::None;
            state.set_anchor(cursor);
            None
        }
        KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
            state.overlay = Overlay::None;
            state.clear_anchor();
            None
        }
        KeyCode::Esc | KeyCode::Char('q') => {
            state.overlay = Overlay::None;
            None
        }
        _ => None,
    };

    if let Some(cursor) = moved {
        state.overlay = Overlay::DatePicker { cursor };
    }
}
