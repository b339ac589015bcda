//! Top-level UI layout.

pub mod cards;
pub mod charts;
pub mod header;
pub mod news;
pub mod overlays;
pub mod status_bar;
pub mod strategy_table;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{Overlay, Screen};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, screen: &Screen) {
    let full = f.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(5), // cards
            Constraint::Min(10),   // charts
            Constraint::Length(9), // table + news
            Constraint::Length(1), // status bar
        ])
        .split(full);

    header::render(f, rows[0], screen);
    cards::render(f, rows[1], screen);
    charts::render(f, rows[2], screen);
    draw_details_row(f, rows[3], screen);
    status_bar::render(f, rows[4], screen);

    match screen.state.overlay {
        Overlay::Help => overlays::render_help(f, rows[2]),
        Overlay::DatePicker { cursor } => overlays::render_date_picker(f, full, cursor, screen),
        Overlay::None => {}
    }
}

fn draw_details_row(f: &mut Frame, area: Rect, screen: &Screen) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .split(area);

    strategy_table::render(f, cols[0], screen);
    news::render(f, cols[1], screen);
}

/// Bordered block with the dashboard's title styling.
pub fn card_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(format!(" {title} "))
        .title_style(theme::panel_title())
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Fixed-size rect centered in `area`, clipped to fit.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
