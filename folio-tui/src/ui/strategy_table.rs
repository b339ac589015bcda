use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

use folio_core::format;

use crate::app::Screen;
use crate::theme;
use crate::ui::card_block;

pub fn render(f: &mut Frame, area: Rect, screen: &Screen) {
    let header_cells = ["Strategy", "ROI", "CAGR", "Drawdown"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::muted().add_modifier(Modifier::BOLD)));
    let header = Row::new(header_cells).height(1).bottom_margin(1);

    let rows = screen.dataset.strategy_details.iter().map(|s| {
        Row::new(vec![
            Cell::from(s.label.clone()).style(theme::text()),
            Cell::from(format::signed_percent(s.roi_percent)).style(theme::positive()),
            Cell::from(format::percent(s.cagr_percent)).style(theme::text()),
            Cell::from(format::percent(s.drawdown_percent)).style(theme::negative()),
        ])
        .height(1)
    });

    let widths = [
        Constraint::Min(20),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(card_block("Strategy Details"))
        .column_spacing(2);

    f.render_widget(table, area);
}
