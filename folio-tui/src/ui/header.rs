//! Title bar with the range selector and anchor date.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use folio_core::TimeRange;

use crate::app::Screen;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, screen: &Screen) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme::muted());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(40)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(" ↗ ", theme::accent_bold()),
        Span::styled("Portfolio Analytics", theme::text().add_modifier(Modifier::BOLD)),
    ]);
    f.render_widget(Paragraph::new(title), cols[0]);

    f.render_widget(
        Paragraph::new(controls_line(screen)).alignment(Alignment::Right),
        cols[1],
    );
}

fn controls_line(screen: &Screen) -> Line<'static> {
    let selection = &screen.state.selection;
    let mut spans = Vec::new();

    for range in TimeRange::VARIANTS {
        let style = if range == selection.range {
            theme::accent_bold().add_modifier(Modifier::REVERSED)
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!(" {} ", range.label()), style));
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled("📅 ", theme::muted()));
    match selection.anchor {
        Some(date) => spans.push(Span::styled(date.format("%Y-%m-%d").to_string(), theme::accent())),
        None => spans.push(Span::styled("no date", theme::warning())),
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}
