//! Bottom status bar: key hints and the last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{Screen, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, screen: &Screen) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " r:Range d:Date t:Today x:Clear 1-3:Tab j/k:News ?:Help q:Quit",
        theme::muted(),
    ));

    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &screen.state.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
