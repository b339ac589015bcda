//! Market updates in feed order, scrolled with j/k.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use folio_core::domain::{MarketUpdate, Sentiment};

use crate::app::Screen;
use crate::theme;
use crate::ui::card_block;

pub fn render(f: &mut Frame, area: Rect, screen: &Screen) {
    let news = &screen.view.news;
    let title = if news.is_empty() {
        "Market Updates".to_string()
    } else {
        format!(
            "Market Updates ({}/{})",
            screen.state.news_scroll.min(news.len() - 1) + 1,
            news.len()
        )
    };
    let block = card_block(&title);

    if news.is_empty() {
        let para = Paragraph::new(Span::styled("No updates in the selected range.", theme::muted()))
            .block(block);
        f.render_widget(para, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for update in news.iter().skip(screen.state.news_scroll) {
        lines.extend(update_lines(update));
        lines.push(Line::from(""));
    }

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn update_lines(update: &MarketUpdate) -> [Line<'_>; 2] {
    let color = match update.sentiment {
        Sentiment::Positive => theme::palette().positive,
        Sentiment::Negative => theme::palette().negative,
    };
    [
        Line::from(vec![
            Span::styled(format!(" {} ", update.sentiment.label()), theme::badge(color)),
            Span::raw(" "),
            Span::styled(update.date.format("%Y-%m-%d").to_string(), theme::muted()),
        ]),
        Line::from(Span::styled(update.headline.as_str(), theme::text())),
    ]
}
