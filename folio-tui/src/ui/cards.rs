//! The three summary cards.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use folio_core::format;

use crate::app::Screen;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, screen: &Screen) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let metrics = &screen.view.metrics;
    let palette = theme::palette();

    render_card(
        f,
        cols[0],
        Card {
            icon: "▣",
            icon_style: theme::muted(),
            title: "Total Value",
            badge: "Portfolio",
            value: format::dollars(metrics.total_value),
            value_style: theme::text(),
        },
    );

    let pnl_style = theme::pnl_style(metrics.daily_pl);
    render_card(
        f,
        cols[1],
        Card {
            icon: if metrics.daily_pl >= 0 { "▲" } else { "▼" },
            icon_style: pnl_style,
            title: "Daily P&L",
            badge: "Today",
            value: format::signed(metrics.daily_pl),
            value_style: pnl_style,
        },
    );

    render_card(
        f,
        cols[2],
        Card {
            icon: "∿",
            icon_style: theme::muted(),
            title: "Win Rate",
            badge: "Overall",
            value: format!("{}%", metrics.win_rate),
            value_style: Style::default().fg(palette.win_rate_color(metrics.win_rate)),
        },
    );
}

struct Card {
    icon: &'static str,
    icon_style: Style,
    title: &'static str,
    badge: &'static str,
    value: String,
    value_style: Style,
}

fn render_card(f: &mut Frame, area: Rect, card: Card) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let badge_width = card.badge.len() as u16 + 2;
    let title_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(badge_width)])
        .split(Rect { height: 1, ..inner });

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", card.icon), card.icon_style),
            Span::styled(card.title, theme::muted()),
        ])),
        title_cols[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            format!(" {} ", card.badge),
            theme::badge(theme::palette().neutral),
        )),
        title_cols[1],
    );

    if inner.height > 2 {
        let value_area = Rect {
            y: inner.y + 2,
            height: 1,
            ..inner
        };
        f.render_widget(
            Paragraph::new(Span::styled(
                card.value,
                card.value_style.add_modifier(Modifier::BOLD),
            )),
            value_area,
        );
    }
}
