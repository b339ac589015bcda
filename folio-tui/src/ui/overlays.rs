//! Popups drawn over the dashboard.

use chrono::{Datelike, NaiveDate};
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use folio_core::range::{end_of_month, start_of_month};

use crate::app::Screen;
use crate::theme;
use crate::ui::{centered_fixed, centered_rect};

/// Key reference, drawn over the chart area.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(80, 90, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keys [any key]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Dashboard");
    key(&mut lines, "r / R", "Next / previous time range");
    key(&mut lines, "1-3", "Overview / Allocation / Strategies");
    key(&mut lines, "Tab / Shift+Tab", "Cycle chart tabs");
    key(&mut lines, "j / k", "Scroll market updates");
    key(&mut lines, "t", "Anchor to today");
    key(&mut lines, "x", "Clear anchor (show everything)");
    key(&mut lines, "q / Esc", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Date picker (d)");
    key(&mut lines, "h / l", "Previous / next day");
    key(&mut lines, "k / j", "Previous / next week");
    key(&mut lines, "[ / ]", "Previous / next month");
    key(&mut lines, "Enter", "Use highlighted day as anchor");
    key(&mut lines, "x", "Clear anchor");
    key(&mut lines, "Esc", "Cancel");

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}

/// Rows of a Monday-first month grid; `None` pads days outside the month.
pub fn month_grid(cursor: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let first = start_of_month(cursor);
    let last = end_of_month(cursor);
    let offset = first.weekday().num_days_from_monday() as usize;

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = offset;
    for day in first.iter_days().take_while(|d| *d <= last) {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

/// Calendar for choosing the anchor date.
pub fn render_date_picker(f: &mut Frame, area: Rect, cursor: NaiveDate, screen: &Screen) {
    let popup = centered_fixed(34, 14, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Pick a date ")
        .title_style(theme::accent_bold());

    let anchor = screen.state.selection.anchor;
    let today = screen.state.today;
    let news_days: Vec<NaiveDate> = screen.dataset.market_updates.iter().map(|u| u.date).collect();

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{:^30}", cursor.format("%B %Y").to_string()),
            theme::text().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(" Mo  Tu  We  Th  Fr  Sa  Su", theme::muted())),
    ];

    for week in month_grid(cursor) {
        let mut spans = Vec::with_capacity(7);
        for day in week {
            let Some(day) = day else {
                spans.push(Span::raw("    "));
                continue;
            };
            let mut style = if news_days.contains(&day) {
                theme::positive()
            } else {
                theme::text()
            };
            if Some(day) == anchor {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            if day == today {
                style = style.add_modifier(Modifier::ITALIC);
            }
            if day == cursor {
                style = theme::accent_bold().add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!(" {:>2} ", day.day()), style));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " hjkl:move [/]:month t:today",
        theme::muted(),
    )));
    lines.push(Line::from(Span::styled(
        " Enter:select x:clear Esc:cancel",
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn grid_starts_on_monday_offset() {
        // 2025-01-01 is a Wednesday.
        let weeks = month_grid(d(2025, 1, 14));
        assert_eq!(weeks[0][0], None);
        assert_eq!(weeks[0][1], None);
        assert_eq!(weeks[0][2], Some(d(2025, 1, 1)));
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[4][4], Some(d(2025, 1, 31)));
        assert_eq!(weeks[4][5], None);
    }

    #[test]
    fn grid_covers_every_day() {
        let days: usize = month_grid(d(2024, 2, 10))
            .iter()
            .map(|w| w.iter().flatten().count())
            .sum();
        assert_eq!(days, 29);
    }
}
