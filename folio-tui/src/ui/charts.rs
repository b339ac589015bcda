//! Chart tabs: growth line, allocation pie, strategy bars.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Tabs,
};
use ratatui::Frame;

use folio_core::chart::{portfolio_axes, px_to_cells, strategy_axes, XAxisConfig, PX_PER_CELL};
use folio_core::domain::allocation::shares;
use folio_core::domain::{AllocationSlice, PortfolioPoint, StrategyRecord};
use folio_core::ChartTab;

use crate::app::Screen;
use crate::theme;
use crate::ui::card_block;

pub fn render(f: &mut Frame, area: Rect, screen: &Screen) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    render_tabs(f, rows[0], screen.state.tab);

    let tab = screen.state.tab;
    let block = card_block(tab.title());
    let inner = block.inner(rows[1]);
    f.render_widget(block, rows[1]);

    match tab {
        ChartTab::Overview => render_growth(f, inner, &screen.view.portfolio),
        ChartTab::Allocation => render_allocation(f, inner, &screen.dataset.allocation),
        ChartTab::Strategies => render_strategies(f, inner, &screen.dataset.strategies),
    }
}

fn render_tabs(f: &mut Frame, area: Rect, active: ChartTab) {
    let titles: Vec<Line> = ChartTab::VARIANTS
        .iter()
        .map(|t| {
            let icon = match t {
                ChartTab::Overview => "⟋",
                ChartTab::Allocation => "◔",
                ChartTab::Strategies => "▮",
            };
            Line::from(format!("{icon} {} [{}]", t.label(), t.index() + 1))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .style(theme::muted())
        .highlight_style(theme::accent_bold())
        .select(active.index())
        .divider(symbols::line::VERTICAL);
    f.render_widget(tabs, area);
}

fn render_empty(f: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), theme::muted())),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to widen the range, d to pick another date, or x to clear it.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// Category label for a portfolio point under the configured data key.
fn category_label(point: &PortfolioPoint, x: &XAxisConfig) -> String {
    match x.data_key.as_str() {
        "date" | "period" => point.period.to_string(),
        _ => point.date.format("%b %Y").to_string(),
    }
}

fn render_growth(f: &mut Frame, area: Rect, points: &[PortfolioPoint]) {
    if points.is_empty() {
        render_empty(f, area, "No portfolio data in the selected range.");
        return;
    }

    let (x_axis, y_axis) = portfolio_axes();

    let min_y = points.iter().map(|p| p.value).min().unwrap_or(0) as f64;
    let max_y = points.iter().map(|p| p.value).max().unwrap_or(0) as f64;
    let padding = ((max_y - min_y).abs() * 0.05).max(max_y.abs() * 0.05).max(1.0);
    let y_min = min_y - padding;
    let y_max = max_y + padding;

    // Horizontal padding: configured pixels converted to a share of the plot.
    let span = points.len().saturating_sub(1).max(1) as f64;
    let plot_cells = area
        .width
        .saturating_sub(px_to_cells(y_axis.width))
        .max(1) as f64;
    let x_pad_left = f64::from(px_to_cells(x_axis.padding.left)) / plot_cells * span;
    let x_pad_right = f64::from(px_to_cells(x_axis.padding.right)) / plot_cells * span;

    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.value as f64))
        .collect();

    let line = Dataset::default()
        .name("value")
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(theme::ACCENT))
        .graph_type(GraphType::Line)
        .data(&data);
    let dots = Dataset::default()
        .marker(symbols::Marker::Dot)
        .style(theme::accent_bold())
        .graph_type(GraphType::Scatter)
        .data(&data);

    let categories: Vec<String> = points.iter().map(|p| category_label(p, &x_axis)).collect();
    let available_px = area.width.saturating_mul(PX_PER_CELL);
    let x_labels: Vec<Span> = x_axis
        .visible_labels(&categories, available_px)
        .into_iter()
        .map(|i| Span::styled(categories[i].clone(), theme::muted()))
        .collect();

    let label_width = usize::from(px_to_cells(y_axis.width));
    let y_labels: Vec<Span> = y_axis
        .ticks(y_min, y_max, 3)
        .into_iter()
        .map(|t| Span::styled(format!("{t:>label_width$}"), theme::muted()))
        .collect();

    let chart = Chart::new(vec![line, dots])
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([-x_pad_left, span + x_pad_right])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

fn render_allocation(f: &mut Frame, area: Rect, slices: &[AllocationSlice]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let shares = shares(slices);
    render_pie(f, cols[0], &shares);

    let palette = theme::palette();
    let mut lines = vec![Line::from("")];
    for (i, (slice, share)) in slices.iter().zip(&shares).enumerate() {
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(palette.chart_color(i))),
            Span::styled(format!("{:<12}", slice.label), theme::text()),
            Span::styled(format!("{:>4.0}%", share * 100.0), theme::accent()),
        ]));
    }
    f.render_widget(Paragraph::new(lines), cols[1]);
}

/// Which slice a point at `angle` (radians clockwise from 12 o'clock, in
/// `[0, 2π)`) falls into, given cumulative shares.
pub fn slice_at(angle: f64, shares: &[f64]) -> Option<usize> {
    let turn = angle / std::f64::consts::TAU;
    let mut cumulative = 0.0;
    for (i, share) in shares.iter().enumerate() {
        cumulative += share;
        if turn < cumulative {
            return Some(i);
        }
    }
    None
}

fn render_pie(f: &mut Frame, area: Rect, shares: &[f64]) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    // Terminal cells are about twice as tall as wide; stretch x so the
    // disc stays round.
    let y_bound = 1.1;
    let x_bound = y_bound * f64::from(area.width) / (2.0 * f64::from(area.height));

    // Sample at Braille resolution: 2×4 dots per cell.
    let step_x = 2.0 * x_bound / (f64::from(area.width) * 2.0);
    let step_y = 2.0 * y_bound / (f64::from(area.height) * 4.0);

    let mut by_slice: Vec<Vec<(f64, f64)>> = vec![Vec::new(); shares.len()];
    let mut y = -1.0_f64;
    while y <= 1.0 {
        let mut x = -1.0_f64;
        while x <= 1.0 {
            if x * x + y * y <= 1.0 {
                let angle = x.atan2(y).rem_euclid(std::f64::consts::TAU);
                if let Some(i) = slice_at(angle, shares) {
                    by_slice[i].push((x, y));
                }
            }
            x += step_x;
        }
        y += step_y;
    }

    let palette = theme::palette();
    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::NONE))
        .marker(symbols::Marker::Braille)
        .x_bounds([-x_bound, x_bound])
        .y_bounds([-y_bound, y_bound])
        .paint(move |ctx| {
            for (i, coords) in by_slice.iter().enumerate() {
                ctx.draw(&Points {
                    coords,
                    color: palette.chart_color(i),
                });
            }
        });
    f.render_widget(canvas, area);
}

fn render_strategies(f: &mut Frame, area: Rect, strategies: &[StrategyRecord]) {
    if strategies.is_empty() {
        render_empty(f, area, "No strategies.");
        return;
    }

    let (x_axis, y_axis) = strategy_axes();
    let label_width = px_to_cells(y_axis.width);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(label_width), Constraint::Min(1)])
        .split(area);

    let max = strategies
        .iter()
        .map(|s| s.roi_percent)
        .fold(0.0_f64, f64::max)
        .ceil();

    // Y ticks, top to bottom.
    let ticks = y_axis.ticks(0.0, max, 3);
    let gap = cols[0].height.saturating_sub(3) / 2;
    let mut tick_lines = Vec::new();
    for (i, tick) in ticks.iter().rev().enumerate() {
        if i > 0 {
            tick_lines.extend((0..gap).map(|_| Line::from("")));
        }
        tick_lines.push(Line::from(Span::styled(
            format!("{tick:>w$} ", w = usize::from(label_width.saturating_sub(1))),
            theme::muted(),
        )));
    }
    f.render_widget(Paragraph::new(tick_lines), cols[0]);

    let n = strategies.len() as u16;
    let bar_gap = 2;
    let bar_width = (cols[1].width.saturating_sub(bar_gap * n) / n).max(1);

    let labels: Vec<String> = strategies.iter().map(|s| s.label.clone()).collect();
    let shown = x_axis.visible_labels(&labels, cols[1].width.saturating_mul(PX_PER_CELL));

    let bars: Vec<Bar> = strategies
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let label = if shown.contains(&i) {
                s.label.clone()
            } else {
                String::new()
            };
            Bar::default()
                .value(s.roi_percent.max(0.0).round() as u64)
                .text_value(y_axis.formatter.format(s.roi_percent))
                .label(Line::from(label))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(theme::badge(theme::ACCENT))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(max.max(1.0) as u64)
        .label_style(theme::muted());
    f.render_widget(chart, cols[1]);
}
