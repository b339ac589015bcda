//! Neon-on-charcoal theme tokens for the Folio dashboard.
//!
//! # Color Palette
//! - **Accent**: Electric cyan (focus, highlights, the growth line)
//! - **Positive**: Neon green (gains, positive news)
//! - **Negative**: Hot pink (losses, drawdowns, negative news)
//! - **Warning**: Neon orange (status warnings)
//! - **Neutral**: Cool purple (badges, secondary info)
//! - **Muted**: Steel blue (labels, disabled text)
//!
//! `chart_color(i)` cycles five series colors for pie slices.

use ratatui::style::{Color, Modifier, Style};

/// Theme palette for the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    /// Series colors, cycled by index.
    pub chart: [Color; 5],
}

impl Default for Theme {
    fn default() -> Self {
        Self::neon()
    }
}

impl Theme {
    pub const fn neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            chart: [
                Color::Rgb(0, 255, 255),
                Color::Rgb(0, 255, 128),
                Color::Rgb(147, 112, 219),
                Color::Rgb(255, 140, 0),
                Color::Rgb(255, 20, 147),
            ],
        }
    }

    /// Green for gains (including zero), pink for losses.
    pub fn pnl_color(&self, value: f64) -> Color {
        if value >= 0.0 {
            self.positive
        } else {
            self.negative
        }
    }

    /// Win-rate percentage (0–100) to color.
    pub fn win_rate_color(&self, win_rate: u32) -> Color {
        match win_rate {
            w if w >= 70 => self.positive,
            w if w >= 50 => self.accent,
            w if w >= 40 => self.neutral,
            _ => self.warning,
        }
    }

    pub fn chart_color(&self, index: usize) -> Color {
        self.chart[index % self.chart.len()]
    }
}

const THEME: Theme = Theme::neon();

pub const ACCENT: Color = THEME.accent;

pub fn palette() -> Theme {
    THEME
}

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

pub fn positive() -> Style {
    Style::default().fg(THEME.positive)
}

pub fn negative() -> Style {
    Style::default().fg(THEME.negative)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

/// Filled pill used for card and news badges.
pub fn badge(color: Color) -> Style {
    Style::default()
        .fg(THEME.background)
        .bg(color)
        .add_modifier(Modifier::BOLD)
}

pub fn panel_border() -> Style {
    muted()
}

pub fn panel_title() -> Style {
    accent_bold()
}

pub fn pnl_style(value: i64) -> Style {
    Style::default().fg(THEME.pnl_color(value as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(18, 18, 20));
        assert_eq!(theme.accent, Color::Rgb(0, 255, 255));
    }

    #[test]
    fn test_pnl_color() {
        let theme = Theme::default();
        assert_eq!(theme.pnl_color(100.0), theme.positive);
        assert_eq!(theme.pnl_color(-50.0), theme.negative);
        assert_eq!(theme.pnl_color(0.0), theme.positive);
    }

    #[test]
    fn test_win_rate_color() {
        let theme = Theme::default();
        assert_eq!(theme.win_rate_color(75), theme.positive);
        assert_eq!(theme.win_rate_color(67), theme.accent);
        assert_eq!(theme.win_rate_color(45), theme.neutral);
        assert_eq!(theme.win_rate_color(0), theme.warning);
    }

    #[test]
    fn test_panel_styles() {
        assert_eq!(panel_border(), muted());
        assert_eq!(panel_title(), accent_bold());
        assert_eq!(pnl_style(-1), negative());
        assert_eq!(pnl_style(0), positive());
    }

    #[test]
    fn test_chart_color_cycles() {
        let theme = Theme::default();
        assert_eq!(theme.chart_color(0), theme.chart_color(5));
        assert_ne!(theme.chart_color(0), theme.chart_color(1));
    }
}
