//! Chart axis configuration.
//!
//! Axis options are explicit structs with the dashboard's defaults baked in.
//! Sizes are in pixels; renderers on a character grid convert with
//! [`px_to_cells`].

use serde::{Deserialize, Serialize};

/// Horizontal pixels per terminal column.
pub const PX_PER_CELL: u16 = 8;

pub fn px_to_cells(px: u16) -> u16 {
    px.div_ceil(PX_PER_CELL)
}

/// How tick values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickFormat {
    #[default]
    Plain,
    Dollar,
    Percent,
}

impl TickFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            TickFormat::Plain => format!("{value:.0}"),
            TickFormat::Dollar => format!("${value:.0}"),
            TickFormat::Percent => format!("{value:.0}%"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickStyle {
    pub font_size: u16,
}

impl Default for TickStyle {
    fn default() -> Self {
        Self { font_size: 12 }
    }
}

impl TickStyle {
    /// Approximate rendered width of a label, in pixels.
    pub fn label_width_px(&self, label: &str) -> u16 {
        let chars = label.chars().count() as u32;
        (chars * u32::from(self.font_size) * 6 / 10).min(u32::from(u16::MAX)) as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisPadding {
    pub left: u16,
    pub right: u16,
}

impl Default for AxisPadding {
    fn default() -> Self {
        Self { left: 20, right: 20 }
    }
}

/// Category axis along the bottom of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XAxisConfig {
    /// Field of the data row used for categories.
    pub data_key: String,
    pub tick: TickStyle,
    pub padding: AxisPadding,
    /// Render every category label even if they crowd.
    pub show_every_label: bool,
}

impl Default for XAxisConfig {
    fn default() -> Self {
        Self {
            data_key: "name".to_string(),
            tick: TickStyle::default(),
            padding: AxisPadding::default(),
            show_every_label: false,
        }
    }
}

impl XAxisConfig {
    pub fn keyed(data_key: &str) -> Self {
        Self {
            data_key: data_key.to_string(),
            ..Self::default()
        }
    }

    /// Pick which of `labels` to draw in `available_px` of width.
    ///
    /// Returns indices into `labels`. The first and last labels are always
    /// kept; interior labels are thinned to a fixed stride until they fit.
    pub fn visible_labels(&self, labels: &[String], available_px: u16) -> Vec<usize> {
        let n = labels.len();
        if n == 0 {
            return Vec::new();
        }
        if self.show_every_label || n <= 2 {
            return (0..n).collect();
        }
        let usable = available_px.saturating_sub(self.padding.left + self.padding.right);
        let widest = labels
            .iter()
            .map(|l| self.tick.label_width_px(l))
            .max()
            .unwrap_or(0)
            .max(1);
        // One label's worth of gap between neighbours.
        let fits = (usable / widest.saturating_mul(2)).max(2) as usize;
        if fits >= n {
            return (0..n).collect();
        }
        let stride = n.div_ceil(fits);
        let mut picked: Vec<usize> = (0..n).step_by(stride).collect();
        if picked.last() != Some(&(n - 1)) {
            picked.push(n - 1);
        }
        picked
    }
}

/// Value axis along the left of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YAxisConfig {
    /// Space reserved for tick labels, in pixels.
    pub width: u16,
    pub tick: TickStyle,
    pub formatter: TickFormat,
}

impl Default for YAxisConfig {
    fn default() -> Self {
        Self {
            width: 80,
            tick: TickStyle::default(),
            formatter: TickFormat::Plain,
        }
    }
}

impl YAxisConfig {
    pub fn formatted(formatter: TickFormat) -> Self {
        Self {
            formatter,
            ..Self::default()
        }
    }

    /// `count` evenly spaced tick labels from `min` to `max`.
    pub fn ticks(&self, min: f64, max: f64, count: usize) -> Vec<String> {
        match count {
            0 => Vec::new(),
            1 => vec![self.formatter.format(min)],
            _ => {
                let step = (max - min) / (count - 1) as f64;
                (0..count)
                    .map(|i| self.formatter.format(min + step * i as f64))
                    .collect()
            }
        }
    }
}

/// Axis pair for the Overview line chart.
pub fn portfolio_axes() -> (XAxisConfig, YAxisConfig) {
    (
        XAxisConfig::keyed("date"),
        YAxisConfig::formatted(TickFormat::Dollar),
    )
}

/// Axis pair for the Strategies bar chart.
pub fn strategy_axes() -> (XAxisConfig, YAxisConfig) {
    (
        XAxisConfig {
            show_every_label: true,
            ..XAxisConfig::keyed("name")
        },
        YAxisConfig::formatted(TickFormat::Percent),
    )
}
