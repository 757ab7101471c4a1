//! Time series figure defaults and per-configuration line styles.
//!
//! Observations are drawn black and dashed; model runs get the first tab10
//! colours, solid. Unknown names fall back to the default model style.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ClimplotError, Result};

/// Figure size in inches for a single time series panel
pub const TIMESERIES_FIGSIZE: (f64, f64) = (7.0, 3.5);

/// Grid transparency
pub const GRID_ALPHA: f64 = 0.3;

/// Grid line width (pt)
pub const GRID_LINEWIDTH: f64 = 0.3;

/// Colour used for names without an entry
pub const DEFAULT_SERIES_COLOR: &str = "#1f77b4";

/// Line dash pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

impl LineStyle {
    /// Matplotlib shorthand (`"-"` or `"--"`)
    pub fn as_str(self) -> &'static str {
        match self {
            LineStyle::Solid => "-",
            LineStyle::Dashed => "--",
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour and dash pattern of one plotted series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesStyle {
    /// Hex colour, `#rrggbb`
    pub color: &'static str,
    pub linestyle: LineStyle,
}

impl SeriesStyle {
    /// The colour as RGBA bytes
    pub fn rgba(&self) -> Result<[u8; 4]> {
        colorgrad::Color::from_html(self.color)
            .map(|c| c.to_rgba8())
            .map_err(|e| {
                ClimplotError::invalid_parameter("color", format!("{}: {}", self.color, e))
            })
    }
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_SERIES_COLOR,
            linestyle: LineStyle::Solid,
        }
    }
}

const SERIES_STYLES: [(&str, &str, LineStyle); 7] = [
    ("obs", "#000000", LineStyle::Dashed),
    ("model", "#1f77b4", LineStyle::Solid),
    ("model1", "#1f77b4", LineStyle::Solid),
    ("model2", "#ff7f0e", LineStyle::Solid),
    ("model3", "#2ca02c", LineStyle::Solid),
    ("model4", "#d62728", LineStyle::Solid),
    ("model5", "#9467bd", LineStyle::Solid),
];

/// Style for a configuration name such as `"obs"` or `"model2"`.
///
/// ```
/// use climplot::timeseries::{series_style, LineStyle};
///
/// let obs = series_style("obs");
/// assert_eq!(obs.color, "#000000");
/// assert_eq!(obs.linestyle, LineStyle::Dashed);
/// ```
pub fn series_style(name: &str) -> SeriesStyle {
    SERIES_STYLES
        .iter()
        .find(|(key, _, _)| *key == name)
        .map(|&(_, color, linestyle)| SeriesStyle { color, linestyle })
        .unwrap_or_default()
}

/// Names with a dedicated style
pub fn series_names() -> impl Iterator<Item = &'static str> {
    SERIES_STYLES.iter().map(|(name, _, _)| *name)
}

/// Figure layout for a time series plot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesLayout {
    /// Figure size in inches (width, height)
    pub figsize: (f64, f64),
    /// Draw grid lines
    pub grid: bool,
    pub grid_alpha: f64,
    pub grid_linewidth: f64,
}

impl Default for TimeseriesLayout {
    fn default() -> Self {
        Self {
            figsize: TIMESERIES_FIGSIZE,
            grid: true,
            grid_alpha: GRID_ALPHA,
            grid_linewidth: GRID_LINEWIDTH,
        }
    }
}
