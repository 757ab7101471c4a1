//! Colorbar descriptions.
//!
//! Nothing here draws. A [`Colorbar`] records what a renderer needs to
//! draw one: which ticks to label and how, the fonts, the extension arrows
//! and the geometry relative to its parent axes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::colormaps::{BoundaryNorm, Extend};
use crate::config::{BottomColorbarConfig, ColorbarConfig};
use crate::error::{ClimplotError, Result};
use crate::style::StyleContext;
use crate::ticks::{thin_boundary_ticks, thin_evenly, tick_labels};

/// Colorbar thickness as a fraction of the parent axes when none is configured
pub const DEFAULT_FRACTION: f64 = 0.046;

/// Colorbar orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Below or above the axes
    #[default]
    Horizontal,
    /// Beside the axes
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

impl FromStr for Orientation {
    type Err = ClimplotError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(ClimplotError::invalid_parameter(
                "orientation",
                format!("Unknown orientation: {}. Must be horizontal or vertical", s),
            )),
        }
    }
}

/// Everything needed to draw a colorbar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Colorbar {
    /// Axis label
    pub label: String,
    /// Labelled tick positions
    pub ticks: Vec<f64>,
    /// Text for each tick
    pub tick_labels: Vec<String>,
    /// Extension arrows
    pub extend: Extend,
    /// Orientation
    pub orientation: Orientation,
    /// Thickness as a fraction of the parent axes
    pub fraction: f64,
    /// Gap between axes and colorbar
    pub pad: f64,
    /// Length to thickness ratio
    pub aspect: f64,
    /// Label font size (pt)
    pub label_fontsize: f64,
    /// Tick label font size (pt)
    pub tick_fontsize: f64,
}

impl Colorbar {
    /// Colorbar for a discrete colormap, ticked at a round subset of its boundaries.
    ///
    /// Fails when the configured tick bounds are invalid.
    pub fn for_norm(
        norm: &BoundaryNorm,
        label: &str,
        config: &ColorbarConfig,
        style: &StyleContext,
    ) -> Result<Self> {
        let bounds = config.tick_bounds();
        bounds.validate()?;
        let ticks = thin_boundary_ticks(norm.boundaries(), bounds);
        Ok(Self::build(ticks, label, norm.extend(), config, style))
    }

    /// Colorbar for a continuous colormap, with its automatic ticks thinned evenly
    pub fn for_ticks(
        ticks: &[f64],
        label: &str,
        extend: Extend,
        config: &ColorbarConfig,
        style: &StyleContext,
    ) -> Result<Self> {
        config.tick_bounds().validate()?;
        let ticks = thin_evenly(ticks, config.max_ticks);
        Ok(Self::build(ticks, label, extend, config, style))
    }

    fn build(
        ticks: Vec<f64>,
        label: &str,
        extend: Extend,
        config: &ColorbarConfig,
        style: &StyleContext,
    ) -> Self {
        let settings = style.settings();
        let colorbar = Self {
            label: label.to_string(),
            tick_labels: tick_labels(&ticks),
            ticks,
            extend,
            orientation: config.orientation,
            fraction: config.width.unwrap_or(DEFAULT_FRACTION),
            pad: config.pad,
            aspect: config.aspect,
            label_fontsize: settings.label_size,
            tick_fontsize: settings.tick_label_size,
        };
        debug!(
            label,
            ticks = colorbar.ticks.len(),
            orientation = %colorbar.orientation,
            "Described colorbar"
        );
        colorbar
    }
}

/// Figure-relative rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub width: f64,
    pub height: f64,
}

/// Placement of a horizontal colorbar centred below a group of axes.
///
/// `axes_span` is the horizontal extent of the axes (figure fraction);
/// `y0` and `height` come from the layout that reserved room for the
/// colorbar. The width is `axes_span` clamped to the configured limits.
pub fn bottom_colorbar_rect(
    axes_span: f64,
    y0: f64,
    height: f64,
    config: &BottomColorbarConfig,
) -> Result<Rect> {
    if !(config.min_width > 0.0 && config.min_width <= config.max_width && config.max_width <= 1.0)
    {
        return Err(ClimplotError::invalid_parameter(
            "min_width",
            format!(
                "need 0 < min_width ({}) <= max_width ({}) <= 1",
                config.min_width, config.max_width
            ),
        ));
    }

    let width = config.max_width.min(config.min_width.max(axes_span));
    let x0 = (0.5 - width / 2.0).max(0.0).min(1.0 - width);
    Ok(Rect {
        x0,
        y0,
        width,
        height,
    })
}
