//! Publication and presentation style profiles.
//!
//! A [`StyleContext`] carries the active profile explicitly; callers pass it
//! to whatever needs font sizes or resolution instead of consulting global
//! state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::ClimplotError;

/// Single-column journal width in inches
pub const PUBLICATION_WIDTH: f64 = 3.5;

/// Full-slide width in inches
pub const PRESENTATION_WIDTH: f64 = 7.0;

/// Font family used for PDF output when none is given
pub const DEFAULT_PDF_FONT: &str = "Myriad Pro";

/// The two supported style modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleMode {
    /// Small fonts, 300 dpi
    Publication,
    /// Large fonts, 150 dpi
    Presentation,
}

impl fmt::Display for StyleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleMode::Publication => f.write_str("publication"),
            StyleMode::Presentation => f.write_str("presentation"),
        }
    }
}

impl FromStr for StyleMode {
    type Err = ClimplotError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "publication" => Ok(StyleMode::Publication),
            "presentation" => Ok(StyleMode::Presentation),
            _ => Err(ClimplotError::invalid_parameter(
                "style",
                format!(
                    "Unknown style mode: {}. Must be one of: publication, presentation",
                    s
                ),
            )),
        }
    }
}

/// Concrete figure settings of a style profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSettings {
    /// Base font size (pt)
    pub font_size: f64,
    /// Axis label font size (pt)
    pub label_size: f64,
    /// Title font size (pt)
    pub title_size: f64,
    /// Tick label font size (pt)
    pub tick_label_size: f64,
    /// Legend font size (pt)
    pub legend_size: f64,
    /// Figure size in inches (width, height)
    pub figure_size: (f64, f64),
    /// Display resolution
    pub dpi: u32,
    /// Saved-figure resolution
    pub savefig_dpi: u32,
    /// Axes spine width (pt)
    pub axes_linewidth: f64,
    /// Grid line width (pt)
    pub grid_linewidth: f64,
    /// Data line width (pt)
    pub line_width: f64,
    /// PDF font type (42 = TrueType)
    pub pdf_fonttype: u8,
    /// Font family, when one is forced
    pub font_family: Option<String>,
}

impl StyleSettings {
    /// Journal figures: 8-11 pt fonts, 300 dpi
    pub fn publication(width: f64, for_pdf: bool, font_family: Option<&str>) -> Self {
        Self {
            font_size: 10.0,
            label_size: 10.0,
            title_size: 11.0,
            tick_label_size: 8.0,
            legend_size: 8.0,
            figure_size: (width, width * 0.75),
            dpi: 300,
            savefig_dpi: 300,
            axes_linewidth: 0.8,
            grid_linewidth: 0.3,
            line_width: 1.5,
            pdf_fonttype: 42,
            font_family: pdf_font_family(for_pdf, font_family),
        }
    }

    /// Slides and posters: 12-16 pt fonts, 150 dpi
    pub fn presentation(width: f64, for_pdf: bool, font_family: Option<&str>) -> Self {
        Self {
            font_size: 14.0,
            label_size: 14.0,
            title_size: 16.0,
            tick_label_size: 14.0,
            legend_size: 12.0,
            figure_size: (width, width * 0.6),
            dpi: 150,
            savefig_dpi: 150,
            axes_linewidth: 1.2,
            grid_linewidth: 0.5,
            line_width: 2.5,
            pdf_fonttype: 42,
            font_family: pdf_font_family(for_pdf, font_family),
        }
    }
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            label_size: 10.0,
            title_size: 12.0,
            tick_label_size: 10.0,
            legend_size: 10.0,
            figure_size: (6.4, 4.8),
            dpi: 100,
            savefig_dpi: 100,
            axes_linewidth: 0.8,
            grid_linewidth: 0.8,
            line_width: 1.5,
            pdf_fonttype: 3,
            font_family: None,
        }
    }
}

fn pdf_font_family(for_pdf: bool, font_family: Option<&str>) -> Option<String> {
    if for_pdf {
        Some(font_family.unwrap_or(DEFAULT_PDF_FONT).to_string())
    } else {
        None
    }
}

/// The active style profile, owned by the caller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleContext {
    mode: Option<StyleMode>,
    settings: StyleSettings,
}

impl StyleContext {
    /// Context with default settings and no mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to publication mode
    pub fn publication(&mut self, width: f64, for_pdf: bool, font_family: Option<&str>) {
        self.settings = StyleSettings::publication(width, for_pdf, font_family);
        self.mode = Some(StyleMode::Publication);
        debug!(mode = "publication", width, for_pdf, "Applied style");
    }

    /// Switch to presentation mode
    pub fn presentation(&mut self, width: f64, for_pdf: bool, font_family: Option<&str>) {
        self.settings = StyleSettings::presentation(width, for_pdf, font_family);
        self.mode = Some(StyleMode::Presentation);
        debug!(mode = "presentation", width, for_pdf, "Applied style");
    }

    /// Apply `mode` with its default width
    pub fn apply(&mut self, mode: StyleMode, for_pdf: bool, font_family: Option<&str>) {
        match mode {
            StyleMode::Publication => self.publication(PUBLICATION_WIDTH, for_pdf, font_family),
            StyleMode::Presentation => {
                self.presentation(PRESENTATION_WIDTH, for_pdf, font_family)
            }
        }
    }

    /// Restore default settings and clear the mode
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The active mode, if any
    pub fn current_mode(&self) -> Option<StyleMode> {
        self.mode
    }

    /// The active settings
    pub fn settings(&self) -> &StyleSettings {
        &self.settings
    }
}
