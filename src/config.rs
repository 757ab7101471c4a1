//! Configuration management for climplot.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Environment variables (highest priority)
//! 2. JSON config file
//! 3. Default values (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::colorbar::Orientation;
use crate::colormaps::{lookup_colormap, Extend};
use crate::error::{ClimplotError, Result};
use crate::style::{StyleContext, StyleMode, PRESENTATION_WIDTH, PUBLICATION_WIDTH};
use crate::ticks::TickBounds;

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "CLIMPLOT_LOG_LEVEL";
/// Environment variable overriding the style mode
pub const ENV_STYLE: &str = "CLIMPLOT_STYLE";
/// Environment variable overriding the colorbar tick maximum
pub const ENV_MAX_TICKS: &str = "CLIMPLOT_MAX_TICKS";
/// Environment variable overriding the colorbar tick minimum
pub const ENV_MIN_TICKS: &str = "CLIMPLOT_MIN_TICKS";

/// Figure style configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Style mode (None = library defaults)
    #[serde(default)]
    pub mode: Option<StyleMode>,

    /// Figure width in inches (None = the mode's default width)
    #[serde(default)]
    pub width: Option<f64>,

    /// Embed TrueType fonts and force a font family
    #[serde(default)]
    pub for_pdf: bool,

    /// Font family used when `for_pdf` is set
    #[serde(default)]
    pub font_family: Option<String>,
}

/// Geometry of a colorbar placed below a row of axes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottomColorbarConfig {
    /// Colorbar height as a fraction of the figure
    #[serde(default = "default_bottom_fraction")]
    pub fraction: f64,

    /// Narrowest colorbar, as a fraction of figure width
    #[serde(default = "default_min_width")]
    pub min_width: f64,

    /// Widest colorbar, as a fraction of figure width
    #[serde(default = "default_max_width")]
    pub max_width: f64,
}

/// Colorbar configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorbarConfig {
    /// Most labelled ticks
    #[serde(default = "default_max_ticks")]
    pub max_ticks: usize,

    /// Fewest labelled ticks
    #[serde(default = "default_min_ticks")]
    pub min_ticks: usize,

    /// Colorbar thickness as a fraction of the parent axes (None = 0.046)
    #[serde(default)]
    pub width: Option<f64>,

    /// Gap between axes and colorbar
    #[serde(default = "default_pad")]
    pub pad: f64,

    /// Length to thickness ratio
    #[serde(default = "default_aspect")]
    pub aspect: f64,

    /// Colorbar orientation
    #[serde(default)]
    pub orientation: Orientation,

    /// Bottom colorbar geometry
    #[serde(default)]
    pub bottom: BottomColorbarConfig,
}

impl ColorbarConfig {
    /// Tick bounds described by this section
    pub fn tick_bounds(&self) -> TickBounds {
        TickBounds {
            min_ticks: self.min_ticks,
            max_ticks: self.max_ticks,
        }
    }
}

/// Level generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelsConfig {
    /// Target number of levels for automatic intervals
    #[serde(default = "default_n_levels")]
    pub n_levels: usize,

    /// Default colormap name
    #[serde(default = "default_cmap")]
    pub cmap: String,

    /// Default out-of-range handling
    #[serde(default)]
    pub extend: Extend,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Style configuration
    #[serde(default)]
    pub style: StyleConfig,

    /// Colorbar configuration
    #[serde(default)]
    pub colorbar: ColorbarConfig,

    /// Level configuration
    #[serde(default)]
    pub levels: LevelsConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load(path: Option<&Path>) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = path {
            let json_config = Self::from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with environment variables
        config.apply_env_overrides(|key| std::env::var(key).ok())?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(&mut self, other: Config) {
        if other.style.mode.is_some() {
            self.style.mode = other.style.mode;
        }
        if other.style.width.is_some() {
            self.style.width = other.style.width;
        }
        self.style.for_pdf = other.style.for_pdf;
        if other.style.font_family.is_some() {
            self.style.font_family = other.style.font_family;
        }
        let width = other.colorbar.width.or(self.colorbar.width);
        self.colorbar = ColorbarConfig {
            width,
            ..other.colorbar
        };
        self.levels = other.levels;
        self.log_level = other.log_level;
    }

    /// Apply overrides from `lookup` (the process environment in [`Config::load`])
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        if let Some(style) = lookup(ENV_STYLE) {
            self.style.mode = Some(style.parse()?);
        }
        if let Some(value) = lookup(ENV_MAX_TICKS) {
            self.colorbar.max_ticks = parse_count(ENV_MAX_TICKS, &value)?;
        }
        if let Some(value) = lookup(ENV_MIN_TICKS) {
            self.colorbar.min_ticks = parse_count(ENV_MIN_TICKS, &value)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ClimplotError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        self.colorbar
            .tick_bounds()
            .validate()
            .map_err(|e| ClimplotError::Config {
                message: e.to_string(),
            })?;

        let bottom = &self.colorbar.bottom;
        if !(bottom.min_width > 0.0
            && bottom.min_width <= bottom.max_width
            && bottom.max_width <= 1.0)
        {
            return Err(ClimplotError::Config {
                message: format!(
                    "Invalid bottom colorbar widths: min_width {} and max_width {} must satisfy 0 < min_width <= max_width <= 1",
                    bottom.min_width, bottom.max_width
                ),
            });
        }

        if let Some(width) = self.style.width {
            if !(width > 0.0) {
                return Err(ClimplotError::Config {
                    message: format!("Figure width must be positive, got {}", width),
                });
            }
        }

        if self.levels.n_levels == 0 {
            return Err(ClimplotError::Config {
                message: "n_levels must be at least 1".to_string(),
            });
        }

        lookup_colormap(&self.levels.cmap).map_err(|_| ClimplotError::Config {
            message: format!("Unknown colormap: {}", self.levels.cmap),
        })?;

        Ok(())
    }

    /// The style context this configuration describes
    pub fn style_context(&self) -> StyleContext {
        let mut style = StyleContext::new();
        let font_family = self.style.font_family.as_deref();
        match self.style.mode {
            Some(StyleMode::Publication) => style.publication(
                self.style.width.unwrap_or(PUBLICATION_WIDTH),
                self.style.for_pdf,
                font_family,
            ),
            Some(StyleMode::Presentation) => style.presentation(
                self.style.width.unwrap_or(PRESENTATION_WIDTH),
                self.style.for_pdf,
                font_family,
            ),
            None => {}
        }
        style
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    value.trim().parse().map_err(|_| ClimplotError::Config {
        message: format!("{} must be a non-negative integer, got {:?}", key, value),
    })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: StyleConfig::default(),
            colorbar: ColorbarConfig::default(),
            levels: LevelsConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ColorbarConfig {
    fn default() -> Self {
        Self {
            max_ticks: default_max_ticks(),
            min_ticks: default_min_ticks(),
            width: None,
            pad: default_pad(),
            aspect: default_aspect(),
            orientation: Orientation::default(),
            bottom: BottomColorbarConfig::default(),
        }
    }
}

impl Default for BottomColorbarConfig {
    fn default() -> Self {
        Self {
            fraction: default_bottom_fraction(),
            min_width: default_min_width(),
            max_width: default_max_width(),
        }
    }
}

impl Default for LevelsConfig {
    fn default() -> Self {
        Self {
            n_levels: default_n_levels(),
            cmap: default_cmap(),
            extend: Extend::default(),
        }
    }
}

// Default value functions for serde
fn default_max_ticks() -> usize {
    9
}

fn default_min_ticks() -> usize {
    5
}

fn default_pad() -> f64 {
    0.05
}

fn default_aspect() -> f64 {
    35.0
}

fn default_bottom_fraction() -> f64 {
    0.03
}

fn default_min_width() -> f64 {
    0.60
}

fn default_max_width() -> f64 {
    0.80
}

fn default_n_levels() -> usize {
    10
}

fn default_cmap() -> String {
    "RdBu_r".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.colorbar.max_ticks, 9);
        assert_eq!(config.colorbar.min_ticks, 5);
        assert_eq!(config.colorbar.pad, 0.05);
        assert_eq!(config.colorbar.aspect, 35.0);
        assert_eq!(config.colorbar.bottom.min_width, 0.60);
        assert_eq!(config.levels.n_levels, 10);
        assert_eq!(config.levels.cmap, "RdBu_r");
        assert_eq!(config.levels.extend, Extend::Both);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.style.mode, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            Config::from_json(r#"{"colorbar": {"max_ticks": 7}, "style": {"mode": "presentation"}}"#)
                .unwrap();
        assert_eq!(config.colorbar.max_ticks, 7);
        assert_eq!(config.colorbar.min_ticks, 5);
        assert_eq!(config.style.mode, Some(StyleMode::Presentation));
        assert_eq!(config.levels.cmap, "RdBu_r");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"levels": {{"n_levels": 12, "cmap": "viridis", "extend": "max"}}, "log_level": "debug"}}"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.levels.n_levels, 12);
        assert_eq!(config.levels.cmap, "viridis");
        assert_eq!(config.levels.extend, Extend::Max);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file(Path::new("/nonexistent/climplot.json")).unwrap_err();
        assert!(matches!(err, ClimplotError::Io(_)));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            Config::from_json("{not json"),
            Err(ClimplotError::Json(_))
        ));
    }

    #[test]
    fn test_config_merge() {
        let mut config1 = Config::default();
        config1.colorbar.width = Some(0.04);
        config1.style.font_family = Some("Helvetica".to_string());

        let mut config2 = Config::default();
        config2.colorbar.max_ticks = 11;
        config2.style.mode = Some(StyleMode::Publication);

        config1.merge(config2);

        assert_eq!(config1.colorbar.max_ticks, 11);
        assert_eq!(config1.colorbar.width, Some(0.04));
        assert_eq!(config1.style.mode, Some(StyleMode::Publication));
        assert_eq!(config1.style.font_family.as_deref(), Some("Helvetica"));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env_overrides(env(&[
                (ENV_LOG_LEVEL, "warn"),
                (ENV_STYLE, "publication"),
                (ENV_MAX_TICKS, "7"),
                (ENV_MIN_TICKS, " 3 "),
            ]))
            .unwrap();

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.style.mode, Some(StyleMode::Publication));
        assert_eq!(config.colorbar.max_ticks, 7);
        assert_eq!(config.colorbar.min_ticks, 3);
    }

    #[test]
    fn test_env_overrides_invalid() {
        let mut config = Config::default();
        assert!(config
            .apply_env_overrides(env(&[(ENV_MAX_TICKS, "many")]))
            .is_err());
        assert!(config
            .apply_env_overrides(env(&[(ENV_STYLE, "poster")]))
            .is_err());
    }

    #[test]
    fn test_config_validation() {
        // Valid config should pass
        let config = Config::default();
        assert!(config.validate().is_ok());

        // Test invalid log level
        let mut config = Config::default();
        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());

        // Test inverted tick bounds
        let mut config = Config::default();
        config.colorbar.min_ticks = 10;
        assert!(config.validate().is_err());

        // Test inverted bottom widths
        let mut config = Config::default();
        config.colorbar.bottom.min_width = 0.9;
        assert!(config.validate().is_err());

        // Test zero levels
        let mut config = Config::default();
        config.levels.n_levels = 0;
        assert!(config.validate().is_err());

        // Test unknown colormap
        let mut config = Config::default();
        config.levels.cmap = "not_a_cmap".to_string();
        assert!(config.validate().is_err());

        // Test non-positive width
        let mut config = Config::default();
        config.style.width = Some(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_style_context() {
        let config = Config::default();
        assert_eq!(config.style_context().current_mode(), None);

        let mut config = Config::default();
        config.style.mode = Some(StyleMode::Publication);
        config.style.width = Some(7.0);
        let style = config.style_context();
        assert_eq!(style.current_mode(), Some(StyleMode::Publication));
        assert_eq!(style.settings().figure_size, (7.0, 5.25));
    }
}
