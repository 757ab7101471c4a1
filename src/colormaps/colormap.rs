//! Colormap trait and lookup.
//!
//! This module defines the common interface for all colormaps and resolves
//! colormap names (case-insensitive, `_r` suffix for reversed).

use crate::error::{ClimplotError, Result};

use super::listed::ListedColormap;
use super::{categorical, diverging, sequential};

/// Number of entries sampled from continuous gradients.
pub const LUT_SIZE: usize = 256;

/// Fully transparent colour used for NaN ("bad") values.
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// Trait for color mapping implementations
pub trait Colormap: Send + Sync {
    /// Map a normalized value (0.0 to 1.0) to an RGBA color
    fn map_normalized(&self, value: f64) -> [u8; 4];

    /// Map a value to an RGBA color given the data range
    fn map(&self, value: f64, min: f64, max: f64) -> [u8; 4] {
        let normalized = if max > min {
            ((value - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        self.map_normalized(normalized)
    }

    /// Number of distinct colours in the lookup table
    fn n_colors(&self) -> usize;

    /// Colour at a lookup-table index; indices past the end give the last colour
    fn color_at(&self, index: usize) -> [u8; 4];

    /// Get the name of this colormap
    fn name(&self) -> &str;
}

/// Resolve a colormap by name into its lookup table.
pub fn lookup_colormap(name: &str) -> Result<ListedColormap> {
    let lower = name.to_lowercase();
    let (base, reversed) = match lower.strip_suffix("_r") {
        Some(base) => (base, true),
        None => (lower.as_str(), false),
    };

    let cmap = sequential::preset(base)
        .or_else(|| diverging::preset(base))
        .or_else(|| categorical::preset(base))
        .ok_or_else(|| {
            ClimplotError::invalid_parameter("colormap", format!("Unknown colormap: {}", name))
        })?;

    Ok(if reversed { cmap.reversed() } else { cmap })
}

/// Get a colormap by name
pub fn get_colormap(name: &str) -> Result<Box<dyn Colormap>> {
    Ok(Box::new(lookup_colormap(name)?))
}

/// Linear interpolation between two colors
pub fn lerp_color(c1: [u8; 3], c2: [u8; 3], t: f32) -> [u8; 3] {
    [
        (c1[0] as f32 * (1.0 - t) + c2[0] as f32 * t) as u8,
        (c1[1] as f32 * (1.0 - t) + c2[1] as f32 * t) as u8,
        (c1[2] as f32 * (1.0 - t) + c2[2] as f32 * t) as u8,
    ]
}
