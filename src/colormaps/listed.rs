//! Colormaps backed by a fixed colour table.

use crate::error::{ClimplotError, Result};

use super::colormap::{lerp_color, Colormap, TRANSPARENT};

/// A colormap defined by an explicit list of colours.
///
/// Continuous presets are sampled into one of these, so every colormap in
/// the crate shares the same index-based lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedColormap {
    name: String,
    colors: Vec<[u8; 4]>,
}

impl ListedColormap {
    /// Create a colormap from RGBA colours
    pub fn new(name: impl Into<String>, colors: Vec<[u8; 4]>) -> Result<Self> {
        if colors.is_empty() {
            return Err(ClimplotError::invalid_parameter(
                "colors",
                "a listed colormap needs at least one colour",
            ));
        }
        Ok(Self {
            name: name.into(),
            colors,
        })
    }

    /// Sample `n` evenly spaced colours from a gradient over `[0, 1]`
    pub(crate) fn from_gradient(name: &str, gradient: &colorgrad::Gradient, n: usize) -> Self {
        let last = (n.max(2) - 1) as f64;
        let colors = (0..n.max(1))
            .map(|i| gradient.at(i as f64 / last).to_rgba8())
            .collect();
        Self {
            name: name.to_string(),
            colors,
        }
    }

    /// Sample `n` colours by linear interpolation through an RGB table
    pub(crate) fn from_table(name: &str, table: &[[u8; 3]], n: usize) -> Self {
        let last = (n.max(2) - 1) as f32;
        let top = table.len().saturating_sub(1);
        let colors = (0..n.max(1))
            .map(|i| {
                let position = i as f32 / last * top as f32;
                let index = position.floor() as usize;
                if index >= top {
                    let [r, g, b] = table[top];
                    return [r, g, b, 255];
                }
                let [r, g, b] = lerp_color(table[index], table[index + 1], position - index as f32);
                [r, g, b, 255]
            })
            .collect();
        Self {
            name: name.to_string(),
            colors,
        }
    }

    /// The colour table
    pub fn colors(&self) -> &[[u8; 4]] {
        &self.colors
    }

    /// Same colours in reverse order, named with `_r` toggled
    pub fn reversed(&self) -> Self {
        let name = match self.name.strip_suffix("_r") {
            Some(base) => base.to_string(),
            None => format!("{}_r", self.name),
        };
        let mut colors = self.colors.clone();
        colors.reverse();
        Self { name, colors }
    }
}

impl Colormap for ListedColormap {
    fn map_normalized(&self, value: f64) -> [u8; 4] {
        if value.is_nan() {
            return TRANSPARENT;
        }
        let n = self.colors.len();
        let index = (value * n as f64).floor().clamp(0.0, (n - 1) as f64) as usize;
        self.colors[index]
    }

    fn n_colors(&self) -> usize {
        self.colors.len()
    }

    fn color_at(&self, index: usize) -> [u8; 4] {
        self.colors[index.min(self.colors.len() - 1)]
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primaries() -> ListedColormap {
        ListedColormap::new(
            "primaries",
            vec![[255, 0, 0, 255], [0, 255, 0, 255], [0, 0, 255, 255]],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_colors_rejected() {
        assert!(ListedColormap::new("empty", vec![]).is_err());
    }

    #[test]
    fn test_map_normalized_bins() {
        let cmap = primaries();
        assert_eq!(cmap.map_normalized(0.0), [255, 0, 0, 255]);
        assert_eq!(cmap.map_normalized(0.5), [0, 255, 0, 255]);
        assert_eq!(cmap.map_normalized(1.0), [0, 0, 255, 255]);
        assert_eq!(cmap.map_normalized(-3.0), [255, 0, 0, 255]);
        assert_eq!(cmap.map_normalized(f64::NAN), TRANSPARENT);
    }

    #[test]
    fn test_color_at_clamps() {
        let cmap = primaries();
        assert_eq!(cmap.color_at(1), [0, 255, 0, 255]);
        assert_eq!(cmap.color_at(99), [0, 0, 255, 255]);
    }

    #[test]
    fn test_reversed_round_trip_name() {
        let cmap = primaries();
        let reversed = cmap.reversed();
        assert_eq!(reversed.name(), "primaries_r");
        assert_eq!(reversed.color_at(0), [0, 0, 255, 255]);
        assert_eq!(reversed.reversed(), cmap);
    }

    #[test]
    fn test_from_table_endpoints() {
        let cmap = ListedColormap::from_table("bw", &[[0, 0, 0], [255, 255, 255]], 256);
        assert_eq!(cmap.n_colors(), 256);
        assert_eq!(cmap.color_at(0), [0, 0, 0, 255]);
        assert_eq!(cmap.color_at(255), [255, 255, 255, 255]);
    }
}
