//! Discrete colormap builders.
//!
//! Each builder returns a [`DiscreteColormap`]: the colour table, the
//! [`BoundaryNorm`] that bins data into it, and the levels themselves.

use ndarray::{Array2, ArrayView2};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::error::{ClimplotError, Result};
use crate::levels::{discrete_levels, log_levels};

use super::colormap::{lookup_colormap, Colormap, TRANSPARENT};
use super::listed::ListedColormap;
use super::norm::{Bin, BoundaryNorm, Extend};

/// Default colormap for anomaly fields (red = positive)
pub const DEFAULT_ANOMALY_CMAP: &str = "RdBu_r";

/// Default colormap for positive-only fields
pub const DEFAULT_SEQUENTIAL_CMAP: &str = "viridis";

const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Recommended colormaps for common climate variables
static CLIMATE_COLORMAPS: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        ("anomaly", "RdBu_r"),
        ("temperature", "RdBu_r"),
        ("precipitation", "BrBG"),
        ("ssh", "RdBu_r"),
        ("wind", "PuOr_r"),
        ("sequential", "viridis"),
        ("ice", "Blues_r"),
    ])
});

/// Recommended colormap names keyed by variable type
pub fn list_colormaps() -> BTreeMap<&'static str, &'static str> {
    CLIMATE_COLORMAPS.clone()
}

/// Recommended colormap for one variable type
pub fn recommended_colormap(variable: &str) -> Option<&'static str> {
    CLIMATE_COLORMAPS.get(variable).copied()
}

/// A colour table paired with the norm that bins values into it
pub struct DiscreteColormap {
    /// Colours indexed by the norm
    pub cmap: Box<dyn Colormap>,
    /// Value-to-bin mapping
    pub norm: BoundaryNorm,
    /// Level boundaries (same values as `norm.boundaries()`)
    pub levels: Vec<f64>,
}

impl fmt::Debug for DiscreteColormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscreteColormap")
            .field("cmap", &self.cmap.name())
            .field("norm", &self.norm)
            .field("levels", &self.levels)
            .finish()
    }
}

impl DiscreteColormap {
    /// Colour for a single data value
    pub fn color_for(&self, value: f64) -> [u8; 4] {
        match self.norm.bin(value) {
            Bin::Bad => TRANSPARENT,
            Bin::Under => self.cmap.color_at(0),
            Bin::Color(index) => self.cmap.color_at(index),
            Bin::Over => self.cmap.color_at(self.cmap.n_colors() - 1),
        }
    }

    /// Colour every cell of a 2D field
    pub fn colorize(&self, field: ArrayView2<f32>) -> Array2<[u8; 4]> {
        field.mapv(|v| self.color_for(f64::from(v)))
    }
}

/// Build a discrete colormap with levels every `interval` over `[vmin, vmax]`.
///
/// With `center_on_white` the bin spanning zero (`±interval / 2`) is painted
/// white and the colour table holds exactly one colour per bin, plus the end
/// colours of the base colormap for each extended side.
pub fn discrete_cmap(
    vmin: f64,
    vmax: f64,
    interval: f64,
    cmap_name: &str,
    extend: Extend,
    center_on_white: bool,
) -> Result<DiscreteColormap> {
    let levels = discrete_levels(vmin, vmax, interval, center_on_white)?;
    if levels.len() < 2 {
        return Err(ClimplotError::Norm {
            message: format!(
                "range [{}, {}] at interval {} yields fewer than 2 levels",
                vmin, vmax, interval
            ),
        });
    }
    let base = lookup_colormap(cmap_name)?;

    let discrete = if center_on_white {
        let colors = white_center_colors(&levels, &base, extend);
        let ncolors = colors.len();
        let cmap = ListedColormap::new(format!("{}_white_center", cmap_name), colors)?;
        DiscreteColormap {
            norm: BoundaryNorm::new(levels.clone(), ncolors, extend)?,
            cmap: Box::new(cmap),
            levels,
        }
    } else {
        DiscreteColormap {
            norm: BoundaryNorm::new(levels.clone(), base.n_colors(), extend)?,
            cmap: Box::new(base),
            levels,
        }
    };

    debug!(
        cmap = discrete.cmap.name(),
        levels = discrete.levels.len(),
        %extend,
        center_on_white,
        "Built discrete colormap"
    );
    Ok(discrete)
}

/// One colour per bin, sampled at bin midpoints, with the zero bin white
fn white_center_colors(levels: &[f64], base: &ListedColormap, extend: Extend) -> Vec<[u8; 4]> {
    let first = levels[0];
    let span = levels[levels.len() - 1] - first;

    let mut colors: Vec<[u8; 4]> = levels
        .windows(2)
        .map(|w| base.map_normalized(((w[0] + w[1]) / 2.0 - first) / span))
        .collect();

    if let Some(zero_bin) = levels.windows(2).position(|w| w[0] < 0.0 && 0.0 < w[1]) {
        colors[zero_bin] = WHITE;
    }
    if extend.extends_min() {
        colors.insert(0, base.map_normalized(0.0));
    }
    if extend.extends_max() {
        colors.push(base.map_normalized(1.0));
    }
    colors
}

/// Diverging colormap for anomaly fields, extended on both sides.
///
/// ```
/// use climplot::colormaps::{anomaly_cmap, DEFAULT_ANOMALY_CMAP};
///
/// let cmap = anomaly_cmap(-0.3, 0.3, 0.1, false, DEFAULT_ANOMALY_CMAP).unwrap();
/// assert_eq!(cmap.levels, vec![-0.3, -0.2, -0.1, 0.0, 0.1, 0.2, 0.3]);
/// ```
pub fn anomaly_cmap(
    vmin: f64,
    vmax: f64,
    interval: f64,
    center_on_white: bool,
    cmap_name: &str,
) -> Result<DiscreteColormap> {
    discrete_cmap(vmin, vmax, interval, cmap_name, Extend::Both, center_on_white)
}

/// Sequential colormap for positive-only data, extended above the range.
pub fn sequential_cmap(
    vmin: f64,
    vmax: f64,
    interval: f64,
    cmap_name: &str,
) -> Result<DiscreteColormap> {
    discrete_cmap(vmin, vmax, interval, cmap_name, Extend::Max, false)
}

/// Colormap with logarithmically spaced boundaries (see [`log_levels`]).
pub fn log_cmap(
    vmin: f64,
    vmax: f64,
    cmap_name: &str,
    per_decade: usize,
    extend: Extend,
) -> Result<DiscreteColormap> {
    let levels = log_levels(vmin, vmax, per_decade)?;
    let base = lookup_colormap(cmap_name)?;
    let norm = BoundaryNorm::new(levels.clone(), base.n_colors(), extend)?;

    debug!(
        cmap = base.name(),
        levels = levels.len(),
        per_decade,
        "Built log colormap"
    );
    Ok(DiscreteColormap {
        cmap: Box::new(base),
        norm,
        levels,
    })
}
