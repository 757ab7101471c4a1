//! Qualitative colormaps for discrete categories.

use crate::error::{ClimplotError, Result};

use super::colormap::lookup_colormap;
use super::listed::ListedColormap;
use super::Colormap;

/// Default colormap for [`categorical_cmap`].
pub const DEFAULT_CATEGORICAL_CMAP: &str = "tab10";

const TAB10: [[u8; 4]; 10] = [
    [31, 119, 180, 255],
    [255, 127, 14, 255],
    [44, 160, 44, 255],
    [214, 39, 40, 255],
    [148, 103, 189, 255],
    [140, 86, 75, 255],
    [227, 119, 194, 255],
    [127, 127, 127, 255],
    [188, 189, 34, 255],
    [23, 190, 207, 255],
];

/// Resolve a lower-case qualitative colormap name.
pub(crate) fn preset(name: &str) -> Option<ListedColormap> {
    match name {
        "tab10" => ListedColormap::new("tab10", TAB10.to_vec()).ok(),
        _ => None,
    }
}

/// A colormap with `n_categories` discrete colours, taken index by index
/// from `cmap_name`. Requests beyond the base table repeat its last colour.
pub fn categorical_cmap(n_categories: usize, cmap_name: &str) -> Result<ListedColormap> {
    if n_categories == 0 {
        return Err(ClimplotError::invalid_parameter(
            "n_categories",
            "at least one category is required",
        ));
    }
    let base = lookup_colormap(cmap_name)?;
    let colors = (0..n_categories).map(|i| base.color_at(i)).collect();
    ListedColormap::new(base.name(), colors)
}
