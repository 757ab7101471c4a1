//! Colormaps and discrete colour binning.
//!
//! This module provides matplotlib-style colormaps for climate fields and
//! the builders that pair them with boundary normalizations.

pub mod categorical;
pub mod colormap;
pub mod discrete;
pub mod diverging;
pub mod listed;
pub mod norm;
pub mod sequential;

pub use categorical::{categorical_cmap, DEFAULT_CATEGORICAL_CMAP};
pub use colormap::{get_colormap, lookup_colormap, Colormap, LUT_SIZE};
pub use discrete::{
    anomaly_cmap, discrete_cmap, list_colormaps, log_cmap, recommended_colormap,
    sequential_cmap, DiscreteColormap, DEFAULT_ANOMALY_CMAP, DEFAULT_SEQUENTIAL_CMAP,
};
pub use listed::ListedColormap;
pub use norm::{Bin, BoundaryNorm, Extend};
