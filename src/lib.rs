//! # climplot
//!
//! The numeric side of publication-quality climate figures.
//!
//! This library computes what a plotting backend needs before it draws:
//! contour levels at round intervals, discrete colormaps with their
//! boundary normalization, and a readable subset of colorbar ticks.
//!
//! ## Key Features
//!
//! - **Round levels**: drift-free levels at a given interval, or at an automatically chosen 1/2/5 interval
//! - **Log levels**: decade-aligned boundaries for positive fields spanning orders of magnitude
//! - **Tick selection**: a roundness heuristic picks 5 to 9 colorbar labels, mirrored for diverging data
//! - **Discrete colormaps**: matplotlib-style colormaps binned by a `BoundaryNorm`, optionally white at zero
//!
//! ## Architecture
//!
//! - **Levels**: [`levels`] generates boundary arrays
//! - **Ticks**: [`ticks`] scores and selects labelled subsets of them
//! - **Colour**: [`colormaps`] pairs boundaries with colour tables; [`colorbar`] describes the result
//! - **Presentation**: [`style`], [`panels`] and [`timeseries`] hold figure-wide sizing and line styles
//!
//! ```
//! use climplot::{auto_levels, thin_boundary_ticks, TickBounds};
//!
//! let (interval, levels) = auto_levels(-2.3, 2.7, 10).unwrap();
//! assert_eq!(interval, 0.5);
//!
//! let ticks = thin_boundary_ticks(&levels, TickBounds::default());
//! assert!(ticks.len() <= 9);
//! ```

pub mod colorbar;
pub mod colormaps;
pub mod config;
pub mod error;
pub mod levels;
pub mod logging;
pub mod panels;
pub mod style;
pub mod ticks;
pub mod timeseries;

pub use colorbar::{bottom_colorbar_rect, Colorbar, Orientation, Rect};
pub use colormaps::{
    anomaly_cmap, categorical_cmap, discrete_cmap, get_colormap, list_colormaps, log_cmap,
    sequential_cmap, BoundaryNorm, Colormap, DiscreteColormap, Extend, ListedColormap,
};
pub use config::Config;
pub use error::{ClimplotError, Result};
pub use levels::{auto_levels, discrete_levels, log_levels};
pub use logging::{init_tracing, log_error, log_timed_operation};
pub use panels::{panel_figsize, panel_labels, PanelLabelStyle};
pub use style::{StyleContext, StyleMode};
pub use ticks::{
    best_stride_subset, clean_label, roundness_score, select_symmetric_ticks, thin_boundary_ticks,
    thin_evenly, TickBounds,
};
pub use timeseries::{series_style, LineStyle, SeriesStyle, TimeseriesLayout};
