//! Colorbar tick selection.
//!
//! Given the boundaries of a discrete colormap, pick the subset worth
//! labelling: between `min_ticks` and `max_ticks` values, as round as
//! possible, symmetric when the boundaries are.

pub mod format;
pub mod roundness;
pub mod select;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ClimplotError, Result};

pub use format::{clean_label, format_general};
pub use roundness::roundness_score;
pub use select::{best_stride_subset, is_symmetric, select_symmetric_ticks, subset_score};

/// Allowed number of labelled ticks on a colorbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickBounds {
    /// Fewest ticks a selected subset may have
    pub min_ticks: usize,
    /// Most ticks a selected subset may have
    pub max_ticks: usize,
}

impl TickBounds {
    /// Create validated tick bounds
    pub fn new(min_ticks: usize, max_ticks: usize) -> Result<Self> {
        let bounds = Self {
            min_ticks,
            max_ticks,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check that at least one tick is allowed and the minimum fits under the maximum
    pub fn validate(&self) -> Result<()> {
        if self.max_ticks == 0 {
            return Err(ClimplotError::invalid_parameter(
                "max_ticks",
                "max_ticks must be at least 1",
            ));
        }
        if self.min_ticks > self.max_ticks {
            return Err(ClimplotError::invalid_parameter(
                "min_ticks",
                format!(
                    "min_ticks ({}) must not exceed max_ticks ({})",
                    self.min_ticks, self.max_ticks
                ),
            ));
        }
        Ok(())
    }
}

impl Default for TickBounds {
    fn default() -> Self {
        Self {
            min_ticks: 5,
            max_ticks: 9,
        }
    }
}

/// Select colorbar ticks from discrete-colormap boundaries.
///
/// All boundaries are kept when they already fit under `max_ticks`.
/// Symmetric boundaries go through [`select_symmetric_ticks`]; the rest
/// through [`best_stride_subset`], falling back to [`thin_evenly`] when no
/// strided subset qualifies.
///
/// ```
/// use climplot::ticks::{thin_boundary_ticks, TickBounds};
///
/// let levels = [-2.0, -1.5, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0];
/// let bounds = TickBounds { min_ticks: 5, max_ticks: 7 };
/// assert_eq!(thin_boundary_ticks(&levels, bounds), vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
/// ```
pub fn thin_boundary_ticks(boundaries: &[f64], bounds: TickBounds) -> Vec<f64> {
    if boundaries.len() <= bounds.max_ticks {
        return boundaries.to_vec();
    }

    let symmetric = is_symmetric(boundaries);
    let ticks = if symmetric {
        select_symmetric_ticks(boundaries, bounds.max_ticks)
    } else {
        match best_stride_subset(boundaries, bounds.max_ticks, bounds.min_ticks) {
            Some(subset) => subset,
            None => {
                warn!(
                    count = boundaries.len(),
                    max_ticks = bounds.max_ticks,
                    "No strided tick subset found, thinning evenly"
                );
                thin_evenly(boundaries, bounds.max_ticks)
            }
        }
    };

    debug!(
        boundaries = boundaries.len(),
        symmetric,
        selected = ticks.len(),
        "Selected colorbar ticks"
    );
    ticks
}

/// Keep at most `max_ticks` of `ticks` at evenly spaced indices, always
/// including the first and last.
pub fn thin_evenly(ticks: &[f64], max_ticks: usize) -> Vec<f64> {
    if ticks.len() <= max_ticks {
        return ticks.to_vec();
    }
    if max_ticks == 0 {
        return Vec::new();
    }
    if max_ticks == 1 {
        return vec![ticks[0]];
    }

    let last = ticks.len() - 1;
    let step = last as f64 / (max_ticks - 1) as f64;
    (0..max_ticks)
        .map(|i| {
            let index = if i == max_ticks - 1 {
                last
            } else {
                (i as f64 * step).round_ties_even() as usize
            };
            ticks[index.min(last)]
        })
        .collect()
}

/// Labels for `ticks` as produced by [`clean_label`].
pub fn tick_labels(ticks: &[f64]) -> Vec<String> {
    ticks.iter().map(|&t| clean_label(t)).collect()
}
