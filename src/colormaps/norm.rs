//! Boundary normalization: data value to discrete colour bin.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ClimplotError, Result};

/// Out-of-range handling for a discrete colormap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extend {
    /// No extra bins; out-of-range values take the end colours
    Neither,
    /// Extra bin below the first boundary
    Min,
    /// Extra bin above the last boundary
    Max,
    /// Extra bins on both sides
    #[default]
    Both,
}

impl Extend {
    /// Whether values below the first boundary get their own bin
    pub fn extends_min(self) -> bool {
        matches!(self, Extend::Min | Extend::Both)
    }

    /// Whether values above the last boundary get their own bin
    pub fn extends_max(self) -> bool {
        matches!(self, Extend::Max | Extend::Both)
    }
}

impl fmt::Display for Extend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Extend::Neither => "neither",
            Extend::Min => "min",
            Extend::Max => "max",
            Extend::Both => "both",
        };
        f.write_str(name)
    }
}

impl FromStr for Extend {
    type Err = ClimplotError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "neither" => Ok(Extend::Neither),
            "min" => Ok(Extend::Min),
            "max" => Ok(Extend::Max),
            "both" => Ok(Extend::Both),
            _ => Err(ClimplotError::invalid_parameter(
                "extend",
                format!("Unknown extend mode: {}. Must be one of: neither, min, max, both", s),
            )),
        }
    }
}

/// Result of normalizing one value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bin {
    /// NaN input
    Bad,
    /// Below the first boundary
    Under,
    /// Colour index within `0..ncolors`
    Color(usize),
    /// At or above the last boundary
    Over,
}

/// Maps values to colour indices using explicit bin boundaries.
///
/// With `n` boundaries there are `n - 1` interior bins plus one per
/// extended side. When the colormap has more colours than bins, bin
/// indices are stretched across the whole colour range.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryNorm {
    boundaries: Vec<f64>,
    ncolors: usize,
    extend: Extend,
    n_regions: usize,
    offset: usize,
}

impl BoundaryNorm {
    /// Create a normalization over strictly increasing `boundaries`
    pub fn new(boundaries: Vec<f64>, ncolors: usize, extend: Extend) -> Result<Self> {
        if boundaries.len() < 2 {
            return Err(ClimplotError::Norm {
                message: format!(
                    "at least 2 boundaries are required, got {}",
                    boundaries.len()
                ),
            });
        }
        if !boundaries.windows(2).all(|w| w[0] < w[1]) {
            return Err(ClimplotError::Norm {
                message: "boundaries must be strictly increasing".to_string(),
            });
        }

        let mut n_regions = boundaries.len() - 1;
        let mut offset = 0;
        if extend.extends_min() {
            n_regions += 1;
            offset = 1;
        }
        if extend.extends_max() {
            n_regions += 1;
        }
        if n_regions > ncolors {
            return Err(ClimplotError::Norm {
                message: format!(
                    "{} color bins including extensions, but ncolors = {}",
                    n_regions, ncolors
                ),
            });
        }

        Ok(Self {
            boundaries,
            ncolors,
            extend,
            n_regions,
            offset,
        })
    }

    /// The bin boundaries
    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    /// First boundary
    pub fn vmin(&self) -> f64 {
        self.boundaries[0]
    }

    /// Last boundary
    pub fn vmax(&self) -> f64 {
        self.boundaries[self.boundaries.len() - 1]
    }

    /// Number of colours the norm spreads bins over
    pub fn ncolors(&self) -> usize {
        self.ncolors
    }

    /// Out-of-range handling
    pub fn extend(&self) -> Extend {
        self.extend
    }

    /// Number of bins, including extensions
    pub fn n_regions(&self) -> usize {
        self.n_regions
    }

    /// Classify `value`
    pub fn bin(&self, value: f64) -> Bin {
        if value.is_nan() {
            return Bin::Bad;
        }
        if value < self.vmin() {
            return Bin::Under;
        }
        if value >= self.vmax() {
            return Bin::Over;
        }

        // value >= vmin, so at least one boundary is <= value
        let region = self.boundaries.partition_point(|&b| b <= value) - 1 + self.offset;
        let index = if self.ncolors > self.n_regions {
            if self.n_regions == 1 {
                if region == 0 {
                    (self.ncolors - 1) / 2
                } else {
                    region
                }
            } else {
                ((self.ncolors - 1) as f64 / (self.n_regions - 1) as f64 * region as f64) as usize
            }
        } else {
            region
        };
        Bin::Color(index)
    }
}
