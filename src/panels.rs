//! Multi-panel figure helpers.

use serde::{Deserialize, Serialize};

/// Width and height in inches of one ordinary panel
pub const PANEL_SIZE: (f64, f64) = (3.5, 2.5);

/// Width and height in inches of one map panel
pub const MAP_PANEL_SIZE: (f64, f64) = (3.0, 2.0);

/// Panel labels `"a."`, `"b."`, ... for `n` panels.
///
/// Past `"z."` labels continue as `"aa."`, `"ab."`, and so on.
///
/// ```
/// use climplot::panels::panel_labels;
///
/// assert_eq!(panel_labels(3), vec!["a.", "b.", "c."]);
/// assert_eq!(panel_labels(28)[27], "ab.");
/// ```
pub fn panel_labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{}.", letters(i))).collect()
}

// Bijective base-26: 0 -> a, 25 -> z, 26 -> aa
fn letters(mut index: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'a' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    out.iter().rev().map(|&b| b as char).collect()
}

/// Placement and font of panel labels, in axes-fraction coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelLabelStyle {
    pub x: f64,
    pub y: f64,
    /// Font size (pt)
    pub fontsize: f64,
    pub fontweight: String,
    /// Horizontal alignment of the text anchor
    pub ha: String,
    /// Vertical alignment of the text anchor
    pub va: String,
}

impl Default for PanelLabelStyle {
    fn default() -> Self {
        Self {
            x: 0.02,
            y: 0.98,
            fontsize: 10.0,
            fontweight: "bold".to_string(),
            ha: "left".to_string(),
            va: "top".to_string(),
        }
    }
}

/// Figure size for an `nrows` by `ncols` grid of panels.
pub fn panel_figsize(nrows: usize, ncols: usize, mapped: bool) -> (f64, f64) {
    let (width, height) = if mapped { MAP_PANEL_SIZE } else { PANEL_SIZE };
    (ncols as f64 * width, nrows as f64 * height)
}
