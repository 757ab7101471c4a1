//! Diverging colormaps (two-hue progression with center).
//!
//! These colormaps are suitable for anomalies and differences, where the
//! interesting information is the sign and distance from zero.

use super::colormap::LUT_SIZE;
use super::listed::ListedColormap;

/// Blue to white to red - good for temperature data
const COOLWARM: [[u8; 3]; 32] = [
    [59, 76, 192],
    [68, 90, 204],
    [77, 104, 215],
    [87, 117, 225],
    [98, 130, 234],
    [108, 142, 241],
    [119, 154, 247],
    [130, 165, 251],
    [141, 176, 254],
    [152, 185, 255],
    [163, 194, 255],
    [174, 201, 253],
    [184, 208, 249],
    [194, 213, 244],
    [204, 217, 238],
    [213, 219, 230],
    [221, 221, 221],
    [229, 216, 209],
    [236, 211, 197],
    [241, 204, 185],
    [245, 196, 173],
    [247, 187, 160],
    [247, 177, 148],
    [247, 166, 135],
    [244, 154, 123],
    [241, 141, 111],
    [236, 127, 99],
    [229, 112, 88],
    [222, 96, 77],
    [213, 80, 66],
    [203, 62, 56],
    [192, 40, 47],
];

/// Blue to white to red with a sharp white centre
const SEISMIC: [[u8; 3]; 15] = [
    [0, 0, 127],
    [0, 0, 191],
    [0, 63, 255],
    [0, 127, 255],
    [0, 191, 255],
    [127, 223, 255],
    [191, 239, 255],
    [255, 255, 255],
    [255, 239, 191],
    [255, 223, 127],
    [255, 191, 0],
    [255, 127, 0],
    [255, 63, 0],
    [191, 0, 0],
    [127, 0, 0],
];

/// Resolve a lower-case diverging colormap name.
pub(crate) fn preset(name: &str) -> Option<ListedColormap> {
    let (canonical, gradient) = match name {
        "coolwarm" => return Some(ListedColormap::from_table("coolwarm", &COOLWARM, LUT_SIZE)),
        "seismic" => return Some(ListedColormap::from_table("seismic", &SEISMIC, LUT_SIZE)),
        "rdbu" => ("RdBu", colorgrad::rd_bu()),
        "brbg" => ("BrBG", colorgrad::br_bg()),
        "puor" => ("PuOr", colorgrad::pu_or()),
        "prgn" => ("PRGn", colorgrad::pr_gn()),
        "rdylbu" => ("RdYlBu", colorgrad::rd_yl_bu()),
        "spectral" => ("Spectral", colorgrad::spectral()),
        _ => return None,
    };
    Some(ListedColormap::from_gradient(canonical, &gradient, LUT_SIZE))
}
