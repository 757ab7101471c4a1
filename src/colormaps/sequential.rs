//! Sequential colormaps (single progression from low to high).
//!
//! These colormaps are suitable for positive-only data such as
//! precipitation totals or ice concentration.

use super::colormap::LUT_SIZE;
use super::listed::ListedColormap;

/// Resolve a lower-case sequential colormap name.
pub(crate) fn preset(name: &str) -> Option<ListedColormap> {
    let (canonical, gradient) = match name {
        "viridis" => ("viridis", colorgrad::viridis()),
        "plasma" => ("plasma", colorgrad::plasma()),
        "inferno" => ("inferno", colorgrad::inferno()),
        "magma" => ("magma", colorgrad::magma()),
        "cividis" => ("cividis", colorgrad::cividis()),
        "turbo" => ("turbo", colorgrad::turbo()),
        "blues" => ("Blues", colorgrad::blues()),
        "greens" => ("Greens", colorgrad::greens()),
        "greys" => ("Greys", colorgrad::greys()),
        "oranges" => ("Oranges", colorgrad::oranges()),
        "purples" => ("Purples", colorgrad::purples()),
        "reds" => ("Reds", colorgrad::reds()),
        _ => return None,
    };
    Some(ListedColormap::from_gradient(canonical, &gradient, LUT_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormaps::Colormap;

    #[test]
    fn test_colormap_names() {
        assert_eq!(preset("viridis").unwrap().name(), "viridis");
        assert_eq!(preset("plasma").unwrap().name(), "plasma");
        assert_eq!(preset("blues").unwrap().name(), "Blues");
        assert!(preset("rdbu").is_none());
    }

    #[test]
    fn test_viridis_runs_dark_to_yellow() {
        let viridis = preset("viridis").unwrap();
        let low = viridis.map_normalized(0.0);
        let high = viridis.map_normalized(1.0);
        // dark purple start, yellow end
        assert!(low[2] > low[1]);
        assert!(high[0] > high[2]);
        assert!(high[1] > 200);
    }

    #[test]
    fn test_blues_darkens() {
        let blues = preset("blues").unwrap();
        let low = blues.map_normalized(0.0);
        let high = blues.map_normalized(1.0);
        let brightness = |c: [u8; 4]| c[0] as u32 + c[1] as u32 + c[2] as u32;
        assert!(brightness(low) > brightness(high));
        assert_eq!(blues.n_colors(), LUT_SIZE);
    }
}
