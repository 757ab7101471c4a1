//! Integration tests for climplot
//!
//! These tests exercise the public API end-to-end: levels feed colormaps,
//! colormaps feed colorbars, and configuration drives both.

mod common;

use climplot::colormaps::DEFAULT_ANOMALY_CMAP;
use climplot::config::Config;
use climplot::ticks::{is_symmetric, roundness_score};
use climplot::{
    anomaly_cmap, auto_levels, bottom_colorbar_rect, discrete_levels, log_cmap, log_levels,
    panel_labels, sequential_cmap, series_style, thin_boundary_ticks, ClimplotError, Colorbar,
    Extend, LineStyle, PanelLabelStyle, StyleMode, TickBounds, TimeseriesLayout,
};
use common::assertions::{
    assert_approx_eq, assert_array_approx_eq, assert_in_range, assert_strictly_increasing,
    assert_subset_of, assert_symmetric,
};
use pretty_assertions::assert_eq;
use std::io::Write;

fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let n = ((stop - start) / step).ceil() as usize;
    (0..n).map(|i| start + i as f64 * step).collect()
}

fn bounds(min_ticks: usize, max_ticks: usize) -> TickBounds {
    TickBounds::new(min_ticks, max_ticks).unwrap()
}

#[test]
fn test_levels_are_drift_free() {
    let levels = discrete_levels(-1.0, 1.0, 0.1, false).unwrap();
    assert_eq!(levels.len(), 21);
    assert_strictly_increasing(&levels);
    assert_eq!(levels[0], -1.0);
    assert_eq!(levels[20], 1.0);
    assert_eq!(levels[3], -0.7);
    assert_eq!(levels[10], 0.0);
}

#[test]
fn test_center_on_white_levels_are_symmetric() {
    let levels = discrete_levels(-2.0, 2.0, 1.0, true).unwrap();
    assert_eq!(levels, vec![-2.0, -1.0, -0.5, 0.5, 1.0, 2.0]);
    assert!(levels.contains(&-0.5));
    assert!(levels.contains(&0.5));
    assert!(!levels.contains(&0.0));
    assert!(is_symmetric(&levels));
}

#[test]
fn test_auto_levels() {
    let (interval, levels) = auto_levels(-2.3, 2.7, 10).unwrap();
    assert_eq!(interval, 0.5);
    assert_eq!(levels[0], -2.5);
    assert_eq!(levels[levels.len() - 1], 3.0);
    assert_strictly_increasing(&levels);

    let (interval, levels) = auto_levels(0.0, 37.0, 8).unwrap();
    assert_eq!(interval, 5.0);
    assert_eq!(levels, vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0]);

    assert!(matches!(
        auto_levels(1.0, 1.0, 10),
        Err(ClimplotError::InvalidRange { .. })
    ));
    assert!(matches!(
        auto_levels(0.0, 1.0, 0),
        Err(ClimplotError::InvalidParameter { .. })
    ));
}

#[test]
fn test_log_levels() {
    let levels = log_levels(0.01, 100.0, 1).unwrap();
    assert_array_approx_eq(&levels, &[0.01, 0.1, 1.0, 10.0, 100.0], None);

    let levels = log_levels(0.01, 100.0, 3).unwrap();
    assert_eq!(levels.len(), 13);
    assert_strictly_increasing(&levels);

    assert!(log_levels(0.0, 100.0, 1).is_err());
    assert!(log_levels(-1.0, 100.0, 1).is_err());
}

#[test]
fn test_roundness_orderings() {
    assert_eq!(roundness_score(0.0), 30);
    assert!(roundness_score(1.0) > roundness_score(1.5));
    assert!(roundness_score(10.0) > roundness_score(13.0));
    assert!(roundness_score(100.0) > roundness_score(123.0));
    assert!(roundness_score(1000.0) > roundness_score(100.0));
    assert!(roundness_score(5.0) > roundness_score(2.0));
    assert!(roundness_score(2.0) > roundness_score(1.0));
    assert!(roundness_score(0.5) > roundness_score(0.7));
}

#[test]
fn test_few_boundaries_unchanged() {
    let levels = [-1.0, 0.0, 1.0];
    assert_eq!(thin_boundary_ticks(&levels, bounds(2, 7)), levels.to_vec());

    let nine = arange(-2.0, 2.5, 0.5);
    assert_eq!(thin_boundary_ticks(&nine, bounds(5, 9)), nine);
}

#[test]
fn test_symmetric_ticks() {
    let levels = arange(-2.0, 2.5, 0.5);
    let ticks = thin_boundary_ticks(&levels, bounds(5, 7));
    assert_eq!(ticks, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    assert_symmetric(&ticks);

    let ticks = thin_boundary_ticks(&levels, bounds(2, 5));
    assert!(ticks.len() <= 5);
    assert_subset_of(&ticks, &levels);
    assert_symmetric(&ticks);
}

#[test]
fn test_slp_ticks() {
    let levels = arange(990.0, 1035.0, 5.0);
    let ticks = thin_boundary_ticks(&levels, bounds(5, 7));
    assert_eq!(ticks, vec![990.0, 1000.0, 1010.0, 1020.0, 1030.0]);
}

#[test]
fn test_min_ticks_floor() {
    let levels = discrete_levels(-2.0, 2.0, 0.1, false).unwrap();
    assert_eq!(levels.len(), 41);
    let ticks = thin_boundary_ticks(&levels, bounds(7, 9));
    assert_in_range(ticks.len(), 7, 9);
    assert_subset_of(&ticks, &levels);
    assert_symmetric(&ticks);
}

#[test]
fn test_many_boundaries_respect_max() {
    let levels = discrete_levels(0.0, 10.0, 0.2, false).unwrap();
    assert_eq!(levels.len(), 51);
    let ticks = thin_boundary_ticks(&levels, bounds(5, 7));
    assert_in_range(ticks.len(), 5, 7);
    assert_subset_of(&ticks, &levels);
}

#[test]
fn test_log_like_boundaries() {
    let levels = [
        0.01, 0.02, 0.05, 0.1, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0,
    ];
    let ticks = thin_boundary_ticks(&levels, bounds(5, 7));
    assert!(ticks.len() <= 7);
    assert_subset_of(&ticks, &levels);
    assert_strictly_increasing(&ticks);
}

#[test]
fn test_anomaly_pipeline() {
    let cmap = anomaly_cmap(-2.0, 2.0, 0.25, true, DEFAULT_ANOMALY_CMAP).unwrap();
    assert_eq!(cmap.norm.extend(), Extend::Both);
    assert_eq!(cmap.color_for(0.0), [255, 255, 255, 255]);

    let config = Config::default();
    let colorbar = Colorbar::for_norm(
        &cmap.norm,
        "Temperature anomaly (K)",
        &config.colorbar,
        &config.style_context(),
    )
    .unwrap();
    assert_in_range(colorbar.ticks.len(), 2, config.colorbar.max_ticks);
    assert_subset_of(&colorbar.ticks, &cmap.levels);
    assert_symmetric(&colorbar.ticks);
    assert_eq!(colorbar.ticks.len(), colorbar.tick_labels.len());
}

#[test]
fn test_sequential_and_log_pipelines() {
    let cmap = sequential_cmap(0.0, 100.0, 10.0, "viridis").unwrap();
    assert_eq!(cmap.levels[0], 0.0);
    assert_eq!(cmap.levels[cmap.levels.len() - 1], 100.0);
    assert_eq!(cmap.color_for(150.0), cmap.color_for(1e9));

    let cmap = log_cmap(0.01, 100.0, "viridis", 3, Extend::Both).unwrap();
    let config = Config::default();
    let colorbar =
        Colorbar::for_norm(&cmap.norm, "mm/day", &config.colorbar, &config.style_context())
            .unwrap();
    assert!(colorbar.ticks.len() <= 9);
    assert_subset_of(&colorbar.ticks, &cmap.levels);
}

#[test]
fn test_config_file_drives_colorbar() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "style": {{"mode": "presentation", "width": 10.0}},
            "colorbar": {{"max_ticks": 7, "min_ticks": 5, "width": 0.03}},
            "levels": {{"cmap": "BrBG", "extend": "max"}}
        }}"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    config.validate().unwrap();
    let style = config.style_context();
    assert_eq!(style.current_mode(), Some(StyleMode::Presentation));
    assert_eq!(style.settings().figure_size, (10.0, 6.0));

    let levels = arange(990.0, 1035.0, 5.0);
    let norm = climplot::BoundaryNorm::new(levels, 256, config.levels.extend).unwrap();
    let colorbar = Colorbar::for_norm(&norm, "SLP (hPa)", &config.colorbar, &style).unwrap();
    assert_eq!(colorbar.tick_labels, vec!["990", "1000", "1010", "1020", "1030"]);
    assert_eq!(colorbar.extend, Extend::Max);
    assert_eq!(colorbar.fraction, 0.03);
    assert_eq!(colorbar.label_fontsize, 14.0);

    let rect = bottom_colorbar_rect(0.5, 0.04, 0.03, &config.colorbar.bottom).unwrap();
    assert_approx_eq(rect.width, 0.6, None);
    assert_approx_eq(rect.x0, 0.2, None);
}

#[test]
fn test_panel_labels() {
    assert_eq!(panel_labels(4), vec!["a.", "b.", "c.", "d."]);
}

#[test]
fn test_timeseries_styles() {
    let obs = series_style("obs");
    assert_eq!(obs.linestyle, LineStyle::Dashed);
    assert_eq!(obs.rgba().unwrap(), [0, 0, 0, 255]);

    let unknown = series_style("ensemble_mean");
    assert_eq!(unknown.color, "#1f77b4");
    assert_eq!(unknown.linestyle.as_str(), "-");

    let layout = TimeseriesLayout::default();
    assert_eq!(layout.figsize, (7.0, 3.5));
    assert!(layout.grid);

    let label = PanelLabelStyle::default();
    assert_eq!((label.x, label.y, label.fontsize), (0.02, 0.98, 10.0));
}
