//! Discrete level generation.
//!
//! Levels are the boundaries between colour bins (or contour lines). This
//! module produces them three ways:
//!
//! - [`discrete_levels`]: evenly spaced at a caller-chosen interval, with an
//!   optional white band centred on zero
//! - [`auto_levels`]: picks a "nice" interval (1, 2 or 5 times a power of ten)
//!   for a data range
//! - [`log_levels`]: fixed fractions of each decade
//!
//! Values are generated as `start + i * step` and rounded to the precision the
//! interval implies, so `-0.3..0.3 by 0.1` gives exactly `-0.3, -0.2, ...`
//! rather than the drift of repeated addition.

use tracing::debug;

use crate::error::{ClimplotError, Result};

/// Mantissas accepted as "nice" intervals.
pub const NICE_STEPS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// Number of decimals used when rounding levels built from `interval`.
///
/// One digit beyond the interval's own leading digit, so `0.05` keeps the
/// half-interval band edges at `0.025`-style precision.
pub fn interval_decimals(interval: f64) -> u32 {
    if interval == 0.0 || !interval.is_finite() {
        return 0;
    }
    let exponent = interval.abs().log10().floor() as i32;
    (1 - exponent).max(0) as u32
}

/// Round half-to-even at `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    // adding zero turns -0.0 into 0.0
    (value * scale).round_ties_even() / scale + 0.0
}

/// Whether `interval` is 1, 2, 5 or 10 times a power of ten.
pub fn is_nice_interval(interval: f64) -> bool {
    if !(interval > 0.0) || !interval.is_finite() {
        return false;
    }
    let magnitude = 10f64.powf(interval.log10().floor());
    let mantissa = interval / magnitude;
    NICE_STEPS
        .iter()
        .any(|step| (mantissa - step).abs() <= 1e-9 * step)
}

/// Most levels a single call may produce.
pub const MAX_LEVELS: usize = 1_000_000;

/// Half-open `[start, stop)` sequence with `ceil((stop - start) / step)` items.
fn arange(start: f64, stop: f64, step: f64) -> Result<Vec<f64>> {
    let count = ((stop - start) / step).ceil();
    if count.is_nan() || count <= 0.0 {
        return Ok(Vec::new());
    }
    if !count.is_finite() || count > MAX_LEVELS as f64 {
        return Err(ClimplotError::invalid_parameter(
            "interval",
            format!(
                "[{}, {}) at step {} would produce {} levels, more than {}",
                start, stop, step, count, MAX_LEVELS
            ),
        ));
    }
    Ok((0..count as usize).map(|i| start + i as f64 * step).collect())
}

fn round_unique(values: Vec<f64>, decimals: u32) -> Vec<f64> {
    let mut rounded: Vec<f64> = values
        .into_iter()
        .map(|v| round_to(v, decimals))
        .collect();
    rounded.sort_by(|a, b| a.total_cmp(b));
    rounded.dedup();
    rounded
}

fn check_interval(interval: f64) -> Result<()> {
    if !interval.is_finite() || interval <= 0.0 {
        return Err(ClimplotError::invalid_parameter(
            "interval",
            format!("interval ({}) must be a positive finite number", interval),
        ));
    }
    Ok(())
}

fn check_finite(vmin: f64, vmax: f64) -> Result<()> {
    if !vmin.is_finite() || !vmax.is_finite() {
        return Err(ClimplotError::invalid_range(format!(
            "vmin ({}) and vmax ({}) must be finite",
            vmin, vmax
        )));
    }
    Ok(())
}

/// Evenly spaced levels covering `[vmin, vmax]` at `interval`.
///
/// With `center_on_white`, levels that would straddle zero are replaced by a
/// band at `±interval / 2`, so the bin around zero can be painted white:
///
/// ```
/// let levels = climplot::discrete_levels(-0.3, 0.3, 0.1, true).unwrap();
/// assert_eq!(levels, vec![-0.3, -0.2, -0.1, -0.05, 0.05, 0.1, 0.2, 0.3]);
/// ```
pub fn discrete_levels(
    vmin: f64,
    vmax: f64,
    interval: f64,
    center_on_white: bool,
) -> Result<Vec<f64>> {
    check_interval(interval)?;
    check_finite(vmin, vmax)?;
    if vmin > vmax {
        return Err(ClimplotError::invalid_range(format!(
            "vmin ({}) must not exceed vmax ({})",
            vmin, vmax
        )));
    }

    let decimals = interval_decimals(interval);
    let raw = if center_on_white {
        let mut values = arange(vmin, -interval / 10.0, interval)?;
        values.push(-interval / 2.0);
        values.push(interval / 2.0);
        values.extend(arange(interval, vmax + interval / 2.0, interval)?);
        values
    } else {
        arange(vmin, vmax + interval / 2.0, interval)?
    };

    let levels = round_unique(raw, decimals);
    debug!(
        vmin,
        vmax,
        interval,
        center_on_white,
        count = levels.len(),
        "Generated discrete levels"
    );
    Ok(levels)
}

/// Pick the nice interval (1, 2, 5 or 10 times a power of ten) closest to
/// `raw_interval`. Ties go to the smaller candidate.
pub fn nice_interval(raw_interval: f64) -> f64 {
    let magnitude = 10f64.powf(raw_interval.log10().floor());
    let mut best = NICE_STEPS[0] * magnitude;
    let mut best_diff = (best - raw_interval).abs();
    for step in &NICE_STEPS[1..] {
        let candidate = step * magnitude;
        let diff = (candidate - raw_interval).abs();
        if diff < best_diff {
            best = candidate;
            best_diff = diff;
        }
    }
    best
}

/// Choose a nice interval for `[vmin, vmax]` split into about `n_levels`
/// bins, and return it with levels snapped outward to its multiples.
///
/// ```
/// let (interval, levels) = climplot::auto_levels(-2.3, 2.7, 10).unwrap();
/// assert_eq!(interval, 0.5);
/// assert_eq!(levels.first(), Some(&-2.5));
/// assert_eq!(levels.last(), Some(&3.0));
/// ```
pub fn auto_levels(vmin: f64, vmax: f64, n_levels: usize) -> Result<(f64, Vec<f64>)> {
    check_finite(vmin, vmax)?;
    if vmin >= vmax {
        return Err(ClimplotError::invalid_range(format!(
            "vmin ({}) must be less than vmax ({})",
            vmin, vmax
        )));
    }
    if n_levels < 1 {
        return Err(ClimplotError::invalid_parameter(
            "n_levels",
            format!("n_levels ({}) must be >= 1", n_levels),
        ));
    }

    let span = vmax - vmin;
    if !span.is_finite() {
        return Err(ClimplotError::invalid_range(format!(
            "span of [{}, {}] is not representable",
            vmin, vmax
        )));
    }
    let raw_interval = span / n_levels as f64;
    let interval = nice_interval(raw_interval);
    if !interval.is_finite() || interval <= 0.0 {
        return Err(ClimplotError::invalid_parameter(
            "n_levels",
            format!(
                "no usable interval for [{}, {}] in {} levels (got {})",
                vmin, vmax, n_levels, interval
            ),
        ));
    }

    let snapped_vmin = (vmin / interval).floor() * interval;
    let snapped_vmax = (vmax / interval).ceil() * interval;
    let levels = round_unique(
        arange(snapped_vmin, snapped_vmax + interval / 2.0, interval)?,
        interval_decimals(interval),
    );

    debug!(
        vmin,
        vmax,
        n_levels,
        raw_interval,
        interval,
        count = levels.len(),
        "Chose automatic levels"
    );
    Ok((interval, levels))
}

/// Multipliers placed inside each decade for a given density.
fn decade_subdivisions(per_decade: usize) -> Vec<f64> {
    match per_decade {
        1 => vec![1.0],
        2 => vec![1.0, 3.0],
        3 => vec![1.0, 2.0, 5.0],
        n => (0..n)
            .map(|k| 10f64.powf(k as f64 / n as f64))
            .collect(),
    }
}

/// Logarithmically spaced levels between `vmin` and `vmax`.
///
/// `per_decade` selects the boundaries inside each decade: `1` gives powers
/// of ten, `2` half-decades (1, 3), `3` the 1-2-5 sequence, and any other
/// value that many evenly log-spaced steps.
pub fn log_levels(vmin: f64, vmax: f64, per_decade: usize) -> Result<Vec<f64>> {
    check_finite(vmin, vmax)?;
    if vmin <= 0.0 {
        return Err(ClimplotError::invalid_range(format!(
            "vmin ({}) must be positive for log scale",
            vmin
        )));
    }
    if vmax <= vmin {
        return Err(ClimplotError::invalid_range(format!(
            "vmax ({}) must be greater than vmin ({})",
            vmax, vmin
        )));
    }
    if per_decade == 0 {
        return Err(ClimplotError::invalid_parameter(
            "per_decade",
            "per_decade must be at least 1",
        ));
    }

    let first = vmin.log10().floor() as i32;
    let last = vmax.log10().ceil() as i32;
    let decades = (last - first + 1) as usize;
    if per_decade.saturating_mul(decades) > MAX_LEVELS {
        return Err(ClimplotError::invalid_parameter(
            "per_decade",
            format!(
                "{} per decade over {} decades exceeds {} levels",
                per_decade, decades, MAX_LEVELS
            ),
        ));
    }
    let subs = decade_subdivisions(per_decade);

    let mut levels = Vec::new();
    for exponent in first..=last {
        let decade = 10f64.powi(exponent);
        for sub in &subs {
            let value = sub * decade;
            if vmin <= value && value <= vmax {
                levels.push(value);
            }
        }
    }
    levels.sort_by(|a, b| a.total_cmp(b));
    levels.dedup();

    if levels.is_empty() {
        levels = vec![vmin, vmax];
    }

    debug!(vmin, vmax, per_decade, count = levels.len(), "Generated log levels");
    Ok(levels)
}
