//! Stride/offset search for the roundest subset of boundaries.
//!
//! A candidate subset is every `stride`-th boundary starting at `offset`.
//! Strides from `ceil(n / max_ticks)` up to twice that are tried with every
//! offset, and the subset with the highest [`subset_score`] wins. The first
//! subset reaching the best score is kept.

use tracing::debug;

use super::roundness::roundness_score;

/// Added to a subset's score when all of its gaps are equal.
pub const UNIFORM_SPACING_BONUS: u32 = 20;

const RELATIVE_TOLERANCE: f64 = 1e-5;
const ABSOLUTE_TOLERANCE: f64 = 1e-8;

/// `|a - b| <= atol + rtol * |b|`
pub(crate) fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= ABSOLUTE_TOLERANCE + RELATIVE_TOLERANCE * b.abs()
}

fn evenly_spaced(subset: &[f64]) -> bool {
    if subset.len() < 2 {
        return false;
    }
    let first_gap = subset[1] - subset[0];
    subset.windows(2).all(|w| is_close(w[1] - w[0], first_gap))
}

/// Total roundness of `subset` plus the uniform-spacing bonus.
pub fn subset_score(subset: &[f64]) -> u32 {
    let total: u32 = subset.iter().map(|&v| roundness_score(v)).sum();
    if evenly_spaced(subset) {
        total + UNIFORM_SPACING_BONUS
    } else {
        total
    }
}

/// Whether `boundaries` mirror themselves about zero (`b ≈ -reverse(b)`).
/// Two or fewer values never count as symmetric.
pub fn is_symmetric(boundaries: &[f64]) -> bool {
    boundaries.len() > 2
        && boundaries
            .iter()
            .zip(boundaries.iter().rev())
            .all(|(&a, &b)| is_close(a, -b))
}

fn strided(values: &[f64], offset: usize, stride: usize) -> Vec<f64> {
    values.iter().skip(offset).step_by(stride).copied().collect()
}

/// Best-scoring strided subset whose length passes `accept`.
fn search_strides<F>(values: &[f64], budget: usize, accept: F) -> Option<Vec<f64>>
where
    F: Fn(usize) -> bool,
{
    let min_stride = if budget > 0 {
        values.len().div_ceil(budget).max(1)
    } else {
        1
    };

    let mut best: Option<(u32, Vec<f64>)> = None;
    for stride in min_stride..=2 * min_stride {
        for offset in 0..stride {
            let subset = strided(values, offset, stride);
            if !accept(subset.len()) {
                continue;
            }
            let score = subset_score(&subset);
            if best.as_ref().map_or(true, |(best_score, _)| score > *best_score) {
                best = Some((score, subset));
            }
        }
    }
    best.map(|(_, subset)| subset)
}

/// Roundest strided subset of `boundaries` with between `min_ticks` and
/// `max_ticks` values.
///
/// Endpoints are not forced; the stride pattern alone decides which
/// boundaries appear. When no subset reaches `min_ticks` the minimum is
/// relaxed to two. Returns `None` if even that finds nothing.
pub fn best_stride_subset(
    boundaries: &[f64],
    max_ticks: usize,
    min_ticks: usize,
) -> Option<Vec<f64>> {
    if boundaries.is_empty() || max_ticks == 0 {
        return None;
    }

    search_strides(boundaries, max_ticks, |len| {
        len >= min_ticks && len <= max_ticks
    })
    .or_else(|| {
        debug!(
            count = boundaries.len(),
            min_ticks, max_ticks, "No subset reaches min_ticks, relaxing to 2"
        );
        search_strides(boundaries, max_ticks, |len| len >= 2 && len <= max_ticks)
    })
}

/// Ticks for boundaries that are symmetric about zero.
///
/// Searches the strictly positive half with half the tick budget (one slot
/// reserved for zero when it is a boundary), then mirrors the result, so
/// the returned ticks always satisfy `t == -reverse(t)`. With no room
/// beside zero, only zero is kept.
pub fn select_symmetric_ticks(boundaries: &[f64], max_ticks: usize) -> Vec<f64> {
    let non_negative: Vec<f64> = boundaries.iter().copied().filter(|&v| v >= 0.0).collect();
    let has_zero = non_negative.first().is_some_and(|&v| is_close(v, 0.0));

    let half_budget = if has_zero {
        max_ticks.saturating_sub(1) / 2
    } else {
        max_ticks / 2
    };

    let positive: Vec<f64> = non_negative.into_iter().filter(|&v| v > 0.0).collect();
    if positive.is_empty() {
        return boundaries.to_vec();
    }
    if half_budget == 0 && has_zero {
        return vec![0.0];
    }

    let chosen = search_strides(&positive, half_budget, |len| {
        len >= 1 && len <= half_budget
    })
    .unwrap_or_else(|| positive.clone());

    let mut ticks: Vec<f64> = chosen.iter().rev().map(|&v| -v).collect();
    if has_zero {
        ticks.push(0.0);
    }
    ticks.extend(chosen);
    ticks
}
