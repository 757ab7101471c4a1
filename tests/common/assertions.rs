//! Assertion utilities for testing.
//!
//! This module provides helper functions for making assertions in tests,
//! particularly for floating-point comparisons of level and tick arrays.

#![allow(dead_code)]

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that two arrays of floating-point values are approximately element-wise equal.
///
/// # Panics
///
/// Panics if the arrays have different lengths or if any element-wise comparison fails.
pub fn assert_array_approx_eq(actual: &[f64], expected: &[f64], epsilon: Option<f64>) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Arrays have different lengths: actual = {:?}, expected = {:?}",
        actual,
        expected
    );

    let eps = epsilon.unwrap_or(DEFAULT_EPSILON);
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();

        assert!(
            diff <= eps,
            "Arrays differ at index {}: actual = {}, expected = {}, diff = {}, epsilon = {}",
            i,
            a,
            e,
            diff,
            eps
        );
    }
}

/// Assert that every value is strictly greater than the one before it.
pub fn assert_strictly_increasing(values: &[f64]) {
    for (i, w) in values.windows(2).enumerate() {
        assert!(
            w[0] < w[1],
            "Not strictly increasing at index {}: {} then {} in {:?}",
            i,
            w[0],
            w[1],
            values
        );
    }
}

/// Assert that every tick is one of the boundaries.
pub fn assert_subset_of(ticks: &[f64], boundaries: &[f64]) {
    for &t in ticks {
        assert!(
            boundaries.iter().any(|&b| (b - t).abs() <= DEFAULT_EPSILON),
            "Tick {} is not a boundary of {:?}",
            t,
            boundaries
        );
    }
}

/// Assert that `ticks` mirror themselves about zero.
pub fn assert_symmetric(ticks: &[f64]) {
    let mirrored: Vec<f64> = ticks.iter().rev().map(|&t| -t).collect();
    assert_array_approx_eq(ticks, &mirrored, None);
}

/// Assert that a result is within expected bounds.
///
/// # Panics
///
/// Panics if `actual` is less than `min` or greater than `max`.
pub fn assert_in_range<T: PartialOrd + std::fmt::Debug>(actual: T, min: T, max: T) {
    assert!(
        actual >= min && actual <= max,
        "Value not in range: actual = {:?}, min = {:?}, max = {:?}",
        actual,
        min,
        max
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(0.1 + 0.2, 0.3, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    fn test_assert_array_approx_eq() {
        assert_array_approx_eq(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], None);
        assert_array_approx_eq(&[1.0, 2.0, 3.0], &[1.001, 2.001, 3.001], Some(0.01));
    }

    #[test]
    fn test_array_helpers() {
        assert_strictly_increasing(&[-1.0, 0.0, 0.5]);
        assert_subset_of(&[0.0, 1.0], &[-1.0, 0.0, 0.5, 1.0]);
        assert_symmetric(&[-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_in_range(5, 0, 10);
    }
}
