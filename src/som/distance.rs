//! Distance computations between weight vectors.

use crate::error::{Result, SomError};

/// Euclidean (L2) distance between two vectors of equal length.
///
/// Callers guarantee equal lengths; a mismatch is a defect and trips a
/// debug assertion.
#[inline]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    euclidean_distance_squared(a, b).sqrt()
}

/// Squared Euclidean distance (avoids sqrt).
#[inline]
pub fn euclidean_distance_squared(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "Vector dimensions must match");

    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum()
}

/// Euclidean distance that reports a length mismatch instead of asserting.
pub fn checked_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(SomError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(euclidean_distance(a, b))
}
