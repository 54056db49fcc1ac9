//! Rank-based percentile of a value within a reference distribution.
//!
//! Not an interpolated statistical percentile: the rank is the index of the
//! first reference value at or above the target, so ties resolve to the
//! first occurrence.

use crate::stats::sorted_copy;

/// Percentile returned when there is nothing to compare against.
pub const NEUTRAL_PERCENTILE: u8 = 50;

/// Percentile rank of `target` within `reference`, 0–100.
///
/// - empty reference → [`NEUTRAL_PERCENTILE`]
/// - target above every reference value → 100
pub fn calculate_percentile(target: f64, reference: &[f64]) -> u8 {
    if reference.is_empty() {
        return NEUTRAL_PERCENTILE;
    }
    let sorted = sorted_copy(reference);
    match sorted.iter().position(|&v| v >= target) {
        Some(index) => (index as f64 / sorted.len() as f64 * 100.0).round() as u8,
        None => 100,
    }
}
