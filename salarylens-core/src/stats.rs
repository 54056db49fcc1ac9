//! Descriptive statistics — pure functions over the salary field.
//!
//! Every function is a pure function: records or values in, summary out.
//! Empty input yields a zeroed result rather than an error. Inputs are never
//! mutated; sorting happens on a copy.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::SalaryRecord;

/// Summary of a salary distribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryStats {
    pub average: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation (divides by `count`).
    pub std_dev: f64,
    pub count: usize,
}

/// Lower quartile, median and upper quartile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

/// Compute [`SalaryStats`] over the `salary` field of a record collection.
pub fn calculate_stats(records: &[SalaryRecord]) -> SalaryStats {
    let values: Vec<f64> = records.iter().map(|r| r.salary).collect();
    summarize(&values)
}

/// Compute [`SalaryStats`] over plain values.
pub fn summarize(values: &[f64]) -> SalaryStats {
    if values.is_empty() {
        return SalaryStats::default();
    }
    let sorted = sorted_copy(values);
    let average = mean(&sorted);

    SalaryStats {
        average,
        median: median_of_sorted(&sorted),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        std_dev: population_std_dev_around(&sorted, average),
        count: sorted.len(),
    }
}

/// Arithmetic mean. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median. Even-length input averages the two central elements.
/// Returns 0.0 for empty input.
pub fn median(values: &[f64]) -> f64 {
    median_of_sorted(&sorted_copy(values))
}

/// Population standard deviation (N in the denominator, not N-1).
pub fn population_std_dev(values: &[f64]) -> f64 {
    population_std_dev_around(values, mean(values))
}

/// Quartiles by the median-of-halves method.
///
/// For odd-length input the middle element belongs to neither half.
pub fn quartiles(values: &[f64]) -> Quartiles {
    if values.is_empty() {
        return Quartiles::default();
    }
    let sorted = sorted_copy(values);
    let mid = sorted.len() / 2;
    let lower = &sorted[..mid];
    let upper = if sorted.len() % 2 == 0 {
        &sorted[mid..]
    } else {
        &sorted[mid + 1..]
    };

    Quartiles {
        q1: median_of_sorted(lower),
        q2: median_of_sorted(&sorted),
        q3: median_of_sorted(upper),
    }
}

/// Percentage change from `old` to `new`. Returns 0.0 when `old` is zero.
pub fn percentage_change(old: f64, new: f64) -> f64 {
    if old == 0.0 {
        return 0.0;
    }
    (new - old) / old * 100.0
}

// ─── Helpers ────────────────────────────────────────────────────────

pub(crate) fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    let middle = n / 2;
    if n % 2 == 0 {
        (sorted[middle - 1] + sorted[middle]) / 2.0
    } else {
        sorted[middle]
    }
}

fn population_std_dev_around(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
