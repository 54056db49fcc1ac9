//! Grouping and aggregation by a categorical key.
//!
//! Keys compare exactly. Free-text keys (role, company, location) are not
//! case-folded here; use [`crate::domain::normalize`] in the key function if
//! that is wanted. Output order of [`aggregate_by`] is not part of the
//! contract: callers that need an order sort explicitly, as
//! [`experience_trend`] and [`top_by_average`] do.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::domain::SalaryRecord;

/// Per-group aggregate. Only emitted for keys with at least one member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupAggregate<K> {
    pub key: K,
    pub average_salary: f64,
    pub count: usize,
}

/// Average salary for one whole-year experience bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePoint {
    pub experience: u32,
    pub average_salary: f64,
}

/// Average salary within a labelled experience range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceBand {
    pub label: String,
    pub average_salary: f64,
    pub count: usize,
}

/// Number of records whose salary falls in a labelled range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionBucket {
    pub label: String,
    pub count: usize,
}

/// Salary ranges for the distribution histogram, `min <= salary < max`.
pub const SALARY_RANGES: [(&str, f64, f64); 5] = [
    ("0-5L", 0.0, 500_000.0),
    ("5L-10L", 500_000.0, 1_000_000.0),
    ("10L-15L", 1_000_000.0, 1_500_000.0),
    ("15L-25L", 1_500_000.0, 2_500_000.0),
    ("25L+", 2_500_000.0, f64::INFINITY),
];

/// Experience ranges used for band summaries, bounds inclusive.
///
/// The ranges overlap at 10 years; a record with exactly 10 years counts in
/// both of the last two bands.
pub const EXPERIENCE_BANDS: [(&str, f64, f64); 4] = [
    ("0-2 years", 0.0, 2.0),
    ("3-5 years", 3.0, 5.0),
    ("6-10 years", 6.0, 10.0),
    ("10+ years", 10.0, 100.0),
];

/// Partition records by `key_fn` and compute mean salary and count per key.
pub fn aggregate_by<K, F>(records: &[SalaryRecord], key_fn: F) -> Vec<GroupAggregate<K>>
where
    K: Eq + Hash + Clone,
    F: Fn(&SalaryRecord) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut sums: Vec<(K, f64, usize)> = Vec::new();

    for record in records {
        let key = key_fn(record);
        match index.get(&key) {
            Some(&i) => {
                sums[i].1 += record.salary;
                sums[i].2 += 1;
            }
            None => {
                index.insert(key.clone(), sums.len());
                sums.push((key, record.salary, 1));
            }
        }
    }

    sums.into_iter()
        .map(|(key, sum, count)| GroupAggregate {
            key,
            average_salary: sum / count as f64,
            count,
        })
        .collect()
}

pub fn group_by_industry(records: &[SalaryRecord]) -> Vec<GroupAggregate<String>> {
    aggregate_by(records, |r| r.industry.clone())
}

pub fn group_by_location(records: &[SalaryRecord]) -> Vec<GroupAggregate<String>> {
    aggregate_by(records, |r| r.location.clone())
}

pub fn group_by_role(records: &[SalaryRecord]) -> Vec<GroupAggregate<String>> {
    aggregate_by(records, |r| r.role.clone())
}

pub fn group_by_company(records: &[SalaryRecord]) -> Vec<GroupAggregate<String>> {
    aggregate_by(records, |r| r.company.clone())
}

/// Group by whole years of experience (`5.7` → `5`).
pub fn group_by_experience_year(records: &[SalaryRecord]) -> Vec<GroupAggregate<u32>> {
    aggregate_by(records, |r| experience_bucket(r.experience))
}

/// Average salary per experience year, ascending by year.
pub fn experience_trend(records: &[SalaryRecord]) -> Vec<ExperiencePoint> {
    let mut points: Vec<ExperiencePoint> = group_by_experience_year(records)
        .into_iter()
        .map(|g| ExperiencePoint {
            experience: g.key,
            average_salary: g.average_salary,
        })
        .collect();
    points.sort_by_key(|p| p.experience);
    points
}

/// Summaries for the fixed [`EXPERIENCE_BANDS`], in band order.
/// A band with no members reports an average of 0.0.
pub fn experience_bands(records: &[SalaryRecord]) -> Vec<ExperienceBand> {
    EXPERIENCE_BANDS
        .iter()
        .map(|&(label, min, max)| {
            let (sum, count) = records
                .iter()
                .filter(|r| r.experience >= min && r.experience <= max)
                .fold((0.0, 0usize), |(s, c), r| (s + r.salary, c + 1));
            ExperienceBand {
                label: label.to_string(),
                average_salary: if count > 0 { sum / count as f64 } else { 0.0 },
                count,
            }
        })
        .collect()
}

/// Histogram over the fixed [`SALARY_RANGES`], in range order. Every range
/// is present, empty ones with a count of 0.
pub fn salary_distribution(records: &[SalaryRecord]) -> Vec<DistributionBucket> {
    SALARY_RANGES
        .iter()
        .map(|&(label, min, max)| DistributionBucket {
            label: label.to_string(),
            count: records
                .iter()
                .filter(|r| r.salary >= min && r.salary < max)
                .count(),
        })
        .collect()
}

/// Sort groups by average salary, highest first, and keep the first `n`.
pub fn top_by_average<K>(mut groups: Vec<GroupAggregate<K>>, n: usize) -> Vec<GroupAggregate<K>> {
    groups.sort_by(|a, b| {
        b.average_salary
            .partial_cmp(&a.average_salary)
            .unwrap_or(Ordering::Equal)
    });
    groups.truncate(n);
    groups
}

fn experience_bucket(experience: f64) -> u32 {
    experience.max(0.0).floor() as u32
}
