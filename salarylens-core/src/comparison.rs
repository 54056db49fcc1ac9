//! Compare one salary against peers in the same role.

use serde::{Deserialize, Serialize};

use crate::domain::{contains_normalized, SalaryRecord};
use crate::percentile::calculate_percentile;
use crate::stats::{mean, sorted_copy};

/// Coarse reading of a percentile rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// 75th percentile and above.
    Excellent,
    /// 50–74.
    Good,
    /// 25–49.
    Fair,
    BelowAverage,
}

impl Verdict {
    pub fn from_percentile(percentile: u8) -> Self {
        match percentile {
            75.. => Self::Excellent,
            50..=74 => Self::Good,
            25..=49 => Self::Fair,
            _ => Self::BelowAverage,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent! You're earning above most professionals in your role.",
            Self::Good => "Good! You're around the market average.",
            Self::Fair => "Fair. There's room for salary growth.",
            Self::BelowAverage => "Below average. Consider negotiating for a raise.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerComparison {
    pub salary: f64,
    pub peer_count: usize,
    pub percentile: u8,
    pub average: f64,
    /// Upper-middle element of the sorted peer salaries.
    pub median: f64,
    /// Salary at the 90% position of the sorted peer salaries.
    pub top_10: f64,
    /// `salary - average`.
    pub difference: f64,
    pub percentage_difference: f64,
    pub verdict: Verdict,
}

/// Compare `salary` against records whose role contains `role`
/// (case-insensitive). Returns `None` when no peers match.
pub fn compare_to_peers(salary: f64, role: &str, records: &[SalaryRecord]) -> Option<PeerComparison> {
    let peers: Vec<f64> = records
        .iter()
        .filter(|r| contains_normalized(&r.role, role))
        .map(|r| r.salary)
        .collect();
    if peers.is_empty() {
        return None;
    }

    let percentile = calculate_percentile(salary, &peers);
    let average = mean(&peers);
    let sorted = sorted_copy(&peers);
    let n = sorted.len();
    let top_index = ((n as f64 * 0.9).floor() as usize).min(n - 1);
    let difference = salary - average;

    Some(PeerComparison {
        salary,
        peer_count: n,
        percentile,
        average,
        median: sorted[n / 2],
        top_10: sorted[top_index],
        difference,
        percentage_difference: if average > 0.0 {
            difference / average * 100.0
        } else {
            0.0
        },
        verdict: Verdict::from_percentile(percentile),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peers() -> Vec<SalaryRecord> {
        [400.0, 500.0, 600.0, 700.0, 800.0, 900.0, 1_000.0, 1_100.0, 1_200.0, 1_300.0]
            .iter()
            .enumerate()
            .map(|(i, &s)| SalaryRecord::basic(&format!("p{i}"), "Data Analyst", "IT", s, 2.0))
            .chain(std::iter::once(SalaryRecord::basic(
                "other", "Chef", "Hospitality", 99_999.0, 2.0,
            )))
            .collect()
    }

    #[test]
    fn no_peers_is_none() {
        assert!(compare_to_peers(1_000.0, "Pilot", &peers()).is_none());
    }

    #[test]
    fn comparison_fields() {
        let c = compare_to_peers(1_000.0, "data analyst", &peers()).unwrap();
        assert_eq!(c.peer_count, 10);
        assert_eq!(c.percentile, 60);
        assert!((c.average - 850.0).abs() < 1e-10);
        assert_eq!(c.median, 900.0);
        assert_eq!(c.top_10, 1_300.0);
        assert!((c.difference - 150.0).abs() < 1e-10);
        assert!((c.percentage_difference - 150.0 / 850.0 * 100.0).abs() < 1e-10);
        assert_eq!(c.verdict, Verdict::Good);
    }

    #[test]
    fn top_salary_is_excellent() {
        let c = compare_to_peers(5_000.0, "Analyst", &peers()).unwrap();
        assert_eq!(c.percentile, 100);
        assert_eq!(c.verdict, Verdict::Excellent);
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(Verdict::from_percentile(100), Verdict::Excellent);
        assert_eq!(Verdict::from_percentile(75), Verdict::Excellent);
        assert_eq!(Verdict::from_percentile(74), Verdict::Good);
        assert_eq!(Verdict::from_percentile(50), Verdict::Good);
        assert_eq!(Verdict::from_percentile(25), Verdict::Fair);
        assert_eq!(Verdict::from_percentile(24), Verdict::BelowAverage);
        assert_eq!(Verdict::from_percentile(0), Verdict::BelowAverage);
    }
}
