//! Gender wage gap between the male and female sub-populations.

use serde::{Deserialize, Serialize};

use crate::domain::SalaryRecord;
use crate::stats::mean;

/// Comparative averages. All-zero means insufficient data: at least one of
/// the two sub-populations was empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WageGap {
    pub male_average: f64,
    pub female_average: f64,
    /// `gap_amount / male_average * 100`. Signed; 0 when the male average is 0.
    pub gap_percentage: f64,
    /// `male_average - female_average`. Negative when women earn more.
    pub gap_amount: f64,
}

impl WageGap {
    /// True when this is the neutral "insufficient data" result.
    pub fn is_insufficient(&self) -> bool {
        *self == Self::default()
    }
}

fn has_gender(record: &SalaryRecord, gender: &str) -> bool {
    record
        .gender
        .as_deref()
        .is_some_and(|g| g.eq_ignore_ascii_case(gender))
}

/// Compute the wage gap. Records with no gender, or any value other than
/// "male"/"female" (case-insensitive), are ignored.
pub fn calculate_wage_gap(records: &[SalaryRecord]) -> WageGap {
    let male: Vec<f64> = records
        .iter()
        .filter(|r| has_gender(r, "male"))
        .map(|r| r.salary)
        .collect();
    let female: Vec<f64> = records
        .iter()
        .filter(|r| has_gender(r, "female"))
        .map(|r| r.salary)
        .collect();

    if male.is_empty() || female.is_empty() {
        return WageGap::default();
    }

    let male_average = mean(&male);
    let female_average = mean(&female);
    let gap_amount = male_average - female_average;
    let gap_percentage = if male_average == 0.0 {
        0.0
    } else {
        gap_amount / male_average * 100.0
    };

    WageGap {
        male_average,
        female_average,
        gap_percentage,
        gap_amount,
    }
}
