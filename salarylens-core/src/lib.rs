//! SalaryLens Core — salary records and the analytics engine.
//!
//! This crate contains the computation layer:
//! - Domain types (salary records, ids, validation at the ingestion boundary)
//! - Caller-owned record store
//! - Descriptive statistics, grouping, wage gap, percentile rank
//! - Prediction heuristic with fixed multiplier tables
//! - What-if projections, career tracks, cost of living, negotiation text
//!
//! Every analytics function is synchronous and pure: the full record
//! collection comes in as a slice on each call and nothing is cached.

pub mod career;
pub mod comparison;
pub mod cost_of_living;
pub mod domain;
pub mod format;
pub mod grouping;
pub mod multipliers;
pub mod negotiation;
pub mod percentile;
pub mod prediction;
pub mod sample;
pub mod scenario;
pub mod stats;
pub mod store;
pub mod wage_gap;

pub use career::{career_path, CareerPathStage};
pub use comparison::{compare_to_peers, PeerComparison, Verdict};
pub use domain::{NewSalary, RecordId, SalaryRecord, ValidationError};
pub use grouping::{aggregate_by, salary_distribution, DistributionBucket, GroupAggregate};
pub use percentile::calculate_percentile;
pub use prediction::{predict_salary, PredictionQuery, SalaryPrediction};
pub use scenario::{what_if_scenarios, WhatIfScenario};
pub use stats::{calculate_stats, SalaryStats};
pub use store::{RecordQuery, RecordStore};
pub use wage_gap::{calculate_wage_gap, WageGap};


#[cfg(test)]
mod determinism {
    use super::*;

    /// Same unmutated input, same output, for every analytics entry point.
    #[test]
    fn analytics_have_no_hidden_state() {
        let records = sample::generate_records(60, 11);
        let salaries = domain::salaries(&records);
        let query = PredictionQuery {
            role: "Engineer".into(),
            experience: 3.0,
            education: "Bachelor".into(),
            location: "Pune".into(),
            industry: "Finance".into(),
            skills: vec!["SQL".into()],
        };

        assert_eq!(calculate_stats(&records), calculate_stats(&records));
        assert_eq!(calculate_wage_gap(&records), calculate_wage_gap(&records));
        assert_eq!(
            calculate_percentile(900_000.0, &salaries),
            calculate_percentile(900_000.0, &salaries)
        );
        assert_eq!(predict_salary(&query, &records), predict_salary(&query, &records));
        assert_eq!(
            grouping::experience_trend(&records),
            grouping::experience_trend(&records)
        );
    }
}
