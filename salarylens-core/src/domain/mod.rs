//! Domain types for SalaryLens

pub mod ids;
pub mod normalize;
pub mod record;
pub mod validation;

pub use ids::RecordId;
pub use normalize::{contains_normalized, eq_normalized, normalize};
pub use record::{NewSalary, SalaryRecord};
pub use validation::{validate_record, ValidationError};

/// Collect the `salary` field of every record, in input order.
pub fn salaries(records: &[SalaryRecord]) -> Vec<f64> {
    records.iter().map(|r| r.salary).collect()
}
