//! Ingestion-boundary checks for submitted records.
//!
//! The analytics functions assume well-formed records and never validate;
//! anything entering a [`RecordStore`](crate::store::RecordStore) through
//! `add` passes through [`validate_record`] first.

use thiserror::Error;

use super::record::SalaryRecord;

/// Upper bound on a plausible annual salary (10 crore).
pub const MAX_SALARY: f64 = 100_000_000.0;

/// Upper bound on years of experience.
pub const MAX_EXPERIENCE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("salary {0} is outside [0, {MAX_SALARY}]")]
    SalaryOutOfRange(f64),

    #[error("experience {0} is outside [0, {MAX_EXPERIENCE}] years")]
    ExperienceOutOfRange(f64),

    #[error("{field} must be a non-negative amount, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },
}

fn min_len(field: &'static str, value: &str, min: usize) -> Result<(), ValidationError> {
    if value.trim().chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(())
}

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Missing { field });
    }
    Ok(())
}

pub fn validate_salary(salary: f64) -> Result<(), ValidationError> {
    if !salary.is_finite() || !(0.0..=MAX_SALARY).contains(&salary) {
        return Err(ValidationError::SalaryOutOfRange(salary));
    }
    Ok(())
}

pub fn validate_experience(experience: f64) -> Result<(), ValidationError> {
    if !experience.is_finite() || !(0.0..=MAX_EXPERIENCE).contains(&experience) {
        return Err(ValidationError::ExperienceOutOfRange(experience));
    }
    Ok(())
}

/// Check a record for well-formedness. Returns the first violation found.
pub fn validate_record(record: &SalaryRecord) -> Result<(), ValidationError> {
    min_len("role", &record.role, 2)?;
    min_len("company", &record.company, 2)?;
    validate_salary(record.salary)?;
    validate_experience(record.experience)?;
    required("education", &record.education)?;
    min_len("location", &record.location, 2)?;
    required("industry", &record.industry)?;
    required("jobType", &record.job_type)?;

    for (field, amount) in [("bonus", record.bonus), ("stockOptions", record.stock_options)] {
        if let Some(value) = amount {
            if value.is_nan() || value < 0.0 {
                return Err(ValidationError::NegativeAmount { field, value });
            }
        }
    }
    Ok(())
}
