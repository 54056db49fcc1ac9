//! Salary prediction heuristic: base salary times independent multipliers.
//!
//! The base is the mean salary of *relevant* historical records, where a
//! record is relevant if its role contains the query role (case-insensitive
//! substring) OR its industry equals the query industry exactly. With no
//! relevant records a fixed base is used and only the experience and
//! education multipliers apply.
//!
//! The experience and skills multipliers grow linearly without a cap.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::SalaryRecord;
use crate::multipliers::{education_multiplier, location_multiplier, DEFAULT_MULTIPLIER};
use crate::stats::mean;

/// Base salary used when no relevant records exist.
pub const FALLBACK_BASE_SALARY: f64 = 600_000.0;
/// Confidence reported on the fallback path.
pub const FALLBACK_CONFIDENCE: u8 = 60;
/// Range bounds as fractions of the prediction on the fallback path (±20%).
pub const FALLBACK_RANGE: (f64, f64) = (0.8, 1.2);

/// Multiplier increment per year of experience.
pub const EXPERIENCE_STEP: f64 = 0.05;
/// Multiplier increment per listed skill.
pub const SKILL_STEP: f64 = 0.02;
/// Range bounds as fractions of the prediction (±15%).
pub const PREDICTION_RANGE: (f64, f64) = (0.85, 1.15);

const CONFIDENCE_BASE: u32 = 50;
const CONFIDENCE_PER_RECORD: u32 = 2;
const CONFIDENCE_CAP: u32 = 95;

/// Profile to predict a salary for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionQuery {
    pub role: String,
    pub experience: f64,
    pub education: String,
    pub location: String,
    pub industry: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

/// Every multiplier that was applied, for explainability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionFactors {
    pub experience: f64,
    pub education: f64,
    pub location: f64,
    /// Always 1.0: industry only affects which records are relevant.
    pub industry: f64,
    pub skills: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryPrediction {
    pub predicted_salary: f64,
    /// 0–100.
    pub confidence: u8,
    pub range: SalaryRange,
    pub factors: PredictionFactors,
}

pub fn experience_multiplier(years: f64) -> f64 {
    1.0 + years * EXPERIENCE_STEP
}

/// Skill count includes duplicates.
pub fn skills_multiplier(skill_count: usize) -> f64 {
    1.0 + skill_count as f64 * SKILL_STEP
}

/// Confidence grows with corroborating records, capped at 95.
pub fn confidence_for(relevant_count: usize) -> u8 {
    let extra = u32::try_from(relevant_count)
        .unwrap_or(u32::MAX)
        .saturating_mul(CONFIDENCE_PER_RECORD);
    CONFIDENCE_BASE.saturating_add(extra).min(CONFIDENCE_CAP) as u8
}

/// True if `record` counts towards the base salary for `query`.
pub fn is_relevant(record: &SalaryRecord, query: &PredictionQuery) -> bool {
    record
        .role
        .to_lowercase()
        .contains(&query.role.to_lowercase())
        || record.industry == query.industry
}

/// Predict a salary for `query` from the historical records.
pub fn predict_salary(query: &PredictionQuery, history: &[SalaryRecord]) -> SalaryPrediction {
    let relevant: Vec<f64> = history
        .iter()
        .filter(|r| is_relevant(r, query))
        .map(|r| r.salary)
        .collect();

    if relevant.is_empty() {
        debug!(
            role = %query.role,
            industry = %query.industry,
            "no relevant records, using fallback prediction"
        );
        return fallback_prediction(query);
    }

    let base_salary = mean(&relevant);
    let factors = PredictionFactors {
        experience: experience_multiplier(query.experience),
        education: education_multiplier(&query.education),
        location: location_multiplier(&query.location),
        industry: DEFAULT_MULTIPLIER,
        skills: skills_multiplier(query.skills.len()),
    };
    let predicted_salary = (base_salary
        * factors.experience
        * factors.education
        * factors.location
        * factors.skills)
        .round();

    debug!(
        relevant = relevant.len(),
        base_salary, predicted_salary, "salary predicted"
    );

    SalaryPrediction {
        predicted_salary,
        confidence: confidence_for(relevant.len()),
        range: band(predicted_salary, PREDICTION_RANGE),
        factors,
    }
}

/// Prediction from the fixed base; location, industry and skills are neutral.
pub fn fallback_prediction(query: &PredictionQuery) -> SalaryPrediction {
    let factors = PredictionFactors {
        experience: experience_multiplier(query.experience),
        education: education_multiplier(&query.education),
        location: DEFAULT_MULTIPLIER,
        industry: DEFAULT_MULTIPLIER,
        skills: DEFAULT_MULTIPLIER,
    };
    let predicted_salary = (FALLBACK_BASE_SALARY * factors.experience * factors.education).round();

    SalaryPrediction {
        predicted_salary,
        confidence: FALLBACK_CONFIDENCE,
        range: band(predicted_salary, FALLBACK_RANGE),
        factors,
    }
}

fn band(center: f64, (low, high): (f64, f64)) -> SalaryRange {
    SalaryRange {
        min: (center * low).round(),
        max: (center * high).round(),
    }
}
