//! SalaryRecord — one submitted salary observation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::RecordId;

fn default_currency() -> String {
    "INR".to_string()
}

/// A single anonymized compensation record.
///
/// Field names serialize in camelCase so datasets exported by the web
/// front end load without translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    pub id: RecordId,
    pub role: String,
    pub company: String,
    pub location: String,
    pub industry: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub company_size: String,
    #[serde(default)]
    pub education: String,
    /// Annual base compensation in `currency` units.
    pub salary: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Years of experience, `[0, 50]`.
    pub experience: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_options: Option<f64>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Submission payload: everything a user provides, before an id and
/// timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSalary {
    pub role: String,
    pub company: String,
    pub location: String,
    pub industry: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub company_size: String,
    #[serde(default)]
    pub education: String,
    pub salary: f64,
    pub experience: f64,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub bonus: Option<f64>,
    #[serde(default)]
    pub stock_options: Option<f64>,
}

impl SalaryRecord {
    /// Build a stored record from a submission.
    pub fn from_submission(id: RecordId, new: NewSalary, now: DateTime<Utc>) -> Self {
        Self {
            id,
            role: new.role,
            company: new.company,
            location: new.location,
            industry: new.industry,
            job_type: new.job_type,
            company_size: new.company_size,
            education: new.education,
            salary: new.salary,
            currency: default_currency(),
            experience: new.experience,
            gender: new.gender,
            skills: new.skills,
            bonus: new.bonus,
            stock_options: new.stock_options,
            verified: false,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Minimal record for fixtures and tests: all free-text fields empty
    /// except the ones given.
    pub fn basic(id: &str, role: &str, industry: &str, salary: f64, experience: f64) -> Self {
        Self {
            id: RecordId::new(id),
            role: role.to_string(),
            company: String::new(),
            location: String::new(),
            industry: industry.to_string(),
            job_type: String::new(),
            company_size: String::new(),
            education: String::new(),
            salary,
            currency: default_currency(),
            experience,
            gender: None,
            skills: Vec::new(),
            bonus: None,
            stock_options: None,
            verified: false,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_gender(mut self, gender: &str) -> Self {
        self.gender = Some(gender.to_string());
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    pub fn with_company(mut self, company: &str) -> Self {
        self.company = company.to_string();
        self
    }

    /// Base salary plus bonus and stock options, where present.
    pub fn total_compensation(&self) -> f64 {
        self.salary + self.bonus.unwrap_or(0.0) + self.stock_options.unwrap_or(0.0)
    }
}
