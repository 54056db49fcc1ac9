//! Static career progression tracks.
//!
//! Reference data only; nothing here is derived from the record collection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathStage {
    pub role: String,
    /// Typical minimum years of experience for the stage.
    pub years_experience: u32,
    pub average_salary: f64,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_role: Option<String>,
}

/// Track returned for unknown roles.
pub const DEFAULT_TRACK: &str = "Software Engineer";

struct StageDef {
    role: &'static str,
    years: u32,
    salary: f64,
    skills: [&'static str; 3],
    next: Option<&'static str>,
}

const SOFTWARE_ENGINEER: &[StageDef] = &[
    StageDef {
        role: "Junior Software Engineer",
        years: 0,
        salary: 500_000.0,
        skills: ["JavaScript", "React", "Git"],
        next: None,
    },
    StageDef {
        role: "Software Engineer",
        years: 2,
        salary: 800_000.0,
        skills: ["Node.js", "Database", "API Design"],
        next: Some("Senior Software Engineer"),
    },
    StageDef {
        role: "Senior Software Engineer",
        years: 5,
        salary: 1_500_000.0,
        skills: ["System Design", "Microservices", "Cloud"],
        next: Some("Tech Lead"),
    },
    StageDef {
        role: "Tech Lead",
        years: 8,
        salary: 2_500_000.0,
        skills: ["Architecture", "Team Management", "Strategy"],
        next: Some("Engineering Manager"),
    },
    StageDef {
        role: "Engineering Manager",
        years: 10,
        salary: 3_500_000.0,
        skills: ["Leadership", "Hiring", "Product Strategy"],
        next: None,
    },
];

const DATA_SCIENTIST: &[StageDef] = &[
    StageDef {
        role: "Junior Data Analyst",
        years: 0,
        salary: 450_000.0,
        skills: ["Python", "SQL", "Excel"],
        next: None,
    },
    StageDef {
        role: "Data Scientist",
        years: 2,
        salary: 900_000.0,
        skills: ["Machine Learning", "Statistics", "Visualization"],
        next: Some("Senior Data Scientist"),
    },
    StageDef {
        role: "Senior Data Scientist",
        years: 5,
        salary: 1_800_000.0,
        skills: ["Deep Learning", "MLOps", "Big Data"],
        next: Some("Lead Data Scientist"),
    },
    StageDef {
        role: "Lead Data Scientist",
        years: 8,
        salary: 2_800_000.0,
        skills: ["AI Strategy", "Team Leadership", "Research"],
        next: None,
    },
];

const TRACKS: [(&str, &[StageDef]); 2] = [
    ("Software Engineer", SOFTWARE_ENGINEER),
    ("Data Scientist", DATA_SCIENTIST),
];

/// Names of the tracks with their own progression table.
pub fn known_tracks() -> Vec<&'static str> {
    TRACKS.iter().map(|(name, _)| *name).collect()
}

/// Career stages for `role`, in progression order. The lookup is by exact
/// track name; anything else gets the [`DEFAULT_TRACK`].
pub fn career_path(role: &str) -> Vec<CareerPathStage> {
    let stages = TRACKS
        .iter()
        .find(|(name, _)| *name == role)
        .map_or(SOFTWARE_ENGINEER, |(_, stages)| *stages);

    stages
        .iter()
        .map(|s| CareerPathStage {
            role: s.role.to_string(),
            years_experience: s.years,
            average_salary: s.salary,
            skills: s.skills.iter().map(|k| k.to_string()).collect(),
            next_role: s.next.map(str::to_string),
        })
        .collect()
}
