//! Seeded synthetic salary records for demos, benchmarks and tests.
//!
//! Salaries are drawn around a role base, scaled by the same experience,
//! education and location multipliers the prediction heuristic uses, with
//! ±20% noise. Not representative of any real market.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::{RecordId, SalaryRecord};
use crate::multipliers::{City, Education};
use crate::prediction::experience_multiplier;

const ROLES: [(&str, &str, f64); 8] = [
    ("Software Engineer", "IT", 800_000.0),
    ("Senior Software Engineer", "IT", 1_500_000.0),
    ("Data Scientist", "Analytics", 900_000.0),
    ("Product Manager", "Product", 1_800_000.0),
    ("Business Analyst", "Consulting", 700_000.0),
    ("DevOps Engineer", "IT", 1_000_000.0),
    ("Financial Analyst", "Finance", 650_000.0),
    ("UX Designer", "Design", 750_000.0),
];

const COMPANIES: [&str; 8] = [
    "TCS", "Infosys", "Wipro", "Flipkart", "Razorpay", "Zoho", "HCL", "Swiggy",
];

const COMPANY_SIZES: [&str; 4] = ["1-50", "51-500", "501-5000", "5000+"];
const JOB_TYPES: [&str; 3] = ["Full-time", "Contract", "Part-time"];
const SKILLS: [&str; 10] = [
    "Python", "Java", "SQL", "React", "AWS", "Docker", "Excel", "Figma", "Kubernetes", "Go",
];

/// Generate `count` records deterministically from `seed`.
///
/// Ids are `sample-<n>`. Gender is left unset for roughly one record in ten.
pub fn generate_records(count: usize, seed: u64) -> Vec<SalaryRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|i| generate_one(&mut rng, i)).collect()
}

fn generate_one(rng: &mut StdRng, index: usize) -> SalaryRecord {
    let (role, industry, base) = ROLES[rng.gen_range(0..ROLES.len())];
    let city = City::ALL[rng.gen_range(0..City::ALL.len())];
    let education = Education::ALL[rng.gen_range(0..Education::ALL.len())];
    let experience = (rng.gen_range(0.0..20.0_f64) * 10.0).round() / 10.0;
    let noise = rng.gen_range(0.8..1.2);

    let salary = (base
        * experience_multiplier(experience)
        * education.multiplier()
        * city.location_multiplier()
        * noise
        / 1_000.0)
        .round()
        * 1_000.0;

    let gender = match rng.gen_range(0..10) {
        0 => None,
        1..=5 => Some("male".to_string()),
        _ => Some("female".to_string()),
    };

    let skill_count = rng.gen_range(1..=4);
    let skills: Vec<String> = SKILLS
        .choose_multiple(rng, skill_count)
        .map(|s| s.to_string())
        .collect();

    let bonus = rng
        .gen_bool(0.4)
        .then(|| (salary * rng.gen_range(0.05..0.2) / 1_000.0).round() * 1_000.0);

    SalaryRecord {
        id: RecordId::new(format!("sample-{index}")),
        role: role.to_string(),
        company: COMPANIES[rng.gen_range(0..COMPANIES.len())].to_string(),
        location: city.name().to_string(),
        industry: industry.to_string(),
        job_type: JOB_TYPES[rng.gen_range(0..JOB_TYPES.len())].to_string(),
        company_size: COMPANY_SIZES[rng.gen_range(0..COMPANY_SIZES.len())].to_string(),
        education: education.name().to_string(),
        salary,
        currency: "INR".to_string(),
        experience,
        gender,
        skills,
        bonus,
        stock_options: None,
        verified: false,
        created_at: None,
        updated_at: None,
    }
}
