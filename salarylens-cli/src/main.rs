//! SalaryLens CLI — salary statistics, comparison, prediction and reports.
//!
//! Commands:
//! - `stats`, `groups`, `distribution`, `wage-gap`: descriptive analytics
//! - `compare`: rank a salary against peers in the same role
//! - `predict`, `scenarios`, `career`: projections and reference tracks
//! - `cost-of-living`, `negotiate`, `skills-gap`: city adjustment and guidance
//! - `submit`: validate a record and append it to the submission log
//! - `sample`: write a synthetic dataset
//! - `report`: write report.json, groups.csv and report.md

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use salarylens_core::career::{career_path, DEFAULT_TRACK};
use salarylens_core::comparison::compare_to_peers;
use salarylens_core::cost_of_living::{adjust_salary, affordability, compare_cities};
use salarylens_core::domain::NewSalary;
use salarylens_core::format::format_inr;
use salarylens_core::grouping::{
    group_by_company, group_by_experience_year, group_by_industry, group_by_location,
    group_by_role, salary_distribution, top_by_average, GroupAggregate,
};
use salarylens_core::negotiation::{email_template, negotiation_tips, skills_gap, NegotiationInput};
use salarylens_core::prediction::{predict_salary, PredictionQuery};
use salarylens_core::sample::generate_records;
use salarylens_core::scenario::what_if_scenarios;
use salarylens_core::stats::{calculate_stats, mean, SalaryStats};
use salarylens_core::store::{RecordQuery, RecordStore};
use salarylens_core::wage_gap::calculate_wage_gap;
use salarylens_runner::{
    build_report, open_store, save_artifacts, submit, write_dataset, AnalysisConfig,
    ReportOptions, SubmissionLog,
};

/// Submission log used when neither the CLI nor the config names one.
const DEFAULT_SUBMISSIONS: &str = "data/submissions.jsonl";

#[derive(Parser)]
#[command(
    name = "salarylens",
    about = "SalaryLens CLI: salary analytics, comparison and prediction"
)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Dataset (.json or .csv). Overrides the config's dataset.path.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Submission log (.jsonl). Overrides the config's dataset.submissions.
    #[arg(long, global = true)]
    submissions: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    /// Debug logging (RUST_LOG takes precedence).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Descriptive statistics, optionally filtered.
    Stats {
        /// Role substring (case-insensitive).
        #[arg(long)]
        role: Option<String>,

        /// Location substring (case-insensitive).
        #[arg(long)]
        location: Option<String>,

        /// Industry (case-insensitive exact match).
        #[arg(long)]
        industry: Option<String>,
    },
    /// Average salary and count per group.
    Groups {
        #[arg(long, value_enum, default_value_t = GroupBy::Industry)]
        by: GroupBy,

        /// Keep only the N highest-paying groups.
        #[arg(long)]
        top: Option<usize>,
    },
    /// Record counts per salary range (0-5L, 5L-10L, 10L-15L, 15L-25L, 25L+).
    Distribution,
    /// Male vs female average salary gap.
    WageGap,
    /// Compare a salary against peers in the same role.
    Compare {
        #[arg(long)]
        salary: f64,

        #[arg(long)]
        role: String,
    },
    /// Predict a salary from role, experience, education, location and skills.
    Predict {
        #[arg(long)]
        role: String,

        /// Years of experience.
        #[arg(long)]
        experience: f64,

        /// High School, Bachelor, Master or PhD.
        #[arg(long)]
        education: String,

        #[arg(long)]
        location: String,

        #[arg(long)]
        industry: String,

        /// Skill (repeatable).
        #[arg(long = "skill")]
        skills: Vec<String>,
    },
    /// Projected salary under fixed raise/promotion/switch scenarios.
    Scenarios {
        #[arg(long)]
        salary: f64,
    },
    /// Career progression track for a role.
    Career {
        /// Track name. Unknown roles get the Software Engineer track.
        #[arg(long)]
        role: Option<String>,
    },
    /// Adjust a salary between two cities by cost of living.
    CostOfLiving {
        #[arg(long)]
        salary: f64,

        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,
    },
    /// Negotiation tips and an email draft.
    Negotiate {
        #[arg(long)]
        role: String,

        /// Current salary.
        #[arg(long)]
        current: f64,

        /// Target salary.
        #[arg(long)]
        target: f64,

        /// Market average. Defaults to the dataset average for the role.
        #[arg(long)]
        market: Option<f64>,

        /// Years of experience.
        #[arg(long, default_value_t = 0.0)]
        experience: f64,

        /// Also print an email draft.
        #[arg(long, default_value_t = false)]
        email: bool,
    },
    /// Skills to learn for a target role.
    SkillsGap {
        /// Target role.
        #[arg(long)]
        role: String,

        /// Skill already held (repeatable).
        #[arg(long = "skill")]
        skills: Vec<String>,
    },
    /// Validate a salary record and append it to the submission log.
    Submit {
        #[arg(long)]
        role: String,

        #[arg(long)]
        company: String,

        #[arg(long)]
        location: String,

        #[arg(long)]
        industry: String,

        #[arg(long)]
        education: String,

        #[arg(long)]
        salary: f64,

        #[arg(long)]
        experience: f64,

        #[arg(long, default_value = "Full-time")]
        job_type: String,

        #[arg(long, default_value = "")]
        company_size: String,

        #[arg(long)]
        gender: Option<String>,

        /// Skill (repeatable).
        #[arg(long = "skill")]
        skills: Vec<String>,

        #[arg(long)]
        bonus: Option<f64>,

        #[arg(long)]
        stock_options: Option<f64>,
    },
    /// Write a seeded synthetic dataset.
    Sample {
        #[arg(long, default_value_t = 200)]
        count: usize,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output path (.json or .csv).
        #[arg(long)]
        out: PathBuf,
    },
    /// Write the full analytics report.
    Report {
        /// Output directory. Defaults to the config's report.output_dir.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GroupBy {
    Industry,
    Location,
    Role,
    Company,
    Experience,
}

/// Resolved inputs shared by every command.
struct Inputs {
    config: AnalysisConfig,
    dataset: Option<PathBuf>,
    submissions: PathBuf,
    json: bool,
}

impl Inputs {
    fn load_store(&self) -> Result<RecordStore> {
        let store = open_store(self.dataset.as_deref(), Some(self.submissions.as_path()))?;
        if store.is_empty() {
            warn!("no records loaded; pass --dataset or generate one with `salarylens sample`");
        }
        Ok(store)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig::default(),
    };
    let ctx = Inputs {
        dataset: cli.dataset.clone().or_else(|| config.dataset.path.clone()),
        submissions: cli
            .submissions
            .clone()
            .or_else(|| config.dataset.submissions.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SUBMISSIONS)),
        json: cli.json,
        config,
    };
    debug!(dataset = ?ctx.dataset, submissions = %ctx.submissions.display(), "inputs resolved");

    match cli.command {
        Commands::Stats {
            role,
            location,
            industry,
        } => run_stats(&ctx, role, location, industry),
        Commands::Groups { by, top } => run_groups(&ctx, by, top),
        Commands::Distribution => run_distribution(&ctx),
        Commands::WageGap => run_wage_gap(&ctx),
        Commands::Compare { salary, role } => run_compare(&ctx, salary, &role),
        Commands::Predict {
            role,
            experience,
            education,
            location,
            industry,
            skills,
        } => run_predict(
            &ctx,
            PredictionQuery {
                role,
                experience,
                education,
                location,
                industry,
                skills,
            },
        ),
        Commands::Scenarios { salary } => run_scenarios(&ctx, salary),
        Commands::Career { role } => run_career(&ctx, role.as_deref().unwrap_or(DEFAULT_TRACK)),
        Commands::CostOfLiving { salary, from, to } => run_cost_of_living(&ctx, salary, &from, &to),
        Commands::Negotiate {
            role,
            current,
            target,
            market,
            experience,
            email,
        } => run_negotiate(&ctx, role, current, target, market, experience, email),
        Commands::SkillsGap { role, skills } => run_skills_gap(&ctx, &role, &skills),
        Commands::Submit {
            role,
            company,
            location,
            industry,
            education,
            salary,
            experience,
            job_type,
            company_size,
            gender,
            skills,
            bonus,
            stock_options,
        } => run_submit(
            &ctx,
            NewSalary {
                role,
                company,
                location,
                industry,
                job_type,
                company_size,
                education,
                salary,
                experience,
                gender,
                skills,
                bonus,
                stock_options,
            },
        ),
        Commands::Sample { count, seed, out } => run_sample(count, seed, &out),
        Commands::Report { out } => run_report(&ctx, out),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ─── Analytics commands ─────────────────────────────────────────────

fn run_stats(
    ctx: &Inputs,
    role: Option<String>,
    location: Option<String>,
    industry: Option<String>,
) -> Result<()> {
    let store = ctx.load_store()?;
    let records = store.matching(&RecordQuery {
        role,
        location,
        industry,
    });

    let stats = calculate_stats(&records);
    if ctx.json {
        return print_json(&stats);
    }
    print_stats(&stats);
    Ok(())
}

fn run_groups(ctx: &Inputs, by: GroupBy, top: Option<usize>) -> Result<()> {
    let store = ctx.load_store()?;
    let records = store.get_all();

    let groups = match by {
        GroupBy::Industry => group_by_industry(records),
        GroupBy::Location => group_by_location(records),
        GroupBy::Role => group_by_role(records),
        GroupBy::Company => group_by_company(records),
        GroupBy::Experience => {
            let mut years = group_by_experience_year(records);
            years.sort_by_key(|g| g.key);
            years
                .into_iter()
                .map(|g| GroupAggregate {
                    key: format!("{} years", g.key),
                    average_salary: g.average_salary,
                    count: g.count,
                })
                .collect()
        }
    };
    // Experience buckets stay in year order unless a top-N cut is asked for.
    let groups = match top {
        Some(n) => top_by_average(groups, n),
        None if by == GroupBy::Experience => groups,
        None => {
            let n = groups.len();
            top_by_average(groups, n)
        }
    };

    if ctx.json {
        return print_json(&groups);
    }
    print_groups(&groups);
    Ok(())
}

fn run_distribution(ctx: &Inputs) -> Result<()> {
    let store = ctx.load_store()?;
    let buckets = salary_distribution(store.get_all());
    if ctx.json {
        return print_json(&buckets);
    }
    for bucket in &buckets {
        println!("{:<10} {:>6}", bucket.label, bucket.count);
    }
    Ok(())
}

fn run_wage_gap(ctx: &Inputs) -> Result<()> {
    let store = ctx.load_store()?;
    let gap = calculate_wage_gap(store.get_all());
    if ctx.json {
        return print_json(&gap);
    }

    if gap.is_insufficient() {
        println!("Not enough data: needs both male and female records.");
        return Ok(());
    }
    println!("Male average:   {}", format_inr(gap.male_average));
    println!("Female average: {}", format_inr(gap.female_average));
    println!("Gap:            {}", format_inr(gap.gap_amount));
    println!("Gap %:          {:.1}%", gap.gap_percentage);
    Ok(())
}

fn run_compare(ctx: &Inputs, salary: f64, role: &str) -> Result<()> {
    let store = ctx.load_store()?;
    let Some(cmp) = compare_to_peers(salary, role, store.get_all()) else {
        bail!("no records found for role '{role}'");
    };
    if ctx.json {
        return print_json(&cmp);
    }

    println!();
    println!("=== {role}: {} ===", format_inr(salary));
    println!("Peers:          {}", cmp.peer_count);
    println!("Percentile:     {}", cmp.percentile);
    println!("Average:        {}", format_inr(cmp.average));
    println!("Median:         {}", format_inr(cmp.median));
    println!("Top 10%:        {}", format_inr(cmp.top_10));
    println!(
        "Difference:     {} ({:+.1}%)",
        format_inr(cmp.difference),
        cmp.percentage_difference
    );
    println!();
    println!("{}", cmp.verdict.message());
    Ok(())
}

// ─── Projection commands ────────────────────────────────────────────

fn run_predict(ctx: &Inputs, query: PredictionQuery) -> Result<()> {
    let store = ctx.load_store()?;
    let prediction = predict_salary(&query, store.get_all());
    if ctx.json {
        return print_json(&prediction);
    }

    let f = &prediction.factors;
    println!();
    println!("=== Predicted salary: {} ===", format_inr(prediction.predicted_salary));
    println!(
        "Range:          {} to {}",
        format_inr(prediction.range.min),
        format_inr(prediction.range.max)
    );
    println!("Confidence:     {}%", prediction.confidence);
    println!();
    println!("--- Factors ---");
    println!("Experience:     {:.2}x", f.experience);
    println!("Education:      {:.2}x", f.education);
    println!("Location:       {:.2}x", f.location);
    println!("Skills:         {:.2}x", f.skills);
    Ok(())
}

fn run_scenarios(ctx: &Inputs, salary: f64) -> Result<()> {
    let scenarios = what_if_scenarios(salary);
    if ctx.json {
        return print_json(&scenarios);
    }

    println!("{:<28} {:>14} {:>14} {:>7}", "Scenario", "Projected", "Increase", "%");
    println!("{}", "-".repeat(66));
    for s in &scenarios {
        println!(
            "{:<28} {:>14} {:>14} {:>6.0}%",
            s.scenario,
            format_inr(s.projected_salary),
            format_inr(s.increase),
            s.increase_percentage
        );
    }
    Ok(())
}

fn run_career(ctx: &Inputs, role: &str) -> Result<()> {
    let stages = career_path(role);
    if ctx.json {
        return print_json(&stages);
    }

    for (i, stage) in stages.iter().enumerate() {
        println!(
            "{}. {} ({}+ years, avg {})",
            i + 1,
            stage.role,
            stage.years_experience,
            format_inr(stage.average_salary)
        );
        println!("   Skills: {}", stage.skills.join(", "));
        if let Some(next) = &stage.next_role {
            println!("   Next:   {next}");
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CostOfLivingOutput {
    adjusted_salary: f64,
    comparison: salarylens_core::cost_of_living::CityComparison,
    affordability: salarylens_core::cost_of_living::Affordability,
}

fn run_cost_of_living(ctx: &Inputs, salary: f64, from: &str, to: &str) -> Result<()> {
    let out = CostOfLivingOutput {
        adjusted_salary: adjust_salary(salary, from, to),
        comparison: compare_cities(from, to),
        affordability: affordability(salary, to),
    };
    if ctx.json {
        return print_json(&out);
    }

    println!(
        "{} in {from} is equivalent to {} in {to}.",
        format_inr(salary),
        format_inr(out.adjusted_salary)
    );
    println!(
        "{} is cheaper by {:.1}%.",
        out.comparison.cheaper_city, out.comparison.percentage_difference
    );
    println!(
        "Affordability of {} in {to}: {:?} ({}/100). {}",
        format_inr(salary),
        out.affordability.rating,
        out.affordability.score,
        out.affordability.description
    );
    Ok(())
}

fn run_negotiate(
    ctx: &Inputs,
    role: String,
    current: f64,
    target: f64,
    market: Option<f64>,
    experience: f64,
    email: bool,
) -> Result<()> {
    let market_average = match market {
        Some(m) => m,
        None => {
            let store = ctx.load_store()?;
            let peers: Vec<f64> = store.by_role(&role).iter().map(|r| r.salary).collect();
            if peers.is_empty() {
                bail!("no records for role '{role}'; pass --market");
            }
            mean(&peers)
        }
    };

    let input = NegotiationInput {
        role,
        experience,
        current_salary: current,
        target_salary: target,
        market_average,
    };
    let tips = negotiation_tips(&input);
    let draft = email.then(|| email_template(&input.role, input.target_salary));

    if ctx.json {
        return print_json(&serde_json::json!({ "tips": tips, "email": draft }));
    }
    println!("{tips}");
    if let Some(draft) = draft {
        println!();
        println!("{draft}");
    }
    Ok(())
}

fn run_skills_gap(ctx: &Inputs, role: &str, skills: &[String]) -> Result<()> {
    let gap = skills_gap(skills, role);
    if ctx.json {
        return print_json(&gap);
    }
    if gap.missing_skills.is_empty() {
        println!("No baseline gaps for {role}.");
        return Ok(());
    }
    println!("Skills to build for {role}:");
    for (skill, advice) in gap.missing_skills.iter().zip(&gap.recommendations) {
        println!("  - {skill}: {advice}");
    }
    Ok(())
}

// ─── Data commands ──────────────────────────────────────────────────

fn run_submit(ctx: &Inputs, new: NewSalary) -> Result<()> {
    let mut store = ctx.load_store()?;
    let log = SubmissionLog::new(&ctx.submissions);
    let id = submit(&mut store, &log, new)?;

    if ctx.json {
        return print_json(&serde_json::json!({ "id": id, "records": store.len() }));
    }
    println!("Recorded {id} ({} records total)", store.len());
    Ok(())
}

fn run_sample(count: usize, seed: u64, out: &Path) -> Result<()> {
    let records = generate_records(count, seed);
    write_dataset(out, &records)?;
    println!("Wrote {count} synthetic records to {}", out.display());
    Ok(())
}

fn run_report(ctx: &Inputs, out: Option<PathBuf>) -> Result<()> {
    let store = ctx.load_store()?;
    let report = build_report(store.get_all(), &ReportOptions::from(&ctx.config.report));
    let dir = out.unwrap_or_else(|| ctx.config.report.output_dir.clone());
    let dir = save_artifacts(&report, &dir)?;

    if ctx.json {
        return print_json(&report);
    }
    print_stats(&report.overall);
    println!("Artifacts saved to: {}", dir.display());
    Ok(())
}

// ─── Output ─────────────────────────────────────────────────────────

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_stats(stats: &SalaryStats) {
    println!();
    println!("=== Salary Statistics ===");
    println!("Records:        {}", stats.count);
    println!("Average:        {}", format_inr(stats.average));
    println!("Median:         {}", format_inr(stats.median));
    println!("Min:            {}", format_inr(stats.min));
    println!("Max:            {}", format_inr(stats.max));
    println!("Std Dev:        {}", format_inr(stats.std_dev));
    println!();
}

fn print_groups(groups: &[GroupAggregate<String>]) {
    if groups.is_empty() {
        println!("No groups.");
        return;
    }
    println!("{:<30} {:>14} {:>8}", "Group", "Average", "Records");
    println!("{}", "-".repeat(54));
    for g in groups {
        println!(
            "{:<30} {:>14} {:>8}",
            g.key,
            format_inr(g.average_salary),
            g.count
        );
    }
}
