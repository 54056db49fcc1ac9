//! Analytics report: one snapshot of every aggregate over a record set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use salarylens_core::domain::{salaries, SalaryRecord};
use salarylens_core::grouping::{
    experience_bands, experience_trend, group_by_industry, group_by_location, salary_distribution,
    top_by_average, DistributionBucket, ExperienceBand, ExperiencePoint, GroupAggregate,
};
use salarylens_core::stats::{calculate_stats, quartiles, Quartiles, SalaryStats};
use salarylens_core::wage_gap::{calculate_wage_gap, WageGap};

use crate::config::ReportConfig;

/// Current report schema version. Bump on breaking changes to
/// [`AnalyticsReport`]; older readers reject newer versions.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Number of highest-paying locations to keep.
    pub top_locations: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { top_locations: 10 }
    }
}

impl From<&ReportConfig> for ReportOptions {
    fn from(config: &ReportConfig) -> Self {
        Self {
            top_locations: config.top_locations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub schema_version: u32,
    pub generated_at: DateTime<Utc>,
    pub overall: SalaryStats,
    pub wage_gap: WageGap,
    /// All industries, highest average first.
    pub by_industry: Vec<GroupAggregate<String>>,
    pub top_locations: Vec<GroupAggregate<String>>,
    pub experience_trend: Vec<ExperiencePoint>,
    pub experience_bands: Vec<ExperienceBand>,
    pub salary_distribution: Vec<DistributionBucket>,
    pub quartiles: Quartiles,
}

/// Build a report stamped with the current time.
pub fn build_report(records: &[SalaryRecord], opts: &ReportOptions) -> AnalyticsReport {
    build_report_at(records, opts, Utc::now())
}

pub fn build_report_at(
    records: &[SalaryRecord],
    opts: &ReportOptions,
    generated_at: DateTime<Utc>,
) -> AnalyticsReport {
    let industries = group_by_industry(records);
    let industry_count = industries.len();

    let report = AnalyticsReport {
        schema_version: SCHEMA_VERSION,
        generated_at,
        overall: calculate_stats(records),
        wage_gap: calculate_wage_gap(records),
        by_industry: top_by_average(industries, industry_count),
        top_locations: top_by_average(group_by_location(records), opts.top_locations),
        experience_trend: experience_trend(records),
        experience_bands: experience_bands(records),
        salary_distribution: salary_distribution(records),
        quartiles: quartiles(&salaries(records)),
    };

    info!(
        records = report.overall.count,
        industries = report.by_industry.len(),
        locations = report.top_locations.len(),
        "report built"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn records() -> Vec<SalaryRecord> {
        vec![
            SalaryRecord::basic("1", "Engineer", "IT", 1_000_000.0, 2.0)
                .with_gender("male")
                .with_location("Pune"),
            SalaryRecord::basic("2", "Engineer", "IT", 800_000.0, 2.5)
                .with_gender("female")
                .with_location("Mumbai"),
            SalaryRecord::basic("3", "Analyst", "Finance", 1_200_000.0, 7.0)
                .with_gender("male")
                .with_location("Chennai"),
            SalaryRecord::basic("4", "Analyst", "Finance", 600_000.0, 0.5)
                .with_gender("female")
                .with_location("Mumbai"),
        ]
    }

    #[test]
    fn report_covers_every_section() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let report = build_report_at(&records(), &ReportOptions { top_locations: 2 }, at);

        assert_eq!(report.schema_version, SCHEMA_VERSION);
        assert_eq!(report.generated_at, at);
        assert_eq!(report.overall.count, 4);
        assert_eq!(report.overall.average, 900_000.0);
        assert_eq!(report.wage_gap.male_average, 1_100_000.0);
        assert_eq!(report.wage_gap.female_average, 700_000.0);

        assert_eq!(report.by_industry.len(), 2);
        assert_eq!(report.by_industry[0].average_salary, 900_000.0);

        assert_eq!(report.top_locations.len(), 2);
        assert_eq!(report.top_locations[0].key, "Chennai");
        assert_eq!(report.top_locations[1].key, "Pune");

        let years: Vec<u32> = report.experience_trend.iter().map(|p| p.experience).collect();
        assert_eq!(years, vec![0, 2, 7]);
        assert_eq!(report.experience_bands.len(), 4);

        let counts: Vec<usize> = report.salary_distribution.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![0, 2, 2, 0, 0]);
    }

    #[test]
    fn empty_records_give_neutral_report() {
        let report = build_report(&[], &ReportOptions::default());
        assert_eq!(report.overall, SalaryStats::default());
        assert!(report.wage_gap.is_insufficient());
        assert!(report.by_industry.is_empty());
        assert!(report.top_locations.is_empty());
        assert!(report.experience_trend.is_empty());
        assert!(report.salary_distribution.iter().all(|b| b.count == 0));
    }

    #[test]
    fn options_from_config() {
        let config = ReportConfig {
            top_locations: 3,
            ..ReportConfig::default()
        };
        assert_eq!(ReportOptions::from(&config).top_locations, 3);
    }
}
