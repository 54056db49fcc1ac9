//! Report export — JSON, CSV, and Markdown artifact generation.
//!
//! - **JSON**: full round-trip serialization with schema versioning
//! - **CSV**: group aggregates (industry and top locations) for spreadsheets
//! - **Markdown**: human-readable summary with rupee formatting
//!
//! Unknown (newer) schema versions are rejected on load.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::info;

use salarylens_core::format::format_inr;
use salarylens_core::grouping::GroupAggregate;

use crate::report::{AnalyticsReport, SCHEMA_VERSION};

pub const REPORT_JSON: &str = "report.json";
pub const GROUPS_CSV: &str = "groups.csv";
pub const REPORT_MD: &str = "report.md";

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize a report to pretty JSON.
pub fn export_json(report: &AnalyticsReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize AnalyticsReport to JSON")
}

/// Deserialize a report from JSON, rejecting unknown schema versions.
pub fn import_json(json: &str) -> Result<AnalyticsReport> {
    let report: AnalyticsReport =
        serde_json::from_str(json).context("failed to deserialize AnalyticsReport from JSON")?;
    if report.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            report.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(report)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export the report's group aggregates as CSV.
///
/// Columns: dimension, key, average_salary, count. Industry rows come first,
/// then the top locations.
pub fn export_groups_csv(report: &AnalyticsReport) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["dimension", "key", "average_salary", "count"])?;

    let rows = tagged("industry", &report.by_industry)
        .chain(tagged("location", &report.top_locations));
    for (dimension, group) in rows {
        let average = format!("{:.2}", group.average_salary);
        let count = group.count.to_string();
        wtr.write_record([dimension, group.key.as_str(), average.as_str(), count.as_str()])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

fn tagged<'a>(
    dimension: &'a str,
    groups: &'a [GroupAggregate<String>],
) -> impl Iterator<Item = (&'a str, &'a GroupAggregate<String>)> {
    groups.iter().map(move |g| (dimension, g))
}

// ─── Markdown report ────────────────────────────────────────────────

/// Generate a Markdown summary of a report.
pub fn export_markdown(report: &AnalyticsReport) -> String {
    let mut md = String::with_capacity(2048);

    md.push_str("# Salary Analytics Report\n\n");
    md.push_str(&format!(
        "Generated {} from {} records.\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M UTC"),
        report.overall.count
    ));

    let s = &report.overall;
    md.push_str("## Overall\n\n");
    md.push_str("| Metric | Value |\n");
    md.push_str("| --- | --- |\n");
    md.push_str(&format!("| Average | {} |\n", format_inr(s.average)));
    md.push_str(&format!("| Median | {} |\n", format_inr(s.median)));
    md.push_str(&format!("| Min | {} |\n", format_inr(s.min)));
    md.push_str(&format!("| Max | {} |\n", format_inr(s.max)));
    md.push_str(&format!("| Std Dev | {} |\n", format_inr(s.std_dev)));
    md.push_str(&format!(
        "| Quartiles | {} / {} / {} |\n\n",
        format_inr(report.quartiles.q1),
        format_inr(report.quartiles.q2),
        format_inr(report.quartiles.q3)
    ));

    md.push_str("## Gender Pay Gap\n\n");
    if report.wage_gap.is_insufficient() {
        md.push_str("Not enough data (needs both male and female records).\n\n");
    } else {
        let g = &report.wage_gap;
        md.push_str(&format!(
            "Male average {}, female average {}: gap {} ({:.1}%).\n\n",
            format_inr(g.male_average),
            format_inr(g.female_average),
            format_inr(g.gap_amount),
            g.gap_percentage
        ));
    }

    push_group_table(&mut md, "By Industry", "Industry", &report.by_industry);
    push_group_table(&mut md, "Top Locations", "Location", &report.top_locations);

    md.push_str("## Salary Distribution\n\n");
    md.push_str("| Range | Records |\n");
    md.push_str("| --- | --- |\n");
    for bucket in &report.salary_distribution {
        md.push_str(&format!("| {} | {} |\n", bucket.label, bucket.count));
    }
    md.push('\n');

    md.push_str("## Experience Bands\n\n");
    md.push_str("| Band | Average | Records |\n");
    md.push_str("| --- | --- | --- |\n");
    for band in &report.experience_bands {
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            band.label,
            format_inr(band.average_salary),
            band.count
        ));
    }
    md.push('\n');

    md.push_str("## Experience Trend\n\n");
    md.push_str("| Years | Average |\n");
    md.push_str("| --- | --- |\n");
    for point in &report.experience_trend {
        md.push_str(&format!(
            "| {} | {} |\n",
            point.experience,
            format_inr(point.average_salary)
        ));
    }

    md
}

fn push_group_table(md: &mut String, title: &str, column: &str, groups: &[GroupAggregate<String>]) {
    md.push_str(&format!("## {title}\n\n"));
    md.push_str(&format!("| {column} | Average | Records |\n"));
    md.push_str("| --- | --- | --- |\n");
    for g in groups {
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            g.key,
            format_inr(g.average_salary),
            g.count
        ));
    }
    md.push('\n');
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Write `report.json`, `groups.csv` and `report.md` into `output_dir`,
/// creating it if needed. Returns the directory path.
pub fn save_artifacts(report: &AnalyticsReport, output_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create report dir: {}", output_dir.display()))?;

    let json = export_json(report)?;
    write_artifact(output_dir, REPORT_JSON, &json)?;

    let groups_csv = export_groups_csv(report)?;
    write_artifact(output_dir, GROUPS_CSV, &groups_csv)?;

    write_artifact(output_dir, REPORT_MD, &export_markdown(report))?;

    info!(dir = %output_dir.display(), "report artifacts saved");
    Ok(output_dir.to_path_buf())
}

/// Load a report from an artifact directory's `report.json`.
pub fn load_artifacts(dir: &Path) -> Result<AnalyticsReport> {
    let path = dir.join(REPORT_JSON);
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    import_json(&json)
}

fn write_artifact(dir: &Path, name: &str, contents: &str) -> Result<()> {
    let path = dir.join(name);
    std::fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{build_report_at, ReportOptions};
    use chrono::{TimeZone, Utc};
    use salarylens_core::domain::SalaryRecord;

    fn report() -> AnalyticsReport {
        let records = vec![
            SalaryRecord::basic("1", "Engineer", "IT", 1_000_000.0, 1.0)
                .with_gender("male")
                .with_location("Pune"),
            SalaryRecord::basic("2", "Engineer", "IT", 800_000.0, 4.0)
                .with_gender("female")
                .with_location("Pune"),
            SalaryRecord::basic("3", "Analyst", "Finance", 600_000.0, 12.0).with_location("Delhi"),
        ];
        let at = Utc.with_ymd_and_hms(2025, 6, 30, 9, 15, 0).unwrap();
        build_report_at(&records, &ReportOptions::default(), at)
    }

    #[test]
    fn json_round_trip() {
        let r = report();
        let back = import_json(&export_json(&r).unwrap()).unwrap();
        assert_eq!(back.schema_version, r.schema_version);
        assert_eq!(back.generated_at, r.generated_at);
        assert_eq!(back.overall.count, r.overall.count);
        assert_eq!(back.overall.average, r.overall.average);
        assert_eq!(back.by_industry, r.by_industry);
        assert_eq!(back.experience_trend, r.experience_trend);
    }

    #[test]
    fn newer_schema_rejected() {
        let mut r = report();
        r.schema_version = SCHEMA_VERSION + 1;
        let json = serde_json::to_string(&r).unwrap();
        let err = import_json(&json).unwrap_err();
        assert!(err.to_string().contains("unsupported schema version"));
    }

    #[test]
    fn json_uses_camel_case() {
        let json = export_json(&report()).unwrap();
        assert!(json.contains("\"schemaVersion\": 1"));
        assert!(json.contains("\"averageSalary\""));
        assert!(json.contains("\"gapPercentage\""));
    }

    #[test]
    fn groups_csv_has_industry_then_location_rows() {
        let csv = export_groups_csv(&report()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "dimension,key,average_salary,count");
        assert_eq!(lines[1], "industry,IT,900000.00,2");
        assert_eq!(lines[2], "industry,Finance,600000.00,1");
        assert_eq!(lines[3], "location,Pune,900000.00,2");
        assert_eq!(lines[4], "location,Delhi,600000.00,1");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn markdown_contains_sections() {
        let md = export_markdown(&report());
        assert!(md.starts_with("# Salary Analytics Report"));
        assert!(md.contains("Generated 2025-06-30 09:15 UTC from 3 records."));
        assert!(md.contains("| Average | ₹8,00,000 |"));
        assert!(md.contains("gap ₹2,00,000 (20.0%)"));
        assert!(md.contains("| IT | ₹9,00,000 | 2 |"));
        assert!(md.contains("| 10+ years | ₹6,00,000 | 1 |"));
        assert!(md.contains("## Salary Distribution"));
        assert!(md.contains("| 5L-10L | 2 |"));
        assert!(md.contains("| 10L-15L | 1 |"));
    }

    #[test]
    fn zero_male_average_report_round_trips() {
        let records = vec![
            SalaryRecord::basic("1", "Intern", "IT", 0.0, 0.0).with_gender("male"),
            SalaryRecord::basic("2", "Engineer", "IT", 300_000.0, 1.0).with_gender("female"),
        ];
        let at = Utc.with_ymd_and_hms(2025, 6, 30, 9, 15, 0).unwrap();
        let r = build_report_at(&records, &ReportOptions::default(), at);
        assert!(r.wage_gap.gap_percentage.is_finite());

        let json = export_json(&r).unwrap();
        assert!(!json.contains("null"));
        let back = import_json(&json).unwrap();
        assert_eq!(back.wage_gap, r.wage_gap);
        assert_eq!(back.salary_distribution, r.salary_distribution);
        assert!(!export_markdown(&r).contains("NaN"));
    }

    #[test]
    fn markdown_notes_missing_gap_data() {
        let mut r = report();
        r.wage_gap = Default::default();
        assert!(export_markdown(&r).contains("Not enough data"));
    }
}
