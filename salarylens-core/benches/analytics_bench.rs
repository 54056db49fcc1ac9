//! Criterion benchmarks for SalaryLens hot paths.
//!
//! Benchmarks:
//! 1. Descriptive statistics (sort-dominated)
//! 2. Grouping by industry and by experience year
//! 3. Percentile rank against a reference set
//! 4. Prediction over the full history

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use salarylens_core::domain::salaries;
use salarylens_core::grouping::{group_by_experience_year, group_by_industry};
use salarylens_core::percentile::calculate_percentile;
use salarylens_core::prediction::{predict_salary, PredictionQuery};
use salarylens_core::sample::generate_records;
use salarylens_core::stats::calculate_stats;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

// ── 1. Statistics ────────────────────────────────────────────────────

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_stats");

    for &n in &SIZES {
        let records = generate_records(n, 1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| calculate_stats(black_box(&records)));
        });
    }

    group.finish();
}

// ── 2. Grouping ──────────────────────────────────────────────────────

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");

    for &n in &SIZES {
        let records = generate_records(n, 2);
        group.bench_with_input(BenchmarkId::new("industry", n), &n, |b, _| {
            b.iter(|| group_by_industry(black_box(&records)));
        });
        group.bench_with_input(BenchmarkId::new("experience_year", n), &n, |b, _| {
            b.iter(|| group_by_experience_year(black_box(&records)));
        });
    }

    group.finish();
}

// ── 3. Percentile ────────────────────────────────────────────────────

fn bench_percentile(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_percentile");

    for &n in &SIZES {
        let reference = salaries(&generate_records(n, 3));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| calculate_percentile(black_box(1_200_000.0), black_box(&reference)));
        });
    }

    group.finish();
}

// ── 4. Prediction ────────────────────────────────────────────────────

fn bench_prediction(c: &mut Criterion) {
    let mut group = c.benchmark_group("predict_salary");
    let query = PredictionQuery {
        role: "Engineer".into(),
        experience: 6.0,
        education: "Master".into(),
        location: "Bangalore".into(),
        industry: "IT".into(),
        skills: vec!["Rust".into(), "AWS".into(), "SQL".into()],
    };

    for &n in &SIZES {
        let history = generate_records(n, 4);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| predict_salary(black_box(&query), black_box(&history)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_stats,
    bench_grouping,
    bench_percentile,
    bench_prediction,
);
criterion_main!(benches);
