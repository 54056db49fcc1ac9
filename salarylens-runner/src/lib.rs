//! SalaryLens Runner — datasets, configuration, reports, persistence.
//!
//! This crate builds on `salarylens-core` to provide:
//! - JSON/CSV dataset loading with validation at the boundary
//! - TOML analysis configuration
//! - Analytics report assembly with schema versioning
//! - JSON, CSV, and Markdown export
//! - JSONL submission log and session assembly

pub mod config;
pub mod data_loader;
pub mod export;
pub mod report;
pub mod session;
pub mod submissions;

pub use config::{AnalysisConfig, ConfigError, DatasetConfig, ReportConfig};
pub use data_loader::{load_dataset, write_dataset, DatasetFormat, LoadError, LoadedDataset};
pub use export::{export_groups_csv, export_json, export_markdown, import_json, save_artifacts};
pub use report::{build_report, AnalyticsReport, ReportOptions, SCHEMA_VERSION};
pub use session::{open_store, submit};
pub use submissions::SubmissionLog;
