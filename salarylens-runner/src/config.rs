//! TOML analysis configuration.
//!
//! Every section is optional; a missing file section falls back to the
//! defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating an [`AnalysisConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration for a SalaryLens session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Where records come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Seed dataset, `.json` (array of records) or `.csv`.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// JSONL log of records submitted through the CLI.
    #[serde(default)]
    pub submissions: Option<PathBuf>,
}

/// Report generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Number of highest-paying locations to include.
    #[serde(default = "default_top_locations")]
    pub top_locations: usize,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_locations: default_top_locations(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_top_locations() -> usize {
    10
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("reports")
}

impl AnalysisConfig {
    /// Load and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate config TOML.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report.top_locations == 0 {
            return Err(ConfigError::Invalid(
                "report.top_locations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = AnalysisConfig::from_toml("").unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.report.top_locations, 10);
        assert_eq!(config.report.output_dir, PathBuf::from("reports"));
        assert!(config.dataset.path.is_none());
    }

    #[test]
    fn parses_all_sections() {
        let toml = r#"
[dataset]
path = "data/salaries.csv"
submissions = "data/submissions.jsonl"

[report]
top_locations = 5
output_dir = "out"
"#;
        let config = AnalysisConfig::from_toml(toml).unwrap();
        assert_eq!(config.dataset.path, Some(PathBuf::from("data/salaries.csv")));
        assert_eq!(
            config.dataset.submissions,
            Some(PathBuf::from("data/submissions.jsonl"))
        );
        assert_eq!(config.report.top_locations, 5);
        assert_eq!(config.report.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn partial_report_section_keeps_other_defaults() {
        let config = AnalysisConfig::from_toml("[report]\ntop_locations = 3\n").unwrap();
        assert_eq!(config.report.top_locations, 3);
        assert_eq!(config.report.output_dir, PathBuf::from("reports"));
    }

    #[test]
    fn zero_top_locations_is_invalid() {
        let err = AnalysisConfig::from_toml("[report]\ntop_locations = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = AnalysisConfig::from_toml("[report\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AnalysisConfig::from_file(Path::new("/nonexistent/salarylens.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
