//! Dataset loading and writing for the runner.
//!
//! A dataset is either a JSON array of records or a CSV file whose header
//! row uses the camelCase record field names. In CSV, `skills` is a single
//! `;`-separated column and a missing `id` is filled in as `csv-<row>`.
//!
//! Every loaded record passes through `validate_record`; invalid rows are
//! skipped with a warning rather than failing the whole load.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use salarylens_core::domain::{validate_record, RecordId, SalaryRecord};

/// Errors from the dataset layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to access dataset '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported dataset format for '{}' (expected .json or .csv)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("invalid JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid CSV dataset: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Csv,
}

impl DatasetFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(LoadError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Result of loading a dataset file.
#[derive(Debug)]
pub struct LoadedDataset {
    pub records: Vec<SalaryRecord>,
    /// Rows that parsed but failed validation.
    pub skipped: usize,
    /// BLAKE3 over the raw file bytes.
    pub dataset_hash: String,
    pub format: DatasetFormat,
}

/// Load and validate a dataset file.
pub fn load_dataset(path: &Path) -> Result<LoadedDataset, LoadError> {
    let format = DatasetFormat::from_path(path)?;
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = match format {
        DatasetFormat::Json => parse_json(&bytes)?,
        DatasetFormat::Csv => parse_csv(bytes.as_slice())?,
    };
    let (records, skipped) = keep_valid(parsed);
    let dataset_hash = blake3::hash(&bytes).to_hex().to_string();

    info!(
        path = %path.display(),
        records = records.len(),
        skipped,
        hash = &dataset_hash[..12],
        "dataset loaded"
    );

    Ok(LoadedDataset {
        records,
        skipped,
        dataset_hash,
        format,
    })
}

/// Parse a JSON array of records. No validation.
pub fn parse_json(bytes: &[u8]) -> Result<Vec<SalaryRecord>, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Parse CSV rows into records. No validation.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<SalaryRecord>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (row, result) in rdr.deserialize::<CsvRow>().enumerate() {
        records.push(result?.into_record(row));
    }
    Ok(records)
}

/// Write records as a JSON array or CSV, chosen by the path's extension.
/// Parent directories are created as needed.
pub fn write_dataset(path: &Path, records: &[SalaryRecord]) -> Result<(), LoadError> {
    let format = DatasetFormat::from_path(path)?;
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let mut file = fs::File::create(path).map_err(io_err)?;

    match format {
        DatasetFormat::Json => {
            serde_json::to_writer_pretty(&mut file, records)?;
            file.write_all(b"\n").map_err(io_err)?;
        }
        DatasetFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(file);
            for rec in records {
                wtr.serialize(CsvRow::from(rec))?;
            }
            wtr.flush().map_err(io_err)?;
        }
    }

    info!(path = %path.display(), records = records.len(), "dataset written");
    Ok(())
}

fn keep_valid(parsed: Vec<SalaryRecord>) -> (Vec<SalaryRecord>, usize) {
    let total = parsed.len();
    let records: Vec<SalaryRecord> = parsed
        .into_iter()
        .filter(|rec| match validate_record(rec) {
            Ok(()) => true,
            Err(e) => {
                warn!(id = %rec.id, error = %e, "skipping invalid record");
                false
            }
        })
        .collect();
    let skipped = total - records.len();
    (records, skipped)
}

// ─── CSV row shape ──────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    #[serde(default)]
    id: Option<String>,
    role: String,
    company: String,
    location: String,
    industry: String,
    #[serde(default)]
    job_type: String,
    #[serde(default)]
    company_size: String,
    #[serde(default)]
    education: String,
    salary: f64,
    #[serde(default)]
    currency: Option<String>,
    experience: f64,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    skills: String,
    #[serde(default)]
    bonus: Option<f64>,
    #[serde(default)]
    stock_options: Option<f64>,
    #[serde(default)]
    verified: Option<bool>,
}

impl CsvRow {
    fn into_record(self, row: usize) -> SalaryRecord {
        let id = match self.id {
            Some(id) if !id.is_empty() => RecordId::new(id),
            _ => RecordId::new(format!("csv-{row}")),
        };
        SalaryRecord {
            id,
            role: self.role,
            company: self.company,
            location: self.location,
            industry: self.industry,
            job_type: self.job_type,
            company_size: self.company_size,
            education: self.education,
            salary: self.salary,
            currency: self
                .currency
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| "INR".to_string()),
            experience: self.experience,
            gender: self.gender.filter(|g| !g.is_empty()),
            skills: split_skills(&self.skills),
            bonus: self.bonus,
            stock_options: self.stock_options,
            verified: self.verified.unwrap_or(false),
            created_at: None,
            updated_at: None,
        }
    }
}

impl From<&SalaryRecord> for CsvRow {
    fn from(rec: &SalaryRecord) -> Self {
        Self {
            id: Some(rec.id.to_string()),
            role: rec.role.clone(),
            company: rec.company.clone(),
            location: rec.location.clone(),
            industry: rec.industry.clone(),
            job_type: rec.job_type.clone(),
            company_size: rec.company_size.clone(),
            education: rec.education.clone(),
            salary: rec.salary,
            currency: Some(rec.currency.clone()),
            experience: rec.experience,
            gender: rec.gender.clone(),
            skills: rec.skills.join(";"),
            bonus: rec.bonus,
            stock_options: rec.stock_options,
            verified: Some(rec.verified),
        }
    }
}

fn split_skills(field: &str) -> Vec<String> {
    field
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
