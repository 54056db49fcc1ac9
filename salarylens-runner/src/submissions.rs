//! Submission log — JSONL append-only persistence of user-submitted records.
//!
//! One record per line. A truncated or hand-edited line only loses that one
//! record; `read_all` skips it with a warning and keeps going.

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use salarylens_core::domain::SalaryRecord;

pub struct SubmissionLog {
    path: PathBuf,
}

impl SubmissionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one record, creating the file and its parent directory if needed.
    pub fn append(&self, record: &SalaryRecord) -> io::Result<()> {
        let json = serde_json::to_string(record)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "{json}")?;
        file.flush()
    }

    /// Read every well-formed record. A missing file reads as empty.
    pub fn read_all(&self) -> io::Result<Vec<SalaryRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = io::BufReader::new(fs::File::open(&self.path)?);
        let mut records = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<SalaryRecord>(&line) {
                Ok(record) => records.push(record),
                Err(e) => warn!(
                    path = %self.path.display(),
                    line = index + 1,
                    error = %e,
                    "skipping malformed submission"
                ),
            }
        }

        Ok(records)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(id: &str, salary: f64) -> SalaryRecord {
        SalaryRecord::basic(id, "Engineer", "IT", salary, 3.0)
            .with_company("Zoho")
            .with_location("Chennai")
    }

    #[test]
    fn missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let log = SubmissionLog::new(dir.path().join("none.jsonl"));
        assert!(log.read_all().unwrap().is_empty());
    }

    #[test]
    fn append_then_read_preserves_order() {
        let dir = TempDir::new().unwrap();
        let log = SubmissionLog::new(dir.path().join("nested/log.jsonl"));
        log.append(&record("a", 500_000.0)).unwrap();
        log.append(&record("b", 700_000.0)).unwrap();

        let read = log.read_all().unwrap();
        let ids: Vec<&str> = read.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(read[1].salary, 700_000.0);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.jsonl");
        let log = SubmissionLog::new(&path);
        log.append(&record("a", 500_000.0)).unwrap();

        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(file, "{{\"id\": \"broken\"").unwrap();
        writeln!(file).unwrap();
        drop(file);

        log.append(&record("c", 900_000.0)).unwrap();

        let ids: Vec<String> = log
            .read_all()
            .unwrap()
            .into_iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
