//! Session assembly: seed dataset plus the submission log, merged into one
//! [`RecordStore`].

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use salarylens_core::domain::{NewSalary, RecordId};
use salarylens_core::store::RecordStore;

use crate::data_loader::load_dataset;
use crate::submissions::SubmissionLog;

/// Build a store from an optional dataset file and an optional submission log.
///
/// Logged submissions were validated when they were written and are added
/// without re-validation.
pub fn open_store(dataset: Option<&Path>, submissions: Option<&Path>) -> Result<RecordStore> {
    let mut store = match dataset {
        Some(path) => {
            let loaded = load_dataset(path)
                .with_context(|| format!("failed to load dataset {}", path.display()))?;
            RecordStore::with_records(loaded.records)
        }
        None => RecordStore::new(),
    };

    if let Some(path) = submissions {
        let logged = SubmissionLog::new(path)
            .read_all()
            .with_context(|| format!("failed to read submissions {}", path.display()))?;
        let count = logged.len();
        for record in logged {
            store.add_unchecked(record);
        }
        info!(path = %path.display(), count, "submissions merged");
    }

    Ok(store)
}

/// Validate a submission, persist it to `log`, then add it to `store`.
///
/// The store only changes once the log write has succeeded.
pub fn submit(store: &mut RecordStore, log: &SubmissionLog, new: NewSalary) -> Result<RecordId> {
    let record = store.stage(new).context("submission rejected")?;
    log.append(&record)
        .with_context(|| format!("failed to append to {}", log.path().display()))?;

    let id = record.id.clone();
    store.add_unchecked(record);
    info!(id = %id, "submission recorded");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_loader::write_dataset;
    use salarylens_core::sample::generate_records;
    use tempfile::TempDir;

    fn new_salary() -> NewSalary {
        NewSalary {
            role: "Backend Developer".into(),
            company: "Swiggy".into(),
            location: "Bangalore".into(),
            industry: "IT".into(),
            job_type: "Full-time".into(),
            company_size: "5000+".into(),
            education: "Master".into(),
            salary: 1_800_000.0,
            experience: 5.0,
            gender: None,
            skills: vec!["Go".into()],
            bonus: None,
            stock_options: None,
        }
    }

    #[test]
    fn no_sources_is_empty_store() {
        assert!(open_store(None, None).unwrap().is_empty());
    }

    #[test]
    fn dataset_and_submissions_merge() {
        let dir = TempDir::new().unwrap();
        let dataset = dir.path().join("seed.json");
        let log_path = dir.path().join("subs.jsonl");
        write_dataset(&dataset, &generate_records(5, 3)).unwrap();

        let mut store = open_store(Some(dataset.as_path()), Some(log_path.as_path())).unwrap();
        assert_eq!(store.len(), 5);

        let log = SubmissionLog::new(&log_path);
        let id = submit(&mut store, &log, new_salary()).unwrap();
        assert!(id.is_local());
        assert_eq!(store.len(), 6);

        let reopened = open_store(Some(dataset.as_path()), Some(log_path.as_path())).unwrap();
        assert_eq!(reopened.len(), 6);
        assert!(reopened.get(&id).is_some());
    }

    #[test]
    fn rejected_submission_is_not_logged() {
        let dir = TempDir::new().unwrap();
        let log = SubmissionLog::new(dir.path().join("subs.jsonl"));
        let mut store = RecordStore::new();

        let mut bad = new_salary();
        bad.company = "X".into();
        assert!(submit(&mut store, &log, bad).is_err());
        assert!(store.is_empty());
        assert!(log.read_all().unwrap().is_empty());
    }

    #[test]
    fn failed_log_write_leaves_store_unchanged() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let log = SubmissionLog::new(blocker.join("subs.jsonl"));
        let mut store = RecordStore::new();

        let err = submit(&mut store, &log, new_salary()).unwrap_err();
        assert!(err.to_string().contains("failed to append"));
        assert!(store.is_empty());
    }

    #[test]
    fn missing_dataset_is_error() {
        let err = open_store(Some(Path::new("/nonexistent/data.json")), None).unwrap_err();
        assert!(err.to_string().contains("failed to load dataset"));
    }
}
