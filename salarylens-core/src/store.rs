//! Caller-owned record store.
//!
//! Holds a seed collection (typically a loaded dataset) plus any records
//! submitted during the session. Records are appended, never removed. The
//! analytics functions take `store.get_all()` as an argument; nothing in
//! the engine reaches into a store on its own.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{
    contains_normalized, eq_normalized, validate_record, NewSalary, RecordId, SalaryRecord,
    ValidationError,
};

/// Optional role/location/industry filters for [`RecordStore::matching`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordQuery {
    pub role: Option<String>,
    pub location: Option<String>,
    pub industry: Option<String>,
}

fn role_matches(record: &SalaryRecord, role: &str) -> bool {
    contains_normalized(&record.role, role)
}

fn location_matches(record: &SalaryRecord, location: &str) -> bool {
    contains_normalized(&record.location, location)
}

fn industry_matches(record: &SalaryRecord, industry: &str) -> bool {
    eq_normalized(&record.industry, industry)
}

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<SalaryRecord>,
    next_seq: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records. They are trusted as-is.
    pub fn with_records(records: Vec<SalaryRecord>) -> Self {
        Self {
            records,
            next_seq: 0,
        }
    }

    /// Validate and append a submission, stamping it with the current time.
    pub fn add(&mut self, new: NewSalary) -> Result<RecordId, ValidationError> {
        self.add_at(new, Utc::now())
    }

    /// Validate and append a submission with an explicit timestamp.
    pub fn add_at(
        &mut self,
        new: NewSalary,
        now: DateTime<Utc>,
    ) -> Result<RecordId, ValidationError> {
        let record = self.stage_at(new, now)?;
        let id = record.id.clone();
        debug!(id = %id, role = %record.role, "salary record added");
        self.records.push(record);
        Ok(id)
    }

    /// Validate a submission and assign its id without storing it. Pass the
    /// result to [`add_unchecked`](Self::add_unchecked) to commit it.
    pub fn stage(&mut self, new: NewSalary) -> Result<SalaryRecord, ValidationError> {
        self.stage_at(new, Utc::now())
    }

    pub fn stage_at(
        &mut self,
        new: NewSalary,
        now: DateTime<Utc>,
    ) -> Result<SalaryRecord, ValidationError> {
        // Sequence number keeps identical same-instant submissions apart.
        let nanos = now.timestamp_nanos_opt().unwrap_or_default();
        let seed = format!("{new:?}|{nanos}|{}", self.next_seq);
        let id = RecordId::local_from_content(seed.as_bytes());
        let record = SalaryRecord::from_submission(id, new, now);
        validate_record(&record)?;

        self.next_seq += 1;
        Ok(record)
    }

    /// Append a record without validation (fixtures, trusted imports).
    pub fn add_unchecked(&mut self, record: SalaryRecord) {
        self.records.push(record);
    }

    pub fn get_all(&self) -> &[SalaryRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<SalaryRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&SalaryRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Records whose role contains `role`, ignoring case and surrounding space.
    pub fn by_role(&self, role: &str) -> Vec<SalaryRecord> {
        self.filtered(|r| role_matches(r, role))
    }

    /// Records whose company contains `company`, ignoring case.
    pub fn by_company(&self, company: &str) -> Vec<SalaryRecord> {
        self.filtered(|r| contains_normalized(&r.company, company))
    }

    /// Records whose location contains `location`, ignoring case.
    pub fn by_location(&self, location: &str) -> Vec<SalaryRecord> {
        self.filtered(|r| location_matches(r, location))
    }

    /// Records whose industry equals `industry`, ignoring case.
    pub fn by_industry(&self, industry: &str) -> Vec<SalaryRecord> {
        self.filtered(|r| industry_matches(r, industry))
    }

    /// Records passing every filter set in `query`, using the same rules as
    /// [`by_role`](Self::by_role), [`by_location`](Self::by_location) and
    /// [`by_industry`](Self::by_industry). An empty query returns everything.
    pub fn matching(&self, query: &RecordQuery) -> Vec<SalaryRecord> {
        self.filtered(|r| {
            query.role.as_deref().map_or(true, |q| role_matches(r, q))
                && query.location.as_deref().map_or(true, |q| location_matches(r, q))
                && query.industry.as_deref().map_or(true, |q| industry_matches(r, q))
        })
    }

    fn filtered<F>(&self, pred: F) -> Vec<SalaryRecord>
    where
        F: Fn(&SalaryRecord) -> bool,
    {
        self.records.iter().filter(|r| pred(r)).cloned().collect()
    }
}
