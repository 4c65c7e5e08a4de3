//! Record store for daily logs

use crate::domain::{FinalizedRecord, StoredRecord};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const LOGS_FILE: &str = "logs.toml";

/// Inclusive calendar-date interval; open ends are unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        DateRange { from, to }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first, as charts read
    Ascending,
    /// Newest first, as history lists read
    #[default]
    Descending,
}

/// Which records to return from a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    pub user_id: Uuid,
    pub dates: DateRange,
    pub created_after: Option<DateTime<Utc>>,
    pub order: SortOrder,
    pub limit: Option<usize>,
}

impl RecordFilter {
    /// All of one user's records, newest first
    pub fn for_user(user_id: Uuid) -> Self {
        RecordFilter {
            user_id,
            dates: DateRange::default(),
            created_after: None,
            order: SortOrder::Descending,
            limit: None,
        }
    }

    pub fn with_dates(mut self, dates: DateRange) -> Self {
        self.dates = dates;
        self
    }

    pub fn created_after(mut self, instant: DateTime<Utc>) -> Self {
        self.created_after = Some(instant);
        self
    }

    pub fn ordered(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn matches(&self, record: &StoredRecord) -> bool {
        record.user_id == self.user_id
            && self.dates.contains(record.date)
            && self
                .created_after
                .is_none_or(|instant| record.created_at >= instant)
    }

    /// Filter, order and truncate a set of records
    pub fn apply<I>(&self, records: I) -> Vec<StoredRecord>
    where
        I: IntoIterator<Item = StoredRecord>,
    {
        let mut matched: Vec<StoredRecord> =
            records.into_iter().filter(|r| self.matches(r)).collect();

        matched.sort_by_key(|r| r.created_at);
        if self.order == SortOrder::Descending {
            matched.reverse();
        }
        if let Some(limit) = self.limit {
            matched.truncate(limit);
        }
        matched
    }
}

/// Accepts and queries daily log records
pub trait RecordStore {
    /// Persist a finalized record, assigning its id and creation time
    fn insert(&self, record: FinalizedRecord) -> Result<StoredRecord>;

    /// Records matching the filter, ordered by creation time
    fn query(&self, filter: &RecordFilter) -> Result<Vec<StoredRecord>>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LogDocument {
    #[serde(default)]
    logs: Vec<StoredRecord>,
}

/// Record store backed by `.lumina/logs.toml`
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    repository: FileSystemRepository,
}

impl FileRecordStore {
    pub fn new(repository: FileSystemRepository) -> Self {
        FileRecordStore { repository }
    }
}

impl RecordStore for FileRecordStore {
    fn insert(&self, record: FinalizedRecord) -> Result<StoredRecord> {
        let mut document: LogDocument = self.repository.read_document(LOGS_FILE)?;

        let stored = StoredRecord::from_finalized(record, Uuid::new_v4(), Utc::now());
        document.logs.push(stored.clone());
        self.repository.write_document(LOGS_FILE, &document)?;

        tracing::info!(record_id = %stored.id, user_id = %stored.user_id, date = %stored.date, "log stored");
        Ok(stored)
    }

    fn query(&self, filter: &RecordFilter) -> Result<Vec<StoredRecord>> {
        let document: LogDocument = self.repository.read_document(LOGS_FILE)?;
        let records = filter.apply(document.logs);
        tracing::debug!(count = records.len(), "log query");
        Ok(records)
    }
}
