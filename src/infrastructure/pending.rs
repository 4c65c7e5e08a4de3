//! Local queue of records whose submission failed

use crate::domain::FinalizedRecord;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const PENDING_FILE: &str = "pending.toml";

/// A finalized record waiting to be resubmitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingRecord {
    pub queued_at: DateTime<Utc>,
    pub last_error: String,
    pub record: FinalizedRecord,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PendingDocument {
    #[serde(default)]
    pending: Vec<PendingRecord>,
}

/// Pending submissions in `.lumina/pending.toml`
#[derive(Debug, Clone)]
pub struct PendingQueue {
    repository: FileSystemRepository,
}

impl PendingQueue {
    pub fn new(repository: FileSystemRepository) -> Self {
        PendingQueue { repository }
    }

    pub fn enqueue(&self, record: FinalizedRecord, error: &str) -> Result<()> {
        let mut document: PendingDocument = self.repository.read_document(PENDING_FILE)?;
        document.pending.push(PendingRecord {
            queued_at: Utc::now(),
            last_error: error.to_string(),
            record,
        });
        self.repository.write_document(PENDING_FILE, &document)?;
        tracing::warn!(queued = document.pending.len(), "log queued for retry");
        Ok(())
    }

    pub fn list(&self) -> Result<Vec<PendingRecord>> {
        let document: PendingDocument = self.repository.read_document(PENDING_FILE)?;
        Ok(document.pending)
    }

    /// Replace the queue contents
    pub fn replace(&self, pending: Vec<PendingRecord>) -> Result<()> {
        self.repository
            .write_document(PENDING_FILE, &PendingDocument { pending })
    }
}
