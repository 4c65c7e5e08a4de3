//! Resubmission of queued logs

use crate::error::Result;
use crate::infrastructure::{PendingQueue, RecordStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub submitted: usize,
    pub remaining: usize,
}

/// Try every pending record once; failures stay queued with their new error.
pub fn sync_pending<S: RecordStore + ?Sized>(store: &S, queue: &PendingQueue) -> Result<SyncReport> {
    let pending = queue.list()?;
    if pending.is_empty() {
        return Ok(SyncReport {
            submitted: 0,
            remaining: 0,
        });
    }

    let mut submitted = 0;
    let mut remaining = Vec::new();
    for mut item in pending {
        match store.insert(item.record.clone()) {
            Ok(stored) => {
                tracing::info!(record_id = %stored.id, "queued log submitted");
                submitted += 1;
            }
            Err(e) => {
                tracing::warn!(error = %e, "queued log still failing");
                item.last_error = e.to_string();
                remaining.push(item);
            }
        }
    }

    let report = SyncReport {
        submitted,
        remaining: remaining.len(),
    };
    queue.replace(remaining)?;
    Ok(report)
}
