//! History use case

use crate::domain::{Identity, StoredRecord};
use crate::error::{LuminaError, Result};
use crate::infrastructure::{DateRange, RecordFilter, RecordStore};
use chrono::NaiveDate;

/// List a user's logs, newest first, with optional inclusive date bounds.
pub fn list_history<S: RecordStore + ?Sized>(
    store: &S,
    identity: &Identity,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    limit: Option<usize>,
) -> Result<Vec<StoredRecord>> {
    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            return Err(LuminaError::InvalidInput(format!(
                "Start date {} is after end date {}",
                from, to
            )));
        }
    }

    let filter = RecordFilter::for_user(identity.id)
        .with_dates(DateRange::new(from, to))
        .limit(limit);
    store.query(&filter)
}
