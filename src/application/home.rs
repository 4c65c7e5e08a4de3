//! Home screen use case

use crate::domain::{Identity, Profile, StoredRecord};
use crate::error::Result;
use crate::infrastructure::{DateRange, RecordFilter, RecordStore};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct HomeSummary {
    pub name: String,
    pub today: NaiveDate,
    /// Latest log describing today
    pub today_log: Option<StoredRecord>,
    pub recent: Vec<StoredRecord>,
}

/// Name to greet: profile name, display name, email local part, then "there"
pub fn greeting_name(identity: &Identity, profile: &Profile) -> String {
    let non_blank = |s: &str| {
        let trimmed = s.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };

    non_blank(&profile.full_name)
        .or_else(|| identity.display_name.as_deref().and_then(non_blank))
        .or_else(|| {
            identity
                .email
                .as_deref()
                .and_then(|email| email.split('@').next())
                .and_then(non_blank)
        })
        .unwrap_or_else(|| "there".to_string())
}

pub fn home<S: RecordStore + ?Sized>(
    store: &S,
    identity: &Identity,
    profile: &Profile,
    today: NaiveDate,
    recent_count: usize,
) -> Result<HomeSummary> {
    let recent = store.query(&RecordFilter::for_user(identity.id).limit(Some(recent_count)))?;

    let today_filter = RecordFilter::for_user(identity.id)
        .with_dates(DateRange::new(Some(today), Some(today)))
        .limit(Some(1));
    let today_log = store.query(&today_filter)?.into_iter().next();

    Ok(HomeSummary {
        name: greeting_name(identity, profile),
        today,
        today_log,
        recent,
    })
}
