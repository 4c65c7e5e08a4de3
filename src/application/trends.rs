//! Trends use case

use crate::domain::{Identity, SleepGoal, TrendReport};
use crate::error::Result;
use crate::infrastructure::{RecordFilter, RecordStore, SortOrder};
use chrono::{DateTime, Duration, Utc};

/// Trend report plus the context it is read against
#[derive(Debug, Clone, PartialEq)]
pub struct TrendsView {
    pub days: u32,
    pub sleep_goal: SleepGoal,
    pub report: TrendReport,
}

/// Build the trend report over logs created in the last `days` days.
pub fn trends<S: RecordStore + ?Sized>(
    store: &S,
    identity: &Identity,
    days: u32,
    sleep_goal: SleepGoal,
    now: DateTime<Utc>,
) -> Result<TrendsView> {
    let mut filter = RecordFilter::for_user(identity.id).ordered(SortOrder::Ascending);
    // A window reaching past the calendar start has no lower bound
    if let Some(since) = Duration::try_days(i64::from(days)).and_then(|d| now.checked_sub_signed(d)) {
        filter = filter.created_after(since);
    }
    let records = store.query(&filter)?;

    Ok(TrendsView {
        days,
        sleep_goal,
        report: TrendReport::from_records(&records),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use crate::domain::{EnergyLevel, FinalizedRecord, Mood, SleepHours};
    use crate::infrastructure::FileRecordStore;
    use chrono::Local;
    use tempfile::TempDir;

    #[test]
    fn test_trends_ascending_within_window() {
        let temp = TempDir::new().unwrap();
        let store = FileRecordStore::new(init(temp.path()).unwrap());
        let identity = Identity::anonymous();

        for (mood, sleep) in [(Mood::Bad, 5.0), (Mood::Great, 8.5)] {
            store
                .insert(FinalizedRecord {
                    user_id: identity.id,
                    date: Local::now().date_naive(),
                    mood,
                    energy_level: EnergyLevel::Moderate,
                    sleep_hours: SleepHours::new(sleep),
                    interventions: Vec::new(),
                    notes: None,
                })
                .unwrap();
        }

        let view = trends(&store, &identity, 7, SleepGoal::default(), Utc::now()).unwrap();
        let moods: Vec<Mood> = view.report.points.iter().map(|p| p.mood).collect();
        assert_eq!(moods, vec![Mood::Bad, Mood::Great]);

        // A month later both logs have left the window
        let later = Utc::now() + Duration::days(30);
        let view = trends(&store, &identity, 7, SleepGoal::default(), later).unwrap();
        assert!(view.report.is_empty());
    }

    #[test]
    fn test_huge_window_includes_everything() {
        let temp = TempDir::new().unwrap();
        let store = FileRecordStore::new(init(temp.path()).unwrap());
        let identity = Identity::anonymous();
        store
            .insert(FinalizedRecord {
                user_id: identity.id,
                date: Local::now().date_naive(),
                mood: Mood::Okay,
                energy_level: EnergyLevel::Moderate,
                sleep_hours: SleepHours::default(),
                interventions: Vec::new(),
                notes: None,
            })
            .unwrap();

        let view = trends(&store, &identity, u32::MAX, SleepGoal::default(), Utc::now()).unwrap();
        assert_eq!(view.days, u32::MAX);
        assert_eq!(view.report.points.len(), 1);
    }
}
