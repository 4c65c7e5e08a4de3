//! Daily log use case
//!
//! Runs one wizard session through a presenter, submits the result and
//! queues it locally when the store refuses it.

use crate::application::wizard::{EntryWizard, WizardContext};
use crate::domain::{EnergyLevel, Identity, Intervention, Mood, StoredRecord};
use crate::error::{LuminaError, Result};
use crate::infrastructure::{FileRecordStore, PendingQueue, RecordStore};
use chrono::NaiveDate;

/// What the user chose at the end of the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Submit,
    Abandon,
}

/// Drives a wizard session on behalf of the user.
///
/// Returning `Submit` means the wizard was brought to the summary step.
pub trait EntryPresenter {
    fn collect<S: RecordStore + ?Sized>(
        &mut self,
        wizard: &mut EntryWizard<'_, S>,
    ) -> Result<Decision>;
}

/// Non-interactive answers, applied in step order
#[derive(Debug, Clone, PartialEq)]
pub struct LogScript {
    pub mood: Mood,
    pub energy: Option<EnergyLevel>,
    pub sleep: Option<f64>,
    /// Each occurrence toggles; listing an item twice deselects it
    pub interventions: Vec<Intervention>,
    pub notes: Option<String>,
}

impl EntryPresenter for LogScript {
    fn collect<S: RecordStore + ?Sized>(
        &mut self,
        wizard: &mut EntryWizard<'_, S>,
    ) -> Result<Decision> {
        wizard.select_mood(self.mood);

        if let Some(energy) = self.energy {
            wizard.set_energy(energy);
        }
        if let Some(sleep) = self.sleep {
            wizard.set_sleep(sleep);
        }
        wizard.advance();

        for item in &self.interventions {
            wizard.toggle_intervention(*item);
        }
        wizard.advance();

        if let Some(notes) = &self.notes {
            wizard.set_notes(notes);
        }
        wizard.advance();

        Ok(Decision::Submit)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogOutcome {
    Saved(StoredRecord),
    /// Submission failed; the record waits in the pending queue
    Queued { error: String },
    Abandoned,
}

pub struct LogEntryService<S: RecordStore = FileRecordStore> {
    store: S,
    pending: PendingQueue,
}

impl<S: RecordStore> LogEntryService<S> {
    pub fn new(store: S, pending: PendingQueue) -> Self {
        LogEntryService { store, pending }
    }

    pub fn execute<P: EntryPresenter>(
        &self,
        identity: Identity,
        entry_date: NaiveDate,
        presenter: &mut P,
    ) -> Result<LogOutcome> {
        let context = WizardContext {
            identity,
            entry_date,
        };
        let mut wizard = EntryWizard::new(context, &self.store);

        if presenter.collect(&mut wizard)? == Decision::Abandon {
            tracing::info!(step = wizard.step().number(), "log abandoned");
            return Ok(LogOutcome::Abandoned);
        }

        match wizard.complete() {
            Ok(stored) => Ok(LogOutcome::Saved(stored)),
            Err(LuminaError::Submission(error)) => {
                if let Some(record) = wizard.pending_record() {
                    self.pending.enqueue(record, &error)?;
                }
                Ok(LogOutcome::Queued { error })
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use crate::infrastructure::{FileSystemRepository, RecordFilter};
    use std::fs;
    use tempfile::TempDir;

    fn setup(temp: &TempDir) -> (FileSystemRepository, LogEntryService) {
        let repo = init(temp.path()).unwrap();
        let service = LogEntryService::new(
            FileRecordStore::new(repo.clone()),
            PendingQueue::new(repo.clone()),
        );
        (repo, service)
    }

    fn script() -> LogScript {
        LogScript {
            mood: Mood::Good,
            energy: Some(EnergyLevel::Peak),
            sleep: Some(6.5),
            interventions: vec![
                Intervention::Exercise,
                Intervention::Reading,
                Intervention::Exercise,
            ],
            notes: Some("felt good".to_string()),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 24).unwrap()
    }

    struct Quitter;

    impl EntryPresenter for Quitter {
        fn collect<S: RecordStore + ?Sized>(
            &mut self,
            wizard: &mut EntryWizard<'_, S>,
        ) -> Result<Decision> {
            wizard.select_mood(Mood::Bad);
            Ok(Decision::Abandon)
        }
    }

    #[test]
    fn test_script_saves_expected_record() {
        let temp = TempDir::new().unwrap();
        let (repo, service) = setup(&temp);
        let identity = Identity::anonymous();

        let outcome = service
            .execute(identity.clone(), date(), &mut script())
            .unwrap();
        let LogOutcome::Saved(record) = outcome else {
            panic!("Expected Saved, got {:?}", outcome);
        };
        assert_eq!(record.mood, Mood::Good);
        assert_eq!(record.energy_level, EnergyLevel::Peak);
        assert_eq!(record.sleep_hours.hours(), 6.5);
        assert_eq!(record.interventions, vec![Intervention::Reading]);
        assert_eq!(record.notes.as_deref(), Some("felt good"));
        assert_eq!(record.date, date());

        let stored = FileRecordStore::new(repo)
            .query(&RecordFilter::for_user(identity.id))
            .unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn test_abandoned_log_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let (repo, service) = setup(&temp);
        let identity = Identity::anonymous();

        let outcome = service.execute(identity.clone(), date(), &mut Quitter).unwrap();
        assert_eq!(outcome, LogOutcome::Abandoned);
        assert!(FileRecordStore::new(repo.clone())
            .query(&RecordFilter::for_user(identity.id))
            .unwrap()
            .is_empty());
        assert!(PendingQueue::new(repo).list().unwrap().is_empty());
    }

    #[test]
    fn test_failed_submission_is_queued() {
        let temp = TempDir::new().unwrap();
        let (repo, service) = setup(&temp);
        // A directory where the log file should be makes every insert fail
        fs::create_dir(repo.data_path("logs.toml")).unwrap();

        let outcome = service
            .execute(Identity::anonymous(), date(), &mut script())
            .unwrap();
        assert!(matches!(outcome, LogOutcome::Queued { .. }));

        let pending = PendingQueue::new(repo).list().unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].record.notes.as_deref(), Some("felt good"));
        assert_eq!(pending[0].record.interventions, vec![Intervention::Reading]);
    }
}
