//! Entry wizard: the five-step daily log flow
//!
//! The wizard owns one [`DraftEntry`] for the length of a session and submits
//! it to a [`RecordStore`] exactly once. A failed submission keeps the draft
//! and the summary step so `complete` can be called again.

use crate::domain::{
    DraftEntry, EnergyLevel, FinalizedRecord, Identity, Intervention, Mood, StoredRecord, WizardStep,
};
use crate::error::{LuminaError, Result};
use crate::infrastructure::RecordStore;
use chrono::NaiveDate;

/// Session-scoped inputs the wizard does not collect itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardContext {
    pub identity: Identity,
    /// Calendar day the entry describes
    pub entry_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
enum WizardState {
    Editing,
    Complete(StoredRecord),
}

pub struct EntryWizard<'s, S: RecordStore + ?Sized> {
    context: WizardContext,
    store: &'s S,
    draft: DraftEntry,
    state: WizardState,
}

impl<'s, S: RecordStore + ?Sized> EntryWizard<'s, S> {
    pub fn new(context: WizardContext, store: &'s S) -> Self {
        tracing::debug!(user_id = %context.identity.id, date = %context.entry_date, "wizard started");
        EntryWizard {
            context,
            store,
            draft: DraftEntry::new(),
            state: WizardState::Editing,
        }
    }

    pub fn context(&self) -> &WizardContext {
        &self.context
    }

    pub fn draft(&self) -> &DraftEntry {
        &self.draft
    }

    pub fn step(&self) -> WizardStep {
        self.draft.step()
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, WizardState::Complete(_))
    }

    /// The stored record, once completion succeeded
    pub fn completed_record(&self) -> Option<&StoredRecord> {
        match &self.state {
            WizardState::Complete(record) => Some(record),
            WizardState::Editing => None,
        }
    }

    /// Apply a draft mutation unless the session already finished
    fn edit(&mut self, change: impl FnOnce(&mut DraftEntry)) {
        if self.is_complete() {
            tracing::debug!("ignoring edit after completion");
            return;
        }
        let before = self.draft.step();
        change(&mut self.draft);
        if self.draft.step() != before {
            tracing::debug!(from = before.number(), to = self.draft.step().number(), "wizard step");
        }
    }

    pub fn select_mood(&mut self, mood: Mood) {
        self.edit(|draft| draft.select_mood(mood));
    }

    pub fn set_energy(&mut self, energy: EnergyLevel) {
        self.edit(|draft| draft.set_energy(energy));
    }

    pub fn set_sleep(&mut self, hours: f64) {
        self.edit(|draft| draft.set_sleep(hours));
    }

    pub fn toggle_intervention(&mut self, item: Intervention) {
        self.edit(|draft| {
            draft.toggle_intervention(item);
        });
    }

    pub fn set_notes(&mut self, text: &str) {
        self.edit(|draft| draft.set_notes(text));
    }

    pub fn advance(&mut self) -> WizardStep {
        self.edit(|draft| {
            draft.advance();
        });
        self.draft.step()
    }

    /// Submit the draft from the summary step.
    ///
    /// # Errors
    ///
    /// - `Wizard` if not at the summary step or already completed
    /// - `Submission` if the store rejects the record; the draft is kept
    pub fn complete(&mut self) -> Result<StoredRecord> {
        if self.is_complete() {
            return Err(LuminaError::Wizard(
                "This log has already been completed".to_string(),
            ));
        }
        if self.draft.step() != WizardStep::Summary {
            return Err(LuminaError::Wizard(format!(
                "Cannot complete the log from {}",
                self.draft.step()
            )));
        }

        let record = self
            .draft
            .finalize(self.context.identity.id, self.context.entry_date)
            .ok_or_else(|| LuminaError::Wizard("No mood selected".to_string()))?;

        let stored = self.store.insert(record).map_err(|e| {
            tracing::warn!(error = %e, "log submission failed; draft kept");
            LuminaError::Submission(e.to_string())
        })?;
        self.state = WizardState::Complete(stored.clone());
        Ok(stored)
    }

    /// The record `complete` would submit, for queueing after a failure
    pub fn pending_record(&self) -> Option<FinalizedRecord> {
        self.draft
            .finalize(self.context.identity.id, self.context.entry_date)
    }
}
