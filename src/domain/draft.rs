//! In-progress daily log entry and its step sequence

use crate::domain::{EnergyLevel, FinalizedRecord, Intervention, InterventionSet, Mood, SleepHours};
use chrono::NaiveDate;
use std::fmt;
use uuid::Uuid;

/// The five steps of the entry flow, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum WizardStep {
    #[default]
    MoodSelect = 1,
    EnergySleep = 2,
    Interventions = 3,
    Notes = 4,
    Summary = 5,
}

impl WizardStep {
    pub const COUNT: u8 = 5;

    pub fn number(self) -> u8 {
        self as u8
    }

    /// The following step; `Summary` is the ceiling.
    pub fn next(self) -> Self {
        match self {
            WizardStep::MoodSelect => WizardStep::EnergySleep,
            WizardStep::EnergySleep => WizardStep::Interventions,
            WizardStep::Interventions => WizardStep::Notes,
            WizardStep::Notes | WizardStep::Summary => WizardStep::Summary,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::MoodSelect => "How are you feeling?",
            WizardStep::EnergySleep => "Energy & Sleep",
            WizardStep::Interventions => "Interventions",
            WizardStep::Notes => "Notes",
            WizardStep::Summary => "Quick Summary",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}/{}", self.number(), Self::COUNT)
    }
}

/// Transient, unsaved log entry owned by one wizard session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftEntry {
    step: WizardStep,
    mood: Option<Mood>,
    energy: EnergyLevel,
    sleep: SleepHours,
    interventions: InterventionSet,
    notes: Option<String>,
}

impl DraftEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn energy(&self) -> EnergyLevel {
        self.energy
    }

    pub fn sleep(&self) -> SleepHours {
        self.sleep
    }

    pub fn interventions(&self) -> &InterventionSet {
        &self.interventions
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Record the mood. On the first step this also moves to step 2.
    pub fn select_mood(&mut self, mood: Mood) {
        self.mood = Some(mood);
        if self.step == WizardStep::MoodSelect {
            self.step = WizardStep::EnergySleep;
        }
    }

    pub fn set_energy(&mut self, energy: EnergyLevel) {
        self.energy = energy;
    }

    pub fn set_sleep(&mut self, hours: f64) {
        self.sleep = SleepHours::new(hours);
    }

    pub fn toggle_intervention(&mut self, item: Intervention) -> bool {
        self.interventions.toggle(item)
    }

    /// Blank text clears the notes.
    pub fn set_notes(&mut self, text: &str) {
        self.notes = if text.trim().is_empty() {
            None
        } else {
            Some(text.to_string())
        };
    }

    /// Move forward one step. Leaving step 1 requires a mood, which is only
    /// ever set through `select_mood`, so this never moves past it.
    pub fn advance(&mut self) -> WizardStep {
        if self.step != WizardStep::MoodSelect || self.mood.is_some() {
            self.step = self.step.next();
        }
        self.step
    }

    /// Snapshot the draft for submission. `None` until a mood is chosen.
    pub fn finalize(&self, user_id: Uuid, date: NaiveDate) -> Option<FinalizedRecord> {
        let mood = self.mood?;
        Some(FinalizedRecord {
            user_id,
            date,
            mood,
            energy_level: self.energy,
            sleep_hours: self.sleep,
            interventions: self.interventions.to_vec(),
            notes: self.notes.clone(),
        })
    }
}
