//! Domain layer - Business logic and domain models

pub mod date_ref;
pub mod draft;
pub mod energy;
pub mod intervention;
pub mod mood;
pub mod profile;
pub mod record;
pub mod sleep;
pub mod trends;

pub use date_ref::{resolve_date, DateReference};
pub use draft::{DraftEntry, WizardStep};
pub use energy::EnergyLevel;
pub use intervention::{Intervention, InterventionSet};
pub use mood::Mood;
pub use profile::Profile;
pub use record::{FinalizedRecord, Identity, StoredRecord};
pub use sleep::{SleepGoal, SleepHours};
pub use trends::{Correlation, Impact, TrendPoint, TrendReport};
