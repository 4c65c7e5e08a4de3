//! Application layer - Use cases and orchestration

pub mod auth;
pub mod history;
pub mod home;
pub mod init;
pub mod log_entry;
pub mod manage_config;
pub mod preferences;
pub mod sync;
pub mod trends;
pub mod wizard;

pub use auth::{require_identity, AuthService};
pub use history::list_history;
pub use home::{home, HomeSummary};
pub use log_entry::{Decision, EntryPresenter, LogEntryService, LogOutcome, LogScript};
pub use manage_config::ConfigService;
pub use preferences::PreferencesService;
pub use sync::{sync_pending, SyncReport};
pub use trends::{trends, TrendsView};
pub use wizard::{EntryWizard, WizardContext};
