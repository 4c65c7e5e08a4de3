//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod identity;
pub mod pending;
pub mod profile_store;
pub mod record_store;
pub mod repository;

pub use config::Config;
pub use identity::{AuthEvent, AuthListener, FileIdentityService, IdentityService, SubscriptionId};
pub use pending::{PendingQueue, PendingRecord};
pub use profile_store::ProfileStore;
pub use record_store::{DateRange, FileRecordStore, RecordFilter, RecordStore, SortOrder};
pub use repository::{FileSystemRepository, Repository};
