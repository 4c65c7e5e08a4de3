//! User preferences

use crate::domain::{Identity, SleepGoal};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-identity preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub sleep_goal: SleepGoal,
    #[serde(default = "default_notifications")]
    pub notifications_enabled: bool,
    pub updated_at: DateTime<Utc>,
}

fn default_notifications() -> bool {
    true
}

impl Profile {
    /// Initial profile for an identity that has none yet
    pub fn for_identity(identity: &Identity) -> Self {
        Profile {
            id: identity.id,
            full_name: identity.display_name.clone().unwrap_or_default(),
            sleep_goal: SleepGoal::default(),
            notifications_enabled: default_notifications(),
            updated_at: Utc::now(),
        }
    }
}
