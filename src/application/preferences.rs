//! Profile preferences use case

use crate::domain::{Identity, Profile, SleepGoal};
use crate::error::{LuminaError, Result};
use crate::infrastructure::ProfileStore;

pub const PREFERENCE_KEYS: &str = "full_name, sleep_goal, notifications";

fn parse_toggle(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(LuminaError::Config(format!(
            "Invalid value for notifications: '{}'. Use on or off",
            value
        ))),
    }
}

/// Service for reading and updating the signed-in user's profile
pub struct PreferencesService {
    profiles: ProfileStore,
}

impl PreferencesService {
    pub fn new(profiles: ProfileStore) -> Self {
        PreferencesService { profiles }
    }

    /// The identity's profile, created with defaults on first access
    pub fn load(&self, identity: &Identity) -> Result<Profile> {
        match self.profiles.get(identity.id)? {
            Some(profile) => Ok(profile),
            None => {
                tracing::debug!(user_id = %identity.id, "creating profile");
                self.profiles.upsert(&Profile::for_identity(identity))
            }
        }
    }

    pub fn get(&self, identity: &Identity, key: &str) -> Result<String> {
        let profile = self.load(identity)?;

        match key {
            "full_name" => Ok(profile.full_name),
            "sleep_goal" => Ok(profile.sleep_goal.hours().to_string()),
            "notifications" => Ok(if profile.notifications_enabled { "on" } else { "off" }.to_string()),
            _ => Err(LuminaError::Config(format!(
                "Unknown preference: '{}'. Valid keys are: {}",
                key, PREFERENCE_KEYS
            ))),
        }
    }

    /// Update one preference and return the saved profile.
    /// The sleep goal snaps to the nearest half hour within 4 to 12 hours.
    pub fn set(&self, identity: &Identity, key: &str, value: &str) -> Result<Profile> {
        let mut profile = self.load(identity)?;

        match key {
            "full_name" => profile.full_name = value.trim().to_string(),
            "sleep_goal" => {
                let hours: f64 = value.trim().parse().map_err(|_| {
                    LuminaError::Config(format!(
                        "Invalid value for sleep_goal: '{}'. Expected hours, e.g. 7.5",
                        value
                    ))
                })?;
                profile.sleep_goal = SleepGoal::new(hours);
            }
            "notifications" => profile.notifications_enabled = parse_toggle(value)?,
            _ => {
                return Err(LuminaError::Config(format!(
                    "Unknown preference: '{}'. Valid keys are: {}",
                    key, PREFERENCE_KEYS
                )))
            }
        }

        self.profiles.upsert(&profile)
    }
}
