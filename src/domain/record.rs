//! Identities and daily log records

use crate::domain::{EnergyLevel, Intervention, Mood, SleepHours};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated or anonymous actor performing a logging session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub anonymous: bool,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Create a fresh anonymous (demo) identity
    pub fn anonymous() -> Self {
        Identity {
            id: Uuid::new_v4(),
            email: None,
            display_name: None,
            anonymous: true,
            created_at: Utc::now(),
        }
    }

    /// Create a fresh identity bound to an email address
    pub fn with_email(email: &str, display_name: Option<String>) -> Self {
        Identity {
            id: Uuid::new_v4(),
            email: Some(email.to_string()),
            display_name,
            anonymous: false,
            created_at: Utc::now(),
        }
    }

    /// Short human label: display name, then email, then "anonymous"
    pub fn describe(&self) -> String {
        match (&self.display_name, &self.email) {
            (Some(name), Some(email)) => format!("{} <{}>", name, email),
            (Some(name), None) => name.clone(),
            (None, Some(email)) => email.clone(),
            (None, None) => format!("anonymous ({})", self.id),
        }
    }
}

/// A completed draft, ready for submission to a record store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizedRecord {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub mood: Mood,
    pub energy_level: EnergyLevel,
    pub sleep_hours: SleepHours,
    #[serde(default)]
    pub interventions: Vec<Intervention>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A record accepted by the store, with its assigned id and creation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub mood: Mood,
    pub energy_level: EnergyLevel,
    pub sleep_hours: SleepHours,
    #[serde(default)]
    pub interventions: Vec<Intervention>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl StoredRecord {
    pub fn from_finalized(record: FinalizedRecord, id: Uuid, created_at: DateTime<Utc>) -> Self {
        StoredRecord {
            id,
            user_id: record.user_id,
            date: record.date,
            mood: record.mood,
            energy_level: record.energy_level,
            sleep_hours: record.sleep_hours,
            interventions: record.interventions,
            notes: record.notes,
            created_at,
        }
    }
}
