//! Profile storage

use crate::domain::Profile;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const PROFILES_FILE: &str = "profiles.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
struct ProfileDocument {
    #[serde(default)]
    profiles: Vec<Profile>,
}

/// Profiles keyed by identity id, in `.lumina/profiles.toml`
#[derive(Debug, Clone)]
pub struct ProfileStore {
    repository: FileSystemRepository,
}

impl ProfileStore {
    pub fn new(repository: FileSystemRepository) -> Self {
        ProfileStore { repository }
    }

    pub fn get(&self, id: Uuid) -> Result<Option<Profile>> {
        let document: ProfileDocument = self.repository.read_document(PROFILES_FILE)?;
        Ok(document.profiles.into_iter().find(|p| p.id == id))
    }

    /// Insert or replace the profile with the same id, stamping `updated_at`
    pub fn upsert(&self, profile: &Profile) -> Result<Profile> {
        let mut document: ProfileDocument = self.repository.read_document(PROFILES_FILE)?;

        let mut saved = profile.clone();
        saved.updated_at = Utc::now();

        match document.profiles.iter_mut().find(|p| p.id == saved.id) {
            Some(existing) => *existing = saved.clone(),
            None => document.profiles.push(saved.clone()),
        }

        self.repository.write_document(PROFILES_FILE, &document)?;
        tracing::debug!(user_id = %saved.id, "profile saved");
        Ok(saved)
    }
}
