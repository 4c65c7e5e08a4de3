//! Configuration management

use crate::error::{LuminaError, Result};
use crate::infrastructure::repository::DATA_DIR;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_TREND_DAYS: u32 = 7;
pub const DEFAULT_RECENT_LOGS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub created: DateTime<Utc>,
    /// Window of the trends view, in days
    #[serde(default = "default_trend_days")]
    pub trend_days: u32,
    /// Number of logs shown on the home screen
    #[serde(default = "default_recent_logs")]
    pub recent_logs: usize,
}

fn default_trend_days() -> u32 {
    DEFAULT_TREND_DAYS
}

fn default_recent_logs() -> usize {
    DEFAULT_RECENT_LOGS
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            created: Utc::now(),
            trend_days: DEFAULT_TREND_DAYS,
            recent_logs: DEFAULT_RECENT_LOGS,
        }
    }

    /// Load config from .lumina/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DATA_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LuminaError::NotLuminaDirectory(path.to_path_buf())
            } else {
                LuminaError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| LuminaError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .lumina/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(DATA_DIR);
        let config_path = data_dir.join("config.toml");

        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| LuminaError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
