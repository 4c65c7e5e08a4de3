//! Config management use case

use crate::error::{LuminaError, Result};
use crate::infrastructure::{Config, FileSystemRepository, Repository};

pub const CONFIG_KEYS: &str = "trend_days, recent_logs, created";

/// Service for managing data directory configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

fn parse_positive(key: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(LuminaError::Config(format!(
            "Invalid value for {}: '{}'. Expected a positive whole number",
            key, value
        ))),
    }
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "trend_days" => Ok(config.trend_days.to_string()),
            "recent_logs" => Ok(config.recent_logs.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(LuminaError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, CONFIG_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "trend_days" => {
                let days = parse_positive(key, value)?;
                config.trend_days = u32::try_from(days).map_err(|_| {
                    LuminaError::Config(format!("Invalid value for trend_days: '{}'", value))
                })?;
            }
            "recent_logs" => {
                config.recent_logs = parse_positive(key, value)?;
            }
            "created" => {
                return Err(LuminaError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(LuminaError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: trend_days, recent_logs",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
