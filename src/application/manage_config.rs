//! Config management use case

use crate::error::{DaybookError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
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
            "data_file" => Ok(config.data_file.clone()),
            "media_dir" => Ok(config.media_dir.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(DaybookError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: data_file, media_dir, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "data_file" => {
                config.data_file = value.to_string();
            }
            "media_dir" => {
                config.media_dir = value.to_string();
            }
            "created" => {
                return Err(DaybookError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DaybookError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: data_file, media_dir",
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
