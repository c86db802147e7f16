//! Configuration management

use crate::error::{DaybookError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_data_file() -> String {
    "journal.json".to_string()
}

fn default_media_dir() -> String {
    "uploads".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backing document, relative to the journal root
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// Directory for uploaded media, relative to the journal root
    #[serde(default = "default_media_dir")]
    pub media_dir: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            data_file: default_data_file(),
            media_dir: default_media_dir(),
            created: Utc::now(),
        }
    }

    /// Load config from .daybook/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".daybook").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DaybookError::NotDaybookDirectory(path.to_path_buf())
            } else {
                DaybookError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DaybookError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .daybook/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let daybook_dir = path.join(".daybook");
        let config_path = daybook_dir.join("config.toml");

        // Ensure .daybook directory exists
        if !daybook_dir.exists() {
            fs::create_dir(&daybook_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| DaybookError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_defaults() {
        let config = Config::new();
        assert_eq!(config.data_file, "journal.json");
        assert_eq!(config.media_dir, "uploads");
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new();

        // Save config
        config.save_to_dir(temp.path()).unwrap();

        // Check .daybook directory was created
        assert!(temp.path().join(".daybook").exists());
        assert!(temp.path().join(".daybook/config.toml").exists());

        // Load config
        let loaded = Config::load_from_dir(temp.path()).unwrap();

        // Verify it matches
        assert_eq!(loaded.data_file, config.data_file);
        assert_eq!(loaded.media_dir, config.media_dir);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        // Try to load config from directory without .daybook
        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            DaybookError::NotDaybookDirectory(_) => {}
            _ => panic!("Expected NotDaybookDirectory error"),
        }
    }

    #[test]
    fn test_load_fills_missing_keys_with_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".daybook")).unwrap();
        fs::write(
            temp.path().join(".daybook/config.toml"),
            "created = \"2025-01-01T00:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.data_file, "journal.json");
        assert_eq!(loaded.media_dir, "uploads");
    }
}
