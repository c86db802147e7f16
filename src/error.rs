//! Error types for daybook

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for daybook application
#[derive(Debug, Error)]
pub enum DaybookError {
    #[error("Not a daybook directory: {0}")]
    NotDaybookDirectory(PathBuf),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Media not found: {0}")]
    MediaNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Journal document error: {0}")]
    Document(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DaybookError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DaybookError::NotDaybookDirectory(_) => 2,
            DaybookError::Validation(_) => 3,
            DaybookError::EntryNotFound(_) | DaybookError::MediaNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DaybookError::NotDaybookDirectory(path) => {
                format!(
                    "Not a daybook directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'daybook init' in this directory to create a new journal\n\
                    • Navigate to an existing daybook directory\n\
                    • Set DAYBOOK_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            DaybookError::EntryNotFound(id) => {
                format!(
                    "Entry not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'daybook list' to see existing entries and their ids\n\
                    • Check the id for typos (ids are case-sensitive)",
                    id
                )
            }
            DaybookError::MediaNotFound(name) => {
                format!(
                    "Media not found: '{}'\n\n\
                    Suggestions:\n\
                    • The name must be the stored name returned by 'daybook upload'\n\
                    • Use 'daybook show <entry-id>' to see the media attached to an entry",
                    name
                )
            }
            DaybookError::Validation(msg) => {
                if msg.contains("mood") {
                    format!(
                        "{}\n\n\
                        Valid moods: happy, sad, neutral, excited, calm, stressed\n\
                        Example: daybook add --content \"...\" --mood calm",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DaybookError
pub type Result<T> = std::result::Result<T, DaybookError>;
