//! File system repository

use crate::error::{DaybookError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .daybook/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .daybook/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .daybook directory exists
    fn is_initialized(&self) -> bool;

    /// Create .daybook directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks DAYBOOK_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check DAYBOOK_ROOT environment variable first
        if let Ok(root_path) = std::env::var("DAYBOOK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_daybook_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(DaybookError::Config(format!(
                    "DAYBOOK_ROOT is set to '{}' but no .daybook directory found. \
                    Run 'daybook init' in that directory or unset DAYBOOK_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_daybook_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            // Try to move to parent directory
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .daybook
                    return Err(DaybookError::NotDaybookDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .daybook directory
    fn has_daybook_dir(path: &Path) -> bool {
        path.join(".daybook").is_dir()
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_daybook_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let daybook_dir = self.root.join(".daybook");

        if daybook_dir.exists() {
            return Err(DaybookError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&daybook_dir)?;
        Ok(())
    }
}

// Document and media file operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Check if the backing document exists
    pub fn document_exists(&self, filename: &str) -> bool {
        self.root.join(filename).exists()
    }

    /// Read the backing document; a missing file is not an error
    pub fn read_document(&self, filename: &str) -> Result<Option<String>> {
        let path = self.root.join(filename);

        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path).map(Some).map_err(DaybookError::Io)
    }

    /// Write the backing document using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    pub fn write_document(&self, filename: &str, contents: &str) -> Result<()> {
        let path = self.root.join(filename);
        Self::replace_file(&path, contents.as_bytes())
    }

    /// Check if a media file exists under the media directory
    pub fn media_file_exists(&self, media_dir: &str, name: &str) -> bool {
        self.root.join(media_dir).join(name).exists()
    }

    /// Read a media file's bytes
    pub fn read_media_file(&self, media_dir: &str, name: &str) -> Result<Vec<u8>> {
        let path = self.root.join(media_dir).join(name);

        if !path.exists() {
            return Err(DaybookError::MediaNotFound(name.to_string()));
        }

        fs::read(&path).map_err(DaybookError::Io)
    }

    /// Write a media file, creating the media directory if absent.
    /// Uses the same temp-then-rename replace as the document, so a
    /// failed write leaves no partial file behind.
    pub fn write_media_file(&self, media_dir: &str, name: &str, bytes: &[u8]) -> Result<()> {
        let dir = self.root.join(media_dir);
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        Self::replace_file(&dir.join(name), bytes)
    }

    fn replace_file(path: &Path, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.daybook-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("document"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, bytes)?;

        if path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}
