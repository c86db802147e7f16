//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    // Create repository for this path
    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .daybook directory
    repo.initialize()?;

    // Create default config
    let config = Config::new();

    // Save config
    repo.save_config(&config)?;

    // Create the media directory up front; the backing document is
    // created lazily on the first mutation
    fs::create_dir_all(path.join(&config.media_dir))?;

    println!("Initialized daybook journal at {}", path.display());
    println!("Entries: {}", config.data_file);
    println!("Media: {}/", config.media_dir);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_structure() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("journal");

        init(&root).unwrap();

        assert!(root.join(".daybook").is_dir());
        assert!(root.join(".daybook/config.toml").is_file());
        assert!(root.join("uploads").is_dir());
        // No document until the first mutation
        assert!(!root.join("journal.json").exists());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();

        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
