//! Media store use cases

use crate::domain::{MediaKind, MediaRef};
use crate::error::{DaybookError, Result};
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use uuid::Uuid;

/// Keeper of uploaded binary files under the managed media directory.
///
/// Acceptance is unconditional: no deduplication, no content hashing,
/// no size limits. Stored files are never deleted by entry operations.
pub struct MediaStore {
    repository: FileSystemRepository,
    media_dir: String,
}

impl MediaStore {
    /// Open the store against the configured media directory
    pub fn open(repository: FileSystemRepository) -> Result<Self> {
        let config = repository.load_config()?;
        Ok(MediaStore {
            repository,
            media_dir: config.media_dir,
        })
    }

    /// Store uploaded bytes under a fresh unique name, preserving the
    /// original extension as a hint to consumers. Returns the
    /// descriptor callers embed in an entry's media list.
    pub fn store(&self, original_name: &str, mime: &str, bytes: &[u8]) -> Result<MediaRef> {
        if original_name.is_empty() {
            return Err(DaybookError::Validation("No filename provided".to_string()));
        }

        let id = Uuid::new_v4().to_string();
        let stored_name = match original_name.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => format!("{}.{}", id, ext),
            _ => id.clone(),
        };

        self.repository
            .write_media_file(&self.media_dir, &stored_name, bytes)?;

        Ok(MediaRef {
            id,
            kind: MediaKind::from_mime(mime),
            url: format!("/{}/{}", self.media_dir, stored_name),
            name: original_name.to_string(),
            size: bytes.len() as u64,
            thumbnail: None,
        })
    }

    /// Read back a stored file's bytes by its storage name.
    ///
    /// The media directory is flat; a name with path separators can
    /// never have been produced by `store`, so it is rejected outright.
    pub fn retrieve(&self, stored_name: &str) -> Result<Vec<u8>> {
        if stored_name.contains('/') || stored_name.contains('\\') {
            return Err(DaybookError::Validation(format!(
                "Invalid media name: '{}'",
                stored_name
            )));
        }

        self.repository.read_media_file(&self.media_dir, stored_name)
    }

    /// Storage name component of a locator produced by `store`
    pub fn storage_name(url: &str) -> &str {
        url.rsplit('/').next().unwrap_or(url)
    }

    /// The configured media directory, relative to the journal root
    pub fn media_dir(&self) -> &str {
        &self.media_dir
    }
}

/// Guess a MIME type from a filename extension.
///
/// The upload path normally receives a declared MIME type; this is the
/// fallback for callers that only have a local file.
pub fn guess_mime(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "m4a" => "audio/mp4",
        _ => "application/octet-stream",
    }
}
