//! Entry store use cases

use crate::domain::entry::now_timestamp;
use crate::domain::{stats, EntryDraft, EntryPatch, JournalEntry, JournalStats};
use crate::error::{DaybookError, Result};
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use uuid::Uuid;

/// Authoritative keeper of all journal entries.
///
/// The in-memory collection is the single source of truth; it is
/// serialized wholesale to the backing JSON document after every
/// mutation. A missing document means an empty collection.
pub struct EntryStore {
    repository: FileSystemRepository,
    data_file: String,
    entries: Vec<JournalEntry>,
}

impl EntryStore {
    /// Open the store, parsing the backing document fully into memory
    pub fn open(repository: FileSystemRepository) -> Result<Self> {
        let config = repository.load_config()?;
        let entries = match repository.read_document(&config.data_file)? {
            Some(contents) => serde_json::from_str(&contents)?,
            None => Vec::new(),
        };

        Ok(EntryStore {
            repository,
            data_file: config.data_file,
            entries,
        })
    }

    /// All entries in insertion order (callers wanting display order
    /// should use `list`)
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// All entries ordered by date descending.
    ///
    /// The date field is compared as a string, not as a parsed
    /// calendar date; callers must supply comparably formatted dates.
    pub fn list(&self) -> Vec<JournalEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    /// Get the entry with the given id
    pub fn get(&self, id: &str) -> Result<&JournalEntry> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| DaybookError::EntryNotFound(id.to_string()))
    }

    /// Create a new entry from a draft, assigning a fresh id when the
    /// draft carries none. A caller-supplied id that already exists is
    /// rejected before any mutation.
    pub fn create(&mut self, draft: EntryDraft) -> Result<JournalEntry> {
        let id = match draft.id {
            Some(id) => {
                if self.entries.iter().any(|e| e.id == id) {
                    return Err(DaybookError::Validation(format!(
                        "Duplicate entry id: '{}'",
                        id
                    )));
                }
                id
            }
            None => Uuid::new_v4().to_string(),
        };

        let now = now_timestamp();
        let entry = JournalEntry {
            id,
            date: draft.date,
            content: draft.content,
            media: draft.media,
            mood: draft.mood,
            tags: draft.tags,
            created_at: now.clone(),
            updated_at: now,
        };

        self.entries.push(entry.clone());
        self.persist()?;
        Ok(entry)
    }

    /// Merge a sparse patch into the entry with the given id.
    ///
    /// Only fields present in the patch replace stored values; id and
    /// createdAt are preserved and updatedAt is refreshed regardless
    /// of the payload.
    pub fn update(&mut self, id: &str, patch: &EntryPatch) -> Result<JournalEntry> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| DaybookError::EntryNotFound(id.to_string()))?;

        patch.apply_to(entry);
        entry.updated_at = now_timestamp();
        let merged = entry.clone();

        self.persist()?;
        Ok(merged)
    }

    /// Remove the entry with the given id.
    /// The entry's media files are not touched.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| DaybookError::EntryNotFound(id.to_string()))?;

        self.entries.remove(index);
        self.persist()
    }

    /// Aggregate statistics over the current collection, recomputed
    /// on every call
    pub fn stats(&self) -> JournalStats {
        stats::compute(&self.entries)
    }

    fn persist(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.entries)?;
        self.repository.write_document(&self.data_file, &contents)
    }
}
