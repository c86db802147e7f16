//! Create and update payloads

use crate::domain::{JournalEntry, MediaRef, Mood};
use serde::{Deserialize, Deserializer, Serialize};

/// Payload for creating an entry.
///
/// The store assigns a fresh id when none is given and always assigns
/// the timestamps itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryDraft {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub media: Vec<MediaRef>,
    #[serde(default)]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Sparse update payload: only fields present in the payload replace
/// the stored values, so "field omitted" and "field set to empty" stay
/// distinct. `mood` is doubly wrapped: the outer `Option` is
/// presence, the inner one allows an explicit null to clear the mood.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<MediaRef>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub mood: Option<Option<Mood>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Marks a field as present even when its value is null.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl EntryPatch {
    /// True when the payload carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.content.is_none()
            && self.media.is_none()
            && self.mood.is_none()
            && self.tags.is_none()
    }

    /// Apply the present fields onto an entry, leaving the rest as-is.
    /// Does not touch id or timestamps; the store owns those.
    pub fn apply_to(&self, entry: &mut JournalEntry) {
        if let Some(date) = &self.date {
            entry.date = date.clone();
        }
        if let Some(content) = &self.content {
            entry.content = content.clone();
        }
        if let Some(media) = &self.media {
            entry.media = media.clone();
        }
        if let Some(mood) = &self.mood {
            entry.mood = *mood;
        }
        if let Some(tags) = &self.tags {
            entry.tags = tags.clone();
        }
    }
}
