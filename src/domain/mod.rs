//! Domain layer - Business logic and domain models

pub mod entry;
pub mod patch;
pub mod stats;

pub use entry::{JournalEntry, MediaKind, MediaRef, Mood};
pub use patch::{EntryDraft, EntryPatch};
pub use stats::{JournalStats, TagCount};
