//! Aggregate statistics over the entry collection

use crate::domain::{JournalEntry, Mood};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One tag and its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}

/// Derived, non-authoritative summary of the entry collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalStats {
    pub total_entries: u64,
    pub total_days: u64,
    pub average_entries_per_day: f64,
    pub most_used_tags: Vec<TagCount>,
    pub mood_distribution: BTreeMap<Mood, u64>,
}

/// How many tags the report keeps
const TOP_TAGS: usize = 10;

/// Compute statistics by a full scan of the collection.
///
/// Day bucketing uses the calendar-day prefix of each entry's date
/// string; the average is rounded to two decimal places and defined
/// as 0 when there are no days. Tag ties break by first-seen order.
pub fn compute(entries: &[JournalEntry]) -> JournalStats {
    let total_entries = entries.len() as u64;

    let mut days: Vec<&str> = entries.iter().map(|e| e.day_key()).collect();
    days.sort_unstable();
    days.dedup();
    let total_days = days.len() as u64;

    let average_entries_per_day = if total_days == 0 {
        0.0
    } else {
        let avg = total_entries as f64 / total_days as f64;
        (avg * 100.0).round() / 100.0
    };

    // Count tags, remembering the order each tag was first seen
    let mut tag_counts: HashMap<&str, (u64, usize)> = HashMap::new();
    let mut seen = 0usize;
    for entry in entries {
        for tag in &entry.tags {
            let slot = tag_counts.entry(tag.as_str()).or_insert_with(|| {
                seen += 1;
                (0, seen)
            });
            slot.0 += 1;
        }
    }

    let mut ranked: Vec<(&str, u64, usize)> = tag_counts
        .into_iter()
        .map(|(tag, (count, first_seen))| (tag, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(TOP_TAGS);

    let most_used_tags = ranked
        .into_iter()
        .map(|(tag, count, _)| TagCount {
            tag: tag.to_string(),
            count,
        })
        .collect();

    let mut mood_distribution = BTreeMap::new();
    for entry in entries {
        if let Some(mood) = entry.mood {
            *mood_distribution.entry(mood).or_insert(0) += 1;
        }
    }

    JournalStats {
        total_entries,
        total_days,
        average_entries_per_day,
        most_used_tags,
        mood_distribution,
    }
}
