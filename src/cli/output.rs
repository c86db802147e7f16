//! Output formatting utilities

use crate::domain::{JournalEntry, JournalStats, MediaRef};

/// Format a list of entries for display
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {}  {}\n",
            entry.date,
            entry.id,
            first_line(&entry.content)
        ));
    }
    output
}

/// Format a single entry for display
pub fn format_entry(entry: &JournalEntry) -> String {
    let mut output = String::new();
    output.push_str(&format!("Id:      {}\n", entry.id));
    output.push_str(&format!("Date:    {}\n", entry.date));

    match entry.mood {
        Some(mood) => output.push_str(&format!("Mood:    {}\n", mood)),
        None => output.push_str("Mood:    -\n"),
    }

    if entry.tags.is_empty() {
        output.push_str("Tags:    -\n");
    } else {
        let tags: Vec<String> = entry.tags.iter().map(|t| format!("#{}", t)).collect();
        output.push_str(&format!("Tags:    {}\n", tags.join(" ")));
    }

    for media in &entry.media {
        output.push_str(&format!("Media:   {}", format_media_ref(media)));
    }

    output.push_str(&format!("Created: {}\n", entry.created_at));
    output.push_str(&format!("Updated: {}\n", entry.updated_at));
    output.push('\n');
    output.push_str(&entry.content);
    output.push('\n');
    output
}

/// Format a media descriptor for display
pub fn format_media_ref(media: &MediaRef) -> String {
    format!(
        "{}  {}  {} ({} bytes)\n",
        media.kind, media.url, media.name, media.size
    )
}

/// Format the statistics report for display
pub fn format_stats(stats: &JournalStats) -> String {
    let mut output = String::new();
    output.push_str(&format!("Entries:          {}\n", stats.total_entries));
    output.push_str(&format!("Days:             {}\n", stats.total_days));
    output.push_str(&format!(
        "Entries per day:  {}\n",
        stats.average_entries_per_day
    ));

    if !stats.most_used_tags.is_empty() {
        output.push_str("Top tags:\n");
        for tag in &stats.most_used_tags {
            output.push_str(&format!("  #{}  {}\n", tag.tag, tag.count));
        }
    }

    if !stats.mood_distribution.is_empty() {
        output.push_str("Moods:\n");
        for (mood, count) in &stats.mood_distribution {
            output.push_str(&format!("  {}  {}\n", mood, count));
        }
    }

    output
}

fn first_line(content: &str) -> &str {
    content.lines().next().unwrap_or("")
}
