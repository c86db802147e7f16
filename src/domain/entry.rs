//! Journal entry and media models

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mood recorded on an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Neutral,
    Excited,
    Calm,
    Stressed,
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "neutral" => Ok(Mood::Neutral),
            "excited" => Ok(Mood::Excited),
            "calm" => Ok(Mood::Calm),
            "stressed" => Ok(Mood::Stressed),
            _ => Err(format!(
                "Invalid mood: '{}'. Valid moods are: happy, sad, neutral, excited, calm, stressed",
                s
            )),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Neutral => "neutral",
            Mood::Excited => "excited",
            Mood::Calm => "calm",
            Mood::Stressed => "stressed",
        };
        write!(f, "{}", s)
    }
}

/// Media classification derived from a declared MIME type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    /// Classify a MIME type: image/* and video/* map to their kind,
    /// everything else counts as audio.
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            MediaKind::Image
        } else if mime.starts_with("video/") {
            MediaKind::Video
        } else {
            MediaKind::Audio
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
        };
        write!(f, "{}", s)
    }
}

/// Descriptor for an uploaded file, embedded in an entry's media list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    pub name: String,
    pub size: u64,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// One journaled record for a given date/time.
///
/// The serialized shape of this struct is the durable document
/// contract: `id, date, content, media, mood, tags, createdAt,
/// updatedAt`, with `media` holding `MediaRef` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: String,
    pub content: String,
    #[serde(default)]
    pub media: Vec<MediaRef>,
    #[serde(default)]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl JournalEntry {
    /// Calendar-day prefix of the date field (portion before any
    /// time-of-day separator). The date string is not parsed.
    pub fn day_key(&self) -> &str {
        self.date
            .split(['T', ' '])
            .next()
            .unwrap_or(self.date.as_str())
    }
}

/// Current time as an RFC 3339 UTC string.
///
/// Fixed millisecond precision so timestamps compare chronologically
/// as strings.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with_date(date: &str) -> JournalEntry {
        JournalEntry {
            id: "e1".to_string(),
            date: date.to_string(),
            content: String::new(),
            media: vec![],
            mood: None,
            tags: vec![],
            created_at: now_timestamp(),
            updated_at: now_timestamp(),
        }
    }

    #[test]
    fn test_mood_from_str() {
        assert_eq!(Mood::from_str("happy").unwrap(), Mood::Happy);
        assert_eq!(Mood::from_str("STRESSED").unwrap(), Mood::Stressed);
        assert!(Mood::from_str("angry").is_err());
    }

    #[test]
    fn test_mood_display_round_trip() {
        for mood in [
            Mood::Happy,
            Mood::Sad,
            Mood::Neutral,
            Mood::Excited,
            Mood::Calm,
            Mood::Stressed,
        ] {
            assert_eq!(Mood::from_str(&mood.to_string()).unwrap(), mood);
        }
    }

    #[test]
    fn test_media_kind_from_mime() {
        assert_eq!(MediaKind::from_mime("image/jpeg"), MediaKind::Image);
        assert_eq!(MediaKind::from_mime("video/mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_mime("audio/mpeg"), MediaKind::Audio);
        // Anything that is neither image nor video counts as audio
        assert_eq!(
            MediaKind::from_mime("application/octet-stream"),
            MediaKind::Audio
        );
    }

    #[test]
    fn test_day_key_with_time_separator() {
        assert_eq!(entry_with_date("2024-01-01T09:30:00").day_key(), "2024-01-01");
        assert_eq!(entry_with_date("2024-01-01 09:30").day_key(), "2024-01-01");
        assert_eq!(entry_with_date("2024-01-01").day_key(), "2024-01-01");
    }

    #[test]
    fn test_entry_serializes_with_camel_case_timestamps() {
        let entry = entry_with_date("2025-03-01");
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_media_ref_serializes_kind_as_type() {
        let media = MediaRef {
            id: "m1".to_string(),
            kind: MediaKind::Image,
            url: "/uploads/m1.jpg".to_string(),
            name: "photo.JPG".to_string(),
            size: 42,
            thumbnail: None,
        };
        let json = serde_json::to_value(&media).unwrap();
        assert_eq!(json["type"], "image");
        assert_eq!(json["size"], 42);
    }

    #[test]
    fn test_entry_deserializes_with_missing_optional_fields() {
        let json = r#"{
            "id": "e1",
            "date": "2025-01-01",
            "content": "hello",
            "createdAt": "2025-01-01T00:00:00.000Z",
            "updatedAt": "2025-01-01T00:00:00.000Z"
        }"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert!(entry.media.is_empty());
        assert!(entry.mood.is_none());
        assert!(entry.tags.is_empty());
    }

    #[test]
    fn test_now_timestamp_orders_as_string() {
        let a = now_timestamp();
        let b = now_timestamp();
        assert!(a <= b);
    }
}
