//! Shared journal types.

use super::{Pagination, user::UserRef};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Mood attached to a journal entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mood {
    Happy,
    Love,
    Neutral,
    Sad,
    Custom,
}

/// One journal entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    /// Free-form emoji when `mood` is `custom`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_scale: Option<u8>,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<UserRef>,
}

/// Create/update payload for journal entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalDraft {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_scale: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<String>>,
}

/// Filters for `GET /journal`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JournalQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Account id to restrict entries to one author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Envelope for `GET /journal`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalPage {
    #[serde(default)]
    pub entries: Vec<JournalEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Envelope for single-entry journal endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntryResponse {
    pub entry: JournalEntry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_with_custom_mood() {
        let json = r#"{
            "_id": "j1",
            "title": "Picnic day",
            "content": "We found the perfect spot.",
            "mood": "custom",
            "moodEmoji": "🧺",
            "date": "2026-07-12T00:00:00.000Z",
            "authorId": {"_id": "u1", "displayName": "Alex"}
        }"#;

        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.mood, Some(Mood::Custom));
        assert_eq!(entry.mood_emoji.as_deref(), Some("🧺"));
        assert!(entry.attachments.is_empty());
    }
}
