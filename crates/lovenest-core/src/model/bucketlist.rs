//! Bucket list types.

use super::user::UserRef;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Whether a goal belongs to one partner or to the couple.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BucketlistKind {
    Personal,
    Shared,
}

/// One bucket-list goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketlistItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: BucketlistKind,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserRef>,
}

/// Completion counters the server aggregates for the full list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BucketlistStats {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub completed: u32,
    #[serde(default)]
    pub progress: f32,
}

/// Create/update payload for bucket-list goals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketlistDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: BucketlistKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
}

/// Envelope for bucket-list list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketlistPage {
    #[serde(default)]
    pub items: Vec<BucketlistItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<BucketlistStats>,
}

/// Envelope for single-item bucket-list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketlistItemResponse {
    pub item: BucketlistItem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_uses_type_field() {
        let json = r#"{"_id": "b1", "title": "See the northern lights", "type": "shared"}"#;
        let item: BucketlistItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, BucketlistKind::Shared);

        let draft = BucketlistDraft {
            title: "Learn to dance".to_string(),
            description: None,
            kind: BucketlistKind::Personal,
            target_date: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["type"], "personal");
    }
}
