//! Wishlist types.

use super::user::UserRef;
use serde::{Deserialize, Serialize};

/// How much the owner wants the item.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WishPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// One wishlist entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub priority: WishPriority,
    #[serde(default)]
    pub is_fulfilled: bool,
    /// Id of the account that fulfilled the wish.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfilled_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserRef>,
}

/// Create/update payload for wishlist items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub priority: WishPriority,
}

/// Envelope for wishlist list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistPage {
    #[serde(default)]
    pub items: Vec<WishlistItem>,
}

/// Envelope for single-item wishlist endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistItemResponse {
    pub item: WishlistItem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_defaults_to_medium() {
        let json = r#"{"_id": "w1", "title": "Telescope"}"#;
        let item: WishlistItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.priority, WishPriority::Medium);
        assert!(!item.is_fulfilled);
    }
}
