//! Account, couple and invite types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<DateTime<Utc>>,
    /// Whether an invite has been accepted and a partner account linked.
    #[serde(default)]
    pub is_linked: bool,
    /// Populated couple record, present once the couple is set up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub couple_id: Option<Couple>,
}

/// The second account of the couple, as returned by `/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    #[serde(rename = "_id")]
    pub id: String,
    pub display_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

/// Shared couple record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Couple {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub couple_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anniversary: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner1_nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner2_nickname: Option<String>,
}

/// Abbreviated account reference embedded in resources (`uploadedBy`,
/// `createdBy`, `authorId`, `userId`). The server populates only a subset of
/// the account fields here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /auth/register` and `POST /auth/accept-invite/:token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
}

/// Partial update for `PUT /auth/update`. Absent fields are left unchanged
/// by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Partial update for `PUT /auth/couple`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoupleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub couple_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anniversary: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner1_nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner2_nickname: Option<String>,
}

/// Body for `POST /auth/invite`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteRequest {
    pub email: String,
}

/// Envelope for the credential-issuing endpoints (login, register,
/// invite acceptance). This is the only response shape that can carry a
/// fresh session token; resource responses never do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Envelope for `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<Partner>,
}

/// Envelope for `PUT /auth/update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Envelope for `PUT /auth/couple`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoupleResponse {
    pub couple: Couple,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Envelope for `POST /auth/invite`. When the invite mail could not be
/// delivered the server still returns the link for manual sharing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteResponse {
    #[serde(default)]
    pub email_sent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Who sent a pending invite.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteSender {
    pub display_name: String,
    pub email: String,
}

/// Envelope for `GET /auth/invite/:token`, shown before acceptance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitePreview {
    pub inviter: InviteSender,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_server_shape() {
        let json = r#"{
            "_id": "64f0c0ffee",
            "email": "a@b.com",
            "displayName": "Alex",
            "isLinked": true,
            "coupleId": {
                "_id": "64f0c0ffef",
                "coupleName": "A & B",
                "anniversary": "2020-02-14T00:00:00.000Z"
            }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "64f0c0ffee");
        assert_eq!(user.display_name, "Alex");
        assert!(user.is_linked);
        assert_eq!(
            user.couple_id.unwrap().couple_name.as_deref(),
            Some("A & B")
        );
    }

    #[test]
    fn test_profile_update_skips_absent_fields() {
        let update = ProfileUpdate {
            nickname: Some("Honey".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"nickname": "Honey"}));
    }

    #[test]
    fn test_auth_response_token_is_optional() {
        let json = r#"{"user": {"_id": "1", "email": "a@b.com", "displayName": "A"}}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert!(response.token.is_none());
    }
}
