//! Account, couple and invite endpoints.

use super::ApiClient;
use lovenest_core::auth::AuthApi;
use lovenest_core::error::Result;
use lovenest_core::model::{
    AuthResponse, CoupleResponse, CoupleUpdate, InvitePreview, InviteRequest, InviteResponse,
    LoginRequest, MeResponse, MessageResponse, ProfileUpdate, RegisterRequest, UserResponse,
};

impl ApiClient {
    /// `POST /auth/register`. Persists the issued token before returning.
    pub async fn register(&self, registration: &RegisterRequest) -> Result<AuthResponse> {
        let response: AuthResponse = self.post_json("/auth/register", registration).await?;
        self.persist_token(&response)?;
        Ok(response)
    }

    /// `POST /auth/login`. Persists the issued token before returning.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse> {
        let response: AuthResponse = self.post_json("/auth/login", credentials).await?;
        self.persist_token(&response)?;
        Ok(response)
    }

    /// `POST /auth/logout`.
    ///
    /// The stored token is cleared once the request settles, whether or not
    /// the server call succeeded; only then is the outcome reported.
    pub async fn logout(&self) -> Result<MessageResponse> {
        let outcome = self.post_empty::<MessageResponse>("/auth/logout").await;
        self.tokens.clear()?;
        outcome
    }

    /// `GET /auth/me`
    pub async fn me(&self) -> Result<MeResponse> {
        self.get_json("/auth/me").await
    }

    /// `PUT /auth/update`
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserResponse> {
        self.put_json("/auth/update", update).await
    }

    /// `POST /auth/invite` - invite a partner by email.
    pub async fn send_invite(&self, email: &str) -> Result<InviteResponse> {
        let request = InviteRequest {
            email: email.to_string(),
        };
        self.post_json("/auth/invite", &request).await
    }

    /// `GET /auth/invite/:token` - look up who sent an invite before
    /// accepting it.
    pub async fn check_invite(&self, invite_token: &str) -> Result<InvitePreview> {
        self.get_json(&format!("/auth/invite/{}", invite_token))
            .await
    }

    /// `POST /auth/accept-invite/:token`. Registers the second account of
    /// the couple; persists the issued token before returning.
    pub async fn accept_invite(
        &self,
        invite_token: &str,
        registration: &RegisterRequest,
    ) -> Result<AuthResponse> {
        let response: AuthResponse = self
            .post_json(
                &format!("/auth/accept-invite/{}", invite_token),
                registration,
            )
            .await?;
        self.persist_token(&response)?;
        Ok(response)
    }

    /// `PUT /auth/couple`
    pub async fn update_couple(&self, update: &CoupleUpdate) -> Result<CoupleResponse> {
        self.put_json("/auth/couple", update).await
    }

    /// Writes the token carried by a credential-issuing response into the
    /// token store. Runs even when the caller discards the response.
    fn persist_token(&self, response: &AuthResponse) -> Result<()> {
        if let Some(token) = &response.token {
            self.tokens.set(token)?;
            tracing::debug!("[ApiClient] session token updated");
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AuthApi for ApiClient {
    async fn register(&self, registration: &RegisterRequest) -> Result<AuthResponse> {
        ApiClient::register(self, registration).await
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse> {
        ApiClient::login(self, credentials).await
    }

    async fn logout(&self) -> Result<MessageResponse> {
        ApiClient::logout(self).await
    }

    async fn me(&self) -> Result<MeResponse> {
        ApiClient::me(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use lovenest_core::model::User;
    use lovenest_core::token::{MemoryTokenStore, TokenStore};
    use std::sync::Arc;

    fn auth_response(token: Option<&str>) -> AuthResponse {
        AuthResponse {
            user: User {
                id: "u1".to_string(),
                email: "a@b.com".to_string(),
                display_name: "Alex".to_string(),
                nickname: None,
                avatar: None,
                birthday: None,
                is_linked: false,
                couple_id: None,
            },
            token: token.map(str::to_string),
            message: None,
        }
    }

    #[test]
    fn test_persist_token_writes_the_store() {
        let tokens = Arc::new(MemoryTokenStore::new());
        let client =
            ApiClient::new(&ClientConfig::default(), tokens.clone()).unwrap();

        client.persist_token(&auth_response(Some("T1"))).unwrap();
        assert_eq!(tokens.get(), Some("T1".to_string()));
    }

    #[test]
    fn test_persist_token_keeps_store_when_no_token_returned() {
        let tokens = Arc::new(MemoryTokenStore::new());
        let client =
            ApiClient::new(&ClientConfig::default(), tokens.clone()).unwrap();

        tokens.set("existing").unwrap();
        client.persist_token(&auth_response(None)).unwrap();
        assert_eq!(tokens.get(), Some("existing".to_string()));
    }
}
