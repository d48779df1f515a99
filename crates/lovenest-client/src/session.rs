//! In-memory session state.
//!
//! `SessionContext` is the one authoritative snapshot of "who is logged in
//! and whether they have a linked partner". It is constructed explicitly and
//! passed down by the caller; there is no process-global instance. The token
//! store stays the source of truth for whether a session is active: the
//! identity held here is only ever a cache of the last server answer.

use lovenest_core::auth::AuthApi;
use lovenest_core::error::Result;
use lovenest_core::model::{LoginRequest, Partner, RegisterRequest, User};
use lovenest_core::token::TokenStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The current user plus the linked partner, if the invite has been
/// accepted.
#[derive(Debug, Clone)]
pub struct SessionIdentity {
    pub user: User,
    pub partner: Option<Partner>,
}

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// `initialize` has not run yet.
    Uninitialized,
    Anonymous,
    Authenticated,
}

/// Holds the authenticated identity and drives the session lifecycle.
///
/// Failure policy: only a user-initiated logout destroys the stored token.
/// A failed identity refresh (including at startup) downgrades the context
/// to anonymous but leaves the token in place, since the failure may be
/// transient network trouble rather than an invalid credential.
pub struct SessionContext {
    api: Arc<dyn AuthApi>,
    tokens: Arc<dyn TokenStore>,
    identity: RwLock<Option<SessionIdentity>>,
    state: RwLock<SessionState>,
}

impl SessionContext {
    /// Creates an uninitialized context.
    pub fn new(api: Arc<dyn AuthApi>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            api,
            tokens,
            identity: RwLock::new(None),
            state: RwLock::new(SessionState::Uninitialized),
        }
    }

    /// Startup transition: resolves the stored token (if any) into an
    /// authenticated identity.
    ///
    /// A missing token means anonymous. A failed `me()` call also means
    /// anonymous, but the token is retained.
    pub async fn initialize(&self) {
        if self.tokens.get().is_none() {
            self.become_anonymous().await;
            return;
        }

        match self.api.me().await {
            Ok(me) => {
                self.become_authenticated(SessionIdentity {
                    user: me.user,
                    partner: me.partner,
                })
                .await;
            }
            Err(e) => {
                tracing::warn!("[Session] startup identity check failed: {}", e);
                self.become_anonymous().await;
            }
        }
    }

    /// Logs in and loads the full identity.
    ///
    /// The token is persisted by the API client as part of the login call.
    /// The follow-up `me()` picks up the partner record; if it fails, the
    /// identity from the login response stands (the login itself
    /// succeeded).
    pub async fn login(&self, credentials: &LoginRequest) -> Result<SessionIdentity> {
        let response = self.api.login(credentials).await?;

        let identity = match self.api.me().await {
            Ok(me) => SessionIdentity {
                user: me.user,
                partner: me.partner,
            },
            Err(e) => {
                tracing::warn!("[Session] identity refresh after login failed: {}", e);
                SessionIdentity {
                    user: response.user,
                    partner: None,
                }
            }
        };

        self.become_authenticated(identity.clone()).await;
        Ok(identity)
    }

    /// Registers a new account. The new account has no partner until an
    /// invite is accepted.
    pub async fn register(&self, registration: &RegisterRequest) -> Result<SessionIdentity> {
        let response = self.api.register(registration).await?;
        let identity = SessionIdentity {
            user: response.user,
            partner: None,
        };
        self.become_authenticated(identity.clone()).await;
        Ok(identity)
    }

    /// Ends the session.
    ///
    /// The server call is best-effort: its failure is logged and swallowed,
    /// and the token store ends up cleared either way.
    pub async fn logout(&self) {
        if let Err(e) = self.api.logout().await {
            tracing::warn!("[Session] logout request failed: {}", e);
        }
        if let Err(e) = self.tokens.clear() {
            tracing::warn!("[Session] failed to clear token store: {}", e);
        }
        self.become_anonymous().await;
    }

    /// Re-queries the server for the current identity.
    ///
    /// On failure the identity is cleared (an unauthenticated view is a
    /// valid, displayable state) but the token is left untouched.
    pub async fn refresh(&self) {
        match self.api.me().await {
            Ok(me) => {
                self.become_authenticated(SessionIdentity {
                    user: me.user,
                    partner: me.partner,
                })
                .await;
            }
            Err(e) => {
                tracing::warn!("[Session] identity refresh failed: {}", e);
                self.become_anonymous().await;
            }
        }
    }

    pub async fn state(&self) -> SessionState {
        *self.state.read().await
    }

    pub async fn identity(&self) -> Option<SessionIdentity> {
        self.identity.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state().await == SessionState::Authenticated
    }

    async fn become_authenticated(&self, identity: SessionIdentity) {
        *self.identity.write().await = Some(identity);
        *self.state.write().await = SessionState::Authenticated;
    }

    async fn become_anonymous(&self) {
        *self.identity.write().await = None;
        *self.state.write().await = SessionState::Anonymous;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lovenest_core::error::LovenestError;
    use lovenest_core::model::{AuthResponse, MeResponse, MessageResponse};
    use lovenest_core::token::MemoryTokenStore;
    use std::sync::Mutex;

    fn test_user(id: &str) -> User {
        User {
            id: id.to_string(),
            email: format!("{}@example.com", id),
            display_name: id.to_string(),
            nickname: None,
            avatar: None,
            birthday: None,
            is_linked: false,
            couple_id: None,
        }
    }

    fn test_partner() -> Partner {
        Partner {
            id: "p1".to_string(),
            display_name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            avatar: None,
            nickname: None,
        }
    }

    /// Scripted stand-in for the HTTP client. Mimics the real client's
    /// token side effects: login persists the issued token, logout clears
    /// the store after the request settles.
    struct FakeAuthApi {
        tokens: Arc<MemoryTokenStore>,
        login_token: Option<String>,
        me_results: Mutex<Vec<Result<MeResponse>>>,
        logout_result: Mutex<Option<Result<MessageResponse>>>,
    }

    impl FakeAuthApi {
        fn new(tokens: Arc<MemoryTokenStore>) -> Self {
            Self {
                tokens,
                login_token: Some("T1".to_string()),
                me_results: Mutex::new(Vec::new()),
                logout_result: Mutex::new(None),
            }
        }

        fn push_me(&self, result: Result<MeResponse>) {
            self.me_results.lock().unwrap().push(result);
        }

        fn set_logout(&self, result: Result<MessageResponse>) {
            *self.logout_result.lock().unwrap() = Some(result);
        }
    }

    #[async_trait::async_trait]
    impl AuthApi for FakeAuthApi {
        async fn register(&self, registration: &RegisterRequest) -> Result<AuthResponse> {
            if let Some(token) = &self.login_token {
                self.tokens.set(token)?;
            }
            Ok(AuthResponse {
                user: test_user(&registration.display_name),
                token: self.login_token.clone(),
                message: None,
            })
        }

        async fn login(&self, _credentials: &LoginRequest) -> Result<AuthResponse> {
            if let Some(token) = &self.login_token {
                self.tokens.set(token)?;
            }
            Ok(AuthResponse {
                user: test_user("alex"),
                token: self.login_token.clone(),
                message: None,
            })
        }

        async fn logout(&self) -> Result<MessageResponse> {
            let outcome = self
                .logout_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(MessageResponse::default()));
            self.tokens.clear()?;
            outcome
        }

        async fn me(&self) -> Result<MeResponse> {
            let mut results = self.me_results.lock().unwrap();
            if results.is_empty() {
                return Err(LovenestError::network("no scripted response"));
            }
            results.remove(0)
        }
    }

    fn context(api: FakeAuthApi, tokens: Arc<MemoryTokenStore>) -> SessionContext {
        SessionContext::new(Arc::new(api), tokens)
    }

    #[tokio::test]
    async fn test_initialize_without_token_is_anonymous() {
        let tokens = Arc::new(MemoryTokenStore::new());
        let ctx = context(FakeAuthApi::new(tokens.clone()), tokens);

        ctx.initialize().await;

        assert_eq!(ctx.state().await, SessionState::Anonymous);
        assert!(ctx.identity().await.is_none());
    }

    #[tokio::test]
    async fn test_initialize_with_token_authenticates() {
        let tokens = Arc::new(MemoryTokenStore::new());
        tokens.set("T1").unwrap();

        let api = FakeAuthApi::new(tokens.clone());
        api.push_me(Ok(MeResponse {
            user: test_user("alex"),
            partner: Some(test_partner()),
        }));
        let ctx = context(api, tokens);

        ctx.initialize().await;

        assert_eq!(ctx.state().await, SessionState::Authenticated);
        let identity = ctx.identity().await.unwrap();
        assert_eq!(identity.user.id, "alex");
        assert_eq!(identity.partner.unwrap().id, "p1");
    }

    #[tokio::test]
    async fn test_failed_startup_check_keeps_the_token() {
        let tokens = Arc::new(MemoryTokenStore::new());
        tokens.set("T1").unwrap();

        let api = FakeAuthApi::new(tokens.clone());
        api.push_me(Err(LovenestError::network("connection refused")));
        let ctx = context(api, tokens.clone());

        ctx.initialize().await;

        assert_eq!(ctx.state().await, SessionState::Anonymous);
        assert_eq!(tokens.get(), Some("T1".to_string()));
    }

    #[tokio::test]
    async fn test_login_stores_token_and_authenticates() {
        let tokens = Arc::new(MemoryTokenStore::new());
        let api = FakeAuthApi::new(tokens.clone());
        api.push_me(Ok(MeResponse {
            user: test_user("alex"),
            partner: Some(test_partner()),
        }));
        let ctx = context(api, tokens.clone());

        let credentials = LoginRequest {
            email: "a@b.com".to_string(),
            password: "pw".to_string(),
        };
        let identity = ctx.login(&credentials).await.unwrap();

        assert_eq!(tokens.get(), Some("T1".to_string()));
        assert_eq!(ctx.state().await, SessionState::Authenticated);
        assert!(identity.partner.is_some());
    }

    #[tokio::test]
    async fn test_login_survives_failed_identity_refresh() {
        let tokens = Arc::new(MemoryTokenStore::new());
        let api = FakeAuthApi::new(tokens.clone());
        // no scripted me() response, so the follow-up refresh fails
        let ctx = context(api, tokens.clone());

        let credentials = LoginRequest {
            email: "a@b.com".to_string(),
            password: "pw".to_string(),
        };
        let identity = ctx.login(&credentials).await.unwrap();

        assert_eq!(ctx.state().await, SessionState::Authenticated);
        assert_eq!(identity.user.id, "alex");
        assert!(identity.partner.is_none());
    }

    #[tokio::test]
    async fn test_refresh_failure_clears_identity_but_not_token() {
        let tokens = Arc::new(MemoryTokenStore::new());
        tokens.set("T1").unwrap();

        let api = FakeAuthApi::new(tokens.clone());
        api.push_me(Ok(MeResponse {
            user: test_user("alex"),
            partner: None,
        }));
        api.push_me(Err(LovenestError::api(401, "invalid token")));
        let ctx = context(api, tokens.clone());

        ctx.initialize().await;
        assert_eq!(ctx.state().await, SessionState::Authenticated);

        ctx.refresh().await;

        assert_eq!(ctx.state().await, SessionState::Anonymous);
        assert!(ctx.identity().await.is_none());
        assert_eq!(tokens.get(), Some("T1".to_string()));
    }

    #[tokio::test]
    async fn test_logout_clears_token_even_when_server_call_fails() {
        let tokens = Arc::new(MemoryTokenStore::new());
        tokens.set("T1").unwrap();

        let api = FakeAuthApi::new(tokens.clone());
        api.set_logout(Err(LovenestError::network("offline")));
        api.push_me(Ok(MeResponse {
            user: test_user("alex"),
            partner: None,
        }));
        let ctx = context(api, tokens.clone());

        ctx.initialize().await;
        ctx.logout().await;

        assert_eq!(ctx.state().await, SessionState::Anonymous);
        assert!(ctx.identity().await.is_none());
        assert_eq!(tokens.get(), None);
    }
}
