//! Authentication API seam.
//!
//! The session context is written against this trait rather than the
//! concrete HTTP client, so it can be driven by a test double.

use crate::error::Result;
use crate::model::{AuthResponse, LoginRequest, MeResponse, MessageResponse, RegisterRequest};

/// The subset of the server API that establishes and tears down a session.
///
/// Implementations that issue credentials (login, register) are responsible
/// for persisting the returned token in the token store before returning,
/// and `logout` must clear the store after the request settles whether or
/// not the server call succeeded.
#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/register`
    async fn register(&self, registration: &RegisterRequest) -> Result<AuthResponse>;

    /// `POST /auth/login`
    async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse>;

    /// `POST /auth/logout`
    async fn logout(&self) -> Result<MessageResponse>;

    /// `GET /auth/me`
    async fn me(&self) -> Result<MeResponse>;
}
