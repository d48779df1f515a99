//! HTTP client for the LoveNest API.
//!
//! `ApiClient` is the sole mediator between application logic and the remote
//! server. It attaches the bearer token from the token store to every
//! request, decodes JSON bodies, and normalizes failures into
//! [`LovenestError`]. Resource methods live in the sibling modules, one per
//! server resource; none of them contain business logic.

mod auth;
mod bucketlist;
mod events;
mod journal;
mod memories;
mod wishlist;

pub use memories::MemoryUpload;

use crate::config::ClientConfig;
use lovenest_core::error::{LovenestError, Result};
use lovenest_core::token::TokenStore;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;

/// Fallback when a failure body carries no message field.
const GENERIC_FAILURE: &str = "Something went wrong";

/// Stateful handle to the LoveNest API.
///
/// Holds the transport and base address; the session token is read from the
/// token store on every call, never cached here. One shared instance per
/// process is expected.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Creates a client for the given base address.
    ///
    /// The transport keeps a cookie store so the server-side session cookie
    /// rides along with the bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying transport cannot be built.
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| LovenestError::internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            tokens,
        })
    }

    /// The token store this client reads from and writes to.
    pub fn tokens(&self) -> Arc<dyn TokenStore> {
        self.tokens.clone()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attaches the stored bearer token, if any.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.get() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Sends a prepared request and decodes the response.
    async fn dispatch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.authorize(request).send().await.map_err(|e| {
            tracing::warn!("[ApiClient] request failed: {}", e);
            LovenestError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| LovenestError::Network(e.to_string()))?;

        decode_body(status, &body)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!("[ApiClient] GET {}", path);
        self.dispatch(self.http.get(self.endpoint(path))).await
    }

    pub(crate) async fn get_json_with<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        tracing::debug!("[ApiClient] GET {}", path);
        self.dispatch(self.http.get(self.endpoint(path)).query(query))
            .await
    }

    pub(crate) async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!("[ApiClient] POST {}", path);
        self.dispatch(self.http.post(self.endpoint(path)).json(body))
            .await
    }

    /// POST with no body, used by action endpoints (fulfill, complete,
    /// logout).
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!("[ApiClient] POST {}", path);
        self.dispatch(self.http.post(self.endpoint(path))).await
    }

    pub(crate) async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!("[ApiClient] PUT {}", path);
        self.dispatch(self.http.put(self.endpoint(path)).json(body))
            .await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!("[ApiClient] DELETE {}", path);
        self.dispatch(self.http.delete(self.endpoint(path))).await
    }

    /// Sends a multipart body. The transport sets the content type and
    /// boundary itself; no JSON header is involved.
    pub(crate) async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Form,
    ) -> Result<T> {
        tracing::debug!("[ApiClient] {} {} (multipart)", method, path);
        self.dispatch(self.http.request(method, self.endpoint(path)).multipart(form))
            .await
    }
}

/// Failure body shape: `{"message": "..."}`.
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Decodes a response by status.
///
/// Non-success statuses fail with the server's message when the body
/// carries one. Success statuses with a body that is not valid JSON for the
/// expected type fail with a serialization error rather than being passed
/// through as raw text.
fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T> {
    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        return Err(LovenestError::api(status.as_u16(), message));
    }

    serde_json::from_slice(body).map_err(Into::into)
}

/// Reads a file into a multipart part, guessing the content type from the
/// extension.
pub(crate) async fn file_part(path: &Path) -> Result<Part> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime.essence_str())
        .map_err(|e| LovenestError::internal(format!("invalid content type: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lovenest_core::model::{MessageResponse, MeResponse};
    use lovenest_core::token::MemoryTokenStore;

    fn test_client() -> ApiClient {
        ApiClient::new(
            &ClientConfig::new("http://localhost:5000/api"),
            Arc::new(MemoryTokenStore::new()),
        )
        .unwrap()
    }

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let client = test_client();
        assert_eq!(
            client.endpoint("/memories/m1"),
            "http://localhost:5000/api/memories/m1"
        );
    }

    #[test]
    fn test_decode_surfaces_server_message_on_failure() {
        let body = br#"{"message": "invalid token"}"#;
        let err = decode_body::<MeResponse>(StatusCode::UNAUTHORIZED, body).unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(err.user_message(), "invalid token");
    }

    #[test]
    fn test_decode_falls_back_to_generic_message() {
        let err = decode_body::<MessageResponse>(StatusCode::BAD_GATEWAY, b"<html>").unwrap_err();

        match err {
            LovenestError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, GENERIC_FAILURE);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_decode_upload_failure_message() {
        let body = br#"{"message": "file required"}"#;
        let err = decode_body::<MessageResponse>(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert_eq!(err.user_message(), "file required");
    }

    #[test]
    fn test_decode_parses_success_body() {
        let body = br#"{"message": "ok"}"#;
        let response: MessageResponse = decode_body(StatusCode::OK, body).unwrap();
        assert_eq!(response.message.as_deref(), Some("ok"));
    }

    #[test]
    fn test_malformed_success_body_is_an_error() {
        let err = decode_body::<MeResponse>(StatusCode::OK, b"not json").unwrap_err();
        assert!(matches!(err, LovenestError::Serialization { .. }));
    }
}
