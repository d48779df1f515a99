//! Client configuration.
//!
//! The base address is resolved once at startup, from the environment or an
//! explicit value; the client never re-reads it.

use std::env;

const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Connection settings for [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base address of the API, without a trailing slash.
    pub base_url: String,
}

impl ClientConfig {
    /// Creates a config with an explicit base address.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Resolves the base address from `LOVENEST_API_URL`, falling back to
    /// the local development server.
    pub fn from_env() -> Self {
        let base_url = match env::var("LOVENEST_API_URL") {
            Ok(url) => {
                tracing::debug!("[ClientConfig] Using LOVENEST_API_URL: {}", url);
                url
            }
            Err(_) => DEFAULT_API_URL.to_string(),
        };
        Self::new(base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ClientConfig::new("https://api.example.com/v1/");
        assert_eq!(config.base_url, "https://api.example.com/v1");
    }

    #[test]
    fn test_default_points_at_local_server() {
        assert_eq!(ClientConfig::default().base_url, "http://localhost:5000/api");
    }
}
