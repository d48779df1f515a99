//! Session token storage.
//!
//! Defines the interface for persisting the one bearer token that proves an
//! active session. The store is the single source of truth for "is a session
//! active": the API client reads it on every request and never keeps its own
//! copy.

use crate::error::Result;
use std::sync::Mutex;

/// Durable storage for the session token.
///
/// Exactly one token (or none) exists per installation. Implementations are
/// format-agnostic: whatever string the server issued is stored as-is.
///
/// # Security Note
///
/// Implementations must never log the token value.
pub trait TokenStore: Send + Sync {
    /// Returns the stored token, or `None` when no token exists or the
    /// persistence medium is unavailable.
    fn get(&self) -> Option<String>;

    /// Overwrites the stored token unconditionally.
    fn set(&self, token: &str) -> Result<()>;

    /// Removes the stored token. Clearing an already-empty store is not an
    /// error.
    fn clear(&self) -> Result<()>;
}

/// In-memory token store.
///
/// Used when no durable storage is available, and as a test double. The
/// token lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set(&self, token: &str) -> Result<()> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_returns_last_token() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);

        store.set("first").unwrap();
        store.set("second").unwrap();
        assert_eq!(store.get(), Some("second".to_string()));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = MemoryTokenStore::new();
        store.clear().unwrap();
        assert_eq!(store.get(), None);

        store.set("token").unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.get(), None);
    }
}
