//! File-backed session token persistence.

use lovenest_core::Result;
use lovenest_core::token::TokenStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed name of the token file; the one piece of client state that
/// survives restarts.
const TOKEN_FILE: &str = "lovenest_token";

/// Persists the session token as a single file under a base directory.
///
/// Layout:
/// ```text
/// base_dir/
/// └── lovenest_token
/// ```
pub struct FileTokenStore {
    base_dir: PathBuf,
}

impl FileTokenStore {
    /// Creates a store rooted at `base_dir`, creating the directory if it
    /// doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Creates a store at the default location (`~/.lovenest`).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined or the
    /// directory cannot be created.
    pub fn default_location() -> Result<Self> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| lovenest_core::LovenestError::io("failed to get home directory"))?;
        Self::new(home_dir.join(".lovenest"))
    }

    fn token_path(&self) -> PathBuf {
        self.base_dir.join(TOKEN_FILE)
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        let contents = fs::read_to_string(self.token_path()).ok()?;
        let token = contents.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn set(&self, token: &str) -> Result<()> {
        fs::write(self.token_path(), token)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let path = self.token_path();
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_then_get_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(temp_dir.path()).unwrap();

        assert_eq!(store.get(), None);

        store.set("T1").unwrap();
        assert_eq!(store.get(), Some("T1".to_string()));

        store.set("T2").unwrap();
        assert_eq!(store.get(), Some("T2".to_string()));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(temp_dir.path()).unwrap();

        // Clearing an empty store is fine
        store.clear().unwrap();

        store.set("T1").unwrap();
        store.clear().unwrap();
        assert_eq!(store.get(), None);

        store.clear().unwrap();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_token_survives_reopening_the_store() {
        let temp_dir = TempDir::new().unwrap();

        {
            let store = FileTokenStore::new(temp_dir.path()).unwrap();
            store.set("persistent").unwrap();
        }

        let reopened = FileTokenStore::new(temp_dir.path()).unwrap();
        assert_eq!(reopened.get(), Some("persistent".to_string()));
    }

    #[test]
    fn test_blank_token_file_reports_absent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(temp_dir.path()).unwrap();

        fs::write(temp_dir.path().join(TOKEN_FILE), "  \n").unwrap();
        assert_eq!(store.get(), None);
    }
}
