//! The single durable slot holding the bearer token between runs.
//!
//! In the browser this is `localStorage["authToken"]`; natively the same key
//! lives in a small JSON file.

use crate::error::Result;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "authToken";

pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, token: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

impl<T: TokenStore + ?Sized> TokenStore for Box<T> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&mut self, token: &str) -> Result<()> {
        (**self).save(token)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Option<String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.clone()
    }

    fn save(&mut self, token: &str) -> Result<()> {
        self.token = Some(token.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.token = None;
        Ok(())
    }
}

#[cfg(feature = "no-wasm")]
pub use file::FileTokenStore;

#[cfg(feature = "no-wasm")]
mod file {
    use std::collections::BTreeMap;
    use std::io::ErrorKind as IoErrorKind;
    use std::path::{Path, PathBuf};

    use super::{TOKEN_KEY, TokenStore};
    use crate::error::Result;

    /// Key/value JSON file standing in for browser local storage.
    #[derive(Debug, Clone)]
    pub struct FileTokenStore {
        path: PathBuf,
    }

    impl FileTokenStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_entries(&self) -> Result<BTreeMap<String, String>> {
            match std::fs::read_to_string(&self.path) {
                Ok(text) => Ok(serde_json::from_str(&text)?),
                Err(e) if e.kind() == IoErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(e) => Err(e.into()),
            }
        }

        fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
            if entries.is_empty() {
                return match std::fs::remove_file(&self.path) {
                    Err(e) if e.kind() != IoErrorKind::NotFound => Err(e.into()),
                    _ => Ok(()),
                };
            }
            std::fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
            Ok(())
        }
    }

    impl TokenStore for FileTokenStore {
        fn load(&self) -> Option<String> {
            match self.read_entries() {
                Ok(mut entries) => entries.remove(TOKEN_KEY),
                Err(e) => {
                    log::warn!("Ignoring unreadable session file {}: {e}", self.path.display());
                    None
                }
            }
        }

        fn save(&mut self, token: &str) -> Result<()> {
            // A corrupt file is overwritten rather than blocking login.
            let mut entries = self.read_entries().unwrap_or_default();
            entries.insert(TOKEN_KEY.to_string(), token.to_string());
            self.write_entries(&entries)
        }

        fn clear(&mut self) -> Result<()> {
            let mut entries = self.read_entries().unwrap_or_default();
            entries.remove(TOKEN_KEY);
            self.write_entries(&entries)
        }
    }
}

#[cfg(feature = "wasm")]
pub use local::LocalStorageTokenStore;

#[cfg(feature = "wasm")]
mod local {
    use super::{TOKEN_KEY, TokenStore};
    use crate::error::{ErrorKind, Result};

    /// `window.localStorage`
    #[derive(Debug, Clone, Default)]
    pub struct LocalStorageTokenStore;

    impl LocalStorageTokenStore {
        fn storage() -> Result<web_sys::Storage> {
            let window = web_sys::window()
                .ok_or_else(|| ErrorKind::StorageError("Window not available".to_string()))?;
            window
                .local_storage()
                .map_err(|e| ErrorKind::StorageError(format!("{e:?}")))?
                .ok_or_else(|| ErrorKind::StorageError("Storage not available".to_string()).into())
        }
    }

    impl TokenStore for LocalStorageTokenStore {
        fn load(&self) -> Option<String> {
            match Self::storage().map(|s| s.get_item(TOKEN_KEY)) {
                Ok(Ok(value)) => value,
                Ok(Err(e)) => {
                    log::warn!("Failed to read {TOKEN_KEY} from storage: {e:?}");
                    None
                }
                Err(e) => {
                    log::warn!("{e}");
                    None
                }
            }
        }

        fn save(&mut self, token: &str) -> Result<()> {
            Self::storage()?
                .set_item(TOKEN_KEY, token)
                .map_err(|e| ErrorKind::StorageError(format!("{e:?}")).into())
        }

        fn clear(&mut self) -> Result<()> {
            Self::storage()?
                .remove_item(TOKEN_KEY)
                .map_err(|e| ErrorKind::StorageError(format!("{e:?}")).into())
        }
    }
}

#[cfg(all(test, feature = "no-wasm"))]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("signup-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn file_store_round_trips_token() {
        let path = temp_path("round-trip");
        let mut store = FileTokenStore::new(&path);
        assert_eq!(store.load(), None);

        store.save("abc").unwrap();
        assert_eq!(FileTokenStore::new(&path).load().as_deref(), Some("abc"));

        store.clear().unwrap();
        assert_eq!(store.load(), None);
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "not json").unwrap();
        let mut store = FileTokenStore::new(&path);
        assert_eq!(store.load(), None);

        store.save("fresh").unwrap();
        assert_eq!(store.load().as_deref(), Some("fresh"));
        store.clear().unwrap();
    }

    #[test]
    fn clearing_missing_file_is_fine() {
        let mut store = FileTokenStore::new(temp_path("missing"));
        assert!(store.clear().is_ok());
    }
}
