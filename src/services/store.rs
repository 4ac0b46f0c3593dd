use crate::models::DEFAULT_BASE_URL;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

/// Key the base URL is persisted under
pub const BASE_URL_KEY: &str = "medassist.baseUrl";

/// Errors that can occur with the settings store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed store file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize store: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// String key-value store used to persist client preferences
pub trait BaseUrlStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Store backed by a flat TOML table on disk
///
/// A missing file reads as empty and is created on the first write.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        Ok(toml::from_str(&contents)?)
    }
}

impl BaseUrlStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_table()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut table = self.read_table()?;
        table.insert(key.to_string(), value.to_string());

        let contents = toml::to_string(&table)?;
        std::fs::write(&self.path, contents).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!("Wrote {} to {}", key, self.path.display());
        Ok(())
    }
}

/// In-memory store, mostly for tests
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BaseUrlStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the persisted base URL, falling back to [`DEFAULT_BASE_URL`]
///
/// A blank value or an unreadable store also yields the default.
pub fn load_base_url(store: &dyn BaseUrlStore) -> String {
    match store.get(BASE_URL_KEY) {
        Ok(Some(url)) if !url.trim().is_empty() => url,
        Ok(_) => DEFAULT_BASE_URL.to_string(),
        Err(e) => {
            tracing::warn!("Failed to read stored base URL, using default: {}", e);
            DEFAULT_BASE_URL.to_string()
        }
    }
}

/// Persist the base URL as entered
pub fn save_base_url(store: &dyn BaseUrlStore, url: &str) -> Result<(), StoreError> {
    store.set(BASE_URL_KEY, url)
}

/// Pick the base URL to use: command-line flag, then configured value, then
/// the stored one. Blank values are skipped.
pub fn resolve_base_url(
    flag: Option<&str>,
    configured: Option<&str>,
    store: &dyn BaseUrlStore,
) -> String {
    flag.into_iter()
        .chain(configured)
        .find(|url| !url.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| load_base_url(store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(load_base_url(&store), DEFAULT_BASE_URL);

        save_base_url(&store, "http://10.0.0.5:8000").unwrap();
        assert_eq!(load_base_url(&store), "http://10.0.0.5:8000");
    }

    #[test]
    fn test_blank_stored_value_uses_default() {
        let store = MemoryStore::new();
        save_base_url(&store, "   ").unwrap();
        assert_eq!(load_base_url(&store), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_resolve_base_url_precedence() {
        let store = MemoryStore::new();
        save_base_url(&store, "http://stored.test").unwrap();

        assert_eq!(
            resolve_base_url(Some("http://flag.test"), Some("http://config.test"), &store),
            "http://flag.test"
        );
        assert_eq!(resolve_base_url(Some(" "), Some("http://config.test"), &store), "http://config.test");
        assert_eq!(resolve_base_url(None, None, &store), "http://stored.test");
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.toml"));
        assert_eq!(store.get(BASE_URL_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("prefs.toml"));

        store.set("theme", "dark").unwrap();
        save_base_url(&store, "http://api.test/").unwrap();

        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(load_base_url(&store), "http://api.test/");
    }

    #[test]
    fn test_file_store_malformed_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.get(BASE_URL_KEY), Err(StoreError::Parse(_))));
        assert_eq!(load_base_url(&store), DEFAULT_BASE_URL);
    }
}
