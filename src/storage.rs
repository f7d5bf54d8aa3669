//! Persistent preference storage (the `localStorage` side of the page).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage key holding the last resolved language code.
pub const PREFERENCE_KEY: &str = "site_lang";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Preference file {path} is not a JSON object of strings: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to encode preferences for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value storage that outlives a page load.
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Volatile store, for hosts without persistence and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object file, rewritten on every `set_item`.
///
/// A missing file reads as empty. An unreadable or malformed file also reads
/// as empty and is replaced on the next write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let items = match read_items(&path) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Ignoring unreadable preference file: {}", e);
                BTreeMap::new()
            }
        };
        Self { path, items }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_items(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&contents).map_err(|source| StorageError::Format {
        path: path.to_path_buf(),
        source,
    })
}

impl PreferenceStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        let body = serde_json::to_string_pretty(&self.items).map_err(|source| {
            StorageError::Serialize {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, body).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
