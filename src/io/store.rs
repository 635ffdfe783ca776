//! Durable storage for the item list.
//!
//! Storage is an opaque key-value string store; the list lives under the
//! single key `"items"` as a JSON array of `{key, text, complete}` objects.
//! The production store maps each key to a file in the store directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::io::recovery::{self, RecoveryCategory, RecoveryEntry};
use crate::model::item::Item;

/// The one data key this app uses.
pub const ITEMS_KEY: &str = "items";

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize items: {0}")]
    SerializeError(#[from] serde_json::Error),
    #[error("could not parse config.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// An asynchronous-in-spirit key-value string store: `get` may find
/// nothing, `set` replaces the whole value. Implementations decide
/// durability.
pub trait KvStore {
    /// The stored value for `key`, or None if absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;
    /// Durably replace the value for `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-backed store: one file per key (`<dir>/<key>.json`), written
/// atomically so readers never observe a torn payload.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.key_path(key);
        recovery::atomic_write(&path, value.as_bytes())
            .map_err(|source| StoreError::WriteError { path, source })
    }
}

/// Resolve the store directory: explicit override, else the platform data
/// dir (`~/.local/share/tick` and friends), else `./.tick` as a last
/// resort for environments without a home.
pub fn resolve_store_dir(override_dir: Option<&str>) -> PathBuf {
    if let Some(dir) = override_dir {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .map(|d| d.join("tick"))
        .unwrap_or_else(|| PathBuf::from(".tick"))
}

/// Load the item sequence from the store.
///
/// Absence and unparsable payloads both yield the empty sequence, a fresh
/// list rather than a fatal error. A payload that was present but didn't
/// parse is first preserved in the recovery log.
pub fn load_items(store: &FileStore) -> Vec<Item> {
    let Some(payload) = store.get(ITEMS_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str(&payload) {
        Ok(items) => items,
        Err(e) => {
            recovery::log_recovery(
                store.dir(),
                RecoveryEntry::now(
                    RecoveryCategory::Parse,
                    format!("items payload discarded ({})", e),
                    payload,
                ),
            );
            Vec::new()
        }
    }
}

/// Serialize the full sequence and write it under the items key.
pub fn save_items(store: &FileStore, items: &[Item]) -> Result<(), StoreError> {
    let payload = serde_json::to_string_pretty(items)?;
    store.set(ITEMS_KEY, &payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::ItemKey;
    use crate::ops::item_ops::{add_item, toggle_complete};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn save_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());

        let items = add_item(&[], "buy milk");
        let mut items = toggle_complete(&items, ItemKey(1), true);
        items = add_item(&items, "call mom");
        // editing is transient and must not survive the trip
        items[1].editing = true;

        save_items(&store, &items).unwrap();
        let loaded = load_items(&store);

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].key, items[0].key);
        assert_eq!(loaded[0].text, "buy milk");
        assert!(loaded[0].complete);
        assert!(!loaded[1].editing);
    }

    #[test]
    fn missing_store_yields_empty_list() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("nowhere"));
        assert!(load_items(&store).is_empty());
    }

    #[test]
    fn corrupt_payload_yields_empty_list_and_recovery_entry() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());
        store.set(ITEMS_KEY, "not json {{{").unwrap();

        assert!(load_items(&store).is_empty());

        let log = std::fs::read_to_string(recovery::recovery_log_path(tmp.path())).unwrap();
        assert!(log.contains("not json {{{"));
    }

    #[test]
    fn store_writes_the_full_sequence_not_a_view() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());

        let items = add_item(&add_item(&[], "a"), "b");
        let items = toggle_complete(&items, ItemKey(1), true);
        save_items(&store, &items).unwrap();

        let raw = store.get(ITEMS_KEY).unwrap();
        let parsed: Vec<Item> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn resolve_prefers_override() {
        assert_eq!(
            resolve_store_dir(Some("/tmp/elsewhere")),
            PathBuf::from("/tmp/elsewhere")
        );
    }
}
