use crate::core::error::StoreError;
use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Stored slot holding the current session
pub const SESSION_KEY: &str = "discord_user";
/// Stored slot holding the Discord role id that grants access
pub const ROLE_ID_KEY: &str = "discord_role_id";
pub const BADGES_KEY: &str = "discord_badges";
pub const INVENTORY_KEY: &str = "discord_inventory";
pub const WANTED_KEY: &str = "wanted_persons";
pub const MONGO_URI_KEY: &str = "mongoUri";
pub const DISCORD_TOKEN_KEY: &str = "discordToken";

/// String key/value store persisted as a single JSON document.
///
/// Values are opaque strings; callers that store structured data encode it
/// as JSON through [`LocalStore::set_json`]. Every mutation rewrites the
/// document so a restart sees the last completed write.
pub struct LocalStore {
    entries: DashMap<String, String>,
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl LocalStore {
    /// Open the store at `path`. A missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = DashMap::new();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            if !content.trim().is_empty() {
                let map: BTreeMap<String, String> = serde_json::from_str(&content)?;
                for (key, value) in map {
                    entries.insert(key, value);
                }
            }
        }

        debug!(path = %path.display(), entries = entries.len(), "Local store opened");

        Ok(Self {
            entries,
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn set(&self, key: &str, value: impl Into<String>) -> Result<(), StoreError> {
        self.commit(&[(key, Some(value.into()))])
    }

    /// Write several keys in one flush. Either all of them land or none do.
    pub fn set_many(&self, pairs: &[(&str, String)]) -> Result<(), StoreError> {
        let updates: Vec<(&str, Option<String>)> = pairs
            .iter()
            .map(|(key, value)| (*key, Some(value.clone())))
            .collect();
        self.commit(&updates)
    }

    /// Remove `key`. Returns the previous value, if any.
    pub fn remove(&self, key: &str) -> Result<Option<String>, StoreError> {
        let previous = self.get(key);
        if previous.is_some() {
            self.commit(&[(key, None)])?;
        }
        Ok(previous)
    }

    /// Decode the JSON value under `key`. `Ok(None)` when the key is absent.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get(key) {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(value)?;
        self.set(key, encoded)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flush the document with `updates` applied, then apply them in memory.
    /// A failed flush leaves the in-memory entries untouched.
    fn commit(&self, updates: &[(&str, Option<String>)]) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::LockPoisoned)?;

        let mut snapshot: BTreeMap<String, String> = self
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        for (key, value) in updates {
            match value {
                Some(value) => snapshot.insert(key.to_string(), value.clone()),
                None => snapshot.remove(*key),
            };
        }

        self.flush(&snapshot)?;

        for (key, value) in updates {
            match value {
                Some(value) => {
                    self.entries.insert(key.to_string(), value.clone());
                }
                None => {
                    self.entries.remove(*key);
                }
            }
        }
        Ok(())
    }

    fn flush(&self, snapshot: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp_path)?;
            serde_json::to_writer_pretty(&mut file, snapshot)?;
            file.flush()?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}
