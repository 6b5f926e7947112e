//! Storage capability backing profile persistence.
//!
//! The engine never reaches into ambient storage directly; callers inject a
//! [`ProfileStore`] and the resolution helpers treat every failure as "no
//! stored profile". Two implementations ship here: a file-backed store
//! keeping one JSON document per key, and a session-scoped in-memory store.

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Key-value view of wherever calibration data lives.
pub trait ProfileStore {
    /// Returns the stored value, or `None` when the key is missing or the
    /// backing storage cannot produce it.
    fn get(&self, key: &str) -> Option<Value>;

    /// Stores the value under the key, replacing any previous one.
    fn put(&self, key: &str, value: Value) -> Result<()>;
}

/// File-backed store keeping one pretty-printed JSON document per key.
pub struct FileProfileStore {
    root: PathBuf,
}

impl FileProfileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn read_value(&self, key: &str) -> Result<Option<Value>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read(&path)
            .with_context(|| format!("Failed reading profile document {:?}", path))?;
        let value = serde_json::from_slice(&data)
            .with_context(|| format!("Failed parsing profile document {:?}", path))?;
        Ok(Some(value))
    }
}

impl ProfileStore for FileProfileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.read_value(key).ok().flatten()
    }

    fn put(&self, key: &str, value: Value) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed creating profile directory {:?}", self.root))?;
        let path = self.key_path(key);
        let data = serde_json::to_vec_pretty(&value)?;
        fs::write(&path, data)
            .with_context(|| format!("Failed writing profile document {:?}", path))?;
        Ok(())
    }
}

/// In-memory store for sessions that do not persist to disk, and for tests.
#[derive(Default)]
pub struct MemoryProfileStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn put(&self, key: &str, value: Value) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("profile store mutex poisoned"))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}
