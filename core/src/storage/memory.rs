// shoplist/src/storage/memory.rs

use super::KeyValueStorage;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

/// In-process storage. Nothing survives the process; used for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryStorage {
  entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a storage that already holds `value` under `key`.
  pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
    let storage = Self::new();
    storage.entries.lock().insert(key.into(), value.into());
    storage
  }

  /// Synchronous peek at the raw stored value.
  pub fn raw(&self, key: &str) -> Option<String> {
    self.entries.lock().get(key).cloned()
  }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
  async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
    Ok(self.entries.lock().get(key).cloned())
  }

  async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
    self.entries.lock().insert(key.to_string(), value.to_string());
    Ok(())
  }
}
