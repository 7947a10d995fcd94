// shoplist/src/storage/mod.rs

//! Defines the `KeyValueStorage` trait the store persists through, and its
//! implementations.

pub mod file;
pub mod memory;

use async_trait::async_trait;
use std::sync::Arc;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// String key-value storage with read-after-write consistency within a process.
///
/// Backend failures are reported as plain `anyhow::Error`; the store wraps them
/// into `ListError::StorageRead` / `ListError::StorageWrite` together with the key.
#[async_trait]
pub trait KeyValueStorage: Send + Sync + 'static {
  /// Returns the stored value, or `None` if the key has never been set.
  async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

  /// Stores `value` under `key`, replacing any previous value as one unit.
  async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[async_trait]
impl<S> KeyValueStorage for Arc<S>
where
  S: KeyValueStorage + ?Sized,
{
  async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
    (**self).get(key).await
  }

  async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
    (**self).set(key, value).await
  }
}
