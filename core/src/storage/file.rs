// shoplist/src/storage/file.rs

//! File-backed storage: one file per key under a root directory.

use super::KeyValueStorage;
use anyhow::{bail, Context as AnyhowContext};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{event, Level};

/// Stores each key as `<root>/<key>.json`.
///
/// `set` writes a temporary sibling file and renames it over the target, so a
/// failed write leaves the previous value in place.
#[derive(Debug, Clone)]
pub struct FileStorage {
  root: PathBuf,
}

impl FileStorage {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  fn path_for(&self, key: &str) -> anyhow::Result<PathBuf> {
    let valid = !key.is_empty()
      && key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
      && !key.starts_with('.');
    if !valid {
      bail!("storage key '{}' is not usable as a file name", key);
    }
    Ok(self.root.join(format!("{}.json", key)))
  }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
  async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
    let path = self.path_for(key)?;
    match tokio::fs::read_to_string(&path).await {
      Ok(contents) => Ok(Some(contents)),
      Err(e) if e.kind() == ErrorKind::NotFound => {
        event!(Level::DEBUG, path = %path.display(), "No stored value for key.");
        Ok(None)
      }
      Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
    }
  }

  async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
    let path = self.path_for(key)?;
    tokio::fs::create_dir_all(&self.root)
      .await
      .with_context(|| format!("creating storage directory {}", self.root.display()))?;

    let tmp_path = self.root.join(format!(".{}.json.tmp", key));
    tokio::fs::write(&tmp_path, value)
      .await
      .with_context(|| format!("writing {}", tmp_path.display()))?;

    if let Err(e) = tokio::fs::rename(&tmp_path, &path).await {
      let _ = tokio::fs::remove_file(&tmp_path).await;
      return Err(e).with_context(|| format!("replacing {}", path.display()));
    }
    event!(Level::TRACE, path = %path.display(), bytes = value.len(), "Stored value.");
    Ok(())
  }
}
