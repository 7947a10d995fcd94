// shoplist/src/config.rs

use crate::error::{ListError, ListResult};
use crate::store::DEFAULT_STORAGE_KEY;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

pub const ENV_STORAGE_KEY: &str = "SHOPLIST_STORAGE_KEY";
pub const ENV_DATA_DIR: &str = "SHOPLIST_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
  /// Key the serialized list is stored under.
  pub storage_key: String,
  /// Root directory for `FileStorage`.
  pub data_dir: PathBuf,
}

impl Default for StoreConfig {
  fn default() -> Self {
    Self {
      storage_key: DEFAULT_STORAGE_KEY.to_string(),
      data_dir: PathBuf::from("./data"),
    }
  }
}

impl StoreConfig {
  /// Reads `SHOPLIST_STORAGE_KEY` and `SHOPLIST_DATA_DIR`, loading a `.env`
  /// file first if one is present. Unset variables fall back to the defaults;
  /// variables set to an empty string are rejected.
  pub fn from_env() -> ListResult<Self> {
    dotenv().ok();

    let defaults = Self::default();
    let get_env = |var_name: &str| -> ListResult<Option<String>> {
      match env::var(var_name) {
        Ok(value) if value.trim().is_empty() => Err(ListError::Config(format!(
          "Environment variable '{}' is set but empty",
          var_name
        ))),
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ListError::Config(format!("Invalid environment variable '{}': {}", var_name, e))),
      }
    };

    let storage_key = get_env(ENV_STORAGE_KEY)?.unwrap_or(defaults.storage_key);
    let data_dir = get_env(ENV_DATA_DIR)?.map(PathBuf::from).unwrap_or(defaults.data_dir);

    tracing::info!(storage_key = %storage_key, data_dir = %data_dir.display(), "Store configuration loaded.");

    Ok(Self { storage_key, data_dir })
  }
}
