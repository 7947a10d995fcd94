// shoplist/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

use crate::model::{DraftField, ItemId};

#[derive(Debug, Error)]
pub enum ListError {
  #[error("Invalid {field}: {message}")]
  Validation { field: DraftField, message: String },

  #[error("Item not found: {id}")]
  NotFound { id: ItemId },

  #[error("Failed to read shopping list from storage key '{key}'. Source: {source}")]
  StorageRead {
    key: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Failed to write shopping list to storage key '{key}'. Source: {source}")]
  StorageWrite {
    key: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Configuration error: {0}")]
  Config(String),
}

/// Fieldless mirror of [`ListError`] for callers that only need to know which
/// kind of failure occurred (e.g. to pick a user-facing message).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  Validation,
  NotFound,
  StorageRead,
  StorageWrite,
  Config,
}

impl ListError {
  pub fn kind(&self) -> ErrorKind {
    match self {
      ListError::Validation { .. } => ErrorKind::Validation,
      ListError::NotFound { .. } => ErrorKind::NotFound,
      ListError::StorageRead { .. } => ErrorKind::StorageRead,
      ListError::StorageWrite { .. } => ErrorKind::StorageWrite,
      ListError::Config(_) => ErrorKind::Config,
    }
  }

  /// The draft field that failed, for validation errors.
  pub fn field(&self) -> Option<DraftField> {
    match self {
      ListError::Validation { field, .. } => Some(*field),
      _ => None,
    }
  }

  pub(crate) fn validation(field: DraftField, message: impl Into<String>) -> Self {
    ListError::Validation {
      field,
      message: message.into(),
    }
  }

  pub(crate) fn not_found(id: &ItemId) -> Self {
    ListError::NotFound { id: id.clone() }
  }

  pub(crate) fn read(key: &str, source: impl Into<AnyhowError>) -> Self {
    ListError::StorageRead {
      key: key.to_string(),
      source: source.into(),
    }
  }

  pub(crate) fn write(key: &str, source: impl Into<AnyhowError>) -> Self {
    ListError::StorageWrite {
      key: key.to_string(),
      source: source.into(),
    }
  }
}

pub type ListResult<T, E = ListError> = std::result::Result<T, E>;
