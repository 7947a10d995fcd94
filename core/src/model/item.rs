// shoplist/src/model/item.rs

//! The `ShoppingItem` record and its identifier and priority types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque item identifier.
///
/// New ids are UUID v4 strings, but any string already present in storage is
/// accepted unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
  pub fn generate() -> Self {
    ItemId(Uuid::new_v4().to_string())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for ItemId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<String> for ItemId {
  fn from(value: String) -> Self {
    ItemId(value)
  }
}

impl From<&str> for ItemId {
  fn from(value: &str) -> Self {
    ItemId(value.to_string())
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
  High,
  #[default]
  Middle,
  Low,
}

impl Priority {
  pub const ALL: [Priority; 3] = [Priority::High, Priority::Middle, Priority::Low];

  pub fn as_str(self) -> &'static str {
    match self {
      Priority::High => "High",
      Priority::Middle => "Middle",
      Priority::Low => "Low",
    }
  }
}

impl fmt::Display for Priority {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown priority '{0}', expected one of: High, Middle, Low")]
pub struct ParsePriorityError(String);

impl FromStr for Priority {
  type Err = ParsePriorityError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    Priority::ALL
      .into_iter()
      .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
      .ok_or_else(|| ParsePriorityError(s.to_string()))
  }
}

/// A single entry on the shopping list.
///
/// `date_bought` is `Some` exactly when `bought` is true. The fields are public
/// for reading; mutations go through [`crate::ShoppingList`] so that rule holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
  pub id: ItemId,
  pub name: String,
  pub priority: Priority,
  pub bought: bool,
  pub date_added: DateTime<Utc>,
  pub quantity: u32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub date_bought: Option<DateTime<Utc>>,
}

impl ShoppingItem {
  pub fn is_high_priority(&self) -> bool {
    self.priority == Priority::High
  }
}
