// shoplist/src/model/list.rs

//! `ShoppingList`, the ordered collection persisted as a single blob, and the
//! in-place mutations the store applies to a working copy of it.

use crate::error::{ListError, ListResult};
use crate::model::draft::ValidDraft;
use crate::model::item::{ItemId, ShoppingItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Items in insertion order. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList(Vec<ShoppingItem>);

impl ShoppingList {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, ShoppingItem> {
    self.0.iter()
  }

  pub fn items(&self) -> &[ShoppingItem] {
    &self.0
  }

  pub fn get(&self, id: &ItemId) -> Option<&ShoppingItem> {
    self.0.iter().find(|item| &item.id == id)
  }

  pub fn contains(&self, id: &ItemId) -> bool {
    self.get(id).is_some()
  }

  pub fn last(&self) -> Option<&ShoppingItem> {
    self.0.last()
  }

  pub fn into_items(self) -> Vec<ShoppingItem> {
    self.0
  }

  fn get_mut(&mut self, id: &ItemId) -> ListResult<&mut ShoppingItem> {
    self.0.iter_mut().find(|item| &item.id == id).ok_or_else(|| ListError::not_found(id))
  }

  /// Appends a new unbought item and returns its id.
  pub(crate) fn add(&mut self, draft: ValidDraft, now: DateTime<Utc>) -> ItemId {
    let mut id = ItemId::generate();
    while self.contains(&id) {
      id = ItemId::generate();
    }
    self.0.push(ShoppingItem {
      id: id.clone(),
      name: draft.name().to_string(),
      priority: draft.priority(),
      bought: false,
      date_added: now,
      quantity: draft.quantity(),
      date_bought: None,
    });
    id
  }

  /// Replaces name, quantity and priority; everything else is kept.
  pub(crate) fn edit(&mut self, id: &ItemId, draft: ValidDraft) -> ListResult<()> {
    let item = self.get_mut(id)?;
    item.name = draft.name().to_string();
    item.quantity = draft.quantity();
    item.priority = draft.priority();
    Ok(())
  }

  /// Flips `bought`, stamping or clearing `date_bought`. Returns the new flag.
  pub(crate) fn toggle_bought(&mut self, id: &ItemId, now: DateTime<Utc>) -> ListResult<bool> {
    let item = self.get_mut(id)?;
    item.bought = !item.bought;
    item.date_bought = item.bought.then_some(now);
    Ok(item.bought)
  }

  pub(crate) fn unmark_bought(&mut self, id: &ItemId) -> ListResult<()> {
    let item = self.get_mut(id)?;
    item.bought = false;
    item.date_bought = None;
    Ok(())
  }

  pub(crate) fn remove(&mut self, id: &ItemId) -> ListResult<ShoppingItem> {
    let idx = self
      .0
      .iter()
      .position(|item| &item.id == id)
      .ok_or_else(|| ListError::not_found(id))?;
    Ok(self.0.remove(idx))
  }

  /// Drops every bought item, returning how many were removed.
  pub(crate) fn clear_bought(&mut self) -> usize {
    let before = self.0.len();
    self.0.retain(|item| !item.bought);
    before - self.0.len()
  }

  /// Describes the first broken collection invariant, if any.
  pub(crate) fn invariant_violation(&self) -> Option<String> {
    let mut seen = HashSet::with_capacity(self.0.len());
    for (idx, item) in self.0.iter().enumerate() {
      if !seen.insert(&item.id) {
        return Some(format!("duplicate id '{}' at index {}", item.id, idx));
      }
      if item.name.trim().is_empty() {
        return Some(format!("item '{}' has an empty name", item.id));
      }
      if item.quantity == 0 {
        return Some(format!("item '{}' has quantity 0", item.id));
      }
      if item.bought != item.date_bought.is_some() {
        return Some(format!(
          "item '{}' has bought={} but dateBought is {}",
          item.id,
          item.bought,
          if item.date_bought.is_some() { "set" } else { "missing" }
        ));
      }
    }
    None
  }
}

impl From<Vec<ShoppingItem>> for ShoppingList {
  fn from(items: Vec<ShoppingItem>) -> Self {
    ShoppingList(items)
  }
}

impl<'a> IntoIterator for &'a ShoppingList {
  type Item = &'a ShoppingItem;
  type IntoIter = std::slice::Iter<'a, ShoppingItem>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

impl IntoIterator for ShoppingList {
  type Item = ShoppingItem;
  type IntoIter = std::vec::IntoIter<ShoppingItem>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}
