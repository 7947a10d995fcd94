// shoplist/src/store/operations.rs

//! The public load, save and mutation operations of `ListStore`.
//! Each mutation validates its input first, then runs through `commit`.

use crate::codec;
use crate::error::{ListError, ListResult};
use crate::model::{ItemDraft, ItemId, ShoppingList};
use crate::state::ListEvent;
use crate::store::definition::ListStore;
use std::sync::atomic::Ordering;
use tracing::{event, instrument, Level};

impl ListStore {
  /// Reads the list from storage and makes it current.
  ///
  /// An absent key is initialized to an empty list, which is persisted. A blob
  /// that fails to decode yields `ListError::StorageRead` and leaves the
  /// current snapshot unchanged; see [`ListStore::load_or_empty`] for the
  /// lenient variant.
  #[instrument(name = "ListStore::load", skip_all, fields(key = %self.key), err(Display))]
  pub async fn load(&self) -> ListResult<ShoppingList> {
    let _commit_guard = self.commit_lock.lock().await;
    let list = self.read_or_init().await?;
    self.loaded.store(true, Ordering::Release);
    self.publish(ListEvent::Loaded, list.clone());
    event!(Level::INFO, items = list.len(), "Shopping list loaded.");
    Ok(list)
  }

  /// Like [`ListStore::load`], but a stored blob that fails to decode is
  /// treated as an empty list. The bad blob is left in storage until the next
  /// successful mutation overwrites it. Storage I/O failures are still returned.
  #[instrument(name = "ListStore::load_or_empty", skip_all, fields(key = %self.key), err(Display))]
  pub async fn load_or_empty(&self) -> ListResult<ShoppingList> {
    let _commit_guard = self.commit_lock.lock().await;
    let list = match self.fetch_blob().await? {
      Some(blob) => codec::decode(&self.key, &blob).unwrap_or_else(|e| {
        event!(Level::WARN, error = %e, "Stored list unreadable; continuing with an empty list.");
        ShoppingList::new()
      }),
      None => self.init_empty().await?,
    };
    self.loaded.store(true, Ordering::Release);
    self.publish(ListEvent::Loaded, list.clone());
    Ok(list)
  }

  /// Replaces the whole list with `list` and persists it.
  ///
  /// The list must satisfy the same rules a decoded blob does (unique ids,
  /// non-empty names, positive quantities, `dateBought` set iff bought).
  #[instrument(name = "ListStore::save", skip_all, fields(key = %self.key, items = list.len()), err(Display))]
  pub async fn save(&self, list: ShoppingList) -> ListResult<ShoppingList> {
    codec::check(&self.key, &list).map_err(|e| ListError::write(&self.key, e))?;
    let _commit_guard = self.commit_lock.lock().await;
    self.persist(&list).await?;
    self.loaded.store(true, Ordering::Release);
    self.publish(ListEvent::Saved, list.clone());
    Ok(list)
  }

  /// Validates `draft` and appends it as a new unbought item.
  #[instrument(name = "ListStore::add", skip_all, fields(key = %self.key), err(Display))]
  pub async fn add(&self, draft: ItemDraft) -> ListResult<ShoppingList> {
    let valid = draft.validate()?;
    let (list, id) = self
      .commit(|list, now| {
        let id = list.add(valid, now);
        Ok((id.clone(), ListEvent::Added { id }))
      })
      .await?;
    event!(Level::INFO, item_id = %id, items = list.len(), "Item added.");
    Ok(list)
  }

  /// Replaces name, quantity and priority of the item; keeps id, dates and bought flag.
  #[instrument(name = "ListStore::edit", skip_all, fields(key = %self.key, item_id = %id), err(Display))]
  pub async fn edit(&self, id: &ItemId, draft: ItemDraft) -> ListResult<ShoppingList> {
    let valid = draft.validate()?;
    let (list, ()) = self
      .commit(|list, _now| {
        list.edit(id, valid)?;
        Ok(((), ListEvent::Edited { id: id.clone() }))
      })
      .await?;
    event!(Level::INFO, "Item edited.");
    Ok(list)
  }

  /// Flips the bought flag; marking bought stamps `dateBought`, unmarking clears it.
  #[instrument(name = "ListStore::toggle_bought", skip_all, fields(key = %self.key, item_id = %id), err(Display))]
  pub async fn toggle_bought(&self, id: &ItemId) -> ListResult<ShoppingList> {
    let (list, bought) = self
      .commit(|list, now| {
        let bought = list.toggle_bought(id, now)?;
        Ok((
          bought,
          ListEvent::BoughtToggled {
            id: id.clone(),
            bought,
          },
        ))
      })
      .await?;
    event!(Level::INFO, bought, "Item bought flag toggled.");
    Ok(list)
  }

  /// Marks the item not bought and clears `dateBought`. Unmarking an unbought
  /// item is allowed and still persisted.
  #[instrument(name = "ListStore::unmark_bought", skip_all, fields(key = %self.key, item_id = %id), err(Display))]
  pub async fn unmark_bought(&self, id: &ItemId) -> ListResult<ShoppingList> {
    let (list, ()) = self
      .commit(|list, _now| {
        list.unmark_bought(id)?;
        Ok(((), ListEvent::Unmarked { id: id.clone() }))
      })
      .await?;
    event!(Level::INFO, "Item unmarked.");
    Ok(list)
  }

  /// Deletes the item. A missing id is `ListError::NotFound`.
  #[instrument(name = "ListStore::remove", skip_all, fields(key = %self.key, item_id = %id), err(Display))]
  pub async fn remove(&self, id: &ItemId) -> ListResult<ShoppingList> {
    let (list, removed) = self
      .commit(|list, _now| {
        let removed = list.remove(id)?;
        Ok((removed, ListEvent::Removed { id: id.clone() }))
      })
      .await?;
    event!(Level::INFO, item_name = %removed.name, "Item removed.");
    Ok(list)
  }

  /// Removes every bought item in a single write.
  #[instrument(name = "ListStore::clear_bought", skip_all, fields(key = %self.key), err(Display))]
  pub async fn clear_bought(&self) -> ListResult<ShoppingList> {
    let (list, removed) = self
      .commit(|list, _now| {
        let removed = list.clear_bought();
        Ok((removed, ListEvent::BoughtCleared { removed }))
      })
      .await?;
    event!(Level::INFO, removed, "Bought items cleared.");
    Ok(list)
  }
}
