// shoplist/src/store/commit.rs

//! The read-modify-write path every `ListStore` operation goes through:
//! take the commit lock, work on a copy of the list, write the whole copy to
//! storage, and only then publish it to the snapshot and to subscribers.

use crate::codec;
use crate::error::{ListError, ListResult};
use crate::model::ShoppingList;
use crate::state::ListEvent;
use crate::store::definition::ListStore;
use chrono::{DateTime, Utc};
use std::sync::atomic::Ordering;
use tracing::{event, instrument, Level};

impl ListStore {
  /// Applies `mutate` to a working copy of the list and commits the result.
  ///
  /// `mutate` returns the operation's output and the event to publish. If it
  /// fails, or the storage write fails, neither the snapshot nor storage
  /// changes and no subscriber is notified.
  pub(crate) async fn commit<T, F>(&self, mutate: F) -> ListResult<(ShoppingList, T)>
  where
    F: FnOnce(&mut ShoppingList, DateTime<Utc>) -> ListResult<(T, ListEvent)>,
  {
    let _commit_guard = self.commit_lock.lock().await;

    // A list read lazily here only becomes current together with the
    // mutation's result, so a rejected mutation leaves the snapshot as
    // subscribers last saw it.
    let mut working = if self.loaded.load(Ordering::Acquire) {
      self.current.snapshot()
    } else {
      event!(Level::DEBUG, "List not loaded yet; reading storage before mutating.");
      self.read_or_init().await?
    };

    let (output, list_event) = mutate(&mut working, self.clock.now())?;
    self.persist(&working).await?;
    self.loaded.store(true, Ordering::Release);
    self.publish(list_event, working.clone());
    Ok((working, output))
  }

  /// Reads the stored list, writing an empty one first if the key is absent.
  #[instrument(name = "ListStore::read_or_init", skip_all, fields(key = %self.key), err(Display))]
  pub(crate) async fn read_or_init(&self) -> ListResult<ShoppingList> {
    match self.fetch_blob().await? {
      Some(blob) => {
        let list = codec::decode(&self.key, &blob)?;
        event!(Level::DEBUG, items = list.len(), "Stored list decoded.");
        Ok(list)
      }
      None => self.init_empty().await,
    }
  }

  /// Raw stored blob. Only I/O failures are errors here; decoding is the caller's.
  pub(crate) async fn fetch_blob(&self) -> ListResult<Option<String>> {
    self
      .storage
      .get(&self.key)
      .await
      .map_err(|e| ListError::read(&self.key, e))
  }

  pub(crate) async fn init_empty(&self) -> ListResult<ShoppingList> {
    event!(Level::INFO, "No stored list; initializing an empty one.");
    let empty = ShoppingList::new();
    self.persist(&empty).await?;
    Ok(empty)
  }

  /// Serializes `list` and writes it under the store's key in one `set`.
  pub(crate) async fn persist(&self, list: &ShoppingList) -> ListResult<()> {
    let blob = codec::encode(&self.key, list)?;
    match self.storage.set(&self.key, &blob).await {
      Ok(()) => {
        event!(Level::TRACE, items = list.len(), bytes = blob.len(), "List persisted.");
        Ok(())
      }
      Err(e) => {
        event!(Level::ERROR, error = %e, key = %self.key, "Storage write failed; keeping last persisted list.");
        Err(ListError::write(&self.key, e))
      }
    }
  }

  /// Makes a persisted list current and tells subscribers.
  pub(crate) fn publish(&self, list_event: ListEvent, list: ShoppingList) {
    event!(Level::DEBUG, list_event = list_event.name(), items = list.len(), "Publishing list.");
    self.current.replace(list.clone());
    self.subscribers.notify(&list_event, &list);
  }
}
