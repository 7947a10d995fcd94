// shoplist/src/store/definition.rs

//! Contains the `ListStore` struct definition, its builder, and the
//! subscription and snapshot accessors.

use crate::config::StoreConfig;
use crate::model::ShoppingList;
use crate::state::{Clock, ListEvent, SharedList, SubscriptionId, Subscribers, SystemClock};
use crate::storage::{FileStorage, KeyValueStorage};
use std::fmt;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub const DEFAULT_STORAGE_KEY: &str = "shoppingList";

/// The single in-process owner of the shopping list.
///
/// All views share one `ListStore` (typically behind an `Arc`), read from its
/// snapshot, and subscribe to changes. Every mutation is a read-modify-write of
/// the whole list against one storage key; the in-memory snapshot only changes
/// after the write succeeds.
pub struct ListStore {
  pub(crate) storage: Arc<dyn KeyValueStorage>,
  pub(crate) key: String,
  pub(crate) clock: Arc<dyn Clock>,
  pub(crate) current: SharedList,
  pub(crate) subscribers: Subscribers,
  // Serializes read-modify-write cycles. Held across the storage write.
  pub(crate) commit_lock: tokio::sync::Mutex<()>,
  // Set once the snapshot reflects storage (after load, load_or_empty or save).
  pub(crate) loaded: AtomicBool,
}

impl ListStore {
  /// A store over `storage` using the default key and the system clock.
  pub fn new(storage: impl KeyValueStorage) -> Self {
    Self::builder(storage).build()
  }

  pub fn builder(storage: impl KeyValueStorage) -> ListStoreBuilder {
    ListStoreBuilder {
      storage: Arc::new(storage),
      key: DEFAULT_STORAGE_KEY.to_string(),
      clock: Arc::new(SystemClock),
    }
  }

  /// A file-backed store as described by `config`.
  pub fn from_config(config: &StoreConfig) -> Self {
    Self::builder(FileStorage::new(config.data_dir.clone()))
      .storage_key(config.storage_key.clone())
      .build()
  }

  pub fn storage_key(&self) -> &str {
    &self.key
  }

  /// Owned copy of the in-memory list. Does not touch storage.
  pub fn snapshot(&self) -> ShoppingList {
    self.current.snapshot()
  }

  /// Shared handle to the in-memory list for lock-scoped reads.
  pub fn shared(&self) -> SharedList {
    self.current.clone()
  }

  /// Registers `listener` to be called after every successful load or
  /// committed mutation with the event and the new list.
  pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
  where
    F: Fn(&ListEvent, &ShoppingList) + Send + Sync + 'static,
  {
    self.subscribers.subscribe(Arc::new(listener))
  }

  pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
    self.subscribers.unsubscribe(id)
  }
}

impl fmt::Debug for ListStore {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ListStore")
      .field("key", &self.key)
      .field("items", &self.current.read().len())
      .field("loaded", &self.loaded)
      .field("subscribers", &self.subscribers)
      .finish()
  }
}

pub struct ListStoreBuilder {
  storage: Arc<dyn KeyValueStorage>,
  key: String,
  clock: Arc<dyn Clock>,
}

impl ListStoreBuilder {
  pub fn storage_key(mut self, key: impl Into<String>) -> Self {
    self.key = key.into();
    self
  }

  pub fn clock(mut self, clock: impl Clock) -> Self {
    self.clock = Arc::new(clock);
    self
  }

  /// Like [`Self::clock`], for a clock the caller keeps a handle to.
  pub fn shared_clock(mut self, clock: Arc<dyn Clock>) -> Self {
    self.clock = clock;
    self
  }

  pub fn build(self) -> ListStore {
    ListStore {
      storage: self.storage,
      key: self.key,
      clock: self.clock,
      current: SharedList::default(),
      subscribers: Subscribers::new(),
      commit_lock: tokio::sync::Mutex::new(()),
      loaded: AtomicBool::new(false),
    }
  }
}
