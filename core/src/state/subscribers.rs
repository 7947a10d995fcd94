// shoplist/src/state/subscribers.rs

//! Registry of change listeners, keyed by the `SubscriptionId` handed out at
//! registration.

use crate::model::ShoppingList;
use crate::state::events::ListEvent;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{event, Level};

/// Callback invoked with each event and the list as it stands after the event.
pub type Listener = Arc<dyn Fn(&ListEvent, &ShoppingList) + Send + Sync + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "sub-{}", self.0)
  }
}

#[derive(Default)]
pub struct Subscribers {
  next_id: AtomicU64,
  registry: Mutex<BTreeMap<SubscriptionId, Listener>>,
}

impl Subscribers {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn subscribe(&self, listener: Listener) -> SubscriptionId {
    let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
    self.registry.lock().insert(id, listener);
    event!(Level::DEBUG, subscription = %id, "Listener subscribed.");
    id
  }

  /// Returns false if `id` was not (or no longer) registered.
  pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
    let removed = self.registry.lock().remove(&id).is_some();
    event!(Level::DEBUG, subscription = %id, removed, "Listener unsubscribed.");
    removed
  }

  pub fn len(&self) -> usize {
    self.registry.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Calls every listener in registration order.
  ///
  /// The registry lock is released before any listener runs, so a listener may
  /// itself subscribe or unsubscribe.
  pub fn notify(&self, list_event: &ListEvent, list: &ShoppingList) {
    let listeners: Vec<Listener> = self.registry.lock().values().cloned().collect();
    event!(
      Level::TRACE,
      list_event = list_event.name(),
      listeners = listeners.len(),
      "Notifying listeners."
    );
    for listener in listeners {
      listener(list_event, list);
    }
  }
}

impl fmt::Debug for Subscribers {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Subscribers")
      .field("count", &self.len())
      .finish()
  }
}
