// shoplist/src/state/shared.rs

use crate::model::ShoppingList;
use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard};
use std::sync::Arc;

/// The in-memory copy of the list that every view reads from, with shared
/// ownership and interior mutability via `parking_lot::RwLock`.
///
/// IMPORTANT: Lock guards obtained from this struct are blocking and MUST NOT
/// be held across `.await` suspension points.
#[derive(Debug, Clone, Default)]
pub struct SharedList(Arc<RwLock<ShoppingList>>);

impl SharedList {
  pub fn new(list: ShoppingList) -> Self {
    SharedList(Arc::new(RwLock::new(list)))
  }

  /// Acquires a read lock. The guard MUST be dropped before any `.await` point.
  pub fn read(&self) -> RwLockReadGuard<'_, ShoppingList> {
    self.0.read()
  }

  /// Read guard over a single part of the list, e.g. `shared.map_read(|l| l.items())`.
  pub fn map_read<F, U: ?Sized>(&self, f: F) -> MappedRwLockReadGuard<'_, U>
  where
    F: FnOnce(&ShoppingList) -> &U,
  {
    RwLockReadGuard::map(self.read(), f)
  }

  /// Owned copy of the current list.
  pub fn snapshot(&self) -> ShoppingList {
    self.0.read().clone()
  }

  /// Swaps in a list that has already been persisted.
  pub(crate) fn replace(&self, list: ShoppingList) {
    *self.0.write() = list;
  }
}
