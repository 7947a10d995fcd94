// shoplist/src/state/events.rs

//! Change notifications delivered to subscribers after a load or a committed mutation.

use crate::model::ItemId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
  /// The list was (re)read from storage, or initialized empty.
  Loaded,
  /// A caller-supplied list replaced the whole collection.
  Saved,
  Added { id: ItemId },
  Edited { id: ItemId },
  BoughtToggled { id: ItemId, bought: bool },
  Unmarked { id: ItemId },
  Removed { id: ItemId },
  BoughtCleared { removed: usize },
}

impl ListEvent {
  /// The item the event concerns, for single-item events.
  pub fn item_id(&self) -> Option<&ItemId> {
    match self {
      ListEvent::Added { id }
      | ListEvent::Edited { id }
      | ListEvent::BoughtToggled { id, .. }
      | ListEvent::Unmarked { id }
      | ListEvent::Removed { id } => Some(id),
      ListEvent::Loaded | ListEvent::Saved | ListEvent::BoughtCleared { .. } => None,
    }
  }

  pub(crate) fn name(&self) -> &'static str {
    match self {
      ListEvent::Loaded => "loaded",
      ListEvent::Saved => "saved",
      ListEvent::Added { .. } => "added",
      ListEvent::Edited { .. } => "edited",
      ListEvent::BoughtToggled { .. } => "bought_toggled",
      ListEvent::Unmarked { .. } => "unmarked",
      ListEvent::Removed { .. } => "removed",
      ListEvent::BoughtCleared { .. } => "bought_cleared",
    }
  }
}
