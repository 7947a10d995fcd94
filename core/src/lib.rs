// shoplist/src/lib.rs

//! shoplist: the state and persistence core of a shopping-list app.
//!
//! The whole list lives under one key in a key-value store as a JSON array.
//! This crate provides:
//!  - Typed items (`ShoppingItem`, `Priority`, `ItemId`) and validated drafts.
//!  - `ListStore`, the single in-process owner of the list: load, save, add,
//!    edit, toggle/unmark bought, remove and clear-bought, each committed to
//!    storage as one write before the in-memory snapshot changes.
//!  - Change subscriptions, so every view observes the same snapshot.
//!  - Pure view projections (unbought/bought views, summary, days-since).
//!  - A `KeyValueStorage` seam with in-memory and file-backed implementations.

pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod state;
pub mod storage;
pub mod store;
pub mod views;

// --- Re-exports for the Public API ---

pub use crate::model::{DraftField, ItemDraft, ItemId, Priority, ShoppingItem, ShoppingList, ValidDraft};

pub use crate::store::{ListStore, ListStoreBuilder, DEFAULT_STORAGE_KEY};

pub use crate::state::{Clock, FixedClock, ListEvent, SharedList, SubscriptionId, SystemClock};

pub use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage};

pub use crate::views::{bought_view, days_since, summary, unbought_view, Summary};

pub use crate::config::StoreConfig;

pub use crate::error::{ErrorKind, ListError, ListResult};

/*
    Typical flow for a screen:
    1. Share one `Arc<ListStore>` between screens.
    2. On start, `store.load().await` (or `load_or_empty()` to fall back to an empty list).
    3. `store.subscribe(|event, list| ...)` to re-render from `unbought_view(list)`,
       `bought_view(list)` and `Summary::of_bought(list)`.
    4. Call `add` / `edit` / `toggle_bought` / `unmark_bought` / `remove` / `clear_bought`
       on user interaction; confirmation dialogs stay in the presentation layer.
*/
