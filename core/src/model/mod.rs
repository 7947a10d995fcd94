// shoplist/src/model/mod.rs

//! Data structures for the persisted shopping list.

pub mod draft;
pub mod item;
pub mod list;

pub use draft::{DraftField, ItemDraft, ValidDraft};
pub use item::{ItemId, ParsePriorityError, Priority, ShoppingItem};
pub use list::ShoppingList;
