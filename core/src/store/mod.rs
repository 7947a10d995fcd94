// shoplist/src/store/mod.rs
pub mod commit;
pub mod definition;
pub mod operations;

pub use definition::{ListStore, ListStoreBuilder, DEFAULT_STORAGE_KEY};
