// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use shoplist::{FixedClock, ItemDraft, KeyValueStorage, ListEvent, ListStore, MemoryStorage, Priority};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;

pub const KEY: &str = "shoppingList";

// --- Storage that can be told to fail ---
#[derive(Debug, Default)]
pub struct FlakyStorage {
  pub inner: MemoryStorage,
  pub fail_reads: AtomicBool,
  pub fail_writes: AtomicBool,
  pub writes: AtomicUsize,
}

impl FlakyStorage {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_entry(key: &str, value: &str) -> Self {
    Self {
      inner: MemoryStorage::with_entry(key, value),
      ..Default::default()
    }
  }

  pub fn set_fail_writes(&self, fail: bool) {
    self.fail_writes.store(fail, Ordering::SeqCst);
  }

  pub fn set_fail_reads(&self, fail: bool) {
    self.fail_reads.store(fail, Ordering::SeqCst);
  }

  pub fn write_count(&self) -> usize {
    self.writes.load(Ordering::SeqCst)
  }

  pub fn raw(&self, key: &str) -> Option<String> {
    self.inner.raw(key)
  }
}

#[async_trait]
impl KeyValueStorage for FlakyStorage {
  async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
    if self.fail_reads.load(Ordering::SeqCst) {
      return Err(anyhow!("simulated read failure"));
    }
    self.inner.get(key).await
  }

  async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
    if self.fail_writes.load(Ordering::SeqCst) {
      return Err(anyhow!("simulated write failure"));
    }
    self.writes.fetch_add(1, Ordering::SeqCst);
    self.inner.set(key, value).await
  }
}

// --- Fixtures ---
pub fn t0() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
}

pub fn draft(name: &str, quantity: i64, priority: Priority) -> ItemDraft {
  ItemDraft::new(name, quantity, priority)
}

/// A store over shared flaky storage with a clock fixed at `t0()`.
pub fn test_store() -> (ListStore, Arc<FlakyStorage>, Arc<FixedClock>) {
  let storage = Arc::new(FlakyStorage::new());
  let clock = Arc::new(FixedClock::new(t0()));
  let store = ListStore::builder(storage.clone())
    .shared_clock(clock.clone())
    .build();
  (store, storage, clock)
}

/// Records every event a store publishes.
pub fn record_events(store: &ListStore) -> Arc<parking_lot::Mutex<Vec<(ListEvent, usize)>>> {
  let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
  let sink = seen.clone();
  store.subscribe(move |event, list| sink.lock().push((event.clone(), list.len())));
  seen
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
