// shoplist/src/state/clock.rs

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

/// Source of "now" for `dateAdded` / `dateBought` stamps.
pub trait Clock: Send + Sync + 'static {
  fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock(Mutex<DateTime<Utc>>);

impl FixedClock {
  pub fn new(now: DateTime<Utc>) -> Self {
    FixedClock(Mutex::new(now))
  }

  pub fn set(&self, now: DateTime<Utc>) {
    *self.0.lock() = now;
  }

  pub fn advance(&self, by: chrono::Duration) {
    let mut guard = self.0.lock();
    *guard += by;
  }
}

impl Clock for FixedClock {
  fn now(&self) -> DateTime<Utc> {
    *self.0.lock()
  }
}
