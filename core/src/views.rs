// shoplist/src/views.rs

//! Pure projections over a list snapshot: the unbought and bought views, the
//! summary statistics shown above them, and the "days ago" figures.
//!
//! None of these read the clock; callers pass `now` explicitly.

use crate::model::{ShoppingItem, ShoppingList};
use chrono::{DateTime, Duration, Utc};

/// Items still to buy, in insertion order.
pub fn unbought_view(list: &ShoppingList) -> Vec<&ShoppingItem> {
  list.iter().filter(|item| !item.bought).collect()
}

/// Bought items, in insertion order.
pub fn bought_view(list: &ShoppingList) -> Vec<&ShoppingItem> {
  list.iter().filter(|item| item.bought).collect()
}

pub fn bought_count(list: &ShoppingList) -> usize {
  list.iter().filter(|item| item.bought).count()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
  pub count: usize,
  pub high_priority_count: usize,
  pub total_quantity: u64,
}

impl Summary {
  pub fn of_bought(list: &ShoppingList) -> Self {
    summary(list.iter().filter(|item| item.bought))
  }

  pub fn of_unbought(list: &ShoppingList) -> Self {
    summary(list.iter().filter(|item| !item.bought))
  }
}

/// Count, high-priority count and total quantity of `items`, in one pass.
pub fn summary<'a, I>(items: I) -> Summary
where
  I: IntoIterator<Item = &'a ShoppingItem>,
{
  items.into_iter().fold(Summary::default(), |mut acc, item| {
    acc.count += 1;
    if item.is_high_priority() {
      acc.high_priority_count += 1;
    }
    acc.total_quantity += u64::from(item.quantity);
    acc
  })
}

/// Whole days between `timestamp` and `now`, rounded up.
///
/// The difference is taken as an absolute value, so a timestamp slightly ahead
/// of `now` (clock skew) still counts as one day rather than going negative.
pub fn days_since(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
  let elapsed = now - timestamp;
  let elapsed = if elapsed < Duration::zero() { -elapsed } else { elapsed };
  let whole_days = elapsed.num_days();
  // Any remainder, down to the nanosecond, counts as a started day.
  if elapsed > Duration::days(whole_days) {
    whole_days + 1
  } else {
    whole_days
  }
}

pub fn days_since_added(item: &ShoppingItem, now: DateTime<Utc>) -> i64 {
  days_since(item.date_added, now)
}

/// `0` for items without a `dateBought`.
pub fn days_since_bought(item: &ShoppingItem, now: DateTime<Utc>) -> i64 {
  item.date_bought.map_or(0, |bought_at| days_since(bought_at, now))
}
