// shoplist/src/model/draft.rs

//! User input for creating or editing an item, and its validated form.

use crate::error::{ListError, ListResult};
use crate::model::item::{Priority, ShoppingItem};
use std::fmt;

/// Which draft field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
  Name,
  Quantity,
}

impl fmt::Display for DraftField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DraftField::Name => f.write_str("name"),
      DraftField::Quantity => f.write_str("quantity"),
    }
  }
}

/// Unvalidated add/edit input.
///
/// `quantity` is signed so that zero and negative input can be represented and
/// rejected by [`ItemDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
  pub name: String,
  pub quantity: i64,
  pub priority: Priority,
}

impl Default for ItemDraft {
  fn default() -> Self {
    Self {
      name: String::new(),
      quantity: 1,
      priority: Priority::Middle,
    }
  }
}

impl ItemDraft {
  pub fn new(name: impl Into<String>, quantity: i64, priority: Priority) -> Self {
    Self {
      name: name.into(),
      quantity,
      priority,
    }
  }

  /// Builds a draft from raw form text.
  ///
  /// The quantity text is read up to its first non-digit after an optional
  /// sign (`"3 packs"` is 3). Text with no leading number fails with a
  /// quantity validation error.
  pub fn from_input(name: impl Into<String>, quantity_text: &str, priority: Priority) -> ListResult<Self> {
    let quantity = parse_leading_int(quantity_text)
      .ok_or_else(|| ListError::validation(DraftField::Quantity, "Quantity must be a positive number."))?;
    Ok(Self::new(name, quantity, priority))
  }

  /// Checks the draft, returning the trimmed name and a positive quantity.
  /// The name is checked before the quantity.
  pub fn validate(&self) -> ListResult<ValidDraft> {
    let name = self.name.trim();
    if name.is_empty() {
      return Err(ListError::validation(DraftField::Name, "Item name cannot be empty."));
    }
    let quantity = u32::try_from(self.quantity)
      .ok()
      .filter(|q| *q > 0)
      .ok_or_else(|| ListError::validation(DraftField::Quantity, "Quantity must be a positive number."))?;

    Ok(ValidDraft {
      name: name.to_string(),
      quantity,
      priority: self.priority,
    })
  }
}

impl From<&ShoppingItem> for ItemDraft {
  fn from(item: &ShoppingItem) -> Self {
    Self {
      name: item.name.clone(),
      quantity: i64::from(item.quantity),
      priority: item.priority,
    }
  }
}

/// A draft that passed validation. Only obtainable through [`ItemDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
  name: String,
  quantity: u32,
  priority: Priority,
}

impl ValidDraft {
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn quantity(&self) -> u32 {
    self.quantity
  }

  pub fn priority(&self) -> Priority {
    self.priority
  }
}

fn parse_leading_int(text: &str) -> Option<i64> {
  let text = text.trim_start();
  let (sign, rest) = match text.as_bytes().first() {
    Some(b'-') => (-1, &text[1..]),
    Some(b'+') => (1, &text[1..]),
    _ => (1, text),
  };
  let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
  if digits_len == 0 {
    return None;
  }
  rest[..digits_len].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn validate_trims_name() {
    let valid = ItemDraft::new("  Milk \n", 2, Priority::High).validate().unwrap();
    assert_eq!(valid.name(), "Milk");
    assert_eq!(valid.quantity(), 2);
    assert_eq!(valid.priority(), Priority::High);
  }

  #[test]
  fn whitespace_name_is_rejected_before_quantity() {
    let err = ItemDraft::new("   ", 0, Priority::Low).validate().unwrap_err();
    assert_eq!(err.field(), Some(DraftField::Name));
  }

  #[test]
  fn non_positive_quantity_is_rejected() {
    for q in [0, -3, i64::from(u32::MAX) + 1] {
      let err = ItemDraft::new("Eggs", q, Priority::Middle).validate().unwrap_err();
      assert_eq!(err.field(), Some(DraftField::Quantity), "quantity {}", q);
    }
  }

  #[test]
  fn from_input_reads_leading_integer() {
    assert_eq!(ItemDraft::from_input("Tea", " 3 packs", Priority::Low).unwrap().quantity, 3);
    assert_eq!(ItemDraft::from_input("Tea", "-2", Priority::Low).unwrap().quantity, -2);

    let err = ItemDraft::from_input("Tea", "many", Priority::Low).unwrap_err();
    assert_eq!(err.field(), Some(DraftField::Quantity));
  }

  #[test]
  fn default_draft_matches_empty_form() {
    let draft = ItemDraft::default();
    assert_eq!(draft.quantity, 1);
    assert_eq!(draft.priority, Priority::Middle);
    assert!(draft.name.is_empty());
  }
}
