// shoplist/src/codec.rs

//! JSON encoding of the persisted blob.
//!
//! The blob is a bare array of item records. Decoding also checks the
//! collection invariants, so a blob that parses but describes an impossible
//! list (duplicate ids, zero quantity, `dateBought` out of step with `bought`)
//! is reported as a read failure rather than loaded.

use crate::error::{ListError, ListResult};
use crate::model::ShoppingList;
use anyhow::{anyhow, Context as AnyhowContext};

pub fn encode(key: &str, list: &ShoppingList) -> ListResult<String> {
  serde_json::to_string(list)
    .context("serializing shopping list")
    .map_err(|e| ListError::write(key, e))
}

pub fn decode(key: &str, blob: &str) -> ListResult<ShoppingList> {
  let list: ShoppingList = serde_json::from_str(blob)
    .context("deserializing shopping list")
    .map_err(|e| ListError::read(key, e))?;
  check(key, &list).map_err(|e| ListError::read(key, e))?;
  Ok(list)
}

pub(crate) fn check(key: &str, list: &ShoppingList) -> anyhow::Result<()> {
  match list.invariant_violation() {
    Some(violation) => Err(anyhow!("stored list under '{}' is invalid: {}", key, violation)),
    None => Ok(()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ErrorKind;

  #[test]
  fn decodes_blob_with_missing_and_null_date_bought() {
    let blob = r#"[
      {"id":"1717171717171","name":"Milk","priority":"High","bought":false,"dateAdded":"2024-05-31T16:08:37.171Z","quantity":2},
      {"id":"b","name":"Bread","priority":"Low","bought":false,"dateAdded":"2024-05-31T16:08:37.171Z","quantity":1,"dateBought":null},
      {"id":"c","name":"Tea","priority":"Middle","bought":true,"dateAdded":"2024-05-31T16:08:37.171Z","quantity":3,"dateBought":"2024-06-02T09:00:00.000Z"}
    ]"#;
    let list = decode("shoppingList", blob).unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list.items()[0].id.as_str(), "1717171717171");
    assert!(list.items()[1].date_bought.is_none());
    assert!(list.items()[2].date_bought.is_some());
  }

  #[test]
  fn encode_omits_absent_date_bought() {
    let blob = r#"[{"id":"a","name":"Milk","priority":"High","bought":false,"dateAdded":"2024-05-31T16:08:37.171Z","quantity":2}]"#;
    let list = decode("k", blob).unwrap();
    let out = encode("k", &list).unwrap();
    assert!(!out.contains("dateBought"));
    assert!(out.contains(r#""dateAdded":"2024-05-31T16:08:37.171Z""#));
    assert!(out.contains(r#""priority":"High""#));
  }

  #[test]
  fn rejects_malformed_json() {
    let err = decode("k", "[{not json").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StorageRead);
  }

  #[test]
  fn rejects_invariant_violations() {
    let duplicate = r#"[
      {"id":"a","name":"Milk","priority":"High","bought":false,"dateAdded":"2024-05-31T16:08:37Z","quantity":2},
      {"id":"a","name":"Eggs","priority":"Low","bought":false,"dateAdded":"2024-05-31T16:08:37Z","quantity":6}
    ]"#;
    let bought_without_date =
      r#"[{"id":"a","name":"Milk","priority":"High","bought":true,"dateAdded":"2024-05-31T16:08:37Z","quantity":2}]"#;
    let zero_quantity =
      r#"[{"id":"a","name":"Milk","priority":"High","bought":false,"dateAdded":"2024-05-31T16:08:37Z","quantity":0}]"#;

    for blob in [duplicate, bought_without_date, zero_quantity] {
      let err = decode("k", blob).unwrap_err();
      assert_eq!(err.kind(), ErrorKind::StorageRead, "blob: {}", blob);
    }
  }
}
