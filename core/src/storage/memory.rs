// core/src/storage/memory.rs

//! In-memory `CartStorage`: the snapshot is a JSON string behind a shared
//! mutex. Cloned handles share the same snapshot, which lets tests mutate a
//! cart through one store and rehydrate a fresh store from the same
//! storage to verify the round trip.

use crate::cart::line_item::CartLineItem;
use crate::error::{CartError, CartResult};
use crate::storage::CartStorage;

use parking_lot::Mutex;
use std::sync::Arc;

/// A `CartStorage` that keeps the serialized snapshot in memory.
///
/// The snapshot goes through the same JSON codec as the file-backed
/// storage, so serialization behavior is exercised rather than bypassed.
#[derive(Clone, Default)]
pub struct MemoryStorage {
  snapshot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  /// The raw serialized snapshot, if any. Exposed for assertions in tests.
  pub fn raw_snapshot(&self) -> Option<String> {
    self.snapshot.lock().clone()
  }
}

impl CartStorage for MemoryStorage {
  fn load(&self) -> CartResult<Option<Vec<CartLineItem>>> {
    let guard = self.snapshot.lock();
    let Some(raw) = guard.as_ref() else {
      return Ok(None);
    };
    let lines = serde_json::from_str(raw).map_err(|e| CartError::MalformedSnapshot {
      source: anyhow::Error::new(e),
    })?;
    Ok(Some(lines))
  }

  fn save(&self, lines: &[CartLineItem]) -> CartResult<()> {
    let raw = serde_json::to_string(lines).map_err(|e| CartError::Storage {
      source: anyhow::Error::new(e),
    })?;
    *self.snapshot.lock() = Some(raw);
    Ok(())
  }
}
