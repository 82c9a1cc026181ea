// core/src/storage/mod.rs

//! The persistence boundary for cart snapshots.
//!
//! `CartStore` writes the full line-item list through a `CartStorage` on
//! every mutation and reads it back once at initialization. The boundary is
//! a trait so hosts can bring their own storage (browser-local storage
//! bridge, key-value store, ...); the bundled implementations cover the
//! common cases: a JSON file on disk and an in-memory snapshot for tests.

pub mod json_file;
pub mod memory;

// Re-export the bundled implementations for users.
pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::cart::line_item::CartLineItem;
use crate::error::CartResult;

/// A storage target for the persisted cart snapshot.
///
/// Implementations must round-trip exactly: the lines handed to `save` come
/// back identical from `load`. A missing snapshot is `Ok(None)`, never an
/// error — a shopper with no persisted cart simply starts empty.
pub trait CartStorage: Send + Sync {
  /// Reads the persisted snapshot.
  ///
  /// Returns `Ok(None)` when no snapshot exists,
  /// `Err(CartError::MalformedSnapshot)` when one exists but cannot be
  /// decoded, and `Err(CartError::Storage)` for I/O failures. The store
  /// fails open to an empty cart on either error.
  fn load(&self) -> CartResult<Option<Vec<CartLineItem>>>;

  /// Writes the full snapshot, replacing any previous one.
  fn save(&self, lines: &[CartLineItem]) -> CartResult<()>;
}
