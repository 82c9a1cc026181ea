// core/src/cart/store.rs

//! Defines `CartStore`, the shared state container for the shopper's cart.
//!
//! The store is a cloneable handle over `Arc<RwLock<...>>`: one owning
//! instance per application session, shared by clone with every component
//! that renders or mutates the cart. Mutation happens only through the
//! operations defined here; readers get cloned snapshots, never references
//! into the locked state.
//!
//! Every mutation ends with a best-effort write-through to the configured
//! `CartStorage`. A failed write is logged and swallowed: the in-memory
//! state stays authoritative for the rest of the session.

use crate::cart::line_item::{CartLineItem, CartLineItemInput};
use crate::error::CartError;
use crate::storage::{CartStorage, MemoryStorage};

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{event, instrument, Level};

struct CartStoreInner {
  lines: RwLock<Vec<CartLineItem>>,
  storage: Box<dyn CartStorage>,
}

/// The authoritative client-side representation of what the shopper
/// intends to buy.
///
/// The cart is anonymous, client-owned state: it exists independently of
/// any authentication session and performs no I/O beyond the local
/// persistence boundary. All operations are synchronous and infallible;
/// over-limit requests clamp and unknown line ids no-op (see the
/// per-operation docs).
pub struct CartStore {
  inner: Arc<CartStoreInner>,
}

impl CartStore {
  /// Creates a store rehydrated from `storage`.
  ///
  /// A missing snapshot yields an empty cart. A malformed or unreadable
  /// snapshot also yields an empty cart — the store fails open rather than
  /// blocking the application on stale local state (the event is logged
  /// at WARN).
  pub fn load(storage: impl CartStorage + 'static) -> Self {
    let lines = match storage.load() {
      Ok(Some(lines)) => {
        event!(Level::DEBUG, line_count = lines.len(), "Cart rehydrated from snapshot.");
        lines
      }
      Ok(None) => {
        event!(Level::DEBUG, "No cart snapshot present; starting empty.");
        Vec::new()
      }
      Err(err) => {
        event!(Level::WARN, error = %err, "Cart snapshot unreadable; failing open to an empty cart.");
        Vec::new()
      }
    };

    Self {
      inner: Arc::new(CartStoreInner {
        lines: RwLock::new(lines),
        storage: Box::new(storage),
      }),
    }
  }

  /// Creates an empty store backed by `MemoryStorage`. Useful for tests
  /// and hosts that do not want durable persistence.
  pub fn in_memory() -> Self {
    Self::load(MemoryStorage::new())
  }

  /// Adds a product to the cart.
  ///
  /// If a line with the same `product_id` already exists, its quantity is
  /// incremented by the requested amount (default 1) and clamped to the
  /// line's stock snapshot; the rest of the existing snapshot (name, price,
  /// stock ceiling) is kept as captured by the first add. Otherwise a new
  /// line is inserted with its quantity clamped into `[1, max_stock]`.
  ///
  /// Over-limit requests clamp silently; this operation never fails.
  #[instrument(
    name = "CartStore::add_item",
    skip(self, input),
    fields(product_id = %input.product_id, requested = input.quantity.unwrap_or(1))
  )]
  pub fn add_item(&self, input: CartLineItemInput) {
    let mut lines = self.inner.lines.write();

    if let Some(line) = lines.iter_mut().find(|line| line.product_id == input.product_id) {
      let increment = u64::from(input.quantity.unwrap_or(1));
      let requested = u64::from(line.quantity).saturating_add(increment);
      let clamped = line.clamp_quantity(requested);
      if u64::from(clamped) != requested {
        event!(
          Level::DEBUG,
          max_stock = line.max_stock,
          "Add request exceeded stock snapshot; clamped."
        );
      }
      line.quantity = clamped;
    } else {
      lines.push(input.into_line());
    }

    self.persist(&lines);
  }

  /// Sets the absolute quantity of the line with `id`.
  ///
  /// A target of zero or below removes the line entirely. Positive targets
  /// are clamped to the line's stock snapshot. An unknown `id` is a no-op:
  /// the UI drives this from rendered lists that may be stale, and
  /// idempotent updates are safer than raising.
  #[instrument(name = "CartStore::update_quantity", skip(self), fields(line_id = %id, quantity))]
  pub fn update_quantity(&self, id: &str, quantity: i64) {
    let mut lines = self.inner.lines.write();

    if quantity <= 0 {
      let before = lines.len();
      lines.retain(|line| line.id != id);
      if lines.len() == before {
        event!(Level::DEBUG, "Non-positive quantity for unknown line; nothing to remove.");
        return;
      }
      event!(Level::DEBUG, "Non-positive quantity removed the line.");
    } else {
      let Some(line) = lines.iter_mut().find(|line| line.id == id) else {
        event!(Level::DEBUG, "Quantity update for unknown line; no-op.");
        return;
      };
      line.quantity = line.clamp_quantity(quantity as u64);
    }

    self.persist(&lines);
  }

  /// Removes the line with `id` if present; unknown ids are a no-op.
  #[instrument(name = "CartStore::remove_item", skip(self), fields(line_id = %id))]
  pub fn remove_item(&self, id: &str) {
    let mut lines = self.inner.lines.write();
    let before = lines.len();
    lines.retain(|line| line.id != id);
    if lines.len() == before {
      event!(Level::DEBUG, "Remove for unknown line; no-op.");
      return;
    }
    self.persist(&lines);
  }

  /// Empties the cart.
  ///
  /// Caller contract: at checkout, call this only AFTER the order and its
  /// order-item records have been confirmed persisted by the order backend.
  /// Clearing is not atomic with order placement; clearing first and
  /// failing the order write loses the cart contents unrecoverably.
  #[instrument(name = "CartStore::clear", skip(self))]
  pub fn clear(&self) {
    let mut lines = self.inner.lines.write();
    lines.clear();
    self.persist(&lines);
  }

  /// Sum of quantities across all lines; 0 for an empty cart.
  pub fn total_items(&self) -> u64 {
    self.inner.lines.read().iter().map(|line| u64::from(line.quantity)).sum()
  }

  /// Sum of `effective_unit_price * quantity` across all lines; 0 for an
  /// empty cart. Excludes tax and delivery — those are computed by checkout
  /// consumers from this subtotal (see `DeliveryPolicy`).
  pub fn total_price(&self) -> u64 {
    self
      .inner
      .lines
      .read()
      .iter()
      .fold(0u64, |acc, line| acc.saturating_add(line.line_total()))
  }

  /// A cloned snapshot of all lines, in insertion order. Intended for
  /// rendering; mutating the returned vector does not touch the cart.
  pub fn lines(&self) -> Vec<CartLineItem> {
    self.inner.lines.read().clone()
  }

  /// A cloned snapshot of the line with `id`, if present.
  pub fn line(&self, id: &str) -> Option<CartLineItem> {
    self.inner.lines.read().iter().find(|line| line.id == id).cloned()
  }

  /// Number of distinct lines (not units; see `total_items`).
  pub fn len(&self) -> usize {
    self.inner.lines.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.lines.read().is_empty()
  }

  /// Best-effort write-through. Persistence failures never unwind the
  /// in-memory mutation; they are logged and swallowed, and the in-memory
  /// state remains authoritative for the rest of the session.
  fn persist(&self, lines: &[CartLineItem]) {
    if let Err(err) = self.inner.storage.save(lines) {
      match err {
        CartError::Storage { source } => {
          event!(Level::WARN, error = %source, "Cart snapshot write failed; continuing in-memory.");
        }
        other => {
          event!(Level::WARN, error = %other, "Cart snapshot write failed; continuing in-memory.");
        }
      }
    }
  }
}

impl Clone for CartStore {
  fn clone(&self) -> Self {
    CartStore {
      inner: Arc::clone(&self.inner),
    }
  }
}

impl std::fmt::Debug for CartStore {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CartStore")
      .field("lines", &self.inner.lines.read().len())
      .finish()
  }
}
