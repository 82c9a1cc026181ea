// src/lib.rs

//! Heliocart: a persisted client-side shopping cart engine.
//!
//! Heliocart owns the one piece of storefront state that lives outside the
//! backend: the shopper's cart. It provides:
//!  - Line items that snapshot name/price/stock at add-time.
//!  - Merge-on-add and clamped quantity updates (never above the stock
//!    snapshot, never below 1 except via removal).
//!  - Derived aggregates: total item count and total price under the
//!    discounted-price rule.
//!  - Write-through persistence behind a pluggable `CartStorage` boundary,
//!    with fail-open rehydration on malformed snapshots.
//!  - The delivery-cost policy every checkout consumer must reproduce
//!    identically (free shipping at/above a configured threshold).

// Declare modules according to the planned structure
pub mod cart;
pub mod storage;
pub mod checkout;
pub mod error;

// --- Re-exports for the Public API ---

// Core types that users will interact with frequently
pub use crate::cart::line_item::{CartLineItem, CartLineItemInput};
pub use crate::cart::store::CartStore;

// The persistence boundary and its bundled implementations
pub use crate::storage::{CartStorage, JsonFileStorage, MemoryStorage};

// Checkout-side contract shared by every consumer
pub use crate::checkout::{CheckoutTotals, DeliveryPolicy};

pub use crate::error::{CartError, CartResult};

// --- General Crate-Level Items ---

/*
    Core Workflow:
    1. Pick a storage backend (`JsonFileStorage` for a real session,
       `MemoryStorage` for tests/demos) and call `CartStore::load(storage)`.
       A missing snapshot yields an empty cart; a malformed one fails open.
    2. Hand clones of the store to whatever renders or mutates the cart.
       Clones share the same state; mutation goes through the narrow
       operation surface only.
    3. Mutate with `add_item` / `update_quantity` / `remove_item`; read with
       `lines()` / `total_items()` / `total_price()`.
    4. At checkout, combine `total_price()` with a `DeliveryPolicy` to get
       `CheckoutTotals`, write the order through your backend, and only then
       call `clear()`.
*/
