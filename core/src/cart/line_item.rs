// core/src/cart/line_item.rs

//! Defines the cart's line-item value objects.
//!
//! A `CartLineItem` is a snapshot: name, slug, price, discounted price,
//! image and stock ceiling are captured at add-time and never re-derived
//! from a live catalog. Price changes or stock movements in the catalog
//! after the add do not retroactively change the cart.

use serde::{Deserialize, Serialize};

/// One product line in the cart. Exactly one line exists per distinct
/// `product_id`; the `id` of the line equals that product id.
///
/// Prices are in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
  /// Line identifier; equal to `product_id` in this design.
  pub id: String,
  /// The catalog product being purchased.
  pub product_id: String,
  pub name: String,
  /// Routing identifier to the product detail page.
  pub slug: String,
  /// Regular unit price, captured at add-time.
  pub price: u64,
  /// Optional discounted unit price; when present and non-zero it is the
  /// effective charged price.
  pub discounted_price: Option<u64>,
  /// URL of the representative product image.
  pub image: String,
  /// Units desired; always an integer in `[1, max_stock]`.
  pub quantity: u32,
  /// Stock snapshot captured at add-time, the ceiling for `quantity`.
  pub max_stock: u32,
}

impl CartLineItem {
  /// The unit price this line is actually charged at: the discounted price
  /// when present and non-zero, the regular price otherwise.
  pub fn effective_unit_price(&self) -> u64 {
    match self.discounted_price {
      Some(discounted) if discounted > 0 => discounted,
      _ => self.price,
    }
  }

  /// `effective_unit_price * quantity` for this line.
  pub fn line_total(&self) -> u64 {
    self.effective_unit_price().saturating_mul(u64::from(self.quantity))
  }

  /// Clamps a requested quantity into `[1, max_stock]`.
  ///
  /// The floor wins over the ceiling: the store never produces a line with
  /// `quantity < 1` (removal is the only way below 1), so a zero-stock
  /// snapshot still yields quantity 1. Keeping a zero-stock product out of
  /// the cart is the caller's responsibility, per the add contract.
  pub(crate) fn clamp_quantity(&self, requested: u64) -> u32 {
    let ceiling = u64::from(self.max_stock.max(1));
    requested.clamp(1, ceiling) as u32
  }
}

/// Add-time descriptor for a line: the full catalog snapshot plus an
/// optional starting quantity (1 when unspecified).
///
/// Callers build this from a catalog product record. Adding a product whose
/// available stock is zero is expected to be prevented upstream; the store
/// does not re-validate against a live catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItemInput {
  pub product_id: String,
  pub name: String,
  pub slug: String,
  pub price: u64,
  pub discounted_price: Option<u64>,
  pub image: String,
  /// Starting quantity / increment amount. `None` means 1.
  pub quantity: Option<u32>,
  pub max_stock: u32,
}

impl CartLineItemInput {
  /// Materializes the input into a fresh line with its quantity clamped
  /// into `[1, max_stock]`.
  pub(crate) fn into_line(self) -> CartLineItem {
    let mut line = CartLineItem {
      id: self.product_id.clone(),
      product_id: self.product_id,
      name: self.name,
      slug: self.slug,
      price: self.price,
      discounted_price: self.discounted_price,
      image: self.image,
      quantity: 1,
      max_stock: self.max_stock,
    };
    line.quantity = line.clamp_quantity(u64::from(self.quantity.unwrap_or(1)));
    line
  }
}
