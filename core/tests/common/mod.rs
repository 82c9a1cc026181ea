// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use heliocart::{CartLineItemInput, CartStorage, CartResult, CartLineItem, CartError};
use tracing::Level;

// --- Common Fixtures ---

/// A catalog-snapshot input for a product, quantity left at the default (1).
pub fn product_input(product_id: &str, price: u64, discounted_price: Option<u64>, max_stock: u32) -> CartLineItemInput {
  CartLineItemInput {
    product_id: product_id.to_string(),
    name: format!("Solar Panel {}", product_id),
    slug: format!("solar-panel-{}", product_id),
    price,
    discounted_price,
    image: format!("https://cdn.heliora.example/products/{}.webp", product_id),
    quantity: None,
    max_stock,
  }
}

/// Same as `product_input` but with an explicit starting quantity.
pub fn product_input_with_quantity(
  product_id: &str,
  price: u64,
  discounted_price: Option<u64>,
  max_stock: u32,
  quantity: u32,
) -> CartLineItemInput {
  CartLineItemInput {
    quantity: Some(quantity),
    ..product_input(product_id, price, discounted_price, max_stock)
  }
}

// --- A storage that always fails its writes, for swallow-and-continue tests ---

pub struct FailingStorage;

impl CartStorage for FailingStorage {
  fn load(&self) -> CartResult<Option<Vec<CartLineItem>>> {
    Ok(None)
  }

  fn save(&self, _lines: &[CartLineItem]) -> CartResult<()> {
    Err(CartError::Storage {
      source: anyhow::anyhow!("simulated storage quota exceeded"),
    })
  }
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
