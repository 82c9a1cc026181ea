// core/examples/basic_cart.rs

use heliocart::{CartLineItemInput, CartStore};
use tracing::info;

fn main() {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Cart Example ---");

  // 1. Create an in-memory store (no durable persistence).
  let store = CartStore::in_memory();

  // 2. Add a product. The input is a catalog snapshot: name, price and
  //    stock are captured now and never re-fetched.
  store.add_item(CartLineItemInput {
    product_id: "sp-450".to_string(),
    name: "Solar Panel 450W".to_string(),
    slug: "solar-panel-450w".to_string(),
    price: 12_000,
    discounted_price: Some(10_500),
    image: "https://cdn.heliora.example/products/sp-450.webp".to_string(),
    quantity: None, // defaults to 1
    max_stock: 8,
  });

  // 3. Adding the same product again merges into the existing line.
  store.add_item(CartLineItemInput {
    product_id: "sp-450".to_string(),
    name: "Solar Panel 450W".to_string(),
    slug: "solar-panel-450w".to_string(),
    price: 12_000,
    discounted_price: Some(10_500),
    image: "https://cdn.heliora.example/products/sp-450.webp".to_string(),
    quantity: None,
    max_stock: 8,
  });

  // 4. Over-limit updates clamp to the stock snapshot instead of failing.
  store.update_quantity("sp-450", 99);

  // 5. Inspect the derived aggregates.
  for line in store.lines() {
    info!(
      "- {} x{} @ {} (line total {})",
      line.name,
      line.quantity,
      line.effective_unit_price(),
      line.line_total()
    );
  }
  info!("Total items: {}", store.total_items());
  info!("Subtotal: {}", store.total_price());

  // Clamped to max_stock = 8, charged at the discounted unit price.
  assert_eq!(store.total_items(), 8);
  assert_eq!(store.total_price(), 8 * 10_500);

  // 6. Removal and clearing.
  store.remove_item("sp-450");
  assert!(store.is_empty());
  info!("Cart emptied.");
}
