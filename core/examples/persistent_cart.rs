// core/examples/persistent_cart.rs

use heliocart::{CartLineItemInput, CartStore, JsonFileStorage};
use tracing::info;

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Persistent Cart Example ---");

  let dir = tempfile::tempdir().expect("tempdir");
  let snapshot_path = dir.path().join("cart.json");

  // 1. First "session": load from a path with no snapshot yet.
  {
    let store = CartStore::load(JsonFileStorage::new(&snapshot_path));
    assert!(store.is_empty());

    store.add_item(CartLineItemInput {
      product_id: "inv-3k".to_string(),
      name: "Hybrid Inverter 3kW".to_string(),
      slug: "hybrid-inverter-3kw".to_string(),
      price: 45_000,
      discounted_price: None,
      image: "https://cdn.heliora.example/products/inv-3k.webp".to_string(),
      quantity: Some(1),
      max_stock: 3,
    });
    info!("Session 1 wrote a snapshot to {}", snapshot_path.display());
    // The store drops here; the snapshot is already on disk (write-through
    // happens on every mutation, not on drop).
  }

  // 2. Second "session": a fresh store rehydrates from the same snapshot.
  let store = CartStore::load(JsonFileStorage::new(&snapshot_path));
  info!("Session 2 rehydrated {} line(s).", store.len());
  assert_eq!(store.total_items(), 1);
  assert_eq!(store.total_price(), 45_000);

  // 3. Clearing persists the empty snapshot too.
  store.clear();
  let again = CartStore::load(JsonFileStorage::new(&snapshot_path));
  assert!(again.is_empty());
  info!("Snapshot cleared and verified empty.");
}
