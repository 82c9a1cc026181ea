// core/examples/checkout_totals.rs

use heliocart::{CartLineItemInput, CartStore, DeliveryPolicy};
use tracing::info;

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Checkout Totals Example ---");

  // 1. Policy from the environment (HELIOCART_FREE_SHIPPING_THRESHOLD /
  //    HELIOCART_STANDARD_DELIVERY_FEE), defaults 50_000 / 500.
  let policy = DeliveryPolicy::from_env().expect("delivery policy");
  info!(
    "Free shipping at {} and above, otherwise a flat fee of {}.",
    policy.free_shipping_threshold, policy.standard_fee
  );

  let store = CartStore::in_memory();
  store.add_item(CartLineItemInput {
    product_id: "bat-5k".to_string(),
    name: "Storage Battery 5kWh".to_string(),
    slug: "storage-battery-5kwh".to_string(),
    price: 49_999,
    discounted_price: None,
    image: "https://cdn.heliora.example/products/bat-5k.webp".to_string(),
    quantity: None,
    max_stock: 2,
  });

  // 2. One unit below the threshold: the flat fee applies.
  let below = policy.totals_for(&store);
  info!(
    "Subtotal {} -> delivery {} -> total {}",
    below.subtotal, below.delivery_cost, below.total
  );
  assert_eq!(below.delivery_cost, policy.standard_fee);

  // 3. Crossing the threshold waives delivery (inclusive boundary).
  store.update_quantity("bat-5k", 2);
  let above = policy.totals_for(&store);
  info!(
    "Subtotal {} -> delivery {} -> total {}",
    above.subtotal, above.delivery_cost, above.total
  );
  assert_eq!(above.delivery_cost, 0);
  assert_eq!(above.total, above.subtotal);
}
