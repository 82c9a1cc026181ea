// tests/checkout_tests.rs
mod common;

use common::*;
use heliocart::{CartError, CartStore, CheckoutTotals, DeliveryPolicy};
use serial_test::serial;

#[test]
fn test_free_shipping_threshold_is_inclusive() {
  setup_tracing();
  let policy = DeliveryPolicy::default();

  // Exactly at the threshold ships free; one unit below pays the fee.
  assert_eq!(policy.delivery_cost(50_000), 0);
  assert_eq!(policy.delivery_cost(49_999), 500);
  assert_eq!(policy.delivery_cost(0), 500);
}

#[test]
fn test_totals_compose_subtotal_and_delivery() {
  setup_tracing();
  let policy = DeliveryPolicy::new(50_000, 500);

  assert_eq!(
    policy.totals(49_999),
    CheckoutTotals {
      subtotal: 49_999,
      delivery_cost: 500,
      total: 50_499,
    }
  );
  assert_eq!(
    policy.totals(50_000),
    CheckoutTotals {
      subtotal: 50_000,
      delivery_cost: 0,
      total: 50_000,
    }
  );
}

#[test]
fn test_totals_for_store_uses_cart_subtotal() {
  setup_tracing();
  let policy = DeliveryPolicy::new(50_000, 500);
  let store = CartStore::in_memory();

  store.add_item(product_input_with_quantity("p1", 20_000, None, 10, 2));
  store.add_item(product_input("p2", 12_000, Some(10_000), 10));

  let totals = policy.totals_for(&store);
  assert_eq!(totals.subtotal, 50_000);
  assert_eq!(totals.delivery_cost, 0);
  assert_eq!(totals.total, 50_000);
}

#[test]
fn test_empty_cart_still_pays_standard_fee_below_threshold() {
  setup_tracing();
  let policy = DeliveryPolicy::default();
  let store = CartStore::in_memory();

  // The policy is a pure function of the subtotal; whether an order with an
  // empty cart makes sense is the checkout page's concern.
  let totals = policy.totals_for(&store);
  assert_eq!(totals.subtotal, 0);
  assert_eq!(totals.delivery_cost, 500);
}

#[test]
#[serial]
fn test_from_env_defaults_when_unset() {
  setup_tracing();
  std::env::remove_var("HELIOCART_FREE_SHIPPING_THRESHOLD");
  std::env::remove_var("HELIOCART_STANDARD_DELIVERY_FEE");

  let policy = DeliveryPolicy::from_env().expect("defaults should load");
  assert_eq!(policy, DeliveryPolicy::default());
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
  setup_tracing();
  std::env::set_var("HELIOCART_FREE_SHIPPING_THRESHOLD", "75000");
  std::env::set_var("HELIOCART_STANDARD_DELIVERY_FEE", "900");

  let policy = DeliveryPolicy::from_env().expect("overrides should parse");
  assert_eq!(policy, DeliveryPolicy::new(75_000, 900));

  std::env::remove_var("HELIOCART_FREE_SHIPPING_THRESHOLD");
  std::env::remove_var("HELIOCART_STANDARD_DELIVERY_FEE");
}

#[test]
#[serial]
fn test_from_env_rejects_unparsable_values() {
  setup_tracing();
  std::env::set_var("HELIOCART_FREE_SHIPPING_THRESHOLD", "fifty thousand");

  let result = DeliveryPolicy::from_env();
  match result {
    Err(CartError::Configuration { message }) => {
      assert!(message.contains("HELIOCART_FREE_SHIPPING_THRESHOLD"));
    }
    other => panic!("expected Configuration error, got {:?}", other),
  }

  std::env::remove_var("HELIOCART_FREE_SHIPPING_THRESHOLD");
}

// The checkout flow the storefront runs: compute totals, write the order
// through the backend, clear only after the write is confirmed.
#[test]
fn test_clear_after_confirmed_order_write() {
  setup_tracing();
  let policy = DeliveryPolicy::default();
  let store = CartStore::in_memory();
  store.add_item(product_input_with_quantity("p1", 30_000, None, 5, 2));

  let totals = policy.totals_for(&store);
  assert_eq!(totals.subtotal, 60_000);
  assert_eq!(totals.delivery_cost, 0);

  // Order items derive 1:1 from cart lines at write time.
  let order_items = store.lines();
  assert_eq!(order_items.len(), 1);

  // ... order + order-items confirmed written by the backend here ...
  store.clear();
  assert!(store.is_empty());
}
