// core/src/checkout.rs

//! The checkout-side contract over the cart's subtotal.
//!
//! Delivery cost is not computed by the cart store; it is a policy every
//! checkout consumer (cart page, checkout page, order writer) must apply
//! identically: free at or above a configured subtotal threshold, a flat
//! fee below it.

use crate::cart::store::CartStore;
use crate::error::{CartError, CartResult};

use serde::Serialize;
use std::env;

/// Default free-shipping threshold, in minor currency units.
pub const DEFAULT_FREE_SHIPPING_THRESHOLD: u64 = 50_000;
/// Default flat delivery fee below the threshold, in minor currency units.
pub const DEFAULT_STANDARD_DELIVERY_FEE: u64 = 500;

const THRESHOLD_ENV: &str = "HELIOCART_FREE_SHIPPING_THRESHOLD";
const FEE_ENV: &str = "HELIOCART_STANDARD_DELIVERY_FEE";

/// The delivery-cost policy: subtotals at or above
/// `free_shipping_threshold` ship free, everything below pays
/// `standard_fee`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeliveryPolicy {
  pub free_shipping_threshold: u64,
  pub standard_fee: u64,
}

impl Default for DeliveryPolicy {
  fn default() -> Self {
    Self {
      free_shipping_threshold: DEFAULT_FREE_SHIPPING_THRESHOLD,
      standard_fee: DEFAULT_STANDARD_DELIVERY_FEE,
    }
  }
}

impl DeliveryPolicy {
  pub fn new(free_shipping_threshold: u64, standard_fee: u64) -> Self {
    Self {
      free_shipping_threshold,
      standard_fee,
    }
  }

  /// Builds the policy from `HELIOCART_FREE_SHIPPING_THRESHOLD` and
  /// `HELIOCART_STANDARD_DELIVERY_FEE`, falling back to the defaults for
  /// unset variables. Set-but-unparsable values are a configuration error
  /// rather than a silent fallback.
  pub fn from_env() -> CartResult<Self> {
    let parse_var = |var_name: &str, default: u64| -> CartResult<u64> {
      match env::var(var_name) {
        Ok(raw) => raw.parse::<u64>().map_err(|e| CartError::Configuration {
          message: format!("Invalid {}: {}", var_name, e),
        }),
        Err(_) => Ok(default),
      }
    };

    let policy = Self {
      free_shipping_threshold: parse_var(THRESHOLD_ENV, DEFAULT_FREE_SHIPPING_THRESHOLD)?,
      standard_fee: parse_var(FEE_ENV, DEFAULT_STANDARD_DELIVERY_FEE)?,
    };
    tracing::debug!(
      threshold = policy.free_shipping_threshold,
      fee = policy.standard_fee,
      "Delivery policy loaded."
    );
    Ok(policy)
  }

  /// Delivery cost for a given subtotal. The threshold is inclusive: a
  /// subtotal exactly equal to it ships free.
  pub fn delivery_cost(&self, subtotal: u64) -> u64 {
    if subtotal >= self.free_shipping_threshold {
      0
    } else {
      self.standard_fee
    }
  }

  /// The full subtotal/delivery/total breakdown for a given subtotal.
  pub fn totals(&self, subtotal: u64) -> CheckoutTotals {
    let delivery_cost = self.delivery_cost(subtotal);
    CheckoutTotals {
      subtotal,
      delivery_cost,
      total: subtotal.saturating_add(delivery_cost),
    }
  }

  /// Convenience over `store.total_price()`.
  pub fn totals_for(&self, store: &CartStore) -> CheckoutTotals {
    self.totals(store.total_price())
  }
}

/// The amounts a checkout consumer writes into an order record. Tax is out
/// of scope here; consumers layer it on separately if they charge it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckoutTotals {
  pub subtotal: u64,
  pub delivery_cost: u64,
  pub total: u64,
}
