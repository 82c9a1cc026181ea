pub mod line_item;
pub mod store;

// Re-export key types for easier access from other heliocart modules (and lib.rs)
pub use line_item::{CartLineItem, CartLineItemInput};
pub use store::CartStore;
