// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Errors surfaced by heliocart. These only arise at the storage boundary
/// and in configuration parsing; cart mutations themselves never fail
/// (over-limit requests clamp, unknown ids no-op).
#[derive(Debug, Error)]
pub enum CartError {
  #[error("Malformed cart snapshot. Source: {source}")]
  MalformedSnapshot {
    #[source]
    source: AnyhowError,
  },

  #[error("Cart storage operation failed. Source: {source}")]
  Storage {
    #[source]
    source: AnyhowError,
  },

  #[error("Configuration error: {message}")]
  Configuration { message: String },
}

pub type CartResult<T, E = CartError> = std::result::Result<T, E>;
