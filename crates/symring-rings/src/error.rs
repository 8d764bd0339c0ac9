//! Errors raised when building rings.

use thiserror::Error;

/// Errors that can occur when constructing a ring context.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RingError {
    /// The integers modulo zero are not a finite ring.
    #[error("modulus must be positive, got 0")]
    ZeroModulus,
}
