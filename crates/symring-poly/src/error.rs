//! Errors for polynomial operations that can fail.

use thiserror::Error;

use crate::symbol::Symbol;

/// Errors returned by partial polynomial operations.
///
/// The algebra itself is total; only operations that need data from the
/// caller, such as full evaluation, can fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// Evaluation reached a variable the assignment does not cover.
    #[error("variable {0} has no assigned value")]
    UnboundVariable(Symbol),
}
