//! # symring-rings
//!
//! Algebraic structures for symring.
//!
//! This crate provides:
//! - Element-level traits: `Ring`, `CommutativeRing`, `Field`
//! - Ring contexts: `RingContext`, `FieldContext`, and the `ElementRing`
//!   adapter from element-level rings
//! - Concrete rings: Z, Q, Z_p with a compile-time prime, Z/nZ with a
//!   runtime modulus
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring                      RingContext
//!  └── CommutativeRing       └── FieldContext
//!       └── Field
//! ```
//!
//! Consumers that need ring operations (such as polynomial spaces) take a
//! `RingContext` by value, so rings with runtime parameters and rings
//! defined purely by their element type are handled uniformly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod error;
pub mod finite_field;
pub mod integers;
pub mod modular;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use context::{ElementRing, FieldContext, RingContext};
pub use error::RingError;
pub use finite_field::FiniteField;
pub use integers::Z;
pub use modular::{IntegersModN, Residue};
pub use rationals::Q;
pub use traits::{CommutativeRing, Field, Ring};
