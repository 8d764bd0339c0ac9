//! # symring-poly
//!
//! Labeled multivariate polynomials over an arbitrary ring.
//!
//! This crate provides:
//! - `Symbol`: named variables
//! - `Monomial`: exponent maps kept free of zero exponents
//! - `LabeledPolynomial`: sparse maps from monomials to coefficients
//! - `LabeledPolynomialSpace`: the algebra over a `RingContext`, with
//!   validated and unchecked factories, the full operator suite between
//!   integers, constants, symbols and polynomials, degree queries,
//!   substitution and evaluation
//!
//! ## Canonical Form
//!
//! Every value produced by a space has no zero coefficients and no zero
//! exponents, and the zero polynomial is the empty map. Zero is decided by
//! the ring, so in `Z/6Z` the product `2x * 3` is the zero polynomial.
//!
//! ## Example
//!
//! ```
//! use symring_poly::{LabeledPolynomialSpace, Symbol};
//! use symring_rings::{ElementRing, Z};
//!
//! let space = LabeledPolynomialSpace::new(ElementRing::<Z>::new());
//! let x = Symbol::new("x");
//!
//! let p = space.add(space.mul(&x, &x), 1);
//! assert_eq!(space.degree(&p), 2);
//! assert_eq!(p.to_string(), "x^2 + 1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
mod introspect;
pub mod labeled;
pub mod monomial;
pub mod operand;
pub mod space;
mod substitute;
pub mod symbol;

#[cfg(test)]
mod proptests;

pub use error::PolyError;
pub use labeled::{AsLabeledPolynomial, Coefficients, LabeledPolynomial};
pub use monomial::Monomial;
pub use operand::{Const, Operand};
pub use space::LabeledPolynomialSpace;
pub use symbol::Symbol;
