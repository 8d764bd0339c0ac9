//! # symring
//!
//! Generic algebra over rings, centered on labeled multivariate polynomials.
//!
//! ## Features
//!
//! - **Coefficient Rings**: arbitrary precision Z and Q, prime fields with a
//!   compile-time characteristic, Z/nZ with a runtime modulus
//! - **Ring Contexts**: any element-level ring, or any value carrying runtime
//!   ring data, drives the polynomial algebra
//! - **Labeled Polynomials**: sparse polynomials keyed by named variables,
//!   always in canonical form
//!
//! ## Quick Start
//!
//! ```
//! use symring::prelude::*;
//!
//! let space = LabeledPolynomialSpace::new(ElementRing::<Z>::new());
//! let x = Symbol::new("x");
//! let y = Symbol::new("y");
//!
//! let p = space.pow(&space.add(&x, &y), 2);
//! assert_eq!(space.degree(&p), 2);
//! assert_eq!(p.len(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use symring_poly as poly;
pub use symring_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use symring_poly::{
        AsLabeledPolynomial, Const, LabeledPolynomial, LabeledPolynomialSpace, Monomial, PolyError, Symbol,
    };
    pub use symring_rings::{
        ElementRing, Field, FieldContext, FiniteField, IntegersModN, Residue, Ring, RingContext, RingError, Q, Z,
    };
}
