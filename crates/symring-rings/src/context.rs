//! Ring contexts: ring operations carried by a value rather than a type.
//!
//! A [`RingContext`] owns whatever data its operations need (a modulus chosen
//! at runtime, for example) and is handed to consumers such as polynomial
//! spaces at construction time. Element-level rings with no runtime data are
//! adapted through [`ElementRing`].

use std::fmt;
use std::marker::PhantomData;

use crate::traits::{Field, Ring};

/// The operations of a ring, provided by a context value.
///
/// # Laws
///
/// The same as for [`Ring`]: `add` is associative and commutative with
/// identity `zero()`, `mul` is associative with identity `one()` and
/// distributes over `add`, and `neg` gives additive inverses.
pub trait RingContext {
    /// The type of ring elements.
    type Element: Clone + PartialEq + fmt::Debug;

    /// The additive identity.
    fn zero(&self) -> Self::Element;

    /// The multiplicative identity.
    fn one(&self) -> Self::Element;

    /// Returns true if `a` is the additive identity.
    fn is_zero(&self, a: &Self::Element) -> bool {
        *a == self.zero()
    }

    /// Returns true if `a` is the multiplicative identity.
    fn is_one(&self, a: &Self::Element) -> bool {
        *a == self.one()
    }

    /// Computes `a + b`.
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Computes `-a`.
    fn neg(&self, a: &Self::Element) -> Self::Element;

    /// Computes `a - b`.
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.add(a, &self.neg(b))
    }

    /// Computes `a * b`.
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// The image of the integer `n` under the canonical map Z -> R.
    ///
    /// This is the single way integers enter a ring, so results agree with
    /// repeated addition of `one()` even in positive characteristic.
    fn number(&self, n: i64) -> Self::Element {
        let mut result = self.zero();
        let mut base = self.one();
        let mut k = n.unsigned_abs();

        while k > 0 {
            if k & 1 == 1 {
                result = self.add(&result, &base);
            }
            base = self.add(&base, &base);
            k >>= 1;
        }

        if n < 0 {
            self.neg(&result)
        } else {
            result
        }
    }

    /// Computes `a^n` by repeated squaring.
    fn pow(&self, a: &Self::Element, n: u32) -> Self::Element {
        let mut result = self.one();
        let mut base = a.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(&result, &base);
            }
            exp >>= 1;
            if exp > 0 {
                base = self.mul(&base, &base);
            }
        }

        result
    }
}

/// A ring context whose non-zero elements may be invertible.
pub trait FieldContext: RingContext {
    /// The multiplicative inverse of `a`, or `None` if it has none.
    fn inv(&self, a: &Self::Element) -> Option<Self::Element>;

    /// Computes `a / b`, or `None` if `b` is not invertible.
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element> {
        self.inv(b).map(|inv| self.mul(a, &inv))
    }
}

/// The ring context of an element-level [`Ring`].
///
/// This carries no data; every operation forwards to `R`.
pub struct ElementRing<R>(PhantomData<fn() -> R>);

impl<R> ElementRing<R> {
    /// Creates the context.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<R> Default for ElementRing<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for ElementRing<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ElementRing<R> {}

impl<R> fmt::Debug for ElementRing<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementRing<{}>", std::any::type_name::<R>())
    }
}

impl<R: Ring> RingContext for ElementRing<R> {
    type Element = R;

    fn zero(&self) -> R {
        R::zero()
    }

    fn one(&self) -> R {
        R::one()
    }

    fn is_zero(&self, a: &R) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &R) -> bool {
        a.is_one()
    }

    fn add(&self, a: &R, b: &R) -> R {
        a.clone() + b.clone()
    }

    fn neg(&self, a: &R) -> R {
        -a.clone()
    }

    fn sub(&self, a: &R, b: &R) -> R {
        a.clone() - b.clone()
    }

    fn mul(&self, a: &R, b: &R) -> R {
        a.clone() * b.clone()
    }

    fn number(&self, n: i64) -> R {
        R::from_i64(n)
    }

    fn pow(&self, a: &R, n: u32) -> R {
        a.pow(n)
    }
}

impl<R: Field> FieldContext for ElementRing<R> {
    fn inv(&self, a: &R) -> Option<R> {
        a.inv()
    }
}
