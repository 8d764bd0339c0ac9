//! Element-level algebraic structure traits.
//!
//! These traits describe rings whose operations need no runtime data: the
//! element type alone knows its zero, its one and how to combine values. Rings
//! that do need runtime data (a modulus chosen at runtime, say) are described
//! by [`RingContext`](crate::context::RingContext) instead, and
//! [`ElementRing`](crate::context::ElementRing) bridges the two.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// The image of the integer `n` under the canonical map Z -> R.
    ///
    /// The default sums `one()` by binary doubling, so it is correct in any
    /// characteristic. Rings with a direct conversion should override it.
    fn from_i64(n: i64) -> Self {
        let mut result = Self::zero();
        let mut base = Self::one();
        let mut k = n.unsigned_abs();

        while k > 0 {
            if k & 1 == 1 {
                result = result + base.clone();
            }
            base = base.clone() + base;
            k >>= 1;
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// Computes self^n for non-negative n.
    #[must_use]
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }

        result
    }
}

/// A commutative ring where multiplication is commutative.
///
/// Polynomials in this workspace assume commutative coefficients.
pub trait CommutativeRing: Ring {}

/// A field is a commutative ring where every non-zero element has a
/// multiplicative inverse.
pub trait Field: CommutativeRing {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element, or returns `None` when `other` is zero.
    fn checked_div(&self, other: &Self) -> Option<Self> {
        other.inv().map(|inv| self.clone() * inv)
    }
}
