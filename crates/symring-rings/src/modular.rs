//! The rings Z/nZ with a modulus chosen at runtime.

use std::fmt;

use crate::context::{FieldContext, RingContext};
use crate::error::RingError;

/// The ring of integers modulo `n`, as a ring context.
///
/// Elements are [`Residue`]s in `0..n`, produced only by the ring itself, so
/// every element a polynomial sees is already reduced. Unlike
/// [`FiniteField`](crate::finite_field::FiniteField) the modulus is data, so
/// one program can work in several such rings at once. With `n == 1` this is
/// the zero ring, where `one() == zero()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntegersModN {
    modulus: u64,
}

/// A residue class modulo the modulus of the [`IntegersModN`] that made it.
///
/// The value is always reduced. Residues from rings with different moduli
/// must not be mixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Residue(u64);

impl Residue {
    /// The representative in `0..n`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl IntegersModN {
    /// Creates the ring Z/nZ.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::ZeroModulus`] if `modulus` is zero.
    pub fn new(modulus: u64) -> Result<Self, RingError> {
        if modulus == 0 {
            return Err(RingError::ZeroModulus);
        }
        Ok(Self { modulus })
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn modulus(&self) -> u64 {
        self.modulus
    }

    /// The residue class of an arbitrary unsigned value.
    #[must_use]
    pub const fn element(&self, value: u64) -> Residue {
        Residue(value % self.modulus)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn reduce_wide(&self, value: u128) -> Residue {
        Residue((value % u128::from(self.modulus)) as u64)
    }
}

impl RingContext for IntegersModN {
    type Element = Residue;

    fn zero(&self) -> Residue {
        Residue(0)
    }

    fn one(&self) -> Residue {
        self.element(1)
    }

    fn is_zero(&self, a: &Residue) -> bool {
        a.0 == 0
    }

    fn add(&self, a: &Residue, b: &Residue) -> Residue {
        self.reduce_wide(u128::from(a.0) + u128::from(b.0))
    }

    fn neg(&self, a: &Residue) -> Residue {
        if a.0 == 0 {
            Residue(0)
        } else {
            Residue(self.modulus - a.0)
        }
    }

    fn mul(&self, a: &Residue, b: &Residue) -> Residue {
        self.reduce_wide(u128::from(a.0) * u128::from(b.0))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn number(&self, n: i64) -> Residue {
        Residue(i128::from(n).rem_euclid(i128::from(self.modulus)) as u64)
    }
}

impl FieldContext for IntegersModN {
    fn inv(&self, a: &Residue) -> Option<Residue> {
        inverse_mod(a.0, self.modulus).map(Residue)
    }
}

/// The inverse of `a` modulo `m` by the extended Euclidean algorithm.
///
/// Returns `None` when `gcd(a, m) != 1`.
pub(crate) fn inverse_mod(a: u64, m: u64) -> Option<u64> {
    let m_wide = i128::from(m);
    let mut t = 0i128;
    let mut new_t = 1i128;
    let mut r = m_wide;
    let mut new_r = i128::from(a) % m_wide;

    while new_r != 0 {
        let quotient = r / new_r;
        (t, new_t) = (new_t, t - quotient * new_t);
        (r, new_r) = (new_r, r - quotient * new_r);
    }

    if r != 1 {
        return None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let inverse = t.rem_euclid(m_wide) as u64;
    Some(inverse)
}
