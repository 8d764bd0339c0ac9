//! Prime fields Z_p with a compile-time modulus.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::modular::inverse_mod;
use crate::traits::{CommutativeRing, Field, Ring};

/// The finite field Z_p for a prime p known at compile time.
///
/// The stored value is always the canonical residue in `0..P`. `P` must be
/// prime for the [`Field`] laws to hold; this is not checked.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct FiniteField<const P: u64>(u64);

impl<const P: u64> FiniteField<P> {
    /// Creates a new field element.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Creates a field element from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
        let residue = i128::from(value).rem_euclid(i128::from(P)) as u64;
        Self(residue)
    }

    /// Returns the value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the characteristic (the prime p).
    #[must_use]
    pub const fn characteristic() -> u64 {
        P
    }
}

impl<const P: u64> Ring for FiniteField<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn one() -> Self {
        Self::new(1)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_one(&self) -> bool {
        self.0 == 1 % P
    }

    fn from_i64(n: i64) -> Self {
        Self::from_signed(n)
    }
}

impl<const P: u64> CommutativeRing for FiniteField<P> {}

impl<const P: u64> Field for FiniteField<P> {
    fn inv(&self) -> Option<Self> {
        inverse_mod(self.0, P).map(Self)
    }
}

impl<const P: u64> Add for FiniteField<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        #[allow(clippy::cast_possible_truncation)]
        let sum = ((u128::from(self.0) + u128::from(rhs.0)) % u128::from(P)) as u64;
        Self(sum)
    }
}

impl<const P: u64> Sub for FiniteField<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<const P: u64> Mul for FiniteField<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        #[allow(clippy::cast_possible_truncation)]
        let product = ((u128::from(self.0) * u128::from(rhs.0)) % u128::from(P)) as u64;
        Self(product)
    }
}

impl<const P: u64> Neg for FiniteField<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            Self(0)
        } else {
            Self(P - self.0)
        }
    }
}

impl<const P: u64> From<u64> for FiniteField<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<i64> for FiniteField<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

impl<const P: u64> fmt::Display for FiniteField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// GF(2), the field with two elements.
pub type GF2 = FiniteField<2>;

/// The NTT-friendly prime field of order 998244353.
pub type GF998244353 = FiniteField<998_244_353>;
