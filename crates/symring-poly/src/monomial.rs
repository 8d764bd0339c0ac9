//! Monomial keys: the variable part of a polynomial term.
//!
//! A monomial `x_1^{d_1} ... x_n^{d_n}` is stored as a sorted map from
//! variable to exponent. Zero exponents are never stored, so two monomials
//! are equal (and hash equal) exactly when they denote the same product.

use std::cmp::Ordering;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use crate::symbol::Symbol;

/// The exponent map of a monomial, kept clean of zero exponents.
///
/// The empty monomial is `1`, the key of the constant term.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Monomial(BTreeMap<Symbol, u32>);

impl Monomial {
    /// The monomial 1 (no variables).
    #[must_use]
    pub const fn one() -> Self {
        Self(BTreeMap::new())
    }

    /// The monomial consisting of a single variable to the first power.
    #[must_use]
    pub fn var(variable: Symbol) -> Self {
        Self(BTreeMap::from([(variable, 1)]))
    }

    /// Builds a monomial from `(variable, exponent)` factors.
    ///
    /// Factors on the same variable multiply, so their exponents add up;
    /// zero exponents vanish.
    ///
    /// # Panics
    ///
    /// Panics if the exponent of a variable exceeds `u32::MAX`.
    ///
    /// ```
    /// use symring_poly::Monomial;
    ///
    /// let m = Monomial::new([("x", 1), ("y", 0), ("x", 1)]);
    /// assert_eq!(m, Monomial::new([("x", 2)]));
    /// ```
    pub fn new<S, I>(factors: I) -> Self
    where
        S: Into<Symbol>,
        I: IntoIterator<Item = (S, u32)>,
    {
        factors
            .into_iter()
            .map(|(variable, exp)| (variable.into(), exp))
            .collect()
    }

    /// Canonicalizes an exponent map by removing every zero exponent.
    #[must_use]
    pub fn from_map(mut exponents: BTreeMap<Symbol, u32>) -> Self {
        exponents.retain(|_, exp| *exp > 0);
        Self(exponents)
    }

    /// Wraps an exponent map that is already free of zero exponents.
    pub(crate) fn from_map_unchecked(exponents: BTreeMap<Symbol, u32>) -> Self {
        debug_assert!(exponents.values().all(|&exp| exp > 0));
        Self(exponents)
    }

    /// Returns true for the monomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no variable occurs (same as [`Monomial::is_one`]).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The exponent of `variable`, 0 if it does not occur.
    #[must_use]
    pub fn exponent(&self, variable: &Symbol) -> u32 {
        self.0.get(variable).copied().unwrap_or(0)
    }

    /// The total degree: the sum of all exponents.
    #[must_use]
    pub fn total_degree(&self) -> u64 {
        self.0.values().map(|&exp| u64::from(exp)).sum()
    }

    /// Iterates over `(variable, exponent)` pairs in variable order.
    pub fn iter(&self) -> btree_map::Iter<'_, Symbol, u32> {
        self.0.iter()
    }

    /// Iterates over the variables that occur.
    pub fn variables(&self) -> btree_map::Keys<'_, Symbol, u32> {
        self.0.keys()
    }

    /// The exponent map.
    #[must_use]
    pub fn as_map(&self) -> &BTreeMap<Symbol, u32> {
        &self.0
    }

    /// Multiplies two monomials (adds exponents variable-wise).
    ///
    /// # Panics
    ///
    /// Panics if an exponent of the product exceeds `u32::MAX`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let (mut result, smaller) = if self.len() >= other.len() {
            (self.0.clone(), &other.0)
        } else {
            (other.0.clone(), &self.0)
        };

        for (variable, &exp) in smaller {
            raise(&mut result, variable, exp);
        }

        Self(result)
    }

    /// Multiplies by a single variable (raises its exponent by one).
    ///
    /// # Panics
    ///
    /// Panics if the exponent of `variable` is already `u32::MAX`.
    #[must_use]
    pub fn mul_var(&self, variable: &Symbol) -> Self {
        let mut result = self.0.clone();
        raise(&mut result, variable, 1);
        Self(result)
    }

    /// Splits off `variable`, returning its exponent and the remaining monomial.
    #[must_use]
    pub fn split(&self, variable: &Symbol) -> (u32, Self) {
        let mut rest = self.0.clone();
        let exp = rest.remove(variable).unwrap_or(0);
        (exp, Self(rest))
    }

    /// Graded order: higher total degree first, ties broken by the reverse
    /// of the variable-wise order so that `x^2 > x*y > y^2`.
    #[must_use]
    pub fn cmp_graded(&self, other: &Self) -> Ordering {
        other
            .total_degree()
            .cmp(&self.total_degree())
            .then_with(|| {
                for ((va, ea), (vb, eb)) in self.0.iter().zip(other.0.iter()) {
                    match va.cmp(vb).then_with(|| eb.cmp(ea)) {
                        Ordering::Equal => continue,
                        ord => return ord,
                    }
                }
                other.len().cmp(&self.len())
            })
    }
}

impl<S: Into<Symbol>> FromIterator<(S, u32)> for Monomial {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        let mut exponents = BTreeMap::new();
        for (variable, exp) in iter {
            raise(&mut exponents, &variable.into(), exp);
        }
        Self(exponents)
    }
}

/// Adds `exp` to the exponent of `variable`, never storing a zero exponent.
fn raise(exponents: &mut BTreeMap<Symbol, u32>, variable: &Symbol, exp: u32) {
    if exp == 0 {
        return;
    }
    let current = exponents.get(variable).copied().unwrap_or(0);
    let Some(sum) = current.checked_add(exp) else {
        panic!("exponent of {variable} overflows u32: {current} + {exp}");
    };
    exponents.insert(variable.clone(), sum);
}

impl From<BTreeMap<Symbol, u32>> for Monomial {
    fn from(exponents: BTreeMap<Symbol, u32>) -> Self {
        Self::from_map(exponents)
    }
}

impl From<Symbol> for Monomial {
    fn from(variable: Symbol) -> Self {
        Self::var(variable)
    }
}

impl From<&Symbol> for Monomial {
    fn from(variable: &Symbol) -> Self {
        Self::var(variable.clone())
    }
}

impl<'a> IntoIterator for &'a Monomial {
    type Item = (&'a Symbol, &'a u32);
    type IntoIter = btree_map::Iter<'a, Symbol, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }

        let mut first = true;
        for (variable, &exp) in &self.0 {
            if !first {
                write!(f, "*")?;
            }
            first = false;

            if exp == 1 {
                write!(f, "{variable}")?;
            } else {
                write!(f, "{variable}^{exp}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}
