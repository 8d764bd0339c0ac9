//! Labeled multivariate polynomials.

use std::fmt;

use rustc_hash::FxHashMap;
use symring_rings::Ring;

use crate::monomial::Monomial;

/// Coefficient storage of a [`LabeledPolynomial`].
pub type Coefficients<C> = FxHashMap<Monomial, C>;

/// A multivariate polynomial whose variables are [`Symbol`](crate::Symbol)s.
///
/// Every non-zero term `a x_1^{d_1} ... x_n^{d_n}` is one map entry from the
/// monomial key to the coefficient `a`. For example
///
/// ```text
/// 5 a^2 c^3 - 6 b + 0 b c
/// ```
///
/// is stored as `{ {a: 2, c: 3}: 5, {b: 1}: -6 }`.
///
/// Values are immutable. Canonical values, with no zero coefficients and the
/// zero polynomial as the empty map, are produced by
/// [`LabeledPolynomialSpace`](crate::LabeledPolynomialSpace), which owns the
/// ring needed to recognize zero.
#[derive(Clone, PartialEq, Eq)]
pub struct LabeledPolynomial<C> {
    coefficients: Coefficients<C>,
}

impl<C> LabeledPolynomial<C> {
    /// Wraps a coefficient map without looking at it.
    pub(crate) fn from_coefficients(coefficients: Coefficients<C>) -> Self {
        Self { coefficients }
    }

    /// The zero polynomial.
    pub(crate) fn empty() -> Self {
        Self {
            coefficients: Coefficients::default(),
        }
    }

    /// The coefficient map.
    #[must_use]
    pub fn coefficients(&self) -> &Coefficients<C> {
        &self.coefficients
    }

    /// Consumes the polynomial, returning its coefficient map.
    #[must_use]
    pub fn into_coefficients(self) -> Coefficients<C> {
        self.coefficients
    }

    /// The coefficient of `monomial`, if that term is present.
    #[must_use]
    pub fn coefficient(&self, monomial: &Monomial) -> Option<&C> {
        self.coefficients.get(monomial)
    }

    /// The constant term, if present.
    #[must_use]
    pub fn constant_term(&self) -> Option<&C> {
        self.coefficients.get(&Monomial::one())
    }

    /// Number of stored terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns true if no term is stored, which for canonical values means
    /// this is the zero polynomial.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Iterates over `(monomial, coefficient)` terms in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &C)> {
        self.coefficients.iter()
    }

    /// Terms sorted by the graded order of their monomials, highest first.
    #[must_use]
    pub fn sorted_terms(&self) -> Vec<(&Monomial, &C)> {
        let mut terms: Vec<_> = self.coefficients.iter().collect();
        terms.sort_by(|a, b| a.0.cmp_graded(b.0));
        terms
    }
}

impl<C> Default for LabeledPolynomial<C> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Lifts a single ring element into a polynomial.
pub trait AsLabeledPolynomial: Sized {
    /// The constant polynomial `self`; the zero element lifts to the empty
    /// (zero) polynomial.
    fn as_labeled_polynomial(self) -> LabeledPolynomial<Self>;
}

impl<R: Ring> AsLabeledPolynomial for R {
    fn as_labeled_polynomial(self) -> LabeledPolynomial<Self> {
        if self.is_zero() {
            LabeledPolynomial::empty()
        } else {
            let mut coefficients = Coefficients::default();
            coefficients.insert(Monomial::one(), self);
            LabeledPolynomial::from_coefficients(coefficients)
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for LabeledPolynomial<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LabeledPolynomial")?;
        f.debug_map().entries(self.sorted_terms()).finish()
    }
}

/// Terms in graded order, joined by their signs; unit coefficients are
/// omitted on non-constant terms, as in `x^2 - 3*x*y + 1`.
impl<C: fmt::Display> fmt::Display for LabeledPolynomial<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "0");
        }

        for (i, (monomial, c)) in self.sorted_terms().into_iter().enumerate() {
            let rendered = c.to_string();
            let (negative, magnitude) = match rendered.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, rendered.as_str()),
            };

            match (i, negative) {
                (0, true) => write!(f, "-")?,
                (0, false) => {}
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }

            if monomial.is_one() {
                write!(f, "{magnitude}")?;
            } else if magnitude == "1" {
                write!(f, "{monomial}")?;
            } else {
                write!(f, "{magnitude}*{monomial}")?;
            }
        }
        Ok(())
    }
}
