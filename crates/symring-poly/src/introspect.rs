//! Degree and variable queries.
//!
//! All queries only look at terms whose coefficient is non-zero in the ring,
//! so they agree on canonical and non-canonical inputs alike.

use std::collections::{BTreeMap, BTreeSet};

use symring_rings::RingContext;

use crate::labeled::LabeledPolynomial;
use crate::monomial::Monomial;
use crate::space::LabeledPolynomialSpace;
use crate::symbol::Symbol;

impl<A: RingContext> LabeledPolynomialSpace<A> {
    fn non_zero_terms<'p>(
        &'p self,
        p: &'p LabeledPolynomial<A::Element>,
    ) -> impl Iterator<Item = (&'p Monomial, &'p A::Element)> + 'p {
        p.terms().filter(move |(_, c)| !self.ring().is_zero(c))
    }

    /// Total degree of `p`: the largest sum of exponents over its terms.
    ///
    /// The zero polynomial has degree `-1`; non-zero constants have degree 0.
    pub fn degree(&self, p: &LabeledPolynomial<A::Element>) -> i64 {
        self.non_zero_terms(p)
            .map(|(monomial, _)| i64::try_from(monomial.total_degree()).unwrap_or(i64::MAX))
            .max()
            .unwrap_or(-1)
    }

    /// The largest exponent of each variable that occurs in `p`.
    pub fn degrees(&self, p: &LabeledPolynomial<A::Element>) -> BTreeMap<Symbol, u32> {
        let mut degrees = BTreeMap::new();
        for (monomial, _) in self.non_zero_terms(p) {
            for (variable, &exp) in monomial {
                let entry = degrees.entry(variable.clone()).or_insert(0);
                *entry = (*entry).max(exp);
            }
        }
        degrees
    }

    /// The largest exponent of `variable` in `p`; 0 if it does not occur.
    pub fn degree_by(&self, p: &LabeledPolynomial<A::Element>, variable: &Symbol) -> u32 {
        self.non_zero_terms(p)
            .map(|(monomial, _)| monomial.exponent(variable))
            .max()
            .unwrap_or(0)
    }

    /// The largest combined degree in `variables` over the terms of `p`.
    ///
    /// For each term the exponents of the given variables are summed; the
    /// others are ignored.
    pub fn degree_by_variables(&self, p: &LabeledPolynomial<A::Element>, variables: &BTreeSet<Symbol>) -> u64 {
        self.non_zero_terms(p)
            .map(|(monomial, _)| {
                monomial
                    .iter()
                    .filter(|(variable, _)| variables.contains(*variable))
                    .map(|(_, &exp)| u64::from(exp))
                    .sum::<u64>()
            })
            .max()
            .unwrap_or(0)
    }

    /// The variables that occur in `p`.
    pub fn variables(&self, p: &LabeledPolynomial<A::Element>) -> BTreeSet<Symbol> {
        self.non_zero_terms(p)
            .flat_map(|(monomial, _)| monomial.variables().cloned())
            .collect()
    }

    /// Number of distinct variables in `p`.
    pub fn count_of_variables(&self, p: &LabeledPolynomial<A::Element>) -> usize {
        self.variables(p).len()
    }

    /// Returns true if `p` has no term involving a variable. Zero is constant.
    pub fn is_constant(&self, p: &LabeledPolynomial<A::Element>) -> bool {
        self.non_zero_terms(p).all(|(monomial, _)| monomial.is_one())
    }

    /// Returns true if `p` is a constant with a non-zero value.
    pub fn is_non_zero_constant(&self, p: &LabeledPolynomial<A::Element>) -> bool {
        self.is_constant(p)
            && p.constant_term()
                .is_some_and(|c| !self.ring().is_zero(c))
    }

    /// The value of `p` if it is constant (zero for the zero polynomial).
    pub fn as_constant(&self, p: &LabeledPolynomial<A::Element>) -> Option<A::Element> {
        if !self.is_constant(p) {
            return None;
        }
        Some(p.constant_term().cloned().unwrap_or_else(|| self.ring().zero()))
    }
}
