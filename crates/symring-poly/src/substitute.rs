//! Substitution and evaluation.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use symring_rings::RingContext;

use crate::error::PolyError;
use crate::labeled::LabeledPolynomial;
use crate::monomial::Monomial;
use crate::space::LabeledPolynomialSpace;
use crate::symbol::Symbol;

impl<A: RingContext> LabeledPolynomialSpace<A> {
    /// Replaces the assigned variables of `p` by ring elements.
    ///
    /// Variables missing from `assignment` stay symbolic, so the result is
    /// again a polynomial; terms that become equal are merged.
    pub fn substitute<S: BuildHasher>(
        &self,
        p: &LabeledPolynomial<A::Element>,
        assignment: &HashMap<Symbol, A::Element, S>,
    ) -> LabeledPolynomial<A::Element> {
        let ring = self.ring();
        let terms = p.terms().map(|(monomial, c)| {
            let mut coefficient = c.clone();
            let mut rest = BTreeMap::new();
            for (variable, &exp) in monomial {
                match assignment.get(variable) {
                    Some(value) => coefficient = ring.mul(&coefficient, &ring.pow(value, exp)),
                    None => {
                        rest.insert(variable.clone(), exp);
                    }
                }
            }
            (Monomial::from_map_unchecked(rest), coefficient)
        });
        self.from_pairs(terms)
    }

    /// Replaces the assigned variables of `p` by polynomials.
    pub fn substitute_polynomials<S: BuildHasher>(
        &self,
        p: &LabeledPolynomial<A::Element>,
        assignment: &HashMap<Symbol, LabeledPolynomial<A::Element>, S>,
    ) -> LabeledPolynomial<A::Element> {
        let mut result = self.zero();
        for (monomial, c) in p.terms() {
            let mut rest = BTreeMap::new();
            let mut term = self.one();
            for (variable, &exp) in monomial {
                match assignment.get(variable) {
                    Some(value) => term = self.mul(term, self.pow(value, exp)),
                    None => {
                        rest.insert(variable.clone(), exp);
                    }
                }
            }
            let term = self.mul(term, self.monomial(Monomial::from_map_unchecked(rest), c.clone()));
            result = self.add(result, term);
        }
        result
    }

    /// Evaluates `p` at a point that assigns every variable of `p`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::UnboundVariable`] if a variable of `p` has no
    /// value in `assignment`.
    pub fn evaluate<S: BuildHasher>(
        &self,
        p: &LabeledPolynomial<A::Element>,
        assignment: &HashMap<Symbol, A::Element, S>,
    ) -> Result<A::Element, PolyError> {
        let ring = self.ring();
        let mut sum = ring.zero();
        for (monomial, c) in p.sorted_terms() {
            let mut value = c.clone();
            for (variable, &exp) in monomial {
                let x = assignment
                    .get(variable)
                    .ok_or_else(|| PolyError::UnboundVariable(variable.clone()))?;
                value = ring.mul(&value, &ring.pow(x, exp));
            }
            sum = ring.add(&sum, &value);
        }
        Ok(sum)
    }
}
