//! The algebra of labeled polynomials over a ring context.
//!
//! [`LabeledPolynomialSpace`] is the only producer of canonical
//! [`LabeledPolynomial`] values: every factory and operator returns a map with
//! clean monomial keys and no zero coefficients, and the zero polynomial is
//! always the empty map.

use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use symring_rings::RingContext;
use tracing::{debug, trace};

use crate::labeled::{Coefficients, LabeledPolynomial};
use crate::monomial::Monomial;
use crate::operand::Operand;
use crate::symbol::Symbol;

/// An operand after integer lifting.
enum Term<'a, C: Clone> {
    Constant(C),
    Symbol(Cow<'a, Symbol>),
    Polynomial(Cow<'a, LabeledPolynomial<C>>),
}

/// Polynomials in labeled variables over the ring `A`.
///
/// The space holds nothing but the ring context, so it is `Send + Sync`
/// whenever `A` is and can be shared freely between threads.
///
/// ```
/// use symring_poly::{LabeledPolynomialSpace, Monomial, Symbol};
/// use symring_rings::{ElementRing, Z};
///
/// let space = LabeledPolynomialSpace::new(ElementRing::<Z>::new());
/// let x = Symbol::new("x");
/// let y = Symbol::new("y");
///
/// // (x + y) * (x - y) = x^2 - y^2
/// let product = space.mul(space.add(&x, &y), space.sub(&x, &y));
/// let expected = space.from_pairs([
///     (Monomial::new([("x", 2)]), Z::new(1)),
///     (Monomial::new([("y", 2)]), Z::new(-1)),
/// ]);
/// assert!(space.equals(&product, &expected));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LabeledPolynomialSpace<A> {
    ring: A,
}

impl<A: RingContext> LabeledPolynomialSpace<A> {
    /// Creates the space of polynomials over `ring`.
    pub fn new(ring: A) -> Self {
        Self { ring }
    }

    /// The coefficient ring.
    pub fn ring(&self) -> &A {
        &self.ring
    }

    // === Factories ===

    /// Builds a polynomial from a map of terms.
    ///
    /// Keys are canonicalized first; keys that become equal have their
    /// coefficients summed, and zero coefficients are dropped.
    pub fn from_map<K, S>(&self, coefficients: HashMap<K, A::Element, S>) -> LabeledPolynomial<A::Element>
    where
        K: Into<Monomial>,
    {
        self.from_pairs(coefficients)
    }

    /// Wraps a coefficient map as is.
    ///
    /// The caller guarantees that no coefficient is zero. Nothing is checked;
    /// a map with zero coefficients yields a value that breaks the invariants
    /// every other operation relies on.
    pub fn from_map_unchecked(&self, coefficients: Coefficients<A::Element>) -> LabeledPolynomial<A::Element> {
        LabeledPolynomial::from_coefficients(coefficients)
    }

    /// Builds a polynomial from `(monomial, coefficient)` pairs, summing
    /// coefficients of equal monomials and dropping zero results.
    pub fn from_pairs<K, I>(&self, pairs: I) -> LabeledPolynomial<A::Element>
    where
        K: Into<Monomial>,
        I: IntoIterator<Item = (K, A::Element)>,
    {
        let mut coefficients = Coefficients::default();
        let mut merged = 0usize;

        for (key, c) in pairs {
            match coefficients.entry(key.into()) {
                Entry::Occupied(mut entry) => {
                    let sum = self.ring.add(entry.get(), &c);
                    entry.insert(sum);
                    merged += 1;
                }
                Entry::Vacant(entry) => {
                    entry.insert(c);
                }
            }
        }

        let before = coefficients.len();
        coefficients.retain(|_, c| !self.ring.is_zero(c));
        let dropped = before - coefficients.len();

        if merged > 0 || dropped > 0 {
            debug!(merged, dropped, terms = coefficients.len(), "canonicalized polynomial terms");
        }

        LabeledPolynomial::from_coefficients(coefficients)
    }

    /// Builds a polynomial from pairs the caller guarantees to have distinct
    /// monomials and non-zero coefficients. For a repeated monomial the last
    /// pair wins.
    pub fn from_pairs_unchecked<I>(&self, pairs: I) -> LabeledPolynomial<A::Element>
    where
        I: IntoIterator<Item = (Monomial, A::Element)>,
    {
        LabeledPolynomial::from_coefficients(pairs.into_iter().collect())
    }

    /// Builds a polynomial from a fixed list of terms (validated).
    pub fn from_terms<K, const N: usize>(&self, terms: [(K, A::Element); N]) -> LabeledPolynomial<A::Element>
    where
        K: Into<Monomial>,
    {
        self.from_pairs(terms)
    }

    /// Builds a polynomial from a fixed list of terms without validation.
    pub fn from_terms_unchecked<const N: usize>(
        &self,
        terms: [(Monomial, A::Element); N],
    ) -> LabeledPolynomial<A::Element> {
        self.from_pairs_unchecked(terms)
    }

    /// The zero polynomial (the empty map).
    pub fn zero(&self) -> LabeledPolynomial<A::Element> {
        LabeledPolynomial::empty()
    }

    /// The unit polynomial. Empty in the zero ring, where one is zero.
    pub fn one(&self) -> LabeledPolynomial<A::Element> {
        self.constant(self.ring.one())
    }

    /// The constant polynomial `c`.
    pub fn constant(&self, c: A::Element) -> LabeledPolynomial<A::Element> {
        self.monomial(Monomial::one(), c)
    }

    /// The constant polynomial `number(n)`.
    pub fn number(&self, n: i64) -> LabeledPolynomial<A::Element> {
        self.constant(self.ring.number(n))
    }

    /// The polynomial consisting of the single variable `variable`.
    pub fn symbol(&self, variable: &Symbol) -> LabeledPolynomial<A::Element> {
        self.monomial(Monomial::var(variable.clone()), self.ring.one())
    }

    /// The single-term polynomial `c * monomial`.
    pub fn monomial(&self, monomial: Monomial, c: A::Element) -> LabeledPolynomial<A::Element> {
        if self.ring.is_zero(&c) {
            return self.zero();
        }
        let mut coefficients = Coefficients::default();
        coefficients.insert(monomial, c);
        LabeledPolynomial::from_coefficients(coefficients)
    }

    /// Converts any operand to a polynomial; for a symbol this is unary plus.
    pub fn lift<'a>(&self, operand: impl Into<Operand<'a, A::Element>>) -> LabeledPolynomial<A::Element>
    where
        A::Element: 'a,
    {
        match self.resolve(operand.into()) {
            Term::Constant(c) => self.constant(c),
            Term::Symbol(s) => self.symbol(&s),
            Term::Polynomial(p) => p.into_owned(),
        }
    }

    // === Operator suite ===

    /// Computes `lhs + rhs` for any pair of operands.
    pub fn add<'a>(
        &self,
        lhs: impl Into<Operand<'a, A::Element>>,
        rhs: impl Into<Operand<'a, A::Element>>,
    ) -> LabeledPolynomial<A::Element>
    where
        A::Element: 'a,
    {
        match (self.resolve(lhs.into()), self.resolve(rhs.into())) {
            (Term::Polynomial(a), Term::Polynomial(b)) => self.add_polynomials(a, b),
            (Term::Polynomial(p), Term::Constant(c)) | (Term::Constant(c), Term::Polynomial(p)) => {
                self.add_term(p, Monomial::one(), c)
            }
            (Term::Polynomial(p), Term::Symbol(s)) | (Term::Symbol(s), Term::Polynomial(p)) => {
                self.add_term(p, Monomial::var(s.into_owned()), self.ring.one())
            }
            (Term::Symbol(s), Term::Symbol(t)) => self.from_terms([
                (Monomial::var(s.into_owned()), self.ring.one()),
                (Monomial::var(t.into_owned()), self.ring.one()),
            ]),
            (Term::Symbol(s), Term::Constant(c)) | (Term::Constant(c), Term::Symbol(s)) => self.from_terms([
                (Monomial::var(s.into_owned()), self.ring.one()),
                (Monomial::one(), c),
            ]),
            (Term::Constant(a), Term::Constant(b)) => self.constant(self.ring.add(&a, &b)),
        }
    }

    /// Computes `lhs - rhs` for any pair of operands.
    pub fn sub<'a>(
        &self,
        lhs: impl Into<Operand<'a, A::Element>>,
        rhs: impl Into<Operand<'a, A::Element>>,
    ) -> LabeledPolynomial<A::Element>
    where
        A::Element: 'a,
    {
        match (self.resolve(lhs.into()), self.resolve(rhs.into())) {
            (Term::Polynomial(a), Term::Polynomial(b)) => self.sub_polynomials(a, b),
            (Term::Polynomial(p), Term::Constant(c)) => self.add_term(p, Monomial::one(), self.ring.neg(&c)),
            (Term::Constant(c), Term::Polynomial(p)) => {
                self.add_term(Cow::Owned(self.neg_polynomial(p)), Monomial::one(), c)
            }
            (Term::Polynomial(p), Term::Symbol(s)) => {
                self.add_term(p, Monomial::var(s.into_owned()), self.ring.neg(&self.ring.one()))
            }
            (Term::Symbol(s), Term::Polynomial(p)) => {
                self.add_term(Cow::Owned(self.neg_polynomial(p)), Monomial::var(s.into_owned()), self.ring.one())
            }
            (Term::Symbol(s), Term::Symbol(t)) => self.from_terms([
                (Monomial::var(s.into_owned()), self.ring.one()),
                (Monomial::var(t.into_owned()), self.ring.neg(&self.ring.one())),
            ]),
            (Term::Symbol(s), Term::Constant(c)) => self.from_terms([
                (Monomial::var(s.into_owned()), self.ring.one()),
                (Monomial::one(), self.ring.neg(&c)),
            ]),
            (Term::Constant(c), Term::Symbol(s)) => self.from_terms([
                (Monomial::var(s.into_owned()), self.ring.neg(&self.ring.one())),
                (Monomial::one(), c),
            ]),
            (Term::Constant(a), Term::Constant(b)) => self.constant(self.ring.sub(&a, &b)),
        }
    }

    /// Computes `lhs * rhs` for any pair of operands.
    ///
    /// # Panics
    ///
    /// Panics if an exponent of the product exceeds `u32::MAX`.
    pub fn mul<'a>(
        &self,
        lhs: impl Into<Operand<'a, A::Element>>,
        rhs: impl Into<Operand<'a, A::Element>>,
    ) -> LabeledPolynomial<A::Element>
    where
        A::Element: 'a,
    {
        match (self.resolve(lhs.into()), self.resolve(rhs.into())) {
            (Term::Polynomial(a), Term::Polynomial(b)) => self.mul_polynomials(&a, &b),
            (Term::Polynomial(p), Term::Constant(c)) | (Term::Constant(c), Term::Polynomial(p)) => {
                self.scale(p, &c)
            }
            (Term::Polynomial(p), Term::Symbol(s)) | (Term::Symbol(s), Term::Polynomial(p)) => {
                self.mul_symbol(p, &s)
            }
            (Term::Symbol(s), Term::Symbol(t)) => {
                self.monomial(Monomial::var(s.into_owned()).mul_var(&t), self.ring.one())
            }
            (Term::Symbol(s), Term::Constant(c)) | (Term::Constant(c), Term::Symbol(s)) => {
                self.monomial(Monomial::var(s.into_owned()), c)
            }
            (Term::Constant(a), Term::Constant(b)) => self.constant(self.ring.mul(&a, &b)),
        }
    }

    /// Computes `-operand`.
    pub fn neg<'a>(&self, operand: impl Into<Operand<'a, A::Element>>) -> LabeledPolynomial<A::Element>
    where
        A::Element: 'a,
    {
        match self.resolve(operand.into()) {
            Term::Constant(c) => self.constant(self.ring.neg(&c)),
            Term::Symbol(s) => self.monomial(Monomial::var(s.into_owned()), self.ring.neg(&self.ring.one())),
            Term::Polynomial(p) => self.neg_polynomial(p),
        }
    }

    /// Computes `p^n` by repeated squaring; `p^0` is one, also for zero `p`.
    ///
    /// # Panics
    ///
    /// Panics if an exponent of the result exceeds `u32::MAX`.
    pub fn pow(&self, p: &LabeledPolynomial<A::Element>, n: u32) -> LabeledPolynomial<A::Element> {
        let mut result = self.one();
        let mut base = Cow::Borrowed(p);
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul_polynomials(&result, &base);
            }
            exp >>= 1;
            if exp > 0 {
                base = Cow::Owned(self.mul_polynomials(&base, &base));
            }
            trace!(remaining = exp, terms = result.len(), "pow step");
        }

        result
    }

    /// Checks equality of two polynomials: same number of terms and equal
    /// coefficients for every monomial of `p`.
    pub fn equals(&self, p: &LabeledPolynomial<A::Element>, q: &LabeledPolynomial<A::Element>) -> bool {
        if std::ptr::eq(p, q) {
            return true;
        }
        p.len() == q.len()
            && p
                .terms()
                .all(|(monomial, c)| q.coefficient(monomial).is_some_and(|other| other == c))
    }

    // === Internals ===

    fn resolve<'a>(&self, operand: Operand<'a, A::Element>) -> Term<'a, A::Element> {
        match operand {
            Operand::Int(n) => Term::Constant(self.ring.number(n)),
            Operand::Constant(c) => Term::Constant(c),
            Operand::Symbol(s) => Term::Symbol(s),
            Operand::Polynomial(p) => Term::Polynomial(p),
        }
    }

    /// Adds `c` to the coefficient of `key` in place, removing the term if
    /// the sum vanishes.
    fn accumulate(&self, coefficients: &mut Coefficients<A::Element>, key: &Monomial, c: &A::Element) {
        match coefficients.get_mut(key) {
            Some(existing) => {
                let sum = self.ring.add(existing, c);
                if self.ring.is_zero(&sum) {
                    coefficients.remove(key);
                } else {
                    *existing = sum;
                }
            }
            None => {
                coefficients.insert(key.clone(), c.clone());
            }
        }
    }

    /// `p + c * key`, where `key` may already be a term of `p`.
    fn add_term(
        &self,
        p: Cow<'_, LabeledPolynomial<A::Element>>,
        key: Monomial,
        c: A::Element,
    ) -> LabeledPolynomial<A::Element> {
        if self.ring.is_zero(&c) {
            return p.into_owned();
        }
        let mut coefficients = p.into_owned().into_coefficients();
        self.accumulate(&mut coefficients, &key, &c);
        LabeledPolynomial::from_coefficients(coefficients)
    }

    fn add_polynomials(
        &self,
        a: Cow<'_, LabeledPolynomial<A::Element>>,
        b: Cow<'_, LabeledPolynomial<A::Element>>,
    ) -> LabeledPolynomial<A::Element> {
        if b.is_empty() {
            return a.into_owned();
        }
        if a.is_empty() {
            return b.into_owned();
        }

        // Merge the smaller map into a copy of the larger one.
        let (base, other) = if a.len() >= b.len() { (a, b) } else { (b, a) };
        let mut coefficients = base.into_owned().into_coefficients();
        for (key, c) in other.terms() {
            self.accumulate(&mut coefficients, key, c);
        }
        LabeledPolynomial::from_coefficients(coefficients)
    }

    fn sub_polynomials(
        &self,
        a: Cow<'_, LabeledPolynomial<A::Element>>,
        b: Cow<'_, LabeledPolynomial<A::Element>>,
    ) -> LabeledPolynomial<A::Element> {
        if b.is_empty() {
            return a.into_owned();
        }
        if a.is_empty() {
            return self.neg_polynomial(b);
        }

        let mut coefficients = a.into_owned().into_coefficients();
        for (key, c) in b.terms() {
            self.accumulate(&mut coefficients, key, &self.ring.neg(c));
        }
        LabeledPolynomial::from_coefficients(coefficients)
    }

    fn neg_polynomial(&self, p: Cow<'_, LabeledPolynomial<A::Element>>) -> LabeledPolynomial<A::Element> {
        let coefficients = match p {
            Cow::Owned(p) => p
                .into_coefficients()
                .into_iter()
                .map(|(key, c)| (key, self.ring.neg(&c)))
                .collect(),
            Cow::Borrowed(p) => p.terms().map(|(key, c)| (key.clone(), self.ring.neg(c))).collect(),
        };
        LabeledPolynomial::from_coefficients(coefficients)
    }

    /// `c * p`; products may vanish when the ring has zero divisors.
    fn scale(&self, p: Cow<'_, LabeledPolynomial<A::Element>>, c: &A::Element) -> LabeledPolynomial<A::Element> {
        if self.ring.is_zero(c) {
            return self.zero();
        }
        if self.ring.is_one(c) {
            return p.into_owned();
        }

        let coefficients = p
            .terms()
            .filter_map(|(key, a)| {
                let product = self.ring.mul(a, c);
                (!self.ring.is_zero(&product)).then(|| (key.clone(), product))
            })
            .collect();
        LabeledPolynomial::from_coefficients(coefficients)
    }

    /// `variable * p`: raises the exponent of `variable` in every key.
    ///
    /// Distinct keys stay distinct, so no merging is needed.
    fn mul_symbol(&self, p: Cow<'_, LabeledPolynomial<A::Element>>, variable: &Symbol) -> LabeledPolynomial<A::Element> {
        let coefficients = p
            .into_owned()
            .into_coefficients()
            .into_iter()
            .map(|(key, c)| (key.mul_var(variable), c))
            .collect();
        LabeledPolynomial::from_coefficients(coefficients)
    }

    fn mul_polynomials(
        &self,
        a: &LabeledPolynomial<A::Element>,
        b: &LabeledPolynomial<A::Element>,
    ) -> LabeledPolynomial<A::Element> {
        if a.is_empty() || b.is_empty() {
            return self.zero();
        }

        let mut coefficients = Coefficients::with_capacity_and_hasher(a.len() * b.len(), Default::default());
        for (key_a, c_a) in a.terms() {
            for (key_b, c_b) in b.terms() {
                let c = self.ring.mul(c_a, c_b);
                match coefficients.entry(key_a.mul(key_b)) {
                    Entry::Occupied(mut entry) => {
                        let sum = self.ring.add(entry.get(), &c);
                        entry.insert(sum);
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(c);
                    }
                }
            }
        }
        coefficients.retain(|_, c| !self.ring.is_zero(c));

        trace!(lhs = a.len(), rhs = b.len(), terms = coefficients.len(), "multiplied polynomials");

        LabeledPolynomial::from_coefficients(coefficients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symring_rings::{ElementRing, FiniteField, IntegersModN, Q, Z};

    use crate::operand::Const;

    fn z_space() -> LabeledPolynomialSpace<ElementRing<Z>> {
        LabeledPolynomialSpace::new(ElementRing::new())
    }

    fn z(n: i64) -> Z {
        Z::new(n)
    }

    #[test]
    fn test_from_pairs_merges_and_cleans() {
        let space = z_space();

        let p = space.from_pairs([
            (Monomial::new([("x", 1)]), z(5)),
            (Monomial::new([("y", 1)]), z(-6)),
            (Monomial::new([("y", 1), ("z", 0)]), z(1)),
        ]);

        assert_eq!(p.len(), 2);
        assert_eq!(p.coefficient(&Monomial::new([("x", 1)])), Some(&z(5)));
        assert_eq!(p.coefficient(&Monomial::new([("y", 1)])), Some(&z(-5)));
    }

    #[test]
    fn test_from_map_with_unclean_keys() {
        use std::collections::BTreeMap;
        let space = z_space();
        let y = Symbol::new("y");
        let w = Symbol::new("w");

        let mut raw: HashMap<BTreeMap<Symbol, u32>, Z> = HashMap::new();
        raw.insert(BTreeMap::from([(y.clone(), 1)]), z(3));
        raw.insert(BTreeMap::from([(y.clone(), 1), (w.clone(), 0)]), z(-3));
        raw.insert(BTreeMap::from([(w, 2)]), z(0));

        assert!(space.from_map(raw).is_empty());
    }

    #[test]
    fn test_validated_drops_zero_coefficients() {
        let space = z_space();
        let p = space.from_terms([(Monomial::new([("x", 3)]), z(0)), (Monomial::one(), z(2))]);
        assert_eq!(p, space.number(2));
    }

    #[test]
    fn test_unchecked_round_trip() {
        let space = z_space();
        let p = space.from_terms([(Monomial::new([("x", 2), ("y", 1)]), z(3)), (Monomial::one(), z(5))]);

        let q = space.from_map_unchecked(p.coefficients().clone());
        assert!(space.equals(&p, &q));

        let r = space.from_pairs_unchecked(p.terms().map(|(m, c)| (m.clone(), c.clone())));
        assert_eq!(p, r);
    }

    #[test]
    fn test_constants() {
        let space = z_space();

        assert!(space.zero().is_empty());
        assert_eq!(space.one().constant_term(), Some(&z(1)));
        assert!(space.constant(z(0)).is_empty());
        assert_eq!(space.number(-4), space.constant(z(-4)));
        assert!(space.monomial(Monomial::new([("x", 1)]), z(0)).is_empty());
    }

    #[test]
    fn test_symbol_squared() {
        let space = z_space();
        let x = Symbol::new("x");

        let sq = space.mul(&x, &x);
        assert_eq!(sq, space.monomial(Monomial::new([("x", 2)]), z(1)));
        assert_eq!(sq.len(), 1);

        let xy = space.mul(&x, Symbol::new("y"));
        assert_eq!(xy, space.monomial(Monomial::new([("x", 1), ("y", 1)]), z(1)));
    }

    #[test]
    fn test_difference_of_squares() {
        let space = z_space();
        let x = Symbol::new("x");
        let y = Symbol::new("y");

        let product = space.mul(space.add(&x, &y), space.sub(&x, &y));
        let expected = space.from_terms([(Monomial::new([("x", 2)]), z(1)), (Monomial::new([("y", 2)]), z(-1))]);

        assert!(space.equals(&product, &expected));
    }

    #[test]
    fn test_symbol_plus_symbol() {
        let space = z_space();
        let x = Symbol::new("x");

        assert_eq!(space.add(&x, &x), space.monomial(Monomial::var(x.clone()), z(2)));
        assert!(space.sub(&x, &x).is_empty());
        assert_eq!(space.add(&x, 0), space.symbol(&x));
        assert_eq!(space.sub(0, &x), space.neg(&x));
    }

    #[test]
    fn test_additive_identity_fast_paths() {
        let space = z_space();
        let x = Symbol::new("x");
        let p = space.add(&x, 7);

        assert_eq!(space.add(&p, space.zero()), p);
        assert_eq!(space.add(space.zero(), &p), p);
        assert_eq!(space.add(&p, 0), p);
        assert_eq!(space.add(Const(z(0)), &p), p);
        assert_eq!(space.sub(&p, space.zero()), p);
        assert_eq!(space.sub(&p, Const(z(0))), p);
        assert_eq!(space.sub(space.zero(), &p), space.neg(&p));
        assert_eq!(space.sub(0, &p), space.neg(&p));
    }

    #[test]
    fn test_multiplication_by_zero() {
        let space = z_space();
        let x = Symbol::new("x");
        let p = space.add(&x, 7);

        assert!(space.mul(&p, 0).is_empty());
        assert!(space.mul(Const(z(0)), &p).is_empty());
        assert!(space.mul(&p, space.zero()).is_empty());
        assert!(space.mul(&x, 0).is_empty());
        assert!(space.mul(0, &x).is_empty());
    }

    #[test]
    fn test_mixed_operand_kinds() {
        let space = z_space();
        let x = Symbol::new("x");
        let p = space.add(&x, 1);

        // x + 1 + x = 2x + 1
        let two_x_plus_one = space.add(&p, &x);
        assert_eq!(two_x_plus_one.coefficient(&Monomial::var(x.clone())), Some(&z(2)));
        assert_eq!(two_x_plus_one.constant_term(), Some(&z(1)));

        // (x + 1) - x = 1
        assert_eq!(space.sub(&p, &x), space.one());
        // x - (x + 1) = -1
        assert_eq!(space.sub(&x, &p), space.number(-1));
        // (x + 1) - 1 = x
        assert_eq!(space.sub(&p, 1), space.symbol(&x));
        // 1 - (x + 1) = -x
        assert_eq!(space.sub(Const(z(1)), &p), space.neg(&x));
        // 3 * (x + 1) = 3x + 3
        assert_eq!(space.mul(3, &p), space.add(space.mul(&x, 3), 3));
        // x * (x + 1) = x^2 + x
        assert_eq!(space.mul(&x, &p), space.add(space.mul(&x, &x), &x));
        // x - 2 and 2 - x
        assert_eq!(space.sub(&x, 2), space.neg(space.sub(2, &x)));
        // constants fold
        assert_eq!(space.mul(Const(z(6)), 7), space.number(42));
        assert_eq!(space.sub(Const(z(6)), Const(z(6))), space.zero());
    }

    #[test]
    fn test_mul_symbol_raises_exponents() {
        let space = z_space();
        let x = Symbol::new("x");
        let y = Symbol::new("y");

        let p = space.from_terms([(Monomial::new([("x", 2)]), z(3)), (Monomial::new([("y", 1)]), z(1)), (Monomial::one(), z(4))]);
        let q = space.mul(&p, &x);

        assert_eq!(q.len(), 3);
        assert_eq!(q.coefficient(&Monomial::new([("x", 3)])), Some(&z(3)));
        assert_eq!(q.coefficient(&Monomial::new([("x", 1), ("y", 1)])), Some(&z(1)));
        assert_eq!(q.coefficient(&Monomial::var(x.clone())), Some(&z(4)));
        assert_eq!(q, space.mul(&p, space.symbol(&x)));
        assert!(space.mul(space.zero(), &y).is_empty());
    }

    #[test]
    fn test_integers_lift_through_number() {
        let ring = IntegersModN::new(6).unwrap();
        let space = LabeledPolynomialSpace::new(ring);
        let x = Symbol::new("x");

        // 6 is zero in Z/6Z.
        assert!(space.number(6).is_empty());
        assert_eq!(space.add(&x, 6), space.symbol(&x));
        assert!(space.mul(&x, 6).is_empty());

        // 2x * 3 vanishes through zero divisors.
        let two_x = space.mul(&x, 2);
        assert!(space.mul(&two_x, 3).is_empty());
        assert!(space.mul(&two_x, space.number(3)).is_empty());
    }

    #[test]
    fn test_unreduced_residues_are_canonicalized() {
        let ring = IntegersModN::new(6).unwrap();
        let space = LabeledPolynomialSpace::new(ring);
        let x = Symbol::new("x");

        // 6 and 7 enter as residues 0 and 1.
        let p = space.from_terms([(Monomial::var(x.clone()), ring.element(6)), (Monomial::one(), ring.element(7))]);
        assert_eq!(p.len(), 1);
        assert!(space.equals(&p, &space.one()));

        let q = space.add(&x, Const(ring.element(6)));
        assert!(space.equals(&q, &space.symbol(&x)));
        assert!(space.equals(&space.constant(ring.element(7)), &space.one()));
        assert!(space.monomial(Monomial::var(x.clone()), ring.element(12)).is_empty());
        assert!(space.mul(&q, Const(ring.element(18))).is_empty());
    }

    #[test]
    #[should_panic(expected = "overflows u32")]
    fn test_exponent_overflow_panics() {
        let space = z_space();
        let x = Symbol::new("x");
        let top = space.monomial(Monomial::new([("x", u32::MAX)]), z(1));

        let _ = space.mul(&top, &x);
    }

    #[test]
    fn test_exponent_reaches_u32_max() {
        let space = z_space();
        let x = Symbol::new("x");
        let near = space.monomial(Monomial::new([("x", u32::MAX - 1)]), z(1));

        let top = space.mul(&near, &x);
        assert_eq!(top.coefficient(&Monomial::new([("x", u32::MAX)])), Some(&z(1)));
        assert_eq!(space.degree_by(&top, &x), u32::MAX);
    }

    #[test]
    fn test_characteristic_two_cancellation() {
        let space = LabeledPolynomialSpace::new(ElementRing::<FiniteField<2>>::new());
        let x = Symbol::new("x");
        let y = Symbol::new("y");

        assert!(space.add(&x, &x).is_empty());
        // (x + y)^2 = x^2 + y^2 over GF(2)
        let sum = space.add(&x, &y);
        let sq = space.pow(&sum, 2);
        assert_eq!(sq, space.add(space.mul(&x, &x), space.mul(&y, &y)));
    }

    #[test]
    fn test_zero_ring_has_only_zero() {
        let space = LabeledPolynomialSpace::new(IntegersModN::new(1).unwrap());
        let x = Symbol::new("x");

        assert!(space.one().is_empty());
        assert!(space.symbol(&x).is_empty());
        assert!(space.mul(&x, &x).is_empty());
        assert!(space.add(&x, 5).is_empty());
    }

    #[test]
    fn test_pow() {
        let space = LabeledPolynomialSpace::new(ElementRing::<Q>::new());
        let x = Symbol::new("x");
        let p = space.add(&x, 1);

        assert_eq!(space.pow(&p, 0), space.one());
        assert_eq!(space.pow(&space.zero(), 0), space.one());
        assert!(space.pow(&space.zero(), 3).is_empty());

        // (x + 1)^3 = x^3 + 3x^2 + 3x + 1
        let cube = space.pow(&p, 3);
        let expected = space.from_terms([
            (Monomial::new([("x", 3)]), Q::from_integer(1)),
            (Monomial::new([("x", 2)]), Q::from_integer(3)),
            (Monomial::new([("x", 1)]), Q::from_integer(3)),
            (Monomial::one(), Q::from_integer(1)),
        ]);
        assert_eq!(cube, expected);
        assert_eq!(space.pow(&p, 5), space.mul(space.pow(&p, 2), space.pow(&p, 3)));
    }

    #[test]
    fn test_equals_is_order_independent() {
        let space = z_space();
        let x = Symbol::new("x");
        let y = Symbol::new("y");

        let a = space.add(space.add(&x, &y), 1);
        let b = space.add(1, space.add(&y, &x));
        assert!(space.equals(&a, &b));
        assert!(space.equals(&a, &a));
        assert!(!space.equals(&a, &space.add(&x, &y)));
        assert!(!space.equals(&a, &space.add(space.add(&x, &y), 2)));
    }
}
