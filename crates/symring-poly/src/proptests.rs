//! Property-based tests for labeled polynomial arithmetic.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use proptest::prelude::*;
    use rayon::prelude::*;
    use symring_rings::{ElementRing, IntegersModN, Z};

    use crate::labeled::LabeledPolynomial;
    use crate::monomial::Monomial;
    use crate::space::LabeledPolynomialSpace;
    use crate::symbol::Symbol;

    type Raw = Vec<(BTreeMap<Symbol, u32>, i64)>;

    const NAMES: [&str; 3] = ["x", "y", "z"];

    fn z_space() -> LabeledPolynomialSpace<ElementRing<Z>> {
        LabeledPolynomialSpace::new(ElementRing::new())
    }

    /// Raw terms: exponent maps over three variables (zero exponents kept)
    /// with small coefficients, zero included.
    fn raw_terms() -> impl Strategy<Value = Raw> {
        let key = prop::collection::vec(0u32..3, NAMES.len()).prop_map(|exps| {
            NAMES
                .iter()
                .zip(exps)
                .map(|(&name, exp)| (Symbol::new(name), exp))
                .collect::<BTreeMap<_, _>>()
        });
        prop::collection::vec((key, -5i64..5), 0..6)
    }

    fn build(space: &LabeledPolynomialSpace<ElementRing<Z>>, raw: &Raw) -> LabeledPolynomial<Z> {
        space.from_pairs(raw.iter().map(|(key, c)| (key.clone(), Z::new(*c))))
    }

    fn poly() -> impl Strategy<Value = LabeledPolynomial<Z>> {
        raw_terms().prop_map(|raw| build(&z_space(), &raw))
    }

    fn is_canonical(p: &LabeledPolynomial<Z>) -> bool {
        p.terms()
            .all(|(key, c)| *c != Z::new(0) && key.iter().all(|(_, &exp)| exp > 0))
    }

    proptest! {
        #[test]
        fn add_commutative(p in poly(), q in poly()) {
            let space = z_space();
            prop_assert!(space.equals(&space.add(&p, &q), &space.add(&q, &p)));
        }

        #[test]
        fn mul_commutative(p in poly(), q in poly()) {
            let space = z_space();
            prop_assert!(space.equals(&space.mul(&p, &q), &space.mul(&q, &p)));
        }

        #[test]
        fn add_associative(p in poly(), q in poly(), r in poly()) {
            let space = z_space();
            let left = space.add(space.add(&p, &q), &r);
            let right = space.add(&p, space.add(&q, &r));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn mul_associative(p in poly(), q in poly(), r in poly()) {
            let space = z_space();
            let left = space.mul(space.mul(&p, &q), &r);
            let right = space.mul(&p, space.mul(&q, &r));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn distributive(p in poly(), q in poly(), r in poly()) {
            let space = z_space();
            let left = space.mul(&p, space.add(&q, &r));
            let right = space.add(space.mul(&p, &q), space.mul(&p, &r));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn additive_identity(p in poly()) {
            let space = z_space();
            prop_assert_eq!(space.add(&p, space.zero()), p.clone());
            prop_assert_eq!(space.add(space.zero(), &p), p.clone());
            prop_assert_eq!(space.mul(&p, space.one()), p.clone());
            prop_assert!(space.sub(&p, &p).is_empty());
        }

        #[test]
        fn results_are_canonical(p in poly(), q in poly()) {
            let space = z_space();
            prop_assert!(is_canonical(&p));
            prop_assert!(is_canonical(&space.add(&p, &q)));
            prop_assert!(is_canonical(&space.sub(&p, &q)));
            prop_assert!(is_canonical(&space.mul(&p, &q)));
        }

        #[test]
        fn zero_exponents_are_irrelevant(raw in raw_terms()) {
            let space = z_space();
            let padded: Raw = raw
                .iter()
                .map(|(key, c)| {
                    let mut key = key.clone();
                    key.insert(Symbol::new("w"), 0);
                    (key, *c)
                })
                .collect();

            prop_assert_eq!(build(&space, &raw), build(&space, &padded));
        }

        #[test]
        fn canonicalization_idempotent(p in poly()) {
            let space = z_space();
            let again = space.from_pairs(p.terms().map(|(key, c)| (key.clone(), c.clone())));
            prop_assert_eq!(again, p);
        }

        #[test]
        fn unchecked_round_trip(p in poly()) {
            let space = z_space();
            let q = space.from_map_unchecked(p.coefficients().clone());
            prop_assert!(space.equals(&q, &p));
        }

        #[test]
        fn symbol_operands_match_lifted(p in poly(), c in -5i64..5) {
            let space = z_space();
            let x = Symbol::new("x");
            let lifted = space.symbol(&x);

            prop_assert_eq!(space.add(&p, &x), space.add(&p, &lifted));
            prop_assert_eq!(space.sub(&x, &p), space.sub(&lifted, &p));
            prop_assert_eq!(space.mul(&p, &x), space.mul(&p, &lifted));
            prop_assert_eq!(space.sub(c, &p), space.sub(space.number(c), &p));
        }

        #[test]
        fn degree_of_product(p in poly(), q in poly()) {
            let space = z_space();
            prop_assume!(!p.is_empty() && !q.is_empty());
            prop_assert_eq!(space.degree(&space.mul(&p, &q)), space.degree(&p) + space.degree(&q));
        }

        #[test]
        fn modular_scaling_wraps(n in 1u64..12, k in -20i64..20) {
            let space = LabeledPolynomialSpace::new(IntegersModN::new(n).unwrap());
            let x = Symbol::new("x");
            let p = space.mul(&x, k);
            let n = i64::try_from(n).unwrap();

            prop_assert_eq!(p.is_empty(), k.rem_euclid(n) == 0);
            prop_assert!(space.mul(&p, n).is_empty());
        }
    }

    #[test]
    fn shared_space_across_threads() {
        let space = z_space();
        let x = Symbol::new("x");
        let y = Symbol::new("y");
        let base = space.add(&x, &y);

        let products: Vec<_> = (0u32..16).into_par_iter().map(|n| space.pow(&base, n)).collect();

        for (n, product) in (0u32..16).zip(&products) {
            assert_eq!(space.degree(product), i64::from(n));
            assert_eq!(product.len(), n as usize + 1);
            assert_eq!(
                product.coefficient(&Monomial::new([("x", n)])),
                Some(&Z::new(1))
            );
        }
        assert_eq!(products[5], space.mul(&products[2], &products[3]));
    }
}
