//! Property-based tests for the ring contexts.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::context::{ElementRing, FieldContext, RingContext};
    use crate::finite_field::FiniteField;
    use crate::modular::IntegersModN;
    use crate::rationals::Q;
    use crate::integers::Z;

    type F101 = FiniteField<101>;

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn small_rational() -> impl Strategy<Value = Q> {
        (-100i64..100i64, 1i64..50i64).prop_map(|(n, d)| Q::new(n, d))
    }

    fn modulus() -> impl Strategy<Value = u64> {
        1u64..64u64
    }

    proptest! {
        // Ring axioms through the context interface

        #[test]
        fn z_add_commutative(a in small_int(), b in small_int()) {
            let ring = ElementRing::<Z>::new();
            let (a, b) = (Z::new(a), Z::new(b));
            prop_assert_eq!(ring.add(&a, &b), ring.add(&b, &a));
        }

        #[test]
        fn z_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let ring = ElementRing::<Z>::new();
            let (a, b, c) = (Z::new(a), Z::new(b), Z::new(c));
            prop_assert_eq!(
                ring.mul(&a, &ring.add(&b, &c)),
                ring.add(&ring.mul(&a, &b), &ring.mul(&a, &c))
            );
        }

        #[test]
        fn q_mul_associative(a in small_rational(), b in small_rational(), c in small_rational()) {
            let ring = ElementRing::<Q>::new();
            prop_assert_eq!(
                ring.mul(&ring.mul(&a, &b), &c),
                ring.mul(&a, &ring.mul(&b, &c))
            );
        }

        #[test]
        fn q_inverse(a in small_rational()) {
            let ring = ElementRing::<Q>::new();
            match ring.inv(&a) {
                Some(inv) => prop_assert!(ring.is_one(&ring.mul(&a, &inv))),
                None => prop_assert!(ring.is_zero(&a)),
            }
        }

        #[test]
        fn finite_field_inverse(a in 1u64..101u64) {
            let ring = ElementRing::<F101>::new();
            let a = F101::new(a);
            let inv = ring.inv(&a).unwrap();
            prop_assert!(ring.is_one(&ring.mul(&a, &inv)));
        }

        // number() agrees with repeated addition of one

        #[test]
        fn number_is_additive(n in modulus(), a in small_int(), b in small_int()) {
            let ring = IntegersModN::new(n).unwrap();
            prop_assert_eq!(ring.number(a + b), ring.add(&ring.number(a), &ring.number(b)));
        }

        #[test]
        fn number_matches_default_doubling(a in small_int()) {
            let ring = ElementRing::<F101>::new();
            let mut expected = ring.zero();
            for _ in 0..a.unsigned_abs() {
                expected = ring.add(&expected, &ring.one());
            }
            if a < 0 {
                expected = ring.neg(&expected);
            }
            prop_assert_eq!(ring.number(a), expected);
        }

        #[test]
        fn modular_additive_inverse(n in modulus(), a in 0u64..1000u64) {
            let ring = IntegersModN::new(n).unwrap();
            let a = ring.element(a);
            prop_assert!(ring.is_zero(&ring.add(&a, &ring.neg(&a))));
        }

        #[test]
        fn modular_pow_matches_repeated_mul(n in modulus(), a in 0u64..1000u64, e in 0u32..12u32) {
            let ring = IntegersModN::new(n).unwrap();
            let a = ring.element(a);
            let mut expected = ring.one();
            for _ in 0..e {
                expected = ring.mul(&expected, &a);
            }
            prop_assert_eq!(ring.pow(&a, e), expected);
        }
    }
}
