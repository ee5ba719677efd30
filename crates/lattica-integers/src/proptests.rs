//! Property-based tests for integer and modular arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::modular::primes;
    use crate::{Integer, SmallModulus};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b.clone() + a.clone() * c.clone()
            );
        }

        #[test]
        fn integer_additive_inverse(a in small_int()) {
            let a = Integer::new(a);
            let neg_a = -a.clone();
            prop_assert!((a + neg_a).is_zero());
        }

        #[test]
        fn rem_euclid_matches_i64(a in any::<i32>(), m in 1i64..100_000i64) {
            let r = Integer::from(a).rem_euclid(&Integer::new(m));
            prop_assert_eq!(r.to_i64(), Some(i64::from(a).rem_euclid(m)));
        }

        #[test]
        fn center_is_congruent_and_bounded(a in small_int(), m in 2i64..500i64) {
            let m_big = Integer::new(m);
            let c = Integer::new(a).center(&m_big).to_i64().unwrap();
            prop_assert_eq!((c - a).rem_euclid(m), 0);
            prop_assert!(2 * c > -m && 2 * c <= m);
        }

        #[test]
        fn extended_gcd_is_bezout(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let (g, x, y) = a.extended_gcd(&b);

            prop_assert!(!g.is_negative());
            prop_assert_eq!(x * &a + y * &b, g.clone());
            prop_assert!((a % g.clone()).is_zero());
            prop_assert!((b % g).is_zero());
        }

        #[test]
        fn exact_div_inverts_mul(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!((&a * &b).exact_div(&b), a);
        }

        // SmallModulus properties

        #[test]
        fn small_modulus_inverse(a in 1i64..primes::P46337) {
            let p = SmallModulus::new(primes::P46337).unwrap();
            let inv = p.inv(a).expect("inverse should exist for non-zero mod prime");
            prop_assert_eq!(p.mul(a, inv), 1);
        }

        #[test]
        fn small_modulus_fermat_little_theorem(a in 1i64..primes::P46337) {
            let p = SmallModulus::new(primes::P46337).unwrap();
            // a^(p-1) = 1 (mod p) for a != 0
            prop_assert_eq!(p.pow(a, (primes::P46337 - 1) as u64), 1);
        }

        #[test]
        fn small_modulus_matches_integer(a in any::<i32>(), b in any::<i32>()) {
            let p = SmallModulus::new(primes::P65537).unwrap();
            let expected = (Integer::from(a) * Integer::from(b))
                .rem_euclid(&Integer::new(primes::P65537));
            let got = p.mul(p.reduce(i64::from(a)), p.reduce(i64::from(b)));
            prop_assert_eq!(Some(got), expected.to_i64());
        }

        #[test]
        fn pow_of_one(exp in 0u64..10_000u64) {
            let p = SmallModulus::new(primes::P32749).unwrap();
            prop_assert!(Integer::new(p.pow(1, exp)).is_one());
        }
    }
}
