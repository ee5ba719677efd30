//! Property-based tests for ring arithmetic, inversion, resultants and codecs.

#[cfg(test)]
mod tests {
    use lattica_integers::modular::primes::P46337;
    use lattica_integers::Integer;
    use proptest::prelude::*;

    use crate::{BigIntPolynomial, IntegerPolynomial, TernaryPolynomial};
    use crate::{DenseTernaryPolynomial, RingElement};

    fn ternary_vec(n: usize) -> impl Strategy<Value = Vec<i32>> {
        proptest::collection::vec(-1i32..=1, n)
    }

    // Strategy for a ternary polynomial of dimension 1..24
    fn ternary_poly() -> impl Strategy<Value = IntegerPolynomial> {
        (1usize..24).prop_flat_map(ternary_vec).prop_map(IntegerPolynomial::new)
    }

    // Strategy for a (ternary, general) pair sharing a dimension
    fn operand_pair() -> impl Strategy<Value = (IntegerPolynomial, IntegerPolynomial)> {
        (1usize..24).prop_flat_map(|n| {
            (
                ternary_vec(n).prop_map(IntegerPolynomial::new),
                proptest::collection::vec(-5000i32..5000, n).prop_map(IntegerPolynomial::new),
            )
        })
    }

    proptest! {
        // Arithmetic

        #[test]
        fn multiply_mod_agrees_with_reduction((a, b) in operand_pair(), m in 2i32..5000) {
            let mut unreduced = a.multiply(&b).unwrap();
            unreduced.mod_positive(m);
            prop_assert_eq!(a.multiply_mod(&b, m).unwrap(), unreduced);
        }

        #[test]
        fn multiply_commutes((a, b) in operand_pair()) {
            prop_assert_eq!(a.multiply(&b).unwrap(), b.multiply(&a).unwrap());
        }

        #[test]
        fn sparse_and_dense_agree((a, b) in operand_pair()) {
            let dense = DenseTernaryPolynomial::try_from(a).unwrap();
            let sparse = dense.to_sparse();

            prop_assert_eq!(b.multiply(&dense).unwrap(), b.multiply(&sparse).unwrap());

            let mut via_dense = b.clone();
            let mut via_sparse = b.clone();
            via_dense.add(&dense).unwrap();
            via_sparse.add(&sparse).unwrap();
            prop_assert_eq!(via_dense, via_sparse);
            prop_assert_eq!(sparse.to_integer_polynomial(), dense.into_integer_polynomial());
        }

        #[test]
        fn divide_rounds_half_up(
            coeffs in proptest::collection::vec(-1_000_000i32..1_000_000, 1..16),
            k in prop_oneof![-100i32..=-1, 1i32..=100],
        ) {
            let mut p = IntegerPolynomial::new(coeffs.clone());
            p.divide(k);
            for (&c, &q) in coeffs.iter().zip(p.coeffs()) {
                let expected = (f64::from(c) / f64::from(k) + 0.5).floor();
                prop_assert_eq!(f64::from(q), expected);
            }
        }

        #[test]
        fn reductions_are_idempotent((_, b) in operand_pair(), m in 1i32..100) {
            let mut once = b.clone();
            once.mod_positive(m);
            let mut twice = once.clone();
            twice.mod_positive(m);
            prop_assert_eq!(&once, &twice);

            let mut ensured = b.clone();
            ensured.ensure_positive(m);
            prop_assert_eq!(&once, &ensured);

            let mut centered = b;
            centered.center(m);
            centered.mod_positive(m);
            prop_assert_eq!(once, centered);
        }

        // Inversion

        #[test]
        fn fq_inverse_is_inverse(a in ternary_poly()) {
            if let Some(fq) = a.invert_fq(2048) {
                prop_assert!(a.multiply_mod(&fq, 2048).unwrap().equals_one());
            }
        }

        #[test]
        fn f3_inverse_is_inverse(a in ternary_poly()) {
            if let Some(f3) = a.invert_f3() {
                prop_assert!(a.multiply_mod(&f3, 3).unwrap().equals_one());
                prop_assert!(f3.coeffs().iter().all(|c| (0..3).contains(c)));
            }
        }

        #[test]
        fn fq_inverse_exists_iff_mod2_inverse_exists(a in ternary_poly()) {
            prop_assert_eq!(a.invert_fq(2).is_some(), a.invert_fq(1024).is_some());
        }

        // Resultants

        #[test]
        fn exact_resultant_bezout_relation(a in ternary_poly()) {
            let r = a.resultant();
            let n = a.dimension();
            let b = BigIntPolynomial::from(&a).mult_small(r.rho()).unwrap();
            let c = b.coeffs();

            prop_assert!(c[1..n.saturating_sub(1).max(1)].iter().all(|x| *x == Integer::new(0)));
            if n > 1 {
                prop_assert_eq!(&(&c[0] - &c[n - 1]), r.res());
            }
            prop_assert!(r.verify(&a).unwrap());
        }

        #[test]
        fn modular_resultant_matches_exact(a in ternary_poly()) {
            let exact = a.resultant();
            let modular = a.resultant_mod(P46337).unwrap();
            let p = Integer::new(P46337);

            prop_assert_eq!(modular.res(), &exact.res().rem_euclid(&p));
            prop_assert!(modular.verify(&a).unwrap());
        }

        #[test]
        fn nonzero_resultant_mod_3_implies_f3_inverse(a in ternary_poly()) {
            let r = a.resultant_mod(3).unwrap();
            prop_assert_eq!(r.res() != &Integer::new(0), a.invert_f3().is_some());
        }

        // Codecs

        #[test]
        fn binary_round_trip(
            (n, width) in (1usize..40, 1u32..=16),
            seed in proptest::collection::vec(any::<i32>(), 40),
        ) {
            let q = 1i32 << width;
            let p = IntegerPolynomial::new(seed[..n].iter().map(|c| c.rem_euclid(q)).collect());
            let bytes = p.to_binary(q);
            prop_assert_eq!(bytes.len(), crate::binary_len(n, q));
            prop_assert_eq!(IntegerPolynomial::from_binary(&bytes, n, q).unwrap(), p);
        }

        #[test]
        fn binary4_matches_general(coeffs in proptest::collection::vec(-2048i32..2048, 0..40)) {
            let p = IntegerPolynomial::new(coeffs);
            prop_assert_eq!(p.to_binary4(), p.to_binary(4));
        }

        #[test]
        fn sves_round_trip(a in ternary_poly(), flag in any::<bool>()) {
            let bytes = a.to_binary3_sves(flag).unwrap();
            prop_assert_eq!(bytes.len(), crate::sves_len(a.dimension()));
            prop_assert_eq!(
                IntegerPolynomial::from_binary3_sves(&bytes, a.dimension(), flag).unwrap(),
                a
            );
        }

        #[test]
        fn tight_round_trip(a in ternary_poly()) {
            let bytes = a.to_binary3_tight().unwrap();
            prop_assert_eq!(bytes.len(), crate::tight_len(a.dimension()));
            prop_assert_eq!(
                IntegerPolynomial::from_binary3_tight(&bytes, a.dimension()).unwrap(),
                a
            );
        }
    }
}
