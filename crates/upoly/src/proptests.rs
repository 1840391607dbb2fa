//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::cmp::Ordering;

    use crate::{divides, gcd, lcm, pow, DenseTerms, HashedTerms, Polynomial, Symbol};
    use crate::{SparseTerms, TermContainer, UIntPoly, URatPoly};
    use upoly_integers::{Integer, Rational};

    fn x() -> Symbol {
        Symbol::new("x")
    }

    // Strategy for generating small coefficient vectors (degree 0-4)
    fn small_coeffs() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::vec(-20i64..20i64, 0..=5)
    }

    fn small_poly() -> impl Strategy<Value = UIntPoly> {
        small_coeffs().prop_map(|v| UIntPoly::from_dense(x(), v.into_iter().map(Integer::new)))
    }

    fn nonzero_poly() -> impl Strategy<Value = UIntPoly> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    fn small_rat_poly() -> impl Strategy<Value = URatPoly> {
        proptest::collection::vec((-20i64..20i64, 1i64..6i64), 0..=5).prop_map(|v| {
            let coeffs = v.into_iter().map(|(n, d)| Rational::from_i64(n, d));
            URatPoly::from_dense(x(), coeffs)
        })
    }

    fn nonzero_rat_poly() -> impl Strategy<Value = URatPoly> {
        small_rat_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    fn convert<T: TermContainer<Coeff = Integer>>(p: &UIntPoly) -> Polynomial<T> {
        Polynomial::from_sparse(p.var().clone(), p.iter().map(|(d, c)| (d, c.clone())))
    }

    /// `a` and `b` differ by a sign.
    fn associates(a: &UIntPoly, b: &UIntPoly) -> bool {
        a == b || *a == -b
    }

    proptest! {
        #[test]
        fn gcd_leading_coefficient_non_negative(a in nonzero_poly(), b in nonzero_poly()) {
            let g = gcd(&a, &b).unwrap();
            prop_assert!(!g.leading_coeff().unwrap().is_negative());
        }

        #[test]
        fn rational_gcd_leading_coefficient_non_negative(
            a in nonzero_rat_poly(),
            b in nonzero_rat_poly(),
        ) {
            let g = gcd(&a, &b).unwrap();
            prop_assert!(!g.leading_coeff().unwrap().is_negative());
        }

        #[test]
        fn rational_gcd_divides_both(a in nonzero_rat_poly(), b in nonzero_rat_poly()) {
            let g = gcd(&a, &b).unwrap();
            prop_assert!(divides(&g, &a).unwrap().is_some());
            prop_assert!(divides(&g, &b).unwrap().is_some());
        }

        #[test]
        fn rational_gcd_of_common_factor(
            a in nonzero_rat_poly(),
            b in nonzero_rat_poly(),
            c in nonzero_rat_poly(),
        ) {
            let g = gcd(&a.try_mul(&c).unwrap(), &b.try_mul(&c).unwrap()).unwrap();
            prop_assert!(divides(&c, &g).unwrap().is_some());
            let l = lcm(&a, &b).unwrap();
            prop_assert!(divides(&a, &l).unwrap().is_some());
            prop_assert!(divides(&b, &l).unwrap().is_some());
        }

        #[test]
        fn gcd_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(gcd(&a, &b).unwrap(), gcd(&b, &a).unwrap());
        }

        #[test]
        fn gcd_divides_both(a in nonzero_poly(), b in nonzero_poly()) {
            let g = gcd(&a, &b).unwrap();
            prop_assert!(divides(&g, &a).unwrap().is_some());
            prop_assert!(divides(&g, &b).unwrap().is_some());
        }

        #[test]
        fn gcd_of_common_factor(a in nonzero_poly(), b in nonzero_poly(), c in nonzero_poly()) {
            // c divides both ac and bc, so it divides their gcd
            let g = gcd(&a.try_mul(&c).unwrap(), &b.try_mul(&c).unwrap()).unwrap();
            prop_assert!(divides(&c, &g).unwrap().is_some());
        }

        #[test]
        fn lcm_times_gcd_is_product(a in nonzero_poly(), b in nonzero_poly()) {
            let l = lcm(&a, &b).unwrap();
            let g = gcd(&a, &b).unwrap();
            let product = a.try_mul(&b).unwrap();
            prop_assert!(associates(&l.try_mul(&g).unwrap(), &product));
            prop_assert!(divides(&a, &l).unwrap().is_some());
            prop_assert!(divides(&b, &l).unwrap().is_some());
        }

        #[test]
        fn divides_returns_exact_quotient(a in nonzero_poly(), b in small_poly()) {
            match divides(&a, &b).unwrap() {
                Some(q) => prop_assert_eq!(a.try_mul(&q).unwrap(), b),
                None => {
                    let prod = a.try_mul(&b).unwrap();
                    prop_assert_eq!(divides(&a, &prod).unwrap(), Some(b));
                }
            }
        }

        #[test]
        fn divides_product(a in nonzero_poly(), q in small_poly()) {
            let b = a.try_mul(&q).unwrap();
            prop_assert_eq!(divides(&a, &b).unwrap(), Some(q));
        }

        #[test]
        fn pow_identities(a in small_poly(), n in 0u32..5u32) {
            prop_assert_eq!(pow(&a, 0).unwrap(), Polynomial::one(x()));
            prop_assert_eq!(pow(&a, 1).unwrap(), a.clone());
            prop_assert_eq!(pow(&a, n + 1).unwrap(), pow(&a, n).unwrap().try_mul(&a).unwrap());
        }

        #[test]
        fn from_dense_round_trip(v in small_coeffs()) {
            let p = UIntPoly::from_dense(x(), v.iter().copied().map(Integer::new));
            for (i, c) in (0u32..).zip(&v) {
                prop_assert_eq!(p.coefficient_at(i), Integer::new(*c));
            }
        }

        #[test]
        fn ordered_walks_every_position(a in small_poly()) {
            let degrees: Vec<u32> = a.ordered().map(|(d, _)| d).collect();
            let n = a.size();
            prop_assert_eq!(degrees.len(), n);
            let expected: Vec<u32> = (0..n).rev().map(|d| u32::try_from(d).unwrap()).collect();
            prop_assert_eq!(degrees, expected);
        }

        #[test]
        fn eval_is_a_ring_homomorphism(a in small_poly(), b in small_poly(), pt in -10i64..10i64) {
            let pt = Integer::new(pt);
            let sum = a.try_add(&b).unwrap();
            let product = a.try_mul(&b).unwrap();
            prop_assert_eq!(sum.eval(&pt), a.eval(&pt) + b.eval(&pt));
            prop_assert_eq!(product.eval(&pt), a.eval(&pt) * b.eval(&pt));
        }

        #[test]
        fn compare_consistent_with_eq(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.compare(&b) == Ordering::Equal, a == b);
            prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        }

        #[test]
        fn backends_agree(a in small_poly(), b in small_poly(), n in 0u32..4u32) {
            let da: Polynomial<DenseTerms<Integer>> = convert(&a);
            let db: Polynomial<DenseTerms<Integer>> = convert(&b);
            let ha: Polynomial<HashedTerms<Integer>> = convert(&a);
            let hb: Polynomial<HashedTerms<Integer>> = convert(&b);

            let g = gcd(&a, &b).unwrap();
            prop_assert_eq!(convert::<DenseTerms<Integer>>(&g), gcd(&da, &db).unwrap());
            prop_assert_eq!(convert::<HashedTerms<Integer>>(&g), gcd(&ha, &hb).unwrap());

            let p = pow(&a, n).unwrap();
            prop_assert_eq!(convert::<DenseTerms<Integer>>(&p), pow(&da, n).unwrap());
            prop_assert_eq!(convert::<HashedTerms<Integer>>(&p), pow(&ha, n).unwrap());

            prop_assert_eq!(a.term_hash(), da.term_hash());
            prop_assert_eq!(a.term_hash(), ha.term_hash());
            prop_assert_eq!(a.to_string(), ha.to_string());
            prop_assert_eq!(
                a.ordered().collect::<Vec<_>>(),
                da.ordered().collect::<Vec<_>>()
            );
        }

        #[test]
        fn mismatched_variables_always_fail(a in small_poly(), b in small_poly()) {
            let b = Polynomial::<SparseTerms<Integer>>::from_sparse(
                Symbol::new("y"),
                b.iter().map(|(d, c)| (d, c.clone())),
            );
            prop_assert!(gcd(&a, &b).is_err());
            prop_assert!(lcm(&a, &b).is_err());
            prop_assert!(divides(&a, &b).is_err());
            prop_assert!(a.try_mul(&b).is_err());
        }
    }
}
