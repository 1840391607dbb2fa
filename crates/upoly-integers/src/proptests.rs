//! Property-based tests for the coefficient arithmetic the polynomial
//! algorithms rely on.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let (a, b, c) = (Integer::new(a), Integer::new(b), Integer::new(c));
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn integer_div_rem_reconstructs(a in small_int(), b in non_zero_int()) {
            let (a, b) = (Integer::new(a), Integer::new(b));
            let (q, r) = a.div_rem(&b);
            prop_assert_eq!(&q * &b + &r, a.clone());
            prop_assert!(r.abs() < b.abs());
            prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
        }

        #[test]
        fn integer_gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let (a, b) = (Integer::new(a), Integer::new(b));
            let g = a.gcd(&b);

            prop_assert!(!g.is_negative());
            prop_assert!(a.div_rem(&g).1.is_zero());
            prop_assert!(b.div_rem(&g).1.is_zero());
            prop_assert_eq!(g, b.gcd(&a));
        }

        #[test]
        fn integer_gcd_times_lcm(a in non_zero_int(), b in non_zero_int()) {
            let (a, b) = (Integer::new(a), Integer::new(b));
            prop_assert_eq!(a.gcd(&b) * a.lcm(&b), (&a * &b).abs());
        }

        #[test]
        fn integer_pow_matches_repeated_mul(a in -20i64..20i64, n in 0u32..6u32) {
            let a = Integer::new(a);
            let expected = (0..n).fold(Integer::one(), |acc, _| acc * &a);
            prop_assert_eq!(a.pow(n), expected);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            prop_assert!((&a * &a.recip()).is_one());
        }

        #[test]
        fn rational_gcd_quotients_are_integers(a in rational(), b in rational()) {
            prop_assume!(!a.is_zero() || !b.is_zero());
            let g = a.gcd(&b);

            prop_assert!(!g.is_negative());
            prop_assert!((a.clone() / g.clone()).is_integer());
            prop_assert!((b.clone() / g.clone()).is_integer());
            prop_assert_eq!(g, b.gcd(&a));
        }
    }
}
