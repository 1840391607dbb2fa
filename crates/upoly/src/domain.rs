//! The coefficient domain.
//!
//! Polynomials are generic over an exact coefficient type. The
//! [`Coefficient`] trait collects the arithmetic the term containers and the
//! GCD machinery need from it.

use num_traits::{One, Zero};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, Mul, Neg, Sub};
use upoly_integers::{Integer, Rational};

/// An exact coefficient type (integers or rationals).
///
/// # Laws
///
/// - `Zero`/`One` and the ring operations form a commutative ring
/// - `div_rem(a, b) = (q, r)` satisfies `a = q*b + r`; the division is exact
///   iff `r` is zero
/// - `gcd` is non-negative, commutative, and `gcd(0, a) = |a|`
pub trait Coefficient:
    Clone
    + Eq
    + Ord
    + Hash
    + Debug
    + Display
    + Send
    + Sync
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Returns true if the value is strictly negative.
    fn is_negative(&self) -> bool;

    /// Division with remainder.
    ///
    /// # Panics
    ///
    /// May panic if `divisor` is zero.
    fn div_rem(&self, divisor: &Self) -> (Self, Self);

    /// Computes `self^exp`.
    fn pow(&self, exp: u32) -> Self;

    /// Greatest common divisor.
    fn gcd(&self, other: &Self) -> Self;
}

impl Coefficient for Integer {
    fn is_negative(&self) -> bool {
        Integer::is_negative(self)
    }

    fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        Integer::div_rem(self, divisor)
    }

    fn pow(&self, exp: u32) -> Self {
        Integer::pow(self, exp)
    }

    fn gcd(&self, other: &Self) -> Self {
        Integer::gcd(self, other)
    }
}

impl Coefficient for Rational {
    fn is_negative(&self) -> bool {
        Rational::is_negative(self)
    }

    /// Field division: the remainder is always zero.
    fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        (self / divisor, Self::zero())
    }

    fn pow(&self, exp: u32) -> Self {
        Rational::pow(self, exp)
    }

    fn gcd(&self, other: &Self) -> Self {
        Rational::gcd(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact_quotient<C: Coefficient>(a: &C, b: &C) -> Option<C> {
        let (q, r) = a.div_rem(b);
        r.is_zero().then_some(q)
    }

    #[test]
    fn test_integer_exactness() {
        let six = Integer::new(6);
        assert_eq!(exact_quotient(&six, &Integer::new(-3)), Some(Integer::new(-2)));
        assert_eq!(exact_quotient(&six, &Integer::new(4)), None);
    }

    #[test]
    fn test_rational_division_is_always_exact() {
        let a = Rational::from_i64(3, 4);
        let b = Rational::from_i64(-5, 2);
        assert_eq!(exact_quotient(&a, &b), Some(Rational::from_i64(-3, 10)));
    }

    #[test]
    fn test_pow_through_trait() {
        assert_eq!(Coefficient::pow(&Integer::new(-3), 3), Integer::new(-27));
        assert_eq!(Coefficient::pow(&Rational::from_i64(2, 3), 2), Rational::from_i64(4, 9));
    }
}
