//! Arbitrary precision integers.
//!
//! [`Integer`] wraps `dashu::IBig` and exposes exactly the arithmetic a
//! polynomial coefficient needs: ring operations, truncating division with
//! remainder, a non-negative gcd and integer powers.

use dashu::base::{Abs, Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

/// An arbitrary precision integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Parses an integer from a string in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns true if this integer is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Truncating division with remainder.
    ///
    /// Returns `(q, r)` with `self = q * divisor + r`, where `r` carries the
    /// sign of `self` and `|r| < |divisor|`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        (Self(&self.0 / &divisor.0), Self(&self.0 % &divisor.0))
    }

    /// Greatest common divisor, always non-negative.
    ///
    /// `gcd(0, n) = |n|` and `gcd(0, 0) = 0`.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.abs();
        }
        if other.is_zero() {
            return self.abs();
        }
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Least common multiple, always non-negative.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        Self(&self.0 / &g.0 * &other.0).abs()
    }

    /// Computes `self^exp`.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Integer {
    type Err = dashu::base::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

/// Implements `op` for every owned/borrowed operand combination.
macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Integer {
                Integer(self.0.$method(rhs.0))
            }
        }

        impl $trait<&Integer> for Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer(self.0.$method(&rhs.0))
            }
        }

        impl $trait for &Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer((&self.0).$method(&rhs.0))
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);
forward_binop!(Rem, rem);

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Integer::new(10);
        let b = Integer::new(3);

        assert_eq!(&a + &b, Integer::new(13));
        assert_eq!(&a - &b, Integer::new(7));
        assert_eq!(&a * &b, Integer::new(30));
        assert_eq!(a.clone() / b.clone(), Integer::new(3));
        assert_eq!(a % b, Integer::new(1));
    }

    #[test]
    fn test_div_rem_truncates() {
        let (q, r) = Integer::new(-7).div_rem(&Integer::new(2));
        assert_eq!(q, Integer::new(-3));
        assert_eq!(r, Integer::new(-1));

        let (q, r) = Integer::new(12).div_rem(&Integer::new(-4));
        assert_eq!(q, Integer::new(-3));
        assert!(r.is_zero());
    }

    #[test]
    fn test_gcd_lcm() {
        let i = Integer::new;
        assert_eq!(i(2).gcd(&i(4)), i(2));
        assert_eq!(i(2).gcd(&i(3)), i(1));
        assert_eq!(i(2).gcd(&i(6)), i(2));
        assert_eq!(i(3).gcd(&i(6)), i(3));

        assert_eq!(i(2).lcm(&i(4)), i(4));
        assert_eq!(i(2).lcm(&i(3)), i(6));
        assert_eq!(i(2).lcm(&i(6)), i(6));
        assert_eq!(i(3).lcm(&i(6)), i(6));
    }

    #[test]
    fn test_gcd_sign_and_zero() {
        let i = Integer::new;
        assert_eq!(i(-48).gcd(&i(18)), i(6));
        assert_eq!(i(0).gcd(&i(-5)), i(5));
        assert_eq!(i(-5).gcd(&i(0)), i(5));
        assert_eq!(i(0).gcd(&i(0)), i(0));
    }

    #[test]
    fn test_pow_and_sign() {
        assert_eq!(Integer::new(-2).pow(3), Integer::new(-8));
        assert_eq!(Integer::new(7).pow(0), Integer::one());
        assert!(Integer::new(-1).is_negative());
    }

    #[test]
    fn test_large_numbers() {
        let a: Integer = "123456789012345678901234567890".parse().unwrap();
        let b = Integer::from_str_radix("987654321098765432109876543210", 10).unwrap();
        let sum = a + b;
        assert_eq!(sum.to_string(), "1111111110111111111011111111100");
    }
}
