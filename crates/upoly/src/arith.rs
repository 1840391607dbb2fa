//! Arithmetic on canonical polynomials: gcd, lcm, power and exact division.
//!
//! Every function is pure: operands are only read and a new polynomial is
//! returned. Binary operations require both operands to share a variable.

use log::{debug, trace};

use crate::domain::Coefficient;
use crate::error::{NonExactDivision, PolyError, Result};
use crate::poly::Polynomial;
use crate::terms::{product_degree, TermContainer};

/// Negates `t` if its leading coefficient is negative.
fn normalize_sign<T: TermContainer>(t: T) -> T {
    if t.leading_coeff().is_some_and(Coefficient::is_negative) {
        t.neg()
    } else {
        t
    }
}

/// Greatest common divisor of two polynomials.
///
/// The result is the canonical representative of its associate class: its
/// leading coefficient is non-negative. `gcd(0, b)` is `b` normalized, and
/// `gcd(0, 0)` is zero.
///
/// # Errors
///
/// Returns [`PolyError::VariableMismatch`] if the variables differ.
pub fn gcd<T: TermContainer>(a: &Polynomial<T>, b: &Polynomial<T>) -> Result<Polynomial<T>> {
    a.check_var(b)?;

    let g = normalize_sign(a.terms().gcd(b.terms()));
    let g = Polynomial::from_container(a.var().clone(), g);
    debug!("gcd({a}, {b}) = {g}");
    Ok(g)
}

/// Least common multiple of two polynomials, computed as `(a / gcd(a, b)) * b`.
///
/// The result is zero if either operand is zero.
///
/// # Errors
///
/// Returns [`PolyError::VariableMismatch`] if the variables differ and
/// [`PolyError::DegreeOverflow`] if the lcm degree exceeds `u32::MAX`.
///
/// # Panics
///
/// Panics if `a` is not exactly divisible by `gcd(a, b)`, which can only
/// happen through a defect in the gcd or in the coefficient domain.
pub fn lcm<T: TermContainer>(a: &Polynomial<T>, b: &Polynomial<T>) -> Result<Polynomial<T>> {
    a.check_var(b)?;
    if a.is_zero() || b.is_zero() {
        return Ok(Polynomial::zero(a.var().clone()));
    }

    let g = normalize_sign(a.terms().gcd(b.terms()));
    let cofactor = match a.terms().div_exact(&g) {
        Ok(q) => q,
        Err(NonExactDivision) => {
            panic!("inconsistent gcd: {:?} is not divisible by {g:?}", a.terms())
        }
    };
    product_degree(&cofactor, b.terms()).ok_or(PolyError::DegreeOverflow)?;

    let l = Polynomial::from_container(a.var().clone(), cofactor.mul(b.terms()));
    debug!("lcm({a}, {b}) = {l}");
    Ok(l)
}

/// Raises a polynomial to a non-negative integer power.
///
/// `pow(a, 0)` is the constant 1 over `a`'s variable, including for the
/// zero polynomial.
///
/// # Errors
///
/// Returns [`PolyError::DegreeOverflow`] if `degree(a) * exp` exceeds
/// `u32::MAX`.
pub fn pow<T: TermContainer>(a: &Polynomial<T>, exp: u32) -> Result<Polynomial<T>> {
    if exp == 0 {
        return Ok(Polynomial::one(a.var().clone()));
    }
    if exp == 1 {
        return Ok(a.clone());
    }
    a.degree().checked_mul(exp).ok_or(PolyError::DegreeOverflow)?;

    let mut result: Option<T> = None;
    let mut base = a.terms().clone();
    let mut e = exp;

    loop {
        if e & 1 == 1 {
            result = Some(match result {
                Some(r) => r.mul(&base),
                None => base.clone(),
            });
        }
        e >>= 1;
        if e == 0 {
            break;
        }
        base = base.mul(&base);
    }

    Ok(Polynomial::from_container(a.var().clone(), result.unwrap_or_default()))
}

/// Tests whether `a` divides `b`.
///
/// Returns `Some(q)` with `a * q == b` when the division is exact and `None`
/// otherwise. A zero `a` divides only the zero polynomial.
///
/// # Errors
///
/// Returns [`PolyError::VariableMismatch`] if the variables differ.
pub fn divides<T: TermContainer>(
    a: &Polynomial<T>,
    b: &Polynomial<T>,
) -> Result<Option<Polynomial<T>>> {
    a.check_var(b)?;

    match b.terms().div_exact(a.terms()) {
        Ok(q) => Ok(Some(Polynomial::from_container(a.var().clone(), q))),
        Err(NonExactDivision) => {
            trace!("divides: ({a}) does not divide ({b})");
            Ok(None)
        }
    }
}
