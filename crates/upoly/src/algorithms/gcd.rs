//! Polynomial GCD over an exact coefficient domain.
//!
//! The gcd is computed as `gcd(cont(a), cont(b)) * pp(prs(a, b))`, where the
//! primitive polynomial remainder sequence keeps coefficient growth bounded
//! by taking the primitive part of every pseudo-remainder. Over the integers
//! this is the full gcd in Z[x]; over the rationals the content gcd makes the
//! result unique up to sign as well.

use log::trace;
use num_traits::{One, Zero};

use super::division::pseudo_rem;
use crate::domain::Coefficient;
use crate::terms::TermContainer;

/// Computes the content of a polynomial (GCD of all coefficients).
///
/// The content is non-negative and zero only for the zero polynomial.
pub fn content<T: TermContainer>(p: &T) -> T::Coeff {
    p.terms().fold(T::Coeff::zero(), |acc, (_, c)| acc.gcd(c))
}

/// Computes the primitive part of a polynomial (divided by content).
pub fn primitive_part<T: TermContainer>(p: &T) -> T {
    let c = content(p);
    if c.is_zero() || c.is_one() {
        return p.clone();
    }
    T::from_terms(p.terms().map(|(d, x)| (d, x.div_rem(&c).0)))
}

/// Greatest common divisor via the primitive PRS.
///
/// `prs_gcd(0, b) = b` and `prs_gcd(0, 0) = 0`. The sign of the result is
/// left as the sequence produces it.
pub fn prs_gcd<T: TermContainer>(a: &T, b: &T) -> T {
    if a.is_empty() {
        return b.clone();
    }
    if b.is_empty() {
        return a.clone();
    }

    let c = content(a).gcd(&content(b));
    let (mut p, mut q) = (primitive_part(a), primitive_part(b));
    if p.degree() < q.degree() {
        std::mem::swap(&mut p, &mut q);
    }

    let mut steps = 0usize;
    while !q.is_empty() {
        let r = pseudo_rem(&p, &q);
        p = q;
        q = primitive_part(&r);
        steps += 1;
        trace!("prs_gcd: step {steps}, remainder degree {:?}", q.degree());
    }

    primitive_part(&p).scale(&c)
}
