//! Polynomial division.
//!
//! The working remainder is kept in an ordered map so the leading term is
//! always at hand, whatever the backend of the operands.

use log::trace;
use num_traits::Zero;
use std::collections::BTreeMap;

use crate::domain::Coefficient;
use crate::error::NonExactDivision;
use crate::terms::{accumulate, TermContainer};

fn to_map<T: TermContainer>(t: &T) -> BTreeMap<u32, T::Coeff> {
    t.terms().map(|(d, c)| (d, c.clone())).collect()
}

/// Exact quotient `dividend / divisor`.
///
/// Every step must divide the leading coefficient exactly in the
/// coefficient domain, and the final remainder must vanish.
///
/// # Errors
///
/// Returns [`NonExactDivision`] as soon as either condition fails, or if
/// `divisor` is empty while `dividend` is not.
pub fn div_exact<T: TermContainer>(dividend: &T, divisor: &T) -> Result<T, NonExactDivision> {
    if dividend.is_empty() {
        return Ok(T::default());
    }
    let (Some(dd), Some(lc)) = (divisor.degree(), divisor.leading_coeff()) else {
        return Err(NonExactDivision);
    };

    let mut rem = to_map(dividend);
    let mut quotient = Vec::new();

    while let Some((&d, lead)) = rem.last_key_value() {
        if d < dd {
            trace!("div_exact: remainder of degree {d} left by divisor of degree {dd}");
            return Err(NonExactDivision);
        }

        let (q, r) = lead.div_rem(lc);
        if !r.is_zero() {
            trace!("div_exact: leading coefficient {lead} not divisible by {lc}");
            return Err(NonExactDivision);
        }

        let shift = d - dd;
        for (e, c) in divisor.terms() {
            accumulate(&mut rem, e + shift, -(q.clone() * c.clone()));
        }
        quotient.push((shift, q));
    }

    Ok(T::from_terms(quotient))
}

/// Pseudo-remainder of `p` by `q`.
///
/// Computes `r` with `lc(q)^k * p = s*q + r` and `deg r < deg q`, using only
/// ring operations, so it never needs a coefficient division.
///
/// # Panics
///
/// Panics if `q` is empty.
pub fn pseudo_rem<T: TermContainer>(p: &T, q: &T) -> T {
    let (Some(dq), Some(lc)) = (q.degree(), q.leading_coeff()) else {
        panic!("pseudo-remainder by the zero polynomial");
    };

    let mut rem = to_map(p);
    while let Some((&d, lead)) = rem.last_key_value() {
        if d < dq {
            break;
        }
        let lead = lead.clone();
        let shift = d - dq;

        for c in rem.values_mut() {
            *c = c.clone() * lc.clone();
        }
        for (e, c) in q.terms() {
            accumulate(&mut rem, e + shift, -(lead.clone() * c.clone()));
        }
    }

    T::from_terms(rem)
}
