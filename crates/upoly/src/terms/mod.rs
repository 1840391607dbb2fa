//! Term storage backends.
//!
//! A [`TermContainer`] stores `(degree, coefficient)` pairs with nonzero
//! coefficients. The polynomial type and every algorithm in this crate are
//! written against this trait only, so the backends below are
//! interchangeable and give identical results:
//!
//! - [`DenseTerms`]: a vector indexed by degree
//! - [`SparseTerms`]: an ordered map
//! - [`HashedTerms`]: an unordered hash map

use num_traits::Zero;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::algorithms::{division, gcd};
use crate::domain::Coefficient;
use crate::error::NonExactDivision;

pub mod dense;
pub mod hashed;
pub mod sparse;

pub use dense::DenseTerms;
pub use hashed::HashedTerms;
pub use sparse::SparseTerms;

/// Storage of the nonzero terms of a univariate polynomial.
///
/// Implementations never store a zero coefficient. The whole-container
/// operations have generic default implementations written against the
/// primitives; backends override them when their layout allows a faster path.
pub trait TermContainer: Clone + Eq + Debug + Default + Send + Sync {
    /// The coefficient type.
    type Coeff: Coefficient;

    /// Iterator over the stored terms.
    type Terms<'a>: Iterator<Item = (u32, &'a Self::Coeff)>
    where
        Self: 'a;

    /// Inserts a term.
    ///
    /// The coefficient must be nonzero and the degree must not be stored
    /// yet; use [`TermContainer::from_terms`] for arbitrary input.
    fn insert(&mut self, degree: u32, coeff: Self::Coeff);

    /// Returns the coefficient stored at `degree`, or `None` if there is no
    /// term of that degree.
    fn get(&self, degree: u32) -> Option<&Self::Coeff>;

    /// Returns the largest stored degree, or `None` if empty.
    fn degree(&self) -> Option<u32>;

    /// Returns the number of stored terms.
    fn len(&self) -> usize;

    /// Returns true if no term is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the stored terms in a backend-defined order.
    ///
    /// The order is stable for a given container but not across containers.
    fn terms(&self) -> Self::Terms<'_>;

    /// Returns the coefficient of the highest-degree term.
    fn leading_coeff(&self) -> Option<&Self::Coeff> {
        self.degree().and_then(|d| self.get(d))
    }

    /// Builds a container from arbitrary terms.
    ///
    /// Coefficients of repeated degrees are summed and zero results dropped.
    fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (u32, Self::Coeff)>,
    {
        let mut acc: BTreeMap<u32, Self::Coeff> = BTreeMap::new();
        for (d, c) in terms {
            accumulate(&mut acc, d, c);
        }

        let mut out = Self::default();
        for (d, c) in acc {
            if !c.is_zero() {
                out.insert(d, c);
            }
        }
        out
    }

    /// The constant `c`.
    fn constant(c: Self::Coeff) -> Self {
        Self::from_terms([(0, c)])
    }

    /// Sum of two containers.
    #[must_use]
    fn add(&self, other: &Self) -> Self {
        Self::from_terms(
            self.terms()
                .chain(other.terms())
                .map(|(d, c)| (d, c.clone())),
        )
    }

    /// Negation.
    #[must_use]
    fn neg(&self) -> Self {
        let mut out = Self::default();
        for (d, c) in self.terms() {
            out.insert(d, -c.clone());
        }
        out
    }

    /// Difference of two containers.
    #[must_use]
    fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Product of two containers.
    ///
    /// # Panics
    ///
    /// Panics if a product degree exceeds `u32::MAX`. Callers that accept
    /// arbitrary degrees check the product degree first.
    #[must_use]
    fn mul(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::default();
        }

        let mut acc: BTreeMap<u32, Self::Coeff> = BTreeMap::new();
        for (d1, c1) in self.terms() {
            for (d2, c2) in other.terms() {
                accumulate(&mut acc, add_degrees(d1, d2), c1.clone() * c2.clone());
            }
        }
        Self::from_terms(acc)
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    fn scale(&self, c: &Self::Coeff) -> Self {
        Self::from_terms(self.terms().map(|(d, x)| (d, x.clone() * c.clone())))
    }

    /// Exact quotient `self / divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`NonExactDivision`] if the division leaves a remainder
    /// (including division of a nonzero container by an empty one).
    fn div_exact(&self, divisor: &Self) -> Result<Self, NonExactDivision> {
        division::div_exact(self, divisor)
    }

    /// Greatest common divisor, including the gcd of the contents.
    ///
    /// The sign of the result is not normalized.
    #[must_use]
    fn gcd(&self, other: &Self) -> Self {
        gcd::prs_gcd(self, other)
    }
}

/// Degree of the product of `a` and `b`, or `None` if it does not fit in
/// a `u32`. Empty operands give `Some(0)`.
pub(crate) fn product_degree<T: TermContainer>(a: &T, b: &T) -> Option<u32> {
    match (a.degree(), b.degree()) {
        (Some(d1), Some(d2)) => d1.checked_add(d2),
        _ => Some(0),
    }
}

/// Sum of two term degrees.
///
/// Overflow is checked in every build profile; a wrapped degree would
/// silently produce the wrong polynomial.
pub(crate) fn add_degrees(d1: u32, d2: u32) -> u32 {
    d1.checked_add(d2)
        .unwrap_or_else(|| panic!("degree overflow: x^{d1} * x^{d2} exceeds x^{}", u32::MAX))
}

/// Adds `c` to the entry for `degree`, removing it if it cancels to zero.
pub(crate) fn accumulate<C: Coefficient>(acc: &mut BTreeMap<u32, C>, degree: u32, c: C) {
    match acc.entry(degree) {
        Entry::Vacant(e) => {
            e.insert(c);
        }
        Entry::Occupied(mut e) => {
            let sum = e.get().clone() + c;
            if sum.is_zero() {
                e.remove();
            } else {
                *e.get_mut() = sum;
            }
        }
    }
}
