//! Canonical univariate polynomials.

use num_traits::{One, Zero};
use rustc_hash::FxHasher;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

use crate::domain::Coefficient;
use crate::error::{PolyError, Result};
use crate::symbol::Symbol;
use crate::terms::{product_degree, SparseTerms, TermContainer};

/// An immutable univariate polynomial over a single [`Symbol`].
///
/// The term container never holds a zero coefficient, so two polynomials
/// are equal exactly when they have the same variable and the same terms,
/// whatever order the backend iterates them in.
///
/// Instances are never mutated after construction; every operation returns
/// a new polynomial. Wrap in `Arc` to share.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Polynomial<T: TermContainer = SparseTerms<upoly_integers::Integer>> {
    var: Symbol,
    terms: T,
}

impl<T: TermContainer> Polynomial<T> {
    /// Creates a polynomial from coefficients in ascending degree order.
    ///
    /// Index `i` becomes the coefficient of `var^i`; zero entries are dropped.
    #[must_use]
    pub fn from_dense<I>(var: Symbol, coeffs: I) -> Self
    where
        I: IntoIterator<Item = T::Coeff>,
    {
        let mut terms = T::default();
        for (d, c) in (0u32..).zip(coeffs) {
            if !c.is_zero() {
                terms.insert(d, c);
            }
        }
        Self { var, terms }
    }

    /// Creates a polynomial from `(degree, coefficient)` pairs.
    ///
    /// Degrees are expected to be unique; repeated degrees are summed.
    /// Zero coefficients are dropped.
    #[must_use]
    pub fn from_sparse<I>(var: Symbol, terms: I) -> Self
    where
        I: IntoIterator<Item = (u32, T::Coeff)>,
    {
        Self {
            var,
            terms: T::from_terms(terms),
        }
    }

    /// Wraps an already-built term container.
    #[must_use]
    pub fn from_container(var: Symbol, terms: T) -> Self {
        Self { var, terms }
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero(var: Symbol) -> Self {
        Self::from_container(var, T::default())
    }

    /// The constant polynomial `c`.
    #[must_use]
    pub fn constant(var: Symbol, c: T::Coeff) -> Self {
        Self::from_container(var, T::constant(c))
    }

    /// The constant polynomial 1.
    #[must_use]
    pub fn one(var: Symbol) -> Self {
        Self::constant(var, T::Coeff::one())
    }

    /// Returns the variable.
    #[must_use]
    pub fn var(&self) -> &Symbol {
        &self.var
    }

    /// Returns the term container.
    #[must_use]
    pub fn terms(&self) -> &T {
        &self.terms
    }

    /// Returns the coefficient of `var^degree`.
    ///
    /// Total: degrees without a stored term give an owned zero.
    #[must_use]
    pub fn coefficient_at(&self, degree: u32) -> T::Coeff {
        self.terms
            .get(degree)
            .cloned()
            .unwrap_or_else(T::Coeff::zero)
    }

    /// Returns the degree. The zero polynomial reports 0; use
    /// [`Polynomial::is_zero`] or [`Polynomial::size`] to tell it apart.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.terms.degree().unwrap_or(0)
    }

    /// Number of coefficient positions: `degree() + 1`, or 0 for the zero
    /// polynomial. This is not the number of nonzero terms.
    #[must_use]
    pub fn size(&self) -> usize {
        self.terms.degree().map_or(0, |d| d as usize + 1)
    }

    /// Number of stored (nonzero) terms.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the coefficient at the highest present degree.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&T::Coeff> {
        self.terms.leading_coeff()
    }

    /// Terms sorted by ascending degree.
    fn sorted_terms(&self) -> Vec<(u32, &T::Coeff)> {
        let mut v: Vec<_> = self.terms.terms().collect();
        v.sort_unstable_by_key(|&(d, _)| d);
        v
    }

    /// Deterministic hash of the term data, independent of the backend and
    /// of its iteration order.
    #[must_use]
    pub fn term_hash(&self) -> u64 {
        let mut h = FxHasher::default();
        for (d, c) in self.sorted_terms() {
            d.hash(&mut h);
            c.hash(&mut h);
        }
        h.finish()
    }

    /// Canonical ordering for use as a map or cache key.
    ///
    /// Variables are compared first. Polynomials over the same variable
    /// compare `Equal` exactly when they are structurally equal; otherwise
    /// the order is decided by [`Polynomial::term_hash`] (falling back to the
    /// sorted term lists on a hash collision).
    ///
    /// This is an internal canonicalization order. It is deterministic and
    /// total, but it has no algebraic meaning: `a < b` says nothing about
    /// degrees, values or divisibility.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.var.cmp(&other.var).then_with(|| {
            if self.terms == other.terms {
                return Ordering::Equal;
            }
            self.term_hash()
                .cmp(&other.term_hash())
                .then_with(|| self.sorted_terms().cmp(&other.sorted_terms()))
        })
    }

    /// Fails with [`PolyError::VariableMismatch`] unless both operands
    /// share the same variable.
    pub(crate) fn check_var(&self, other: &Self) -> Result<()> {
        if self.var == other.var {
            Ok(())
        } else {
            Err(PolyError::VariableMismatch {
                left: self.var.clone(),
                right: other.var.clone(),
            })
        }
    }

    /// Sum of two polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::VariableMismatch`] if the variables differ.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.check_var(other)?;
        Ok(Self::from_container(self.var.clone(), self.terms.add(&other.terms)))
    }

    /// Difference of two polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::VariableMismatch`] if the variables differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.check_var(other)?;
        Ok(Self::from_container(self.var.clone(), self.terms.sub(&other.terms)))
    }

    /// Product of two polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::VariableMismatch`] if the variables differ and
    /// [`PolyError::DegreeOverflow`] if the product degree exceeds `u32::MAX`.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.check_var(other)?;
        product_degree(&self.terms, &other.terms).ok_or(PolyError::DegreeOverflow)?;
        Ok(Self::from_container(self.var.clone(), self.terms.mul(&other.terms)))
    }
}

impl<T: TermContainer> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        Polynomial::from_container(self.var.clone(), self.terms.neg())
    }
}

impl<T: TermContainer> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        -&self
    }
}

impl<T: TermContainer> Hash for Polynomial<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.var.hash(state);
        self.term_hash().hash(state);
    }
}

impl<T: TermContainer> PartialOrd for Polynomial<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: TermContainer> Ord for Polynomial<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<T: TermContainer> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (i, (d, c)) in self.sorted_terms().into_iter().rev().enumerate() {
            let (negative, abs) = if c.is_negative() {
                (true, -c.clone())
            } else {
                (false, c.clone())
            };

            match (i, negative) {
                (0, true) => write!(f, "-")?,
                (0, false) => {}
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }

            let unit = abs.is_one();
            if !unit || d == 0 {
                write!(f, "{abs}")?;
            }
            if !unit && d != 0 {
                write!(f, "*")?;
            }
            match d {
                0 => {}
                1 => write!(f, "{}", self.var)?,
                _ => write!(f, "{}^{d}", self.var)?,
            }
        }
        Ok(())
    }
}
