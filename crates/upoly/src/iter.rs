//! Iteration and evaluation.

use num_traits::Zero;
use std::iter::FusedIterator;

use crate::domain::Coefficient;
use crate::poly::Polynomial;
use crate::terms::TermContainer;

/// Walks every coefficient position of a polynomial from the highest degree
/// down to 0, zero coefficients included.
///
/// Created by [`Polynomial::ordered`].
pub struct OrderedCoeffs<'a, T: TermContainer> {
    poly: &'a Polynomial<T>,
    next: Option<u32>,
}

impl<T: TermContainer> Iterator for OrderedCoeffs<'_, T> {
    type Item = (u32, T::Coeff);

    fn next(&mut self) -> Option<Self::Item> {
        let d = self.next?;
        self.next = d.checked_sub(1);
        Some((d, self.poly.coefficient_at(d)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.next.map_or(0, |d| d as usize + 1);
        (n, Some(n))
    }
}

impl<T: TermContainer> ExactSizeIterator for OrderedCoeffs<'_, T> {}

impl<T: TermContainer> FusedIterator for OrderedCoeffs<'_, T> {}

impl<T: TermContainer> Polynomial<T> {
    /// Iterates over the stored nonzero terms as `(degree, &coefficient)`.
    ///
    /// Each term is visited exactly once. The order is backend-defined: it
    /// is stable for this instance but unrelated across instances.
    pub fn iter(&self) -> T::Terms<'_> {
        self.terms().terms()
    }

    /// Iterates over positions `size() - 1` down to `0`, yielding an owned
    /// coefficient for each, zeros included. Yields nothing for the zero
    /// polynomial.
    #[must_use]
    pub fn ordered(&self) -> OrderedCoeffs<'_, T> {
        OrderedCoeffs {
            poly: self,
            next: self.terms().degree(),
        }
    }

    /// Evaluates the polynomial at `point`.
    ///
    /// Sums `coefficient * point^degree` over the stored terms, with each
    /// power computed by the coefficient domain.
    #[must_use]
    pub fn eval(&self, point: &T::Coeff) -> T::Coeff {
        self.iter()
            .fold(T::Coeff::zero(), |acc, (d, c)| acc + c.clone() * point.pow(d))
    }

    /// Evaluates the polynomial at each point independently.
    ///
    /// This is the naive O(terms × points) scheme; no state is shared
    /// between points.
    #[must_use]
    pub fn multieval(&self, points: &[T::Coeff]) -> Vec<T::Coeff> {
        points.iter().map(|p| self.eval(p)).collect()
    }
}

impl<'a, T: TermContainer> IntoIterator for &'a Polynomial<T> {
    type Item = (u32, &'a T::Coeff);
    type IntoIter = T::Terms<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
