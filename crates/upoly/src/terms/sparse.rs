//! Sparse term storage backed by an ordered map.

use num_traits::Zero;
use std::collections::{btree_map, BTreeMap};

use super::TermContainer;
use crate::domain::Coefficient;

/// Terms stored as an ordered `degree -> coefficient` map.
///
/// Iteration is in ascending degree order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SparseTerms<C: Coefficient> {
    terms: BTreeMap<u32, C>,
}

impl<C: Coefficient> Default for SparseTerms<C> {
    fn default() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }
}

impl<C: Coefficient> SparseTerms<C> {
    /// Returns the underlying map.
    #[must_use]
    pub fn as_map(&self) -> &BTreeMap<u32, C> {
        &self.terms
    }
}

/// Iterator over a [`SparseTerms`], lowest degree first.
pub struct SparseIter<'a, C> {
    inner: btree_map::Iter<'a, u32, C>,
}

impl<'a, C> Iterator for SparseIter<'a, C> {
    type Item = (u32, &'a C);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&d, c)| (d, c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<C: Coefficient> TermContainer for SparseTerms<C> {
    type Coeff = C;
    type Terms<'a> = SparseIter<'a, C> where Self: 'a;

    fn insert(&mut self, degree: u32, coeff: C) {
        debug_assert!(!coeff.is_zero(), "stored coefficients must be nonzero");
        self.terms.insert(degree, coeff);
    }

    fn get(&self, degree: u32) -> Option<&C> {
        self.terms.get(&degree)
    }

    fn degree(&self) -> Option<u32> {
        self.terms.last_key_value().map(|(&d, _)| d)
    }

    fn len(&self) -> usize {
        self.terms.len()
    }

    fn terms(&self) -> SparseIter<'_, C> {
        SparseIter {
            inner: self.terms.iter(),
        }
    }

    fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (u32, C)>,
    {
        let mut acc = BTreeMap::new();
        for (d, c) in terms {
            super::accumulate(&mut acc, d, c);
        }
        acc.retain(|_, c| !c.is_zero());
        Self { terms: acc }
    }

    fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(&d, c)| (d, -c.clone())).collect(),
        }
    }
}
