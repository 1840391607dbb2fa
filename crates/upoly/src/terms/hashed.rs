//! Hashed term storage.
//!
//! Terms live in an `FxHashMap`, so lookups are O(1) and iteration order is
//! whatever the table layout gives. Two containers holding the same terms
//! compare equal but may iterate in different orders.

use num_traits::Zero;
use rustc_hash::FxHashMap;
use std::collections::hash_map;

use super::TermContainer;
use crate::domain::Coefficient;

/// Terms stored in an unordered hash map, with the maximum degree cached.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HashedTerms<C: Coefficient> {
    terms: FxHashMap<u32, C>,
    max_degree: Option<u32>,
}

impl<C: Coefficient> Default for HashedTerms<C> {
    fn default() -> Self {
        Self {
            terms: FxHashMap::default(),
            max_degree: None,
        }
    }
}

/// Iterator over a [`HashedTerms`] in table order.
pub struct HashedIter<'a, C> {
    inner: hash_map::Iter<'a, u32, C>,
}

impl<'a, C> Iterator for HashedIter<'a, C> {
    type Item = (u32, &'a C);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&d, c)| (d, c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<C: Coefficient> TermContainer for HashedTerms<C> {
    type Coeff = C;
    type Terms<'a> = HashedIter<'a, C> where Self: 'a;

    fn insert(&mut self, degree: u32, coeff: C) {
        debug_assert!(!coeff.is_zero(), "stored coefficients must be nonzero");
        self.terms.insert(degree, coeff);
        self.max_degree = Some(self.max_degree.map_or(degree, |m| m.max(degree)));
    }

    fn get(&self, degree: u32) -> Option<&C> {
        self.terms.get(&degree)
    }

    fn degree(&self) -> Option<u32> {
        self.max_degree
    }

    fn len(&self) -> usize {
        self.terms.len()
    }

    fn terms(&self) -> HashedIter<'_, C> {
        HashedIter {
            inner: self.terms.iter(),
        }
    }

    fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(&d, c)| (d, -c.clone())).collect(),
            max_degree: self.max_degree,
        }
    }
}
