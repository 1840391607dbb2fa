//! Dense term storage.
//!
//! Coefficients live in a vector indexed by degree. Zero entries below the
//! leading term are padding, not stored terms: `get` reports them as absent.
//! Multiplication selects an algorithm based on degree:
//! - Both operands below [`KARATSUBA_THRESHOLD`] coefficients: schoolbook O(n²)
//! - Otherwise: Karatsuba O(n^1.58)

use num_traits::Zero;
use std::iter::Enumerate;
use std::slice;

use super::TermContainer;
use crate::domain::Coefficient;

/// Operand length below which multiplication falls back to schoolbook.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Dense coefficient vector in ascending degree order.
///
/// The vector never has trailing zeros; the zero polynomial is empty.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DenseTerms<C: Coefficient> {
    coeffs: Vec<C>,
}

impl<C: Coefficient> Default for DenseTerms<C> {
    fn default() -> Self {
        Self { coeffs: Vec::new() }
    }
}

impl<C: Coefficient> DenseTerms<C> {
    /// Creates a container from coefficients in ascending degree order.
    #[must_use]
    pub fn new(coeffs: Vec<C>) -> Self {
        let mut out = Self { coeffs };
        out.trim();
        out
    }

    /// Returns all coefficients, zero padding included.
    #[must_use]
    pub fn coeffs(&self) -> &[C] {
        &self.coeffs
    }

    fn trim(&mut self) {
        while self.coeffs.last().is_some_and(Zero::is_zero) {
            self.coeffs.pop();
        }
    }
}

/// Iterator over the nonzero entries of a [`DenseTerms`], lowest degree first.
pub struct DenseIter<'a, C> {
    inner: Enumerate<slice::Iter<'a, C>>,
}

impl<'a, C: Coefficient> Iterator for DenseIter<'a, C> {
    type Item = (u32, &'a C);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .find(|(_, c)| !c.is_zero())
            .map(|(i, c)| (degree_of(i), c))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn degree_of(index: usize) -> u32 {
    index as u32
}

impl<C: Coefficient> TermContainer for DenseTerms<C> {
    type Coeff = C;
    type Terms<'a> = DenseIter<'a, C> where C: 'a;

    fn insert(&mut self, degree: u32, coeff: C) {
        debug_assert!(!coeff.is_zero(), "stored coefficients must be nonzero");
        let i = degree as usize;
        if i >= self.coeffs.len() {
            self.coeffs.resize(i + 1, C::zero());
        }
        self.coeffs[i] = coeff;
    }

    fn get(&self, degree: u32) -> Option<&C> {
        self.coeffs.get(degree as usize).filter(|c| !c.is_zero())
    }

    fn degree(&self) -> Option<u32> {
        self.coeffs.len().checked_sub(1).map(degree_of)
    }

    fn len(&self) -> usize {
        self.coeffs.iter().filter(|c| !c.is_zero()).count()
    }

    fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    fn terms(&self) -> DenseIter<'_, C> {
        DenseIter {
            inner: self.coeffs.iter().enumerate(),
        }
    }

    fn add(&self, other: &Self) -> Self {
        Self::new(add_slices(&self.coeffs, &other.coeffs))
    }

    fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c.clone()).collect(),
        }
    }

    fn mul(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::default();
        }
        Self::new(mul_karatsuba(&self.coeffs, &other.coeffs))
    }

    fn scale(&self, c: &C) -> Self {
        if c.is_zero() {
            return Self::default();
        }
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }
}

fn add_slices<C: Coefficient>(a: &[C], b: &[C]) -> Vec<C> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = long.to_vec();
    for (o, s) in out.iter_mut().zip(short) {
        *o = o.clone() + s.clone();
    }
    out
}

fn sub_assign_slice<C: Coefficient>(acc: &mut [C], b: &[C]) {
    for (o, s) in acc.iter_mut().zip(b) {
        *o = o.clone() - s.clone();
    }
}

/// Schoolbook multiplication: O(n·m).
fn mul_schoolbook<C: Coefficient>(a: &[C], b: &[C]) -> Vec<C> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![C::zero(); a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        if x.is_zero() {
            continue;
        }
        for (j, y) in b.iter().enumerate() {
            result[i + j] = result[i + j].clone() + x.clone() * y.clone();
        }
    }
    result
}

/// Karatsuba multiplication: O(n^1.58).
///
/// Splits both operands at `half`: a = a0 + a1*x^half, b = b0 + b1*x^half,
/// then a*b = z2*x^(2*half) + z1*x^half + z0 with
/// z1 = (a0+a1)(b0+b1) - z0 - z2.
fn mul_karatsuba<C: Coefficient>(a: &[C], b: &[C]) -> Vec<C> {
    if a.len() < KARATSUBA_THRESHOLD || b.len() < KARATSUBA_THRESHOLD {
        return mul_schoolbook(a, b);
    }

    let half = a.len().max(b.len()).div_ceil(2);
    let (a0, a1) = a.split_at(half.min(a.len()));
    let (b0, b1) = b.split_at(half.min(b.len()));

    let z0 = mul_karatsuba(a0, b0);
    let z2 = mul_karatsuba(a1, b1);
    let mut z1 = mul_karatsuba(&add_slices(a0, a1), &add_slices(b0, b1));
    sub_assign_slice(&mut z1, &z0);
    sub_assign_slice(&mut z1, &z2);

    // z1 may carry zero padding past the true product length.
    let target = a.len() + b.len() - 1;
    let len = target
        .max(z0.len())
        .max(half + z1.len())
        .max(2 * half + z2.len());
    let mut result = vec![C::zero(); len];

    for (i, c) in z0.into_iter().enumerate() {
        result[i] = result[i].clone() + c;
    }
    for (i, c) in z1.into_iter().enumerate() {
        result[i + half] = result[i + half].clone() + c;
    }
    for (i, c) in z2.into_iter().enumerate() {
        result[i + 2 * half] = result[i + 2 * half].clone() + c;
    }

    result.truncate(target);
    result
}
