//! # upoly
//!
//! Canonical univariate polynomials over exact coefficient domains.
//!
//! This crate provides:
//! - [`Polynomial`], an immutable polynomial in one [`Symbol`], generic over
//!   its term storage
//! - Interchangeable term containers: dense, sparse (ordered) and hashed
//! - GCD with sign normalization, LCM, powers and exact-division tests
//! - Unordered and degree-ordered iteration, single and batch evaluation
//!
//! ## Example
//!
//! ```
//! use upoly::{divides, gcd, Symbol, UIntPoly};
//! use upoly_integers::Integer;
//!
//! let x = Symbol::new("x");
//! let a = UIntPoly::from_dense(x.clone(), [-1, 0, 1].map(Integer::new)); // x^2 - 1
//! let b = UIntPoly::from_dense(x.clone(), [1, -1].map(Integer::new)); // 1 - x
//!
//! let g = gcd(&a, &b).unwrap();
//! assert_eq!(g.to_string(), "x - 1");
//!
//! let q = divides(&g, &a).unwrap().unwrap();
//! assert_eq!(q.to_string(), "x + 1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod arith;
pub mod domain;
pub mod error;
pub mod iter;
pub mod poly;
pub mod symbol;
pub mod terms;

#[cfg(test)]
mod proptests;

pub use arith::{divides, gcd, lcm, pow};
pub use domain::Coefficient;
pub use error::{NonExactDivision, PolyError, Result};
pub use iter::OrderedCoeffs;
pub use poly::Polynomial;
pub use symbol::Symbol;
pub use terms::{DenseTerms, HashedTerms, SparseTerms, TermContainer};

use upoly_integers::{Integer, Rational};

/// Integer polynomial with sparse storage.
pub type UIntPoly = Polynomial<SparseTerms<Integer>>;

/// Integer polynomial with dense storage.
pub type UIntPolyDense = Polynomial<DenseTerms<Integer>>;

/// Integer polynomial with hashed storage.
pub type UIntPolyHashed = Polynomial<HashedTerms<Integer>>;

/// Rational polynomial with sparse storage.
pub type URatPoly = Polynomial<SparseTerms<Rational>>;

/// Rational polynomial with dense storage.
pub type URatPolyDense = Polynomial<DenseTerms<Rational>>;
