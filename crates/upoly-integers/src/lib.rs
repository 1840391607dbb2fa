//! # upoly-integers
//!
//! Exact coefficient types for the `upoly` polynomial kernel.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals in lowest terms (`Rational`)
//!
//! Both types expose truncating/exact division with remainder and a
//! non-negative gcd, which is what polynomial content and GCD computations
//! are built on.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
