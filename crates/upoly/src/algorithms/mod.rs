//! Container-level polynomial algorithms.
//!
//! Everything here is written against [`crate::terms::TermContainer`] and
//! provides the default implementations of its division and gcd operations:
//! - Exact long division and pseudo-remainders
//! - Content, primitive part and primitive PRS gcd

pub mod division;
pub mod gcd;
