//! Error types for polynomial operations.

use thiserror::Error;

use crate::symbol::Symbol;

/// Errors returned by polynomial operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The operands are polynomials in different indeterminates.
    #[error("variables must agree: `{left}` vs `{right}`")]
    VariableMismatch {
        /// Variable of the left operand.
        left: Symbol,
        /// Variable of the right operand.
        right: Symbol,
    },

    /// The result would have a degree above `u32::MAX`.
    #[error("degree overflow: result degree exceeds {}", u32::MAX)]
    DegreeOverflow,
}

/// Signal from a term container that an exact division left a remainder.
///
/// This is an expected outcome, not a failure: [`crate::divides`] turns it
/// into `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("polynomial division is not exact")]
pub struct NonExactDivision;

/// Result alias for polynomial operations.
pub type Result<T, E = PolyError> = std::result::Result<T, E>;
