//! Error types for structured error handling.
//!
//! This module provides:
//! - `DualError`: Errors raised by dual-number construction, indexing and arithmetic

use thiserror::Error;

/// Categorised dual-number errors.
///
/// Every variant is raised synchronously at the offending operation.
/// No partial result is produced when an operation fails.
///
/// # Variants
/// - `InvalidOrder`: Constructor called with a derivative order outside {0, 1}
/// - `IndexOutOfRange`: Component requested for an order outside {0, 1}
/// - `DivisionByZero`: Divisor has a zero value
/// - `UnsupportedOperation`: Operation has no defined derivative (floor division)
/// - `UnsupportedTernaryPow`: Power with a modulus argument
/// - `UndefinedDerivative`: Derivative does not exist at the given point
/// - `DuplicateIndex`: Variable index issued twice by a registry
/// - `DimensionMismatch`: Gradient length disagrees with the evaluation point
///
/// # Examples
/// ```
/// use deriv_core::types::DualError;
///
/// let err = DualError::InvalidOrder(2);
/// assert_eq!(format!("{}", err), "Invalid derivative order 2: only first-order derivatives");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DualError {
    /// Constructor order outside {0, 1}.
    #[error("Invalid derivative order {0}: only first-order derivatives")]
    InvalidOrder(usize),

    /// Component order outside {0, 1}.
    #[error("Index out of range: order {0} is not stored")]
    IndexOutOfRange(usize),

    /// Divisor value is zero.
    #[error("Division by zero in dual-number division")]
    DivisionByZero,

    /// Operation without a defined derivative.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// Power with a third (modulus) argument.
    #[error("Ternary pow() is not supported for dual numbers")]
    UnsupportedTernaryPow,

    /// Derivative undefined at the evaluation point.
    #[error("Undefined derivative: {0}")]
    UndefinedDerivative(&'static str),

    /// Variable index already issued.
    #[error("Variable index {0} is already in use")]
    DuplicateIndex(usize),

    /// Gradient has more components than the evaluation point.
    #[error("Dimension mismatch: expected at most {expected} components, got {got}")]
    DimensionMismatch {
        /// Dimension of the evaluation point
        expected: usize,
        /// Number of gradient components produced
        got: usize,
    },
}
