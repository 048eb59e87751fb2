//! Single-pass gradient evaluation.
//!
//! [`gradient`] seeds coordinate `i` of the evaluation point as variable `i`,
//! evaluates the function once, and reads value and gradient off the result.
//!
//! # Example
//!
//! ```
//! use deriv_core::gradient;
//!
//! // f(x, y) = x² + 2xy + y²
//! let (value, grad) = gradient(
//!     |v| &v[0] * &v[0] + &v[0] * &v[1] * 2.0 + &v[1] * &v[1],
//!     &[3.0_f64, 4.0],
//! );
//!
//! assert_eq!(value, 49.0);
//! assert_eq!(grad, vec![14.0, 14.0]);
//! ```

use num_traits::Float;

use crate::types::dual::DualNumber;
use crate::types::error::DualError;

/// Seed every coordinate of `point` as its own variable.
pub fn seed_variables<T: Float>(point: &[T]) -> Vec<DualNumber<T>> {
    point
        .iter()
        .enumerate()
        .map(|(i, &x)| DualNumber::variable(x, i))
        .collect()
}

/// Evaluate `f` at `point` and return the value and the gradient.
///
/// The gradient is zero-padded to `point.len()` when `f` does not depend on
/// the trailing coordinates.
pub fn gradient<T, F>(f: F, point: &[T]) -> (T, Vec<T>)
where
    T: Float,
    F: FnOnce(&[DualNumber<T>]) -> DualNumber<T>,
{
    let vars = seed_variables(point);
    pad_to(f(&vars), point.len())
}

/// Fallible variant of [`gradient`] for functions that may divide by zero
/// or hit an undefined derivative.
///
/// # Examples
/// ```
/// use deriv_core::{try_gradient, DualError};
///
/// let result = try_gradient(|v| &v[0] / &v[1], &[1.0_f64, 0.0]);
/// assert_eq!(result.unwrap_err(), DualError::DivisionByZero);
/// ```
pub fn try_gradient<T, F>(f: F, point: &[T]) -> Result<(T, Vec<T>), DualError>
where
    T: Float,
    F: FnOnce(&[DualNumber<T>]) -> Result<DualNumber<T>, DualError>,
{
    let vars = seed_variables(point);
    Ok(pad_to(f(&vars)?, point.len()))
}

fn pad_to<T: Float>(result: DualNumber<T>, dim: usize) -> (T, Vec<T>) {
    let (value, mut grad) = result.into_parts();
    if grad.len() < dim {
        grad.resize(dim, T::zero());
    }
    (value, grad)
}
