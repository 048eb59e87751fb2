//! Derivative-vector alignment.
//!
//! Derivative vectors omit trailing zeros: a constant stores nothing and a
//! variable with index `i` stores `i + 1` entries. Every rule that merges two
//! derivative vectors goes through [`combine`], which zero-extends the shorter
//! operand before applying the elementwise operation.

use num_traits::Zero;

/// Merge two derivative vectors elementwise after zero-padding.
///
/// The shorter of `a` and `b` is extended with trailing zeros to
/// `max(a.len(), b.len())`, then `op` is applied per component.
///
/// # Arguments
/// * `op` - Binary operation applied to each aligned pair
/// * `a` - Left derivative vector
/// * `b` - Right derivative vector
///
/// # Examples
/// ```
/// use deriv_core::math::combine::combine;
///
/// let sum = combine(|a, b| a + b, &[1.0, 2.0], &[3.0]);
/// assert_eq!(sum, vec![4.0, 2.0]);
///
/// let diff = combine(|a, b| a - b, &[], &[1.0, 1.0]);
/// assert_eq!(diff, vec![-1.0, -1.0]);
/// ```
pub fn combine<T, F>(op: F, a: &[T], b: &[T]) -> Vec<T>
where
    T: Zero + Copy,
    F: Fn(T, T) -> T,
{
    let n = a.len().max(b.len());
    (0..n)
        .map(|i| {
            let lhs = a.get(i).copied().unwrap_or_else(T::zero);
            let rhs = b.get(i).copied().unwrap_or_else(T::zero);
            op(lhs, rhs)
        })
        .collect()
}

/// Multiply every component of a derivative vector by `factor`.
///
/// # Examples
/// ```
/// use deriv_core::math::combine::scale;
///
/// assert_eq!(scale(2.0, &[1.0, -0.5]), vec![2.0, -1.0]);
/// ```
#[inline]
pub fn scale<T>(factor: T, d: &[T]) -> Vec<T>
where
    T: Copy + std::ops::Mul<Output = T>,
{
    d.iter().map(|&x| factor * x).collect()
}
