//! Core traits for mixing dual numbers and plain scalars.
//!
//! This module defines:
//! - Generic floating-point operations (`Float` trait)
//! - The dual-capability probe and scalar coercion (`IntoDual` trait)
//!
//! Every binary operator on [`DualNumber`] accepts any `IntoDual` operand on
//! the right-hand side. A plain scalar is lifted to a constant with an empty
//! derivative vector, so `x * 2.0` and `x * y` go through the same rule.

use crate::types::dual::DualNumber;

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use deriv_core::traits::Float;
///
/// fn hypot<T: Float>(x: T, y: T) -> T {
///     (x * x + y * y).sqrt()
/// }
///
/// assert_eq!(hypot(3.0_f64, 4.0), 5.0);
/// ```
pub use num_traits::Float;

/// Operand that can take part in dual-number arithmetic.
///
/// Implemented by [`DualNumber`] (by value and by reference) and by every
/// `T: Float`. Only dual numbers report `is_dual() == true`; plain scalars
/// become constants through [`DualNumber::constant`].
///
/// # Examples
/// ```
/// use deriv_core::traits::IntoDual;
/// use deriv_core::DualNumber;
///
/// let c = IntoDual::<f64>::into_dual(2.5);
/// assert!(c.derivative().is_empty());
///
/// let x = DualNumber::variable(1.0, 0);
/// assert!(IntoDual::<f64>::is_dual(&x));
/// ```
pub trait IntoDual<T> {
    /// True if the operand carries its own derivative vector.
    fn is_dual(&self) -> bool;

    /// Convert the operand into a dual number.
    fn into_dual(self) -> DualNumber<T>;
}

impl<T: Float> IntoDual<T> for T {
    #[inline]
    fn is_dual(&self) -> bool {
        false
    }

    #[inline]
    fn into_dual(self) -> DualNumber<T> {
        DualNumber::constant(self)
    }
}

impl<T: Float> IntoDual<T> for DualNumber<T> {
    #[inline]
    fn is_dual(&self) -> bool {
        true
    }

    #[inline]
    fn into_dual(self) -> DualNumber<T> {
        self
    }
}

impl<T: Float> IntoDual<T> for &DualNumber<T> {
    #[inline]
    fn is_dual(&self) -> bool {
        true
    }

    #[inline]
    fn into_dual(self) -> DualNumber<T> {
        self.clone()
    }
}

/// True if `x` carries a derivative vector of its own.
///
/// # Examples
/// ```
/// use deriv_core::{is_dual, DualNumber};
///
/// assert!(is_dual::<f64, _>(&DualNumber::variable(1.0, 0)));
/// assert!(!is_dual::<f64, _>(&1.0));
/// ```
#[inline]
pub fn is_dual<T, X: IntoDual<T>>(x: &X) -> bool {
    x.is_dual()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_is_not_dual() {
        assert!(!is_dual::<f64, _>(&3.0_f64));
        assert!(!is_dual::<f32, _>(&3.0_f32));
    }

    #[test]
    fn test_dual_and_reference_are_dual() {
        let x = DualNumber::variable(2.0_f64, 1);
        assert!(is_dual::<f64, _>(&x));
        assert!(is_dual::<f64, _>(&&x));
    }

    #[test]
    fn test_scalar_coerces_to_constant() {
        let c: DualNumber<f64> = 4.0_f64.into_dual();
        assert_eq!(c.value(), 4.0);
        assert!(!c.has_derivative());
    }

    #[test]
    fn test_reference_coercion_clones() {
        let x = DualNumber::variable(2.0_f64, 2);
        let y = (&x).into_dual();
        assert_eq!(y.derivative(), x.derivative());
    }

    #[test]
    fn test_float_trait_with_f64() {
        fn generic_sqrt<T: Float>(x: T) -> T {
            x.sqrt()
        }

        assert_eq!(generic_sqrt(4.0_f64), 2.0);
    }
}
