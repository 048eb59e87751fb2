//! Special-function provider for the gamma chain rule.
//!
//! Γ and its logarithmic derivative ψ (digamma) are not part of
//! `num_traits::Float`. They come from an external special-function library
//! through [`SpecialFunctions`]; `f64` and `f32` delegate to `statrs`.

use num_traits::Float;

/// Floating-point type with gamma and digamma functions.
///
/// Implement this for a custom scalar type to make
/// [`DualNumber::gamma`](crate::DualNumber::gamma) available on it.
///
/// # Examples
/// ```
/// use deriv_core::math::special::SpecialFunctions;
///
/// let g = <f64 as SpecialFunctions>::gamma(5.0);
/// assert!((g - 24.0).abs() < 1e-10);
/// ```
pub trait SpecialFunctions: Float {
    /// Gamma function Γ(x).
    fn gamma(x: Self) -> Self;

    /// Digamma function ψ(x) = Γ'(x)/Γ(x).
    fn digamma(x: Self) -> Self;
}

impl SpecialFunctions for f64 {
    #[inline]
    fn gamma(x: f64) -> f64 {
        statrs::function::gamma::gamma(x)
    }

    #[inline]
    fn digamma(x: f64) -> f64 {
        statrs::function::gamma::digamma(x)
    }
}

impl SpecialFunctions for f32 {
    #[inline]
    fn gamma(x: f32) -> f32 {
        statrs::function::gamma::gamma(f64::from(x)) as f32
    }

    #[inline]
    fn digamma(x: f32) -> f32 {
        statrs::function::gamma::digamma(f64::from(x)) as f32
    }
}
