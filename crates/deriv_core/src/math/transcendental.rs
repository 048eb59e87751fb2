//! Transcendental functions on dual numbers.
//!
//! Every unary function maps `(u, ∇u)` to `(f(u), f'(u)·∇u)`: the scalar
//! slope multiplies each derivative component. `atan2` is the only binary
//! function and aligns its two derivative vectors through
//! [`combine`](super::combine::combine).
//!
//! | Method | f'(u) |
//! |---|---|
//! | `exp` | eᵘ |
//! | `ln` | 1/u |
//! | `log10` | 1/(u·ln 10) |
//! | `sqrt` | 1/(2√u) |
//! | `sin` / `cos` | cos u / −sin u |
//! | `tan` | 1 + tan²u |
//! | `sinh` / `cosh` | cosh u / sinh u |
//! | `tanh` | 1/cosh²u |
//! | `asin` / `acos` | ±1/√(1−u²) |
//! | `atan` | 1/(1+u²) |
//! | `gamma` | Γ(u)·ψ(u) |

use num_traits::Float;

use super::combine::{combine, scale};
use super::special::SpecialFunctions;
use crate::traits::IntoDual;
use crate::types::dual::DualNumber;

impl<T: Float> DualNumber<T> {
    /// Exponential.
    pub fn exp(&self) -> Self {
        let v = self.value().exp();
        self.chain(v, v)
    }

    /// Natural logarithm.
    pub fn ln(&self) -> Self {
        let u = self.value();
        self.chain(u.ln(), u.recip())
    }

    /// Base-10 logarithm.
    pub fn log10(&self) -> Self {
        let u = self.value();
        let ln_10 = T::from(std::f64::consts::LN_10).unwrap_or_else(T::nan);
        self.chain(u.log10(), T::one() / (u * ln_10))
    }

    /// Square root.
    pub fn sqrt(&self) -> Self {
        let v = self.value().sqrt();
        let half = T::from(0.5).unwrap_or_else(T::nan);
        self.chain(v, half / v)
    }

    /// Sine.
    pub fn sin(&self) -> Self {
        let (s, c) = self.value().sin_cos();
        self.chain(s, c)
    }

    /// Cosine.
    pub fn cos(&self) -> Self {
        let (s, c) = self.value().sin_cos();
        self.chain(c, -s)
    }

    /// Tangent.
    pub fn tan(&self) -> Self {
        let v = self.value().tan();
        self.chain(v, T::one() + v * v)
    }

    /// Hyperbolic sine.
    pub fn sinh(&self) -> Self {
        let u = self.value();
        self.chain(u.sinh(), u.cosh())
    }

    /// Hyperbolic cosine.
    pub fn cosh(&self) -> Self {
        let u = self.value();
        self.chain(u.cosh(), u.sinh())
    }

    /// Hyperbolic tangent.
    pub fn tanh(&self) -> Self {
        let u = self.value();
        let c = u.cosh();
        self.chain(u.tanh(), T::one() / (c * c))
    }

    /// Inverse sine.
    pub fn asin(&self) -> Self {
        let u = self.value();
        self.chain(u.asin(), T::one() / (T::one() - u * u).sqrt())
    }

    /// Inverse cosine.
    pub fn acos(&self) -> Self {
        let u = self.value();
        self.chain(u.acos(), -T::one() / (T::one() - u * u).sqrt())
    }

    /// Inverse tangent.
    pub fn atan(&self) -> Self {
        let u = self.value();
        self.chain(u.atan(), T::one() / (T::one() + u * u))
    }

    /// Four-quadrant inverse tangent of `self / other`.
    ///
    /// # Examples
    /// ```
    /// use deriv_core::DualNumber;
    ///
    /// let y = DualNumber::variable(1.0_f64, 0);
    /// let x = DualNumber::variable(1.0_f64, 1);
    /// let angle = y.atan2(&x);
    ///
    /// assert!((angle.value() - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    /// assert!((angle.partial(0) - 0.5).abs() < 1e-12);
    /// assert!((angle.partial(1) + 0.5).abs() < 1e-12);
    /// ```
    pub fn atan2<R: IntoDual<T>>(&self, other: R) -> Self {
        let other = other.into_dual();
        let u = self.value();
        let v = other.value();
        let den = u * u + v * v;
        Self::from_parts(
            u.atan2(v),
            combine(
                |a, b| a - b,
                &scale(v / den, self.derivative()),
                &scale(u / den, other.derivative()),
            ),
        )
    }
}

impl<T: SpecialFunctions> DualNumber<T> {
    /// Gamma function, with derivative Γ(u)·ψ(u).
    pub fn gamma(&self) -> Self {
        let u = self.value();
        let v = T::gamma(u);
        self.chain(v, v * T::digamma(u))
    }
}
