//! Arithmetic operators on dual numbers.
//!
//! # Mathematical Definition
//!
//! For `(u, ∇u)` and `(v, ∇v)`:
//!
//! ```text
//! (u, ∇u) + (v, ∇v) = (u + v, ∇u + ∇v)
//! (u, ∇u) - (v, ∇v) = (u - v, ∇u - ∇v)
//! (u, ∇u) * (v, ∇v) = (u·v,   v·∇u + u·∇v)
//! (u, ∇u) / (v, ∇v) = (u/v,   ∇u/v - u·∇v/v²)
//! (u, ∇u) ^ (w, ∇w) = (uʷ,    w·uʷ⁻¹·∇u + uʷ·ln(u)·∇w)
//! ```
//!
//! Vector sums and differences are aligned by [`combine`].
//!
//! The right-hand operand of every binary operator may be a [`DualNumber`],
//! a reference to one, or a plain scalar (see [`IntoDual`]). Plain `f64`
//! and `f32` scalars are also accepted on the left-hand side.
//!
//! Division returns `Result` because a zero divisor is rejected:
//!
//! ```
//! use deriv_core::{DualError, DualNumber};
//!
//! let x = DualNumber::variable(1.0, 0);
//! let q = (&x / 4.0).unwrap();
//! assert_eq!(q.derivative(), &[0.25]);
//!
//! assert_eq!((x / 0.0).unwrap_err(), DualError::DivisionByZero);
//! ```

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::Float;
use tracing::debug;

use super::combine::{combine, scale};
use crate::traits::IntoDual;
use crate::types::dual::DualNumber;
use crate::types::error::DualError;

impl<T: Float> DualNumber<T> {
    /// Identity (unary plus).
    #[inline]
    pub fn pos(&self) -> Self {
        self.clone()
    }

    /// Absolute value.
    ///
    /// The derivative is `(u/|u|)·∇u`, which is NaN at `u = 0`.
    pub fn abs(&self) -> Self {
        let abs_value = self.value().abs();
        self.chain(abs_value, self.value() / abs_value)
    }

    /// Sign of the value.
    ///
    /// The sign is locally constant away from zero, so the derivative is a
    /// zero vector of the operand's length.
    ///
    /// # Errors
    ///
    /// Returns `DualError::UndefinedDerivative` if the value is zero.
    pub fn sign(&self) -> Result<Self, DualError> {
        if self.value() == T::zero() {
            debug!("sign() requested at zero");
            return Err(DualError::UndefinedDerivative("sign() at zero"));
        }
        Ok(Self::from_parts(
            self.value().signum(),
            vec![T::zero(); self.num_vars()],
        ))
    }

    /// Division by any dual-capable operand.
    ///
    /// # Errors
    ///
    /// Returns `DualError::DivisionByZero` if the divisor's value is zero.
    pub fn checked_div<R: IntoDual<T>>(&self, rhs: R) -> Result<Self, DualError> {
        let rhs = rhs.into_dual();
        let v = rhs.value();
        if v == T::zero() {
            debug!("dual-number division by zero");
            return Err(DualError::DivisionByZero);
        }
        let inv = T::one() / v;
        let u = self.value();
        Ok(Self::from_parts(
            u * inv,
            combine(
                |a, b| a - b,
                &scale(inv, self.derivative()),
                &scale(u * inv * inv, rhs.derivative()),
            ),
        ))
    }

    /// Integer (floor) division.
    ///
    /// The derivative of floor division is not defined.
    ///
    /// # Errors
    ///
    /// Always returns `DualError::UnsupportedOperation`.
    pub fn floor_div<R: IntoDual<T>>(&self, _rhs: R) -> Result<Self, DualError> {
        debug!("floor division requested on a dual number");
        Err(DualError::UnsupportedOperation(
            "integer division is not supported for dual numbers",
        ))
    }

    /// Power with a dual-capable exponent.
    ///
    /// With `t = u^(w-1)` the base contributes `w·t·∇u`. If the exponent
    /// carries a non-empty derivative vector it adds `uʷ·ln(u)·∇w`.
    ///
    /// # Examples
    /// ```
    /// use deriv_core::DualNumber;
    ///
    /// let x = DualNumber::variable(2.0_f64, 0);
    /// let y = DualNumber::variable(3.0_f64, 1);
    /// let p = x.pow(&y);
    ///
    /// assert_eq!(p.value(), 8.0);
    /// assert!((p.partial(0) - 12.0).abs() < 1e-12);
    /// assert!((p.partial(1) - 8.0 * 2.0_f64.ln()).abs() < 1e-12);
    /// ```
    pub fn pow<R: IntoDual<T>>(&self, exponent: R) -> Self {
        let w = exponent.into_dual();
        let u = self.value();
        let value = u.powf(w.value());
        let base_term = scale(power_slope(u, w.value()), self.derivative());
        if w.has_derivative() {
            let exponent_term = scale(value * u.ln(), w.derivative());
            Self::from_parts(value, combine(|a, b| a + b, &base_term, &exponent_term))
        } else {
            Self::from_parts(value, base_term)
        }
    }

    /// Power with a constant floating-point exponent.
    #[inline]
    pub fn powf(&self, exponent: T) -> Self {
        self.pow(exponent)
    }

    /// Power with a constant integer exponent.
    pub fn powi(&self, exponent: i32) -> Self {
        let n = T::from(exponent).unwrap_or_else(T::nan);
        let u = self.value();
        self.chain(u.powi(exponent), power_slope(u, n))
    }

    /// Power of a plain scalar base to a dual exponent.
    ///
    /// # Examples
    /// ```
    /// use deriv_core::DualNumber;
    ///
    /// let x = DualNumber::variable(3.0_f64, 0);
    /// let p = DualNumber::rpow(2.0, &x);
    /// assert_eq!(p.value(), 8.0);
    /// assert!((p.partial(0) - 8.0 * 2.0_f64.ln()).abs() < 1e-12);
    /// ```
    pub fn rpow<R: IntoDual<T>>(base: T, exponent: R) -> Self {
        Self::constant(base).pow(exponent)
    }

    /// Power with a modulus argument.
    ///
    /// # Errors
    ///
    /// Always returns `DualError::UnsupportedTernaryPow`.
    pub fn pow_mod<R: IntoDual<T>, M: IntoDual<T>>(
        &self,
        _exponent: R,
        _modulus: M,
    ) -> Result<Self, DualError> {
        debug!("ternary pow requested on a dual number");
        Err(DualError::UnsupportedTernaryPow)
    }
}

/// d/du uⁿ = n·uⁿ⁻¹, taken as zero for n = 0 so that x⁰ stays finite at 0.
#[inline]
fn power_slope<T: Float>(u: T, n: T) -> T {
    if n == T::zero() {
        T::zero()
    } else {
        n * u.powf(n - T::one())
    }
}

fn add_duals<T: Float>(lhs: &DualNumber<T>, rhs: &DualNumber<T>) -> DualNumber<T> {
    DualNumber::from_parts(
        lhs.value() + rhs.value(),
        combine(|a, b| a + b, lhs.derivative(), rhs.derivative()),
    )
}

fn sub_duals<T: Float>(lhs: &DualNumber<T>, rhs: &DualNumber<T>) -> DualNumber<T> {
    DualNumber::from_parts(
        lhs.value() - rhs.value(),
        combine(|a, b| a - b, lhs.derivative(), rhs.derivative()),
    )
}

fn mul_duals<T: Float>(lhs: &DualNumber<T>, rhs: &DualNumber<T>) -> DualNumber<T> {
    DualNumber::from_parts(
        lhs.value() * rhs.value(),
        combine(
            |a, b| a + b,
            &scale(rhs.value(), lhs.derivative()),
            &scale(lhs.value(), rhs.derivative()),
        ),
    )
}

impl<T: Float> Neg for DualNumber<T> {
    type Output = DualNumber<T>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<T: Float> Neg for &DualNumber<T> {
    type Output = DualNumber<T>;

    fn neg(self) -> Self::Output {
        DualNumber::from_parts(-self.value(), scale(-T::one(), self.derivative()))
    }
}

// Implements a binary operator for owned and borrowed dual left operands
// with any `IntoDual` right operand.
macro_rules! impl_dual_binop {
    ($trait:ident, $method:ident, $rule:ident) => {
        impl<T: Float, R: IntoDual<T>> $trait<R> for DualNumber<T> {
            type Output = DualNumber<T>;

            #[inline]
            fn $method(self, rhs: R) -> Self::Output {
                $rule(&self, &rhs.into_dual())
            }
        }

        impl<T: Float, R: IntoDual<T>> $trait<R> for &DualNumber<T> {
            type Output = DualNumber<T>;

            #[inline]
            fn $method(self, rhs: R) -> Self::Output {
                $rule(self, &rhs.into_dual())
            }
        }
    };
}

impl_dual_binop!(Add, add, add_duals);
impl_dual_binop!(Sub, sub, sub_duals);
impl_dual_binop!(Mul, mul, mul_duals);

impl<T: Float, R: IntoDual<T>> Div<R> for DualNumber<T> {
    type Output = Result<DualNumber<T>, DualError>;

    #[inline]
    fn div(self, rhs: R) -> Self::Output {
        self.checked_div(rhs)
    }
}

impl<T: Float, R: IntoDual<T>> Div<R> for &DualNumber<T> {
    type Output = Result<DualNumber<T>, DualError>;

    #[inline]
    fn div(self, rhs: R) -> Self::Output {
        self.checked_div(rhs)
    }
}

// Plain scalars on the left-hand side. Orphan rules require one impl per
// primitive type.
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl Add<DualNumber<$t>> for $t {
            type Output = DualNumber<$t>;

            #[inline]
            fn add(self, rhs: DualNumber<$t>) -> Self::Output {
                DualNumber::constant(self) + rhs
            }
        }

        impl Add<&DualNumber<$t>> for $t {
            type Output = DualNumber<$t>;

            #[inline]
            fn add(self, rhs: &DualNumber<$t>) -> Self::Output {
                DualNumber::constant(self) + rhs
            }
        }

        impl Sub<DualNumber<$t>> for $t {
            type Output = DualNumber<$t>;

            #[inline]
            fn sub(self, rhs: DualNumber<$t>) -> Self::Output {
                DualNumber::constant(self) - rhs
            }
        }

        impl Sub<&DualNumber<$t>> for $t {
            type Output = DualNumber<$t>;

            #[inline]
            fn sub(self, rhs: &DualNumber<$t>) -> Self::Output {
                DualNumber::constant(self) - rhs
            }
        }

        impl Mul<DualNumber<$t>> for $t {
            type Output = DualNumber<$t>;

            #[inline]
            fn mul(self, rhs: DualNumber<$t>) -> Self::Output {
                DualNumber::constant(self) * rhs
            }
        }

        impl Mul<&DualNumber<$t>> for $t {
            type Output = DualNumber<$t>;

            #[inline]
            fn mul(self, rhs: &DualNumber<$t>) -> Self::Output {
                DualNumber::constant(self) * rhs
            }
        }

        impl Div<DualNumber<$t>> for $t {
            type Output = Result<DualNumber<$t>, DualError>;

            #[inline]
            fn div(self, rhs: DualNumber<$t>) -> Self::Output {
                DualNumber::constant(self).checked_div(rhs)
            }
        }

        impl Div<&DualNumber<$t>> for $t {
            type Output = Result<DualNumber<$t>, DualError>;

            #[inline]
            fn div(self, rhs: &DualNumber<$t>) -> Self::Output {
                DualNumber::constant(self).checked_div(rhs)
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64);
