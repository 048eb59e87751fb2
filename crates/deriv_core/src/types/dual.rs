//! Dual number with a dense derivative vector.
//!
//! A [`DualNumber`] carries a scalar value together with the partial
//! derivatives of that value with respect to a set of independent variables.
//! Entry `i` of the derivative vector holds ∂value/∂xᵢ; entries beyond the
//! stored length are implicitly zero, so a constant stores an empty vector.
//!
//! ## Usage
//!
//! ```
//! use deriv_core::types::dual::DualNumber;
//!
//! let x = DualNumber::variable(3.0, 0);
//! let y = DualNumber::variable(5.0, 1);
//!
//! let sum = x + y;
//! assert_eq!(sum.value(), 8.0);
//! assert_eq!(sum.derivative(), &[1.0, 1.0]);
//! ```
//!
//! Each explicitly created variable must use its own index. Two variables
//! built with the same index conflate their partial derivatives and the
//! result is meaningless; this is not checked. See
//! [`VariableRegistry`](crate::types::VariableRegistry) for an opt-in allocator
//! that rejects reuse.

use std::cmp::Ordering;
use std::fmt;

use num_traits::Float;
use tracing::debug;

use super::error::DualError;
use crate::math::combine::scale;

/// Seed for the derivative vector of a new [`DualNumber`].
///
/// # Variants
/// - `Index`: Variable index; expands to the basis vector `[0, .., 0, 1]`
/// - `Vector`: Derivative vector used as-is
#[derive(Debug, Clone, PartialEq)]
pub enum Seed<T> {
    /// Variable index of an independent variable.
    Index(usize),
    /// Pre-computed derivative vector.
    Vector(Vec<T>),
}

impl<T> From<usize> for Seed<T> {
    fn from(index: usize) -> Self {
        Seed::Index(index)
    }
}

impl<T> From<Vec<T>> for Seed<T> {
    fn from(derivative: Vec<T>) -> Self {
        Seed::Vector(derivative)
    }
}

/// Component of a [`DualNumber`] selected by derivative order.
///
/// Returned by [`DualNumber::get`]: order 0 is the value, order 1 the
/// derivative vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Component<'a, T> {
    /// Order 0: the scalar value.
    Value(T),
    /// Order 1: the first-derivative vector.
    Derivative(&'a [T]),
}

impl<'a, T: Copy> Component<'a, T> {
    /// Returns the scalar value if this is the order 0 component.
    pub fn value(&self) -> Option<T> {
        match self {
            Component::Value(v) => Some(*v),
            Component::Derivative(_) => None,
        }
    }

    /// Returns the derivative vector if this is the order 1 component.
    pub fn derivative(&self) -> Option<&'a [T]> {
        match self {
            Component::Value(_) => None,
            Component::Derivative(d) => Some(d),
        }
    }
}

/// Scalar value with first-order partial derivatives.
///
/// `DualNumber<T>` is immutable: every operator and function returns a new
/// instance. Equality and ordering compare the value only.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (`f64` or `f32`)
///
/// # Examples
///
/// ```
/// use deriv_core::types::dual::{Component, DualNumber};
///
/// let x = DualNumber::new(2.0, 2, 1).unwrap();
/// assert_eq!(x.derivative(), &[0.0, 0.0, 1.0]);
///
/// let c = DualNumber::new(4.0, 0, 0).unwrap();
/// assert!(c.derivative().is_empty());
///
/// assert_eq!(x.get(0).unwrap(), Component::Value(2.0));
/// assert!(x.get(2).is_err());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DualNumber<T> {
    value: T,
    derivative: Vec<T>,
}

impl<T: Float> DualNumber<T> {
    /// Create a dual number from a value, a seed and a derivative order.
    ///
    /// # Arguments
    ///
    /// * `value` - Scalar value
    /// * `seed` - Variable index or derivative vector
    /// * `order` - 0 for a constant, 1 for a differentiable value
    ///
    /// # Errors
    ///
    /// Returns `DualError::InvalidOrder` if `order` is not 0 or 1.
    ///
    /// # Panics
    ///
    /// Panics for an index seed under the same conditions as
    /// [`variable`](Self::variable).
    pub fn new(value: T, seed: impl Into<Seed<T>>, order: usize) -> Result<Self, DualError> {
        match order {
            0 => Ok(Self::constant(value)),
            1 => Ok(match seed.into() {
                Seed::Index(index) => Self::variable(value, index),
                Seed::Vector(derivative) => Self::from_parts(value, derivative),
            }),
            _ => {
                debug!(order, "rejecting derivative order outside {{0, 1}}");
                Err(DualError::InvalidOrder(order))
            }
        }
    }

    /// Create the independent variable with the given index.
    ///
    /// The derivative vector is the basis vector `[0; index] ++ [1]`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is `usize::MAX`, or if a derivative vector of
    /// `index + 1` entries cannot be allocated.
    pub fn variable(value: T, index: usize) -> Self {
        let Some(len) = index.checked_add(1) else {
            panic!("variable index {index} leaves no room for a derivative vector");
        };
        let mut derivative = vec![T::zero(); len];
        derivative[index] = T::one();
        Self { value, derivative }
    }

    /// Create a constant (empty derivative vector).
    pub fn constant(value: T) -> Self {
        Self {
            value,
            derivative: Vec::new(),
        }
    }

    /// Create a dual number from a value and a ready-made derivative vector.
    pub fn from_parts(value: T, derivative: Vec<T>) -> Self {
        Self { value, derivative }
    }

    /// Component of the given derivative order.
    ///
    /// # Errors
    ///
    /// Returns `DualError::IndexOutOfRange` if `order` is not 0 or 1.
    pub fn get(&self, order: usize) -> Result<Component<'_, T>, DualError> {
        match order {
            0 => Ok(Component::Value(self.value)),
            1 => Ok(Component::Derivative(&self.derivative)),
            _ => {
                debug!(order, "component requested for unsupported order");
                Err(DualError::IndexOutOfRange(order))
            }
        }
    }

    /// Scalar value.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Derivative vector as stored (trailing zeros may be omitted).
    #[inline]
    pub fn derivative(&self) -> &[T] {
        &self.derivative
    }

    /// Partial derivative with respect to variable `index`.
    ///
    /// Returns zero beyond the stored length.
    #[inline]
    pub fn partial(&self, index: usize) -> T {
        self.derivative.get(index).copied().unwrap_or_else(T::zero)
    }

    /// Number of stored derivative components.
    #[inline]
    pub fn num_vars(&self) -> usize {
        self.derivative.len()
    }

    /// True if the derivative vector is non-empty.
    #[inline]
    pub fn has_derivative(&self) -> bool {
        !self.derivative.is_empty()
    }

    /// True if the value is nonzero. Derivatives play no role.
    #[inline]
    pub fn is_nonzero(&self) -> bool {
        self.value != T::zero()
    }

    /// Consume the dual number, returning value and derivative vector.
    pub fn into_parts(self) -> (T, Vec<T>) {
        (self.value, self.derivative)
    }

    /// Apply the chain rule for a unary function with value `value`
    /// and slope `slope` at `self.value`.
    #[inline]
    pub(crate) fn chain(&self, value: T, slope: T) -> Self {
        Self::from_parts(value, scale(slope, &self.derivative))
    }
}

impl<T: Float> From<T> for DualNumber<T> {
    fn from(value: T) -> Self {
        Self::constant(value)
    }
}

impl<T: PartialEq> PartialEq for DualNumber<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: PartialOrd> PartialOrd for DualNumber<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: fmt::Display> fmt::Display for DualNumber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, [", self.value)?;
        for (i, d) in self.derivative.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, "])")
    }
}
