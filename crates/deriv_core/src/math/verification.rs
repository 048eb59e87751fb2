//! Gradient verification against central finite differences.
//!
//! Forward-mode gradients are exact up to rounding, so a disagreement with a
//! central-difference estimate points at a wrong chain rule or at a function
//! evaluated near a singularity (for example `abs` or `sqrt` at zero).
//!
//! # Usage
//!
//! ```
//! use deriv_core::{verify_gradient, VerificationConfig};
//!
//! let config = VerificationConfig::default();
//! let check = verify_gradient(|v| v[0].exp() * &v[1], &[0.5_f64, 2.0], &config).unwrap();
//!
//! assert!(check.passed());
//! assert!(check.max_error() < 1e-6);
//! ```

use num_traits::Float;
use tracing::{debug, warn};

use super::gradient::{gradient, seed_variables};
use crate::types::dual::DualNumber;
use crate::types::error::DualError;

/// Configuration for gradient verification.
///
/// # Example
///
/// ```
/// use deriv_core::math::verification::VerificationConfig;
///
/// let config: VerificationConfig<f64> = VerificationConfig::default();
/// assert!(config.step < 1e-4);
///
/// let custom = VerificationConfig::new().with_step(1e-5).with_tolerance(1e-4);
/// assert_eq!(custom.tolerance, 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerificationConfig<T> {
    /// Central-difference step `h` (applied as `x ± h`).
    pub step: T,

    /// Maximum accepted scaled error `|ad - fd| / max(1, |fd|)`.
    pub tolerance: T,
}

impl<T: Float> Default for VerificationConfig<T> {
    /// Default values:
    /// - `step`: 1e-6
    /// - `tolerance`: 1e-6
    fn default() -> Self {
        Self {
            step: T::from(1e-6).unwrap_or_else(T::epsilon),
            tolerance: T::from(1e-6).unwrap_or_else(T::epsilon),
        }
    }
}

impl<T: Float> VerificationConfig<T> {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the finite-difference step.
    #[inline]
    pub fn with_step(mut self, step: T) -> Self {
        self.step = step;
        self
    }

    /// Sets the accepted error.
    #[inline]
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Relaxed settings for `f32` or badly scaled functions.
    pub fn relaxed() -> Self {
        Self {
            step: T::from(1e-4).unwrap_or_else(T::epsilon),
            tolerance: T::from(1e-3).unwrap_or_else(T::epsilon),
        }
    }
}

/// Result of a gradient verification.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientCheck<T> {
    /// Function value at the evaluation point.
    pub value: T,

    /// Forward-mode gradient.
    pub ad_gradient: Vec<T>,

    /// Central-difference gradient.
    pub fd_gradient: Vec<T>,

    /// Tolerance the check was run with.
    pub tolerance: T,
}

impl<T: Float> GradientCheck<T> {
    /// Absolute error `|ad - fd|` per component.
    pub fn abs_errors(&self) -> Vec<T> {
        self.ad_gradient
            .iter()
            .zip(&self.fd_gradient)
            .map(|(&ad, &fd)| (ad - fd).abs())
            .collect()
    }

    /// Relative error `|ad - fd| / |fd|` per component.
    ///
    /// Exact agreement is zero even when `fd` is zero; any other
    /// disagreement with a zero reference is infinite.
    pub fn rel_errors(&self) -> Vec<T> {
        self.ad_gradient
            .iter()
            .zip(&self.fd_gradient)
            .map(|(&ad, &fd)| {
                if ad == fd {
                    T::zero()
                } else {
                    (ad - fd).abs() / fd.abs()
                }
            })
            .collect()
    }

    /// Scaled error per component: absolute below `|fd| = 1`, relative
    /// above. This is the measure compared against the tolerance.
    pub fn errors(&self) -> Vec<T> {
        self.ad_gradient
            .iter()
            .zip(&self.fd_gradient)
            .map(|(&ad, &fd)| scaled_error(ad, fd))
            .collect()
    }

    /// Largest scaled error (zero for an empty gradient).
    pub fn max_error(&self) -> T {
        self.errors().into_iter().fold(T::zero(), T::max)
    }

    /// Indices of components exceeding the tolerance.
    pub fn failed_components(&self) -> Vec<usize> {
        self.errors()
            .into_iter()
            .enumerate()
            .filter(|(_, e)| !(*e <= self.tolerance))
            .map(|(i, _)| i)
            .collect()
    }

    /// True if every component is within tolerance.
    pub fn passed(&self) -> bool {
        self.failed_components().is_empty()
    }
}

#[inline]
fn scaled_error<T: Float>(ad: T, fd: T) -> T {
    (ad - fd).abs() / fd.abs().max(T::one())
}

/// Compare the forward-mode gradient of `f` with central differences.
///
/// `f` is called once with seeded variables and twice per coordinate with
/// constant inputs.
///
/// # Errors
///
/// Returns `DualError::DimensionMismatch` if `f` produces more gradient
/// components than `point` has coordinates (it introduced variables of its
/// own).
pub fn verify_gradient<T, F>(
    f: F,
    point: &[T],
    config: &VerificationConfig<T>,
) -> Result<GradientCheck<T>, DualError>
where
    T: Float,
    F: Fn(&[DualNumber<T>]) -> DualNumber<T>,
{
    let (value, ad_gradient) = gradient(&f, point);
    if ad_gradient.len() > point.len() {
        debug!(
            expected = point.len(),
            got = ad_gradient.len(),
            "gradient has more components than the evaluation point"
        );
        return Err(DualError::DimensionMismatch {
            expected: point.len(),
            got: ad_gradient.len(),
        });
    }

    let h = config.step;
    let two_h = h + h;
    let constants: Vec<DualNumber<T>> = point.iter().map(|&x| DualNumber::constant(x)).collect();
    let fd_gradient = (0..point.len())
        .map(|i| {
            let mut up = constants.clone();
            let mut down = constants.clone();
            up[i] = DualNumber::constant(point[i] + h);
            down[i] = DualNumber::constant(point[i] - h);
            (f(&up).value() - f(&down).value()) / two_h
        })
        .collect();

    let check = GradientCheck {
        value,
        ad_gradient,
        fd_gradient,
        tolerance: config.tolerance,
    };
    for i in check.failed_components() {
        warn!(
            component = i,
            ad = check.ad_gradient[i].to_f64(),
            fd = check.fd_gradient[i].to_f64(),
            "forward-mode gradient disagrees with central difference"
        );
    }
    Ok(check)
}

/// Check that the value channel matches a plain scalar evaluation.
///
/// `f` is evaluated on seeded variables and `reference` on the raw point.
/// The two results must be identical; NaN never matches.
///
/// # Examples
/// ```
/// use deriv_core::math::verification::value_matches_scalar_evaluation;
///
/// assert!(value_matches_scalar_evaluation(
///     |v| v[0].powf(0.5) * &v[1],
///     |p| p[0].powf(0.5) * p[1],
///     &[0.0_f64, 3.0],
/// ));
/// ```
pub fn value_matches_scalar_evaluation<T, F, G>(f: F, reference: G, point: &[T]) -> bool
where
    T: Float,
    F: Fn(&[DualNumber<T>]) -> DualNumber<T>,
    G: Fn(&[T]) -> T,
{
    let dual = f(&seed_variables(point)).value();
    let plain = reference(point);
    if dual != plain {
        debug!(
            dual = dual.to_f64(),
            plain = plain.to_f64(),
            "value channel differs from scalar evaluation"
        );
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config() {
        let config: VerificationConfig<f64> = VerificationConfig::default();
        assert!((config.step - 1e-6).abs() < 1e-18);
        assert!((config.tolerance - 1e-6).abs() < 1e-18);
    }

    #[test]
    fn test_relaxed_config() {
        let config: VerificationConfig<f32> = VerificationConfig::relaxed();
        assert!(config.tolerance > 1e-4);
    }

    #[test]
    fn test_verify_smooth_function_passes() {
        let config = VerificationConfig::default();
        let check = verify_gradient(
            |v| (&v[0] * &v[1]).sin() + v[2].tanh(),
            &[0.3_f64, 1.2, -0.4],
            &config,
        )
        .unwrap();
        assert!(check.passed(), "errors: {:?}", check.errors());
        assert_eq!(check.ad_gradient.len(), 3);
    }

    #[test]
    fn test_verify_detects_wrong_derivative() {
        // Derivative vector deliberately wrong: d/dx x² reported as 1.
        let config = VerificationConfig::default();
        let check = verify_gradient(
            |v| {
                let x = v[0].value();
                let d = if v[0].has_derivative() { vec![1.0] } else { vec![] };
                DualNumber::from_parts(x * x, d)
            },
            &[3.0_f64],
            &config,
        )
        .unwrap();
        assert!(!check.passed());
        assert_eq!(check.failed_components(), vec![0]);
    }

    #[test]
    fn test_verify_rejects_extra_variables() {
        let config = VerificationConfig::default();
        let result = verify_gradient(
            |v| &v[0] + DualNumber::variable(1.0, 4),
            &[1.0_f64],
            &config,
        );
        assert_eq!(
            result.unwrap_err(),
            DualError::DimensionMismatch {
                expected: 1,
                got: 5
            }
        );
    }

    #[test]
    fn test_value_channel_matches_scalar_evaluation() {
        assert!(value_matches_scalar_evaluation(
            |v| (&v[0] * &v[1]).exp() - v[2].ln() + v[2].powi(3),
            |p| (p[0] * p[1]).exp() - p[2].ln() + p[2].powi(3),
            &[0.2_f64, 0.7, 3.0]
        ));
        assert!(value_matches_scalar_evaluation(
            |v| v[0].powf(0.5),
            |p| p[0].powf(0.5),
            &[0.0_f64]
        ));
    }

    #[test]
    fn test_value_check_rejects_mismatch_and_nan() {
        assert!(!value_matches_scalar_evaluation(
            |v| &v[0] + 1.0,
            |p| p[0],
            &[2.0_f64]
        ));
        assert!(!value_matches_scalar_evaluation(
            |v| v[0].ln(),
            |p| p[0].ln(),
            &[-1.0_f64]
        ));
    }

    #[test]
    fn test_absolute_and_relative_errors() {
        let check = GradientCheck {
            value: 0.0_f64,
            ad_gradient: vec![10.5, 0.25, 0.0, 1.0],
            fd_gradient: vec![10.0, 0.5, 0.0, 0.0],
            tolerance: 1e-6,
        };
        let abs = check.abs_errors();
        let rel = check.rel_errors();
        assert_relative_eq!(abs[0], 0.5);
        assert_relative_eq!(abs[1], 0.25);
        assert_eq!(abs[2], 0.0);
        assert_relative_eq!(rel[0], 0.05);
        assert_relative_eq!(rel[1], 0.5);
        assert_eq!(rel[2], 0.0);
        assert_eq!(rel[3], f64::INFINITY);
        assert_relative_eq!(check.errors()[0], 0.05);
        assert_relative_eq!(check.errors()[1], 0.25);
        assert_eq!(check.failed_components(), vec![0, 1, 3]);
    }
}
