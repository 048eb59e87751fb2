//! # deriv_core: Forward-Mode First Derivatives
//!
//! deriv_core computes the value and the first-order partial derivatives of
//! scalar expressions built from arithmetic and transcendental functions. It
//! needs neither symbolic differentiation nor finite differences: every
//! operation propagates an exact derivative vector by the chain rule.
//!
//! - Dual number type with dense derivative vectors (`types::dual`)
//! - Zero-padding derivative combinator (`math::combine`)
//! - Operators and transcendental functions (`math::arithmetic`, `math::transcendental`)
//! - Dual/scalar capability trait (`traits`)
//! - Three-component variable vectors (`math::vector`)
//! - Gradient evaluation and verification (`math::gradient`, `math::verification`)
//! - Error type: `DualError` (`types::error`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use deriv_core::DualNumber;
//!
//! let x = DualNumber::variable(7.0_f64, 0);
//! let y = DualNumber::variable(42.0_f64, 1);
//! let z = DualNumber::variable(std::f64::consts::PI, 2);
//!
//! let r = (x.powi(2) + y.powi(2) + z.powi(2)).sqrt();
//!
//! assert!((r.value() - 42.695_077_051_1).abs() < 1e-9);
//! assert!((r.partial(0) - 7.0 / r.value()).abs() < 1e-12);
//! assert!((r.partial(1) - 42.0 / r.value()).abs() < 1e-12);
//! ```
//!
//! Plain scalars mix freely with dual numbers; division returns a `Result`:
//!
//! ```rust
//! use deriv_core::{DualError, DualNumber};
//!
//! let x = DualNumber::variable(2.0_f64, 0);
//! let y = (3.0 * &x + 1.0).exp();
//! let q = (&y / &x)?;
//! assert!(q.partial(0).is_finite());
//! # Ok::<(), DualError>(())
//! ```
//!
//! ## Variable Indices
//!
//! Each explicitly created variable must have its own index. Reusing an index
//! for two different variables is not detected and yields meaningless
//! derivatives. Use [`VariableRegistry`] to have indices assigned and checked.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `DualNumber` and `VerificationConfig`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;

pub use math::{
    combine, gradient, make_vector3, try_gradient, verify_gradient, SpecialFunctions,
    VerificationConfig,
};
pub use traits::{is_dual, IntoDual};
pub use types::{Component, DualError, DualNumber, Seed, VariableRegistry};
