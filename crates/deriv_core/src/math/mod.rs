//! Chain rules and helpers for first-derivative propagation.
//!
//! This module provides:
//! - `combine`: Zero-padded merge of derivative vectors
//! - `arithmetic`: Operators (`+`, `-`, `*`, `/`, `pow`, `abs`, `sign`, ...)
//! - `transcendental`: Elementary and special functions on dual numbers
//! - `special`: Gamma/digamma provider backed by `statrs`
//! - `vector`: Three-component vectors of independent variables
//! - `gradient`: Single-pass gradient evaluation at a point
//! - `verification`: Comparison against central finite differences

pub mod arithmetic;
pub mod combine;
pub mod gradient;
pub mod special;
pub mod transcendental;
pub mod vector;
pub mod verification;

pub use combine::{combine, scale};
pub use gradient::{gradient, seed_variables, try_gradient};
pub use special::SpecialFunctions;
pub use vector::make_vector3;
pub use verification::{
    value_matches_scalar_evaluation, verify_gradient, GradientCheck, VerificationConfig,
};
