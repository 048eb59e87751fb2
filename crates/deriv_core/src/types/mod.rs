//! Core dual-number types.
//!
//! This module provides:
//! - `dual`: The [`DualNumber`] value type with construction and indexing
//! - `registry`: Opt-in allocator that keeps variable indices unique
//! - `error`: Structured error type for construction, indexing and arithmetic
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`DualNumber`], [`Seed`], [`Component`] from `dual`
//! - [`VariableRegistry`] from `registry`
//! - [`DualError`] from `error`

pub mod dual;
pub mod error;
pub mod registry;

// Re-export commonly used types at module level
pub use dual::{Component, DualNumber, Seed};
pub use error::DualError;
pub use registry::VariableRegistry;
