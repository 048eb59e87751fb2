//! Opt-in allocator for variable indices.
//!
//! Plain construction through [`DualNumber::variable`] trusts the caller to
//! keep indices unique. [`VariableRegistry`] hands indices out monotonically
//! and refuses to issue the same index twice. The next free index is always
//! one past the highest index issued so far.

use std::collections::BTreeSet;

use num_traits::Float;
use tracing::{debug, trace};

use super::dual::DualNumber;
use super::error::DualError;

/// Allocator that assigns each new variable an unused index.
///
/// # Examples
/// ```
/// use deriv_core::types::VariableRegistry;
///
/// let mut registry = VariableRegistry::new();
/// let x = registry.variable(1.0_f64);
/// let [a, b, c] = registry.vector3(2.0_f64, 3.0, 4.0);
///
/// assert_eq!(x.derivative(), &[1.0]);
/// assert_eq!(a.partial(1), 1.0);
/// assert_eq!(c.partial(3), 1.0);
/// assert_eq!(registry.len(), 4);
///
/// assert!(registry.claim(2, 0.0_f64).is_err());
/// # let _ = b;
/// ```
#[derive(Debug, Clone, Default)]
pub struct VariableRegistry {
    next: usize,
    issued: BTreeSet<usize>,
}

impl VariableRegistry {
    /// Creates a registry that starts issuing at index 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry that starts issuing at `base`.
    pub fn starting_at(base: usize) -> Self {
        Self {
            next: base,
            issued: BTreeSet::new(),
        }
    }

    /// Creates a new independent variable at the next free index.
    pub fn variable<T: Float>(&mut self, value: T) -> DualNumber<T> {
        let index = self.next;
        self.issue(index);
        DualNumber::variable(value, index)
    }

    /// Creates three variables with consecutive free indices.
    pub fn vector3<T: Float>(&mut self, x: T, y: T, z: T) -> [DualNumber<T>; 3] {
        let base = self.next;
        for index in base..base + 3 {
            self.issue(index);
        }
        [
            DualNumber::variable(x, base),
            DualNumber::variable(y, base + 1),
            DualNumber::variable(z, base + 2),
        ]
    }

    /// Creates a variable at an explicit index.
    ///
    /// # Errors
    ///
    /// Returns `DualError::DuplicateIndex` if `index` was already issued.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`DualNumber::variable`].
    pub fn claim<T: Float>(&mut self, index: usize, value: T) -> Result<DualNumber<T>, DualError> {
        if self.issued.contains(&index) {
            debug!(index, "variable index already issued");
            return Err(DualError::DuplicateIndex(index));
        }
        self.issue(index);
        Ok(DualNumber::variable(value, index))
    }

    /// True if `index` has been issued.
    pub fn contains(&self, index: usize) -> bool {
        self.issued.contains(&index)
    }

    /// Index the next call to [`variable`](Self::variable) will issue.
    pub fn next_index(&self) -> usize {
        self.next
    }

    /// Number of issued indices.
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    /// True if no index has been issued.
    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }

    fn issue(&mut self, index: usize) {
        trace!(index, "issuing variable index");
        self.issued.insert(index);
        if index >= self.next {
            self.next = index.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_indices() {
        let mut registry = VariableRegistry::new();
        let a = registry.variable(1.0_f64);
        let b = registry.variable(2.0_f64);
        assert_eq!(a.num_vars(), 1);
        assert_eq!(b.num_vars(), 2);
        assert_eq!(b.partial(1), 1.0);
        assert_eq!(registry.next_index(), 2);
    }

    #[test]
    fn test_starting_at_base() {
        let mut registry = VariableRegistry::starting_at(5);
        let [x, y, z] = registry.vector3(1.0_f64, 2.0, 3.0);
        assert_eq!(x.partial(5), 1.0);
        assert_eq!(y.partial(6), 1.0);
        assert_eq!(z.partial(7), 1.0);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_claim_rejects_reuse() {
        let mut registry = VariableRegistry::new();
        registry.claim(3, 1.0_f64).unwrap();
        assert_eq!(
            registry.claim(3, 2.0_f64).unwrap_err(),
            DualError::DuplicateIndex(3)
        );
    }

    #[test]
    fn test_variable_skips_claimed_indices() {
        let mut registry = VariableRegistry::new();
        registry.claim(0, 1.0_f64).unwrap();
        registry.claim(1, 1.0_f64).unwrap();
        let x = registry.variable(5.0_f64);
        assert_eq!(x.num_vars(), 3);
        assert!(registry.contains(2));
    }

    #[test]
    fn test_claim_below_next_keeps_next() {
        let mut registry = VariableRegistry::starting_at(10);
        registry.claim(2, 1.0_f64).unwrap();
        assert_eq!(registry.next_index(), 10);
        assert!(!registry.is_empty());
    }

    #[test]
    #[should_panic(expected = "leaves no room")]
    fn test_claim_max_index_panics_in_constructor() {
        let mut registry = VariableRegistry::new();
        let _ = registry.claim(usize::MAX, 1.0_f64);
    }

    #[test]
    fn test_vector3_follows_highest_claim() {
        let mut registry = VariableRegistry::new();
        registry.claim(4, 0.0_f64).unwrap();
        let [x, _, z] = registry.vector3(1.0_f64, 1.0, 1.0);
        assert_eq!(x.num_vars(), 6);
        assert_eq!(z.num_vars(), 8);
    }
}
