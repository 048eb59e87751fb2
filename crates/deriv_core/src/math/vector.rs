//! Three-component vectors of independent variables.

use num_traits::Float;

use crate::traits::IntoDual;
use crate::types::dual::DualNumber;

/// Build a 3-vector whose components are independent variables.
///
/// Component x receives variable index `index`, y receives `index + 1` and
/// z receives `index + 2`. If all three inputs already carry derivative
/// information they are returned unchanged and `index` is ignored; otherwise
/// only their values are used.
///
/// # Examples
/// ```
/// use deriv_core::{make_vector3, DualNumber};
///
/// let [x, y, z]: [DualNumber<f64>; 3] = make_vector3(1.0, 2.0, 3.0, 5);
/// assert_eq!(x.derivative(), &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
/// assert_eq!(y.partial(6), 1.0);
/// assert_eq!(z.partial(7), 1.0);
/// ```
pub fn make_vector3<T, X, Y, Z>(x: X, y: Y, z: Z, index: usize) -> [DualNumber<T>; 3]
where
    T: Float,
    X: IntoDual<T>,
    Y: IntoDual<T>,
    Z: IntoDual<T>,
{
    if x.is_dual() && y.is_dual() && z.is_dual() {
        return [x.into_dual(), y.into_dual(), z.into_dual()];
    }
    [
        DualNumber::variable(x.into_dual().value(), index),
        DualNumber::variable(y.into_dual().value(), index + 1),
        DualNumber::variable(z.into_dual().value(), index + 2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consecutive_indices() {
        let [x, y, z]: [DualNumber<f64>; 3] = make_vector3(1.0, 2.0, 3.0, 5);

        for (i, component) in [&x, &y, &z].into_iter().enumerate() {
            assert_eq!(component.num_vars(), 6 + i);
            assert_eq!(component.partial(5 + i), 1.0);
            let others: f64 = (0..8).filter(|&j| j != 5 + i).map(|j| component.partial(j)).sum();
            assert_eq!(others, 0.0);
        }
        assert_eq!([x.value(), y.value(), z.value()], [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_all_dual_inputs_returned_unchanged() {
        let a = DualNumber::variable(1.0_f64, 9);
        let b = DualNumber::from_parts(2.0_f64, vec![0.5, 0.5]);
        let c = DualNumber::variable(3.0_f64, 0);

        let [x, y, z] = make_vector3(a.clone(), &b, c.clone(), 0);
        assert_eq!(x.derivative(), a.derivative());
        assert_eq!(y.derivative(), b.derivative());
        assert_eq!(z.derivative(), c.derivative());
    }

    #[test]
    fn test_mixed_inputs_are_reseeded() {
        let a = DualNumber::variable(1.0_f64, 9);
        let [x, y, z] = make_vector3(a, 2.0, 3.0, 0);
        assert_eq!(x.derivative(), &[1.0]);
        assert_eq!(y.derivative(), &[0.0, 1.0]);
        assert_eq!(z.derivative(), &[0.0, 0.0, 1.0]);
    }
}
