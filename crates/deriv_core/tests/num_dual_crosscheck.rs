//! Cross-check single-variable derivatives against num-dual.
//!
//! `num_dual::Dual64` carries one derivative component. Seeding variable 0
//! and comparing component 0 validates every unary chain rule against an
//! independent implementation.

use approx::assert_relative_eq;
use deriv_core::DualNumber;
use num_dual::{Dual64, DualNum};

fn check<F, G>(x: f64, ours: F, theirs: G)
where
    F: Fn(&DualNumber<f64>) -> DualNumber<f64>,
    G: Fn(Dual64) -> Dual64,
{
    let a = ours(&DualNumber::variable(x, 0));
    let b = theirs(Dual64::new(x, 1.0));
    assert_relative_eq!(a.value(), b.re, epsilon = 1e-12, max_relative = 1e-12);
    assert_relative_eq!(a.partial(0), b.eps, epsilon = 1e-12, max_relative = 1e-12);
}

#[test]
fn test_exp_ln_sqrt_against_num_dual() {
    check(1.3, |x| x.exp(), |x| x.exp());
    check(1.3, |x| x.ln(), |x| x.ln());
    check(1.3, |x| x.log10(), |x| x.log10());
    check(1.3, |x| x.sqrt(), |x| x.sqrt());
}

#[test]
fn test_trig_against_num_dual() {
    check(0.4, |x| x.sin(), |x| x.sin());
    check(0.4, |x| x.cos(), |x| x.cos());
    check(0.4, |x| x.tan(), |x| x.tan());
    check(0.4, |x| x.asin(), |x| x.asin());
    check(0.4, |x| x.acos(), |x| x.acos());
    check(0.4, |x| x.atan(), |x| x.atan());
}

#[test]
fn test_hyperbolic_against_num_dual() {
    check(0.8, |x| x.sinh(), |x| x.sinh());
    check(0.8, |x| x.cosh(), |x| x.cosh());
    check(0.8, |x| x.tanh(), |x| x.tanh());
}

#[test]
fn test_arithmetic_against_num_dual() {
    // f(x) = (x + 1)·ln(x) / x²
    check(
        2.0,
        |x| ((x + 1.0) * x.ln() / x.powi(2)).unwrap(),
        |x| (x + 1.0) * x.ln() / x.powi(2),
    );
    check(2.5, |x| x.powf(1.7), |x| x.powf(1.7));
}
