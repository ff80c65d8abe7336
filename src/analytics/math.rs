//! Shared numerical primitives: error function and standard normal
//! distribution helpers used by the pricer.

use std::f64::consts::PI;
use std::f64::consts::SQRT_2;

/// Approximation of the error function erf(x).
///
/// Abramowitz & Stegun formula 7.1.26, maximum absolute error 1.5e-7,
/// which is well inside the solver's price-space tolerance for any
/// realistic premium.
#[must_use]
pub fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;

    sign * (1.0 - poly * (-x * x).exp())
}

/// Standard normal cumulative distribution function, P(Z <= x).
#[must_use]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / SQRT_2))
}

/// Standard normal probability density function.
#[must_use]
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}
