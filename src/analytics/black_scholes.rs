//! Closed-form Black-Scholes pricing and analytic Greeks.
//!
//! All functions are pure and deterministic. Degenerate inputs (`time == 0`,
//! `vol == 0`) are explicit branches with well-defined outputs, never routed
//! through the general formula, which divides by `vol * sqrt(time)`. A NaN
//! volatility propagates NaN through the price and every Greek so a failed
//! implied volatility solve degrades downstream values instead of panicking.

use super::error::AnalyticsError;
use super::math::{norm_cdf, norm_pdf};
use super::types::OptionRight;

/// Validates the structural preconditions shared by the pricer and Greeks.
///
/// A NaN volatility is deliberately let through; see the module docs.
fn validate(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> Result<(), AnalyticsError> {
    if !spot.is_finite() || spot <= 0.0 {
        return Err(AnalyticsError::InvalidInput {
            message: format!("underlying price must be positive and finite, got {spot}"),
        });
    }
    if !strike.is_finite() || strike <= 0.0 {
        return Err(AnalyticsError::InvalidInput {
            message: format!("strike must be positive and finite, got {strike}"),
        });
    }
    if time.is_nan() || time < 0.0 || time.is_infinite() {
        return Err(AnalyticsError::InvalidInput {
            message: format!("time to expiry must be non-negative and finite, got {time}"),
        });
    }
    if !rate.is_finite() {
        return Err(AnalyticsError::InvalidInput {
            message: format!("risk-free rate must be finite, got {rate}"),
        });
    }
    if vol < 0.0 || vol.is_infinite() {
        return Err(AnalyticsError::InvalidInput {
            message: format!("volatility must be non-negative and finite, got {vol}"),
        });
    }
    Ok(())
}

/// The d1 term: `[ln(S/K) + (r + σ²/2)t] / (σ√t)`.
///
/// Callers must have excluded `vol == 0` and `time == 0`.
fn d1(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// The d2 term: `d1 - σ√t`.
fn d2(d1: f64, time: f64, vol: f64) -> f64 {
    d1 - vol * time.sqrt()
}

/// Premium without input validation. Used by the solver, which validates
/// the quote once before iterating.
pub(crate) fn price_unchecked(
    right: OptionRight,
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
) -> f64 {
    if time <= 0.0 {
        // Expired or expiring now: intrinsic value only.
        return right.intrinsic(spot, strike);
    }
    if vol == 0.0 {
        // No diffusion: the premium collapses to the discounted intrinsic.
        return right.lower_bound(spot, strike, time, rate);
    }

    let d1 = d1(spot, strike, time, rate, vol);
    let d2 = d2(d1, time, vol);
    let discount = (-rate * time).exp();

    match right {
        OptionRight::Call => spot * norm_cdf(d1) - strike * discount * norm_cdf(d2),
        OptionRight::Put => strike * discount * norm_cdf(-d2) - spot * norm_cdf(-d1),
    }
}

/// Vega without validation, in price units per unit of volatility.
pub(crate) fn vega_unchecked(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    if time <= 0.0 || vol == 0.0 {
        return 0.0;
    }
    let d1 = d1(spot, strike, time, rate, vol);
    spot * norm_pdf(d1) * time.sqrt()
}

/// Theoretical option premium.
///
/// `C = S·N(d1) - K·e^{-rt}·N(d2)`, `P = K·e^{-rt}·N(-d2) - S·N(-d1)`.
///
/// # Errors
/// [`AnalyticsError::InvalidInput`] when `spot <= 0`, `strike <= 0`,
/// `time < 0` or `vol < 0`. `time == 0` and `vol == 0` are valid boundary
/// inputs with degenerate outputs.
pub fn price(
    right: OptionRight,
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
) -> Result<f64, AnalyticsError> {
    validate(spot, strike, time, rate, vol)?;
    Ok(price_unchecked(right, spot, strike, time, rate, vol))
}

/// Delta, the sensitivity of the premium to the underlying price.
///
/// `N(d1)` for calls, `N(d1) - 1` for puts. At expiry this degenerates to
/// the exercise indicator (0/1 for calls, 0/-1 for puts).
pub fn delta(
    right: OptionRight,
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
) -> Result<f64, AnalyticsError> {
    validate(spot, strike, time, rate, vol)?;

    if time <= 0.0 || vol == 0.0 {
        let exercised = match right {
            OptionRight::Call => spot > strike,
            OptionRight::Put => spot < strike,
        };
        let unit = match right {
            OptionRight::Call => 1.0,
            OptionRight::Put => -1.0,
        };
        return Ok(if exercised { unit } else { 0.0 });
    }

    let d1 = d1(spot, strike, time, rate, vol);
    Ok(match right {
        OptionRight::Call => norm_cdf(d1),
        OptionRight::Put => norm_cdf(d1) - 1.0,
    })
}

/// Gamma, the curvature of the premium in the underlying price.
///
/// `N'(d1) / (S·σ·√t)`, identical for calls and puts.
pub fn gamma(
    _right: OptionRight,
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
) -> Result<f64, AnalyticsError> {
    validate(spot, strike, time, rate, vol)?;

    if time <= 0.0 || vol == 0.0 {
        return Ok(0.0);
    }

    let d1 = d1(spot, strike, time, rate, vol);
    Ok(norm_pdf(d1) / (spot * vol * time.sqrt()))
}

/// Theta, the time decay of the premium, in price units PER YEAR.
///
/// The engine converts to a daily figure by dividing by the configured
/// day count when Greeks are surfaced.
pub fn theta(
    right: OptionRight,
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
) -> Result<f64, AnalyticsError> {
    validate(spot, strike, time, rate, vol)?;

    if time <= 0.0 || vol == 0.0 {
        return Ok(0.0);
    }

    let d1 = d1(spot, strike, time, rate, vol);
    let d2 = d2(d1, time, vol);
    let discount = (-rate * time).exp();

    let decay = -spot * norm_pdf(d1) * vol / (2.0 * time.sqrt());
    Ok(match right {
        OptionRight::Call => decay - rate * strike * discount * norm_cdf(d2),
        OptionRight::Put => decay + rate * strike * discount * norm_cdf(-d2),
    })
}

/// Vega, the sensitivity of the premium to volatility.
///
/// `S·N'(d1)·√t`, identical for calls and puts and always non-negative.
pub fn vega(
    _right: OptionRight,
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
) -> Result<f64, AnalyticsError> {
    validate(spot, strike, time, rate, vol)?;
    Ok(vega_unchecked(spot, strike, time, rate, vol))
}
