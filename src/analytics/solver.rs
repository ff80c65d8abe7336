//! Implied volatility root-finder.
//!
//! Inverts the Black-Scholes premium along the volatility axis: finds the
//! sigma for which the theoretical price matches an observed market price.
//! The premium is strictly increasing in sigma (vega > 0 for positive time
//! and vol), so the root is unique when it exists, but the curve gets very
//! flat deep in/out of the money and near expiry. A bare Newton iteration
//! diverges there, so the solver keeps a bracket around the root and falls
//! back to bisection whenever a Newton step would leave it.

use tracing::{debug, warn};

use super::black_scholes::{price_unchecked, vega_unchecked};
use super::config::EngineConfig;
use super::error::AnalyticsError;
use super::types::{OptionQuote, VolSolution};

/// Seed estimate for the iteration.
///
/// Brenner-Subrahmanyam: for an at-the-money option the premium is roughly
/// `0.4·S·σ·√t`, so `σ ≈ price / (0.4·S·√t)` is a cheap starting point that
/// lands in the right order of magnitude across moneyness.
fn initial_guess(quote: &OptionQuote, config: &EngineConfig) -> f64 {
    let seed = quote.market_price / (0.4 * quote.underlying_price * quote.time_to_expiry.sqrt());
    seed.clamp(config.min_vol, config.max_vol)
}

fn validate_quote(quote: &OptionQuote) -> Result<(), AnalyticsError> {
    if !quote.underlying_price.is_finite() || quote.underlying_price <= 0.0 {
        return Err(AnalyticsError::InvalidInput {
            message: format!(
                "underlying price must be positive and finite, got {}",
                quote.underlying_price
            ),
        });
    }
    if !quote.strike.is_finite() || quote.strike <= 0.0 {
        return Err(AnalyticsError::InvalidInput {
            message: format!("strike must be positive and finite, got {}", quote.strike),
        });
    }
    if !quote.time_to_expiry.is_finite() || quote.time_to_expiry <= 0.0 {
        // An expired or same-day option has no time value to solve for.
        return Err(AnalyticsError::InvalidInput {
            message: format!(
                "time to expiry must be positive to imply a volatility, got {}",
                quote.time_to_expiry
            ),
        });
    }
    if !quote.risk_free_rate.is_finite() {
        return Err(AnalyticsError::InvalidInput {
            message: format!("risk-free rate must be finite, got {}", quote.risk_free_rate),
        });
    }
    if !quote.market_price.is_finite() || quote.market_price <= 0.0 {
        return Err(AnalyticsError::InvalidInput {
            message: format!(
                "market price must be positive and finite, got {}",
                quote.market_price
            ),
        });
    }
    Ok(())
}

/// Solves `price(sigma) == market_price` for sigma.
///
/// Hybrid scheme: a Brenner-Subrahmanyam seed, Newton-Raphson refinement
/// using analytic vega, and bisection of the maintained bracket whenever
/// vega drops below `config.min_vega` or a Newton step escapes the bracket.
/// Convergence is measured in price space against `config.tolerance`.
///
/// # Errors
/// - [`AnalyticsError::InvalidInput`] for non-positive spot/strike/price or
///   `time_to_expiry <= 0`.
/// - [`AnalyticsError::BelowIntrinsic`] when the market price violates the
///   discounted no-arbitrage lower bound.
/// - [`AnalyticsError::ConvergenceFailure`] when the iteration cap is hit,
///   or when no root exists inside the configured volatility bracket.
pub fn implied_volatility(
    quote: &OptionQuote,
    config: &EngineConfig,
) -> Result<VolSolution, AnalyticsError> {
    validate_quote(quote)?;

    let (spot, strike, time, rate) = (
        quote.underlying_price,
        quote.strike,
        quote.time_to_expiry,
        quote.risk_free_rate,
    );
    let target = quote.market_price;

    // No-arbitrage pre-check against the discounted bound. A price at the
    // bound (within tolerance) means the market implies no time value.
    let lower_bound = quote.lower_bound();
    if target < lower_bound - config.tolerance {
        return Err(AnalyticsError::BelowIntrinsic {
            price: target,
            lower_bound,
        });
    }
    if (target - lower_bound).abs() <= config.tolerance {
        return Ok(VolSolution {
            sigma: 0.0,
            iterations: 0,
        });
    }

    // The premium at the top of the bracket caps what any admissible sigma
    // can produce; a richer market price has no root in the bracket.
    let ceiling = price_unchecked(quote.right, spot, strike, time, rate, config.max_vol);
    if target > ceiling {
        return Err(AnalyticsError::ConvergenceFailure {
            iterations: 0,
            last_vol: config.max_vol,
        });
    }

    let mut lo = 0.0_f64;
    let mut hi = config.max_vol;
    let mut sigma = initial_guess(quote, config);

    for iteration in 1..=config.max_iterations {
        let diff = price_unchecked(quote.right, spot, strike, time, rate, sigma) - target;

        if diff.abs() < config.tolerance {
            let sigma = if sigma < config.zero_clamp { 0.0 } else { sigma };
            debug!(sigma, iteration, "implied volatility converged");
            return Ok(VolSolution {
                sigma,
                iterations: iteration,
            });
        }

        // Monotonicity lets the price error tighten the bracket directly.
        if diff > 0.0 {
            hi = sigma;
        } else {
            lo = sigma;
        }

        let vega = vega_unchecked(spot, strike, time, rate, sigma);
        let newton = sigma - diff / vega;

        sigma = if vega < config.min_vega || newton <= lo || newton >= hi {
            // Flat curve or runaway step: bisect the bracket instead.
            0.5 * (lo + hi)
        } else {
            newton
        };
    }

    warn!(
        right = ?quote.right,
        spot,
        strike,
        time,
        rate,
        market_price = target,
        last_vol = sigma,
        "implied volatility solver exhausted its iteration budget"
    );
    Err(AnalyticsError::ConvergenceFailure {
        iterations: config.max_iterations,
        last_vol: sigma,
    })
}
