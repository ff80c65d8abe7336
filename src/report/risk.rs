//! Risk-graph report data: profit and loss of an option strategy over a
//! range of underlying prices.
//!
//! Produces the value series only; rendering belongs to the consumer.

use serde::{Deserialize, Serialize};

use crate::analytics::{AnalyticsError, OptionRight, black_scholes};

/// One leg of an option strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyLeg {
    /// Call or Put.
    pub right: OptionRight,
    /// Strike price.
    pub strike: f64,
    /// Premium paid (long) or received (short) per contract.
    pub premium: f64,
    /// Signed position size: positive long, negative short.
    pub quantity: f64,
    /// Implied volatility used when valuing the leg before expiry.
    pub iv: f64,
}

/// Strategy value at one underlying price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskPoint {
    /// Hypothetical underlying price.
    pub underlying: f64,
    /// Strategy profit/loss at that price.
    pub value: f64,
}

/// Evenly spaced underlying grid spanning the legs' strikes with a margin
/// on each side; the current spot is always inside the range. The margin is
/// 10% of the strike spread, floored at 5% of spot so a single-strike
/// strategy at the money still gets a usable range.
#[must_use]
pub fn underlying_grid(legs: &[StrategyLeg], spot: f64, points: usize) -> Vec<f64> {
    if legs.is_empty() || points < 2 {
        return Vec::new();
    }

    let mut min_strike = f64::INFINITY;
    let mut max_strike = f64::NEG_INFINITY;
    for leg in legs {
        min_strike = min_strike.min(leg.strike);
        max_strike = max_strike.max(leg.strike);
    }
    min_strike = min_strike.min(spot);
    max_strike = max_strike.max(spot);

    let spread = max_strike - min_strike;
    let margin = (spread * 0.1).max(spot * 0.05);
    let lo = min_strike - margin;
    let hi = max_strike + margin;
    let step = (hi - lo) / (points - 1) as f64;

    (0..points).map(|i| lo + step * i as f64).collect()
}

/// Profit/loss of the strategy at expiration for each grid price.
///
/// Each leg is worth its intrinsic value minus the premium paid, scaled by
/// the signed quantity.
#[must_use]
pub fn expiry_payoff(legs: &[StrategyLeg], grid: &[f64]) -> Vec<RiskPoint> {
    grid.iter()
        .map(|&underlying| {
            let value = legs
                .iter()
                .map(|leg| leg.quantity * (leg.right.intrinsic(underlying, leg.strike) - leg.premium))
                .sum();
            RiskPoint { underlying, value }
        })
        .collect()
}

/// Theoretical profit/loss of the strategy with `time` years remaining,
/// valuing each leg with Black-Scholes at its own implied volatility.
///
/// # Errors
/// [`AnalyticsError::InvalidInput`] when a leg or grid point carries
/// invalid pricing inputs.
pub fn theoretical_value(
    legs: &[StrategyLeg],
    grid: &[f64],
    time: f64,
    rate: f64,
) -> Result<Vec<RiskPoint>, AnalyticsError> {
    grid.iter()
        .map(|&underlying| {
            let mut value = 0.0;
            for leg in legs {
                let price =
                    black_scholes::price(leg.right, underlying, leg.strike, time, rate, leg.iv)?;
                value += leg.quantity * (price - leg.premium);
            }
            Ok(RiskPoint { underlying, value })
        })
        .collect()
}
