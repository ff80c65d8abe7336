//! Core types for the pricing and implied volatility engine.

use serde::{Deserialize, Serialize};

/// Option right (the side of the contract).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionRight {
    /// Call option (right to buy the underlying at the strike).
    Call,
    /// Put option (right to sell the underlying at the strike).
    Put,
}

impl OptionRight {
    /// Undiscounted intrinsic value at the given spot and strike.
    ///
    /// For calls: max(0, spot - strike). For puts: max(0, strike - spot).
    #[must_use]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionRight::Call => (spot - strike).max(0.0),
            OptionRight::Put => (strike - spot).max(0.0),
        }
    }

    /// No-arbitrage lower bound on the option premium.
    ///
    /// Uses the strike discounted to today: `max(0, S - K·e^{-rt})` for a
    /// call, `max(0, K·e^{-rt} - S)` for a put. Any rational market price
    /// must sit at or above this bound.
    #[must_use]
    pub fn lower_bound(&self, spot: f64, strike: f64, time: f64, rate: f64) -> f64 {
        let discounted_strike = strike * (-rate * time).exp();
        match self {
            OptionRight::Call => (spot - discounted_strike).max(0.0),
            OptionRight::Put => (discounted_strike - spot).max(0.0),
        }
    }
}

/// A normalized option quote, the unit of work of the engine.
///
/// Produced by the chain layer from raw snapshot records; every field is
/// already in model units (years, annualized continuously-compounded rate).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OptionQuote {
    /// Call or Put.
    pub right: OptionRight,
    /// Current underlying price (S), must be positive.
    pub underlying_price: f64,
    /// Strike price (K), must be positive.
    pub strike: f64,
    /// Time to expiration in years, `(expiry - session) / day_count`.
    pub time_to_expiry: f64,
    /// Annualized continuously-compounded risk-free rate.
    pub risk_free_rate: f64,
    /// Observed market price (last traded or mid), must be positive.
    pub market_price: f64,
}

impl OptionQuote {
    /// Creates a new quote.
    #[must_use]
    pub fn new(
        right: OptionRight,
        underlying_price: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        market_price: f64,
    ) -> Self {
        Self {
            right,
            underlying_price,
            strike,
            time_to_expiry,
            risk_free_rate,
            market_price,
        }
    }

    /// Undiscounted intrinsic value of this quote.
    #[must_use]
    pub fn intrinsic_value(&self) -> f64 {
        self.right.intrinsic(self.underlying_price, self.strike)
    }

    /// Discounted no-arbitrage lower bound on the premium.
    #[must_use]
    pub fn lower_bound(&self) -> f64 {
        self.right.lower_bound(
            self.underlying_price,
            self.strike,
            self.time_to_expiry,
            self.risk_free_rate,
        )
    }

    /// Returns true if the option is in-the-money.
    #[must_use]
    pub fn is_itm(&self) -> bool {
        self.intrinsic_value() > 0.0
    }
}

/// First-order sensitivities of the option premium.
///
/// Theta is surfaced as a daily value: the per-year analytic theta divided
/// by the engine's day-count convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// ∂price/∂S.
    pub delta: f64,
    /// ∂²price/∂S².
    pub gamma: f64,
    /// Time decay per day.
    pub theta: f64,
    /// ∂price/∂σ.
    pub vega: f64,
}

/// Output of the implied volatility root-finder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolSolution {
    /// Annualized implied volatility, >= 0. Exactly `0.0` when the market
    /// price carries no time value.
    pub sigma: f64,
    /// Iterations spent by the root-finder (0 for the zero-time-value
    /// shortcut).
    pub iterations: u32,
}

/// Full analytics for one quote: solved volatility plus Greeks at that
/// volatility.
///
/// A failed solve never produces this type; the engine returns a typed
/// error instead, so "sigma is zero" stays distinguishable from "sigma is
/// undefined".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteAnalytics {
    /// Solved implied volatility.
    pub sigma: f64,
    /// Greeks evaluated at `sigma`.
    pub greeks: Greeks,
    /// Root-finder iterations.
    pub iterations: u32,
}
