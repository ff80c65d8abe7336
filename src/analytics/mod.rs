//! Implied volatility and Greeks derivation from option quotes.
//!
//! This is the numerical core of the crate: a closed-form Black-Scholes
//! pricer and a solver that inverts it along the volatility axis.
//!
//! # Overview
//!
//! An option's market price and its implied volatility are the same
//! information in different units. Given a normalized [`OptionQuote`] the
//! engine recovers the volatility that reproduces the observed price, then
//! evaluates delta, gamma, theta and vega at that volatility.
//!
//! # Inversion
//!
//! Black-Scholes has no closed-form inverse in sigma, but the premium is
//! strictly increasing in it, so the root is unique. The solver pairs
//! Newton-Raphson (fast where vega is healthy) with a maintained bracket
//! and bisection fallback (safe where the price curve is nearly flat).
//!
//! # Example
//!
//! ```ignore
//! use optionchain_rs::analytics::{AnalyticsEngine, EngineConfig, OptionQuote, OptionRight};
//!
//! let engine = AnalyticsEngine::new(EngineConfig::default());
//! let quote = OptionQuote::new(OptionRight::Call, 100.0, 100.0, 1.0, 0.05, 10.45);
//! let analytics = engine.analyze(&quote)?;
//! println!("IV: {:.2}%  delta: {:.3}", analytics.sigma * 100.0, analytics.greeks.delta);
//! ```

pub mod black_scholes;
mod config;
mod engine;
mod error;
pub mod math;
mod solver;
mod types;

pub use config::EngineConfig;
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use solver::implied_volatility;
pub use types::{Greeks, OptionQuote, OptionRight, QuoteAnalytics, VolSolution};
