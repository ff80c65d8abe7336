//! Per-quote analysis and batch processing.
//!
//! The engine composes the solver and the pricer: solve for implied
//! volatility, then evaluate the Greeks at the solved value. Every failure
//! is local to its quote; a batch of ten thousand quotes with one stale
//! price yields ten thousand results, one of them an error.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, warn};

use super::black_scholes;
use super::config::EngineConfig;
use super::error::AnalyticsError;
use super::solver;
use super::types::{Greeks, OptionQuote, QuoteAnalytics};

/// Stateless analytics engine parameterized by an [`EngineConfig`].
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    config: EngineConfig,
}

impl AnalyticsEngine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Solves implied volatility for one quote and derives its Greeks.
    ///
    /// Theta is converted from the pricer's per-year figure to a daily one
    /// using the configured day count.
    ///
    /// # Errors
    /// Any of the solver's failures; Greeks are never silently defaulted to
    /// zero, an unsolvable quote stays an error end to end.
    pub fn analyze(&self, quote: &OptionQuote) -> Result<QuoteAnalytics, AnalyticsError> {
        let solution = solver::implied_volatility(quote, &self.config)?;
        let sigma = solution.sigma;

        let (right, spot, strike, time, rate) = (
            quote.right,
            quote.underlying_price,
            quote.strike,
            quote.time_to_expiry,
            quote.risk_free_rate,
        );

        let greeks = Greeks {
            delta: black_scholes::delta(right, spot, strike, time, rate, sigma)?,
            gamma: black_scholes::gamma(right, spot, strike, time, rate, sigma)?,
            theta: black_scholes::theta(right, spot, strike, time, rate, sigma)? / self.config.day_count,
            vega: black_scholes::vega(right, spot, strike, time, rate, sigma)?,
        };

        debug!(?right, strike, sigma, "quote analyzed");
        Ok(QuoteAnalytics {
            sigma,
            greeks,
            iterations: solution.iterations,
        })
    }

    /// Analyzes a batch of quotes in parallel.
    ///
    /// Quotes are fully independent, so the batch is data-parallel with no
    /// shared mutable state. Output order matches input order.
    #[must_use]
    pub fn analyze_batch(
        &self,
        quotes: &[OptionQuote],
    ) -> Vec<Result<QuoteAnalytics, AnalyticsError>> {
        quotes.par_iter().map(|quote| self.analyze(quote)).collect()
    }

    /// Analyzes a batch under a wall-clock budget.
    ///
    /// Each quote checks the deadline before starting; quotes that miss it
    /// are marked [`AnalyticsError::BudgetExceeded`]. Cancellation is at the
    /// granularity of "skip remaining quotes", a solve that has started
    /// always runs to completion (single solves finish in microseconds).
    #[must_use]
    pub fn analyze_batch_with_budget(
        &self,
        quotes: &[OptionQuote],
        budget: Duration,
    ) -> Vec<Result<QuoteAnalytics, AnalyticsError>> {
        let started = Instant::now();
        let budget_ms = budget.as_millis() as u64;

        let results: Vec<_> = quotes
            .par_iter()
            .map(|quote| {
                if started.elapsed() >= budget {
                    return Err(AnalyticsError::BudgetExceeded { budget_ms });
                }
                self.analyze(quote)
            })
            .collect();

        let skipped = results
            .iter()
            .filter(|r| matches!(r, Err(AnalyticsError::BudgetExceeded { .. })))
            .count();
        if skipped > 0 {
            warn!(skipped, budget_ms, "batch budget exhausted, quotes skipped");
        }

        results
    }
}
