//! Error types for the analytics engine.

use std::fmt;

/// Errors produced by the pricer, the solver and the batch layer.
///
/// All variants are per-quote failures: batch processing degrades the
/// offending quote to an error and keeps going, it never aborts.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// A structural precondition was violated (non-positive price, strike or
    /// underlying, negative time or volatility, non-finite input).
    InvalidInput {
        /// Description of the offending parameter.
        message: String,
    },

    /// Market price sits below the discounted no-arbitrage lower bound.
    ///
    /// No volatility can reproduce such a price; it usually means stale or
    /// erroneous upstream data (e.g. the underlying price was not updated),
    /// not a solver bug.
    BelowIntrinsic {
        /// Observed market price.
        price: f64,
        /// Discounted no-arbitrage lower bound.
        lower_bound: f64,
    },

    /// The root-finder exhausted its iteration budget without reaching the
    /// price-space tolerance.
    ConvergenceFailure {
        /// Iterations attempted.
        iterations: u32,
        /// Last volatility estimate before giving up.
        last_vol: f64,
    },

    /// The quote was skipped because the batch wall-clock budget ran out
    /// before its computation started.
    BudgetExceeded {
        /// Budget that was imposed on the batch, in milliseconds.
        budget_ms: u64,
    },
}

impl fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyticsError::InvalidInput { message } => {
                write!(f, "invalid input: {message}")
            }
            AnalyticsError::BelowIntrinsic { price, lower_bound } => {
                write!(
                    f,
                    "market price {price:.6} is below the no-arbitrage lower bound {lower_bound:.6}"
                )
            }
            AnalyticsError::ConvergenceFailure {
                iterations,
                last_vol,
            } => {
                write!(
                    f,
                    "solver did not converge after {iterations} iterations, last vol estimate {last_vol:.6}"
                )
            }
            AnalyticsError::BudgetExceeded { budget_ms } => {
                write!(f, "skipped: batch budget of {budget_ms} ms exhausted")
            }
        }
    }
}

impl std::error::Error for AnalyticsError {}
