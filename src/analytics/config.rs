//! Engine configuration.
//!
//! Every convention the original pipeline hard-coded (365-day count, price
//! tolerance, iteration cap, volatility bracket) is an explicit field here
//! so tests can exercise alternate conventions without touching the engine.

/// Configuration for the pricing engine and implied volatility solver.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Day-count convention used for year fractions and daily theta
    /// (default: 365.0).
    pub day_count: f64,
    /// Convergence tolerance in price space (default: 1e-8).
    pub tolerance: f64,
    /// Maximum root-finder iterations before giving up (default: 100).
    pub max_iterations: u32,
    /// Lower edge of the admissible volatility bracket (default: 1e-4).
    pub min_vol: f64,
    /// Upper edge of the admissible volatility bracket (default: 5.0).
    pub max_vol: f64,
    /// Vega floor below which Newton steps are replaced by bisection
    /// (default: 1e-10).
    pub min_vega: f64,
    /// Solutions below this threshold normalize to exactly zero
    /// (default: 1e-10).
    pub zero_clamp: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            day_count: 365.0,
            tolerance: 1e-8,
            max_iterations: 100,
            min_vol: 1e-4,
            max_vol: 5.0,
            min_vega: 1e-10,
            zero_clamp: 1e-10,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day-count convention (e.g. 360.0 for a 360-day year).
    #[must_use]
    pub fn with_day_count(mut self, day_count: f64) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the price-space convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the admissible volatility bracket.
    #[must_use]
    pub fn with_vol_bracket(mut self, min_vol: f64, max_vol: f64) -> Self {
        self.min_vol = min_vol;
        self.max_vol = max_vol;
        self
    }

    /// Sets the vega floor for the bisection fallback.
    #[must_use]
    pub fn with_min_vega(mut self, min_vega: f64) -> Self {
        self.min_vega = min_vega;
        self
    }

    /// Sets the zero-normalization threshold.
    #[must_use]
    pub fn with_zero_clamp(mut self, zero_clamp: f64) -> Self {
        self.zero_clamp = zero_clamp;
        self
    }
}
