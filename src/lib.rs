//! # optionchain-rs
//!
//! Analytics for daily options-market snapshots: Black-Scholes pricing,
//! implied volatility solving, Greeks derivation, and the report data
//! (open interest, skew, risk graphs) built on top of them.
//!
//! The crate is layered:
//!
//! - [`analytics`] is the numerical core. It is pure and stateless: an
//!   [`analytics::OptionQuote`] goes in, an [`analytics::QuoteAnalytics`]
//!   or a typed error comes out. Batches are data-parallel.
//! - [`chain`] normalizes daily exchange records into engine quotes,
//!   wraps sessions in checksum-validated snapshots, and embeds solved
//!   analytics back into the records.
//! - [`report`] prepares the series that reporting and plotting tools
//!   consume.
//!
//! # Example
//!
//! ```
//! use optionchain_rs::analytics::{AnalyticsEngine, EngineConfig, OptionQuote, OptionRight};
//!
//! let engine = AnalyticsEngine::new(EngineConfig::default());
//! let quote = OptionQuote::new(OptionRight::Call, 100.0, 100.0, 1.0, 0.05, 10.4506);
//!
//! let analytics = engine.analyze(&quote).unwrap();
//! assert!((analytics.sigma - 0.20).abs() < 1e-3);
//! ```

pub mod analytics;
pub mod chain;
pub mod report;

pub use analytics::{
    AnalyticsEngine, AnalyticsError, EngineConfig, Greeks, OptionQuote, OptionRight,
    QuoteAnalytics,
};
