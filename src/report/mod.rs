//! Report data preparation.
//!
//! Turns snapshots and enriched records into the series the reporting and
//! plotting tools consume: open-interest profiles and movement, volatility
//! skew curves and strategy risk graphs. No rendering happens here.

mod open_interest;
mod risk;
mod skew;

pub use open_interest::{
    OpenInterestChange, OpenInterestLevel, OpenInterestProfile, open_interest_shift,
};
pub use risk::{RiskPoint, StrategyLeg, expiry_payoff, theoretical_value, underlying_grid};
pub use skew::{SkewCurve, SkewPoint};
