//! Volatility skew report data: implied volatility as a function of strike
//! for a fixed expiry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics::OptionRight;
use crate::chain::EnrichedRecord;

/// One point of a skew curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkewPoint {
    /// Strike price.
    pub strike: f64,
    /// Implied volatility at that strike.
    pub iv: f64,
}

/// Strike-sorted implied volatility curve for one expiry and one right.
///
/// Records with undefined analytics (failed solves, untraded contracts)
/// are skipped, so the curve only carries points a chart can draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkewCurve {
    /// Expiration date the curve was built for.
    pub expiry: NaiveDate,
    /// Which right the curve tracks.
    pub right: OptionRight,
    /// Points ordered by ascending strike.
    pub points: Vec<SkewPoint>,
}

impl SkewCurve {
    /// Builds the curve for one expiry and right from enriched records.
    #[must_use]
    pub fn for_expiry(
        enriched: &[EnrichedRecord],
        expiry: NaiveDate,
        right: OptionRight,
    ) -> Self {
        let mut points: Vec<SkewPoint> = enriched
            .iter()
            .filter(|e| e.record.expiration_date == expiry && e.record.right == right)
            .filter_map(|e| {
                e.iv.map(|iv| SkewPoint {
                    strike: e.record.strike,
                    iv,
                })
            })
            .collect();
        points.sort_by(|a, b| a.strike.total_cmp(&b.strike));

        Self {
            expiry,
            right,
            points,
        }
    }

    /// Returns true when the curve has no drawable points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Implied volatility at the strike closest to the given spot,
    /// a cheap at-the-money proxy.
    #[must_use]
    pub fn vol_nearest(&self, spot: f64) -> Option<f64> {
        self.points
            .iter()
            .min_by(|a, b| {
                (a.strike - spot)
                    .abs()
                    .total_cmp(&(b.strike - spot).abs())
            })
            .map(|p| p.iv)
    }
}
