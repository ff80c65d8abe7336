//! Snapshot enrichment: implied volatility and Greeks embedded next to the
//! original record fields.
//!
//! Failures degrade to `None` (JSON `null`) per record so one stale quote
//! never poisons a whole session file. Zero is a meaningful Greek value and
//! is never used as a failure marker.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analytics::AnalyticsEngine;

use super::record::ChainRecord;
use super::snapshot::ChainSnapshot;

/// A chain record annotated with solved volatility and Greeks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    /// The original record, flattened into the same JSON object.
    #[serde(flatten)]
    pub record: ChainRecord,
    /// Implied volatility, `None` when the solve failed.
    pub iv: Option<f64>,
    /// Delta at the solved volatility.
    pub delta: Option<f64>,
    /// Gamma at the solved volatility.
    pub gamma: Option<f64>,
    /// Daily theta at the solved volatility.
    pub theta: Option<f64>,
    /// Vega at the solved volatility.
    pub vega: Option<f64>,
}

impl EnrichedRecord {
    fn undefined(record: ChainRecord) -> Self {
        Self {
            record,
            iv: None,
            delta: None,
            gamma: None,
            theta: None,
            vega: None,
        }
    }

    /// Returns true if the solve succeeded and all Greeks are present.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.iv.is_some()
    }
}

/// Enriches every record of a snapshot with implied volatility and Greeks.
///
/// `underlying_price` and `risk_free_rate` are session-level inputs, shared
/// by every contract of the chain. Records that cannot be normalized (no
/// trade) or whose solve fails come back with `None` analytics; the inputs
/// are logged for data-quality triage.
#[must_use]
pub fn enrich_snapshot(
    engine: &AnalyticsEngine,
    snapshot: &ChainSnapshot,
    underlying_price: f64,
    risk_free_rate: f64,
) -> Vec<EnrichedRecord> {
    let day_count = engine.config().day_count;

    let enriched: Vec<EnrichedRecord> = snapshot
        .records
        .par_iter()
        .map(|record| enrich_record(engine, record, underlying_price, risk_free_rate, day_count))
        .collect();

    let undefined = enriched.iter().filter(|r| !r.is_defined()).count();
    debug!(
        ticker = %snapshot.ticker,
        total = enriched.len(),
        undefined,
        "snapshot enriched"
    );
    enriched
}

fn enrich_record(
    engine: &AnalyticsEngine,
    record: &ChainRecord,
    underlying_price: f64,
    risk_free_rate: f64,
    day_count: f64,
) -> EnrichedRecord {
    let quote = match record.to_quote(underlying_price, risk_free_rate, day_count) {
        Ok(quote) => quote,
        Err(error) => {
            debug!(%error, "record skipped");
            return EnrichedRecord::undefined(record.clone());
        }
    };

    match engine.analyze(&quote) {
        Ok(analytics) => EnrichedRecord {
            record: record.clone(),
            iv: Some(analytics.sigma),
            delta: Some(analytics.greeks.delta),
            gamma: Some(analytics.greeks.gamma),
            theta: Some(analytics.greeks.theta),
            vega: Some(analytics.greeks.vega),
        },
        Err(error) => {
            warn!(
                %error,
                right = ?record.right,
                strike = record.strike,
                expiry = %record.expiration_date,
                last_price = record.last_price,
                underlying_price,
                "analytics undefined for record"
            );
            EnrichedRecord::undefined(record.clone())
        }
    }
}
