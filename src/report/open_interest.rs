//! Open-interest report data: per-strike profiles and session-to-session
//! movement.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::analytics::OptionRight;
use crate::chain::ChainSnapshot;

/// Open interest at one strike, split by right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpenInterestLevel {
    /// Strike price.
    pub strike: f64,
    /// Call open interest.
    pub call_oi: u64,
    /// Put open interest.
    pub put_oi: u64,
}

/// Per-strike open interest for one expiry of one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenInterestProfile {
    /// Expiration date the profile was built for.
    pub expiry: NaiveDate,
    /// Levels ordered by ascending strike. Strikes whose open interest sits
    /// below the noise floor are zeroed, not removed, so bar charts keep a
    /// contiguous axis.
    pub levels: Vec<OpenInterestLevel>,
}

impl OpenInterestProfile {
    /// Builds the profile for one expiry.
    ///
    /// `noise_floor` is a fraction of the maximum single-side open interest
    /// (the session reports use 0.1): any side below `noise_floor * max_oi`
    /// is zeroed as visual noise.
    #[must_use]
    pub fn from_snapshot(
        snapshot: &ChainSnapshot,
        expiry: NaiveDate,
        noise_floor: f64,
    ) -> Self {
        let mut levels: Vec<OpenInterestLevel> = Vec::new();

        let mut strikes: Vec<f64> = snapshot
            .records_for_expiry(expiry)
            .map(|r| r.strike)
            .collect();
        strikes.sort_by(f64::total_cmp);
        strikes.dedup();

        for strike in strikes {
            let mut level = OpenInterestLevel {
                strike,
                call_oi: 0,
                put_oi: 0,
            };
            for record in snapshot
                .records_for_expiry(expiry)
                .filter(|r| r.strike == strike)
            {
                match record.right {
                    OptionRight::Call => level.call_oi += record.open_interest,
                    OptionRight::Put => level.put_oi += record.open_interest,
                }
            }
            levels.push(level);
        }

        let max_oi = levels
            .iter()
            .map(|l| l.call_oi.max(l.put_oi))
            .max()
            .unwrap_or(0);
        let floor = (noise_floor * max_oi as f64) as u64;
        for level in &mut levels {
            if level.call_oi < floor {
                level.call_oi = 0;
            }
            if level.put_oi < floor {
                level.put_oi = 0;
            }
        }

        trace!(levels = levels.len(), max_oi, "open interest profile built");
        Self { expiry, levels }
    }

    /// Smallest and largest strikes that still carry open interest after
    /// noise filtering.
    #[must_use]
    pub fn active_range(&self) -> Option<(f64, f64)> {
        let active: Vec<f64> = self
            .levels
            .iter()
            .filter(|l| l.call_oi > 0 || l.put_oi > 0)
            .map(|l| l.strike)
            .collect();
        Some((*active.first()?, *active.last()?))
    }
}

/// Change of open interest at one strike between two sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpenInterestChange {
    /// Strike price.
    pub strike: f64,
    /// Call OI delta (current minus previous).
    pub call_delta: i64,
    /// Put OI delta (current minus previous).
    pub put_delta: i64,
}

/// Open-interest movement between two sessions for one expiry.
///
/// Strikes present in either session appear; a strike missing from one
/// side counts as zero there.
#[must_use]
pub fn open_interest_shift(
    previous: &ChainSnapshot,
    current: &ChainSnapshot,
    expiry: NaiveDate,
) -> Vec<OpenInterestChange> {
    let prev = OpenInterestProfile::from_snapshot(previous, expiry, 0.0);
    let curr = OpenInterestProfile::from_snapshot(current, expiry, 0.0);

    let mut strikes: Vec<f64> = prev
        .levels
        .iter()
        .chain(curr.levels.iter())
        .map(|l| l.strike)
        .collect();
    strikes.sort_by(f64::total_cmp);
    strikes.dedup();

    let oi_at = |profile: &OpenInterestProfile, strike: f64| -> (u64, u64) {
        profile
            .levels
            .iter()
            .find(|l| l.strike == strike)
            .map_or((0, 0), |l| (l.call_oi, l.put_oi))
    };

    strikes
        .into_iter()
        .map(|strike| {
            let (prev_call, prev_put) = oi_at(&prev, strike);
            let (curr_call, curr_put) = oi_at(&curr, strike);
            OpenInterestChange {
                strike,
                call_delta: curr_call as i64 - prev_call as i64,
                put_delta: curr_put as i64 - prev_put as i64,
            }
        })
        .collect()
}
