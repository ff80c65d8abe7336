//! Daily chain snapshot and its checksum-validated persistence wrapper.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::trace;

use crate::analytics::OptionRight;

use super::error::ChainError;
use super::record::ChainRecord;

/// Format version used for checksum-enabled chain snapshots.
pub const CHAIN_SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// All option records of one underlying for one trading session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSnapshot {
    /// Ticker of the underlying asset.
    pub ticker: String,
    /// Trading session the snapshot was taken on.
    #[serde(with = "super::record::date_format")]
    pub session_date: NaiveDate,
    /// Option records of the session.
    pub records: Vec<ChainRecord>,
}

impl ChainSnapshot {
    /// Creates a snapshot.
    #[must_use]
    pub fn new(ticker: impl Into<String>, session_date: NaiveDate, records: Vec<ChainRecord>) -> Self {
        Self {
            ticker: ticker.into(),
            session_date,
            records,
        }
    }

    /// Total open interest across all call contracts.
    #[must_use]
    pub fn total_call_open_interest(&self) -> u64 {
        let total = self
            .records
            .iter()
            .filter(|r| r.right == OptionRight::Call)
            .map(|r| r.open_interest)
            .sum();
        trace!(total, "total_call_open_interest");
        total
    }

    /// Total open interest across all put contracts.
    #[must_use]
    pub fn total_put_open_interest(&self) -> u64 {
        let total = self
            .records
            .iter()
            .filter(|r| r.right == OptionRight::Put)
            .map(|r| r.open_interest)
            .sum();
        trace!(total, "total_put_open_interest");
        total
    }

    /// Put/call open interest ratio, `None` when there is no call OI.
    #[must_use]
    pub fn put_call_oi_ratio(&self) -> Option<f64> {
        let calls = self.total_call_open_interest();
        if calls == 0 {
            return None;
        }
        Some(self.total_put_open_interest() as f64 / calls as f64)
    }

    /// Total traded volume of the session.
    #[must_use]
    pub fn total_volume(&self) -> u64 {
        self.records.iter().map(|r| r.volume).sum()
    }

    /// Distinct strikes, ascending.
    #[must_use]
    pub fn strikes(&self) -> Vec<f64> {
        let mut strikes: Vec<f64> = self.records.iter().map(|r| r.strike).collect();
        strikes.sort_by(f64::total_cmp);
        strikes.dedup();
        strikes
    }

    /// Distinct expiration dates, ascending.
    #[must_use]
    pub fn expiries(&self) -> Vec<NaiveDate> {
        let mut expiries: Vec<NaiveDate> =
            self.records.iter().map(|r| r.expiration_date).collect();
        expiries.sort();
        expiries.dedup();
        expiries
    }

    /// Records expiring on the given date.
    pub fn records_for_expiry(&self, expiry: NaiveDate) -> impl Iterator<Item = &ChainRecord> {
        self.records
            .iter()
            .filter(move |r| r.expiration_date == expiry)
    }
}

/// Wrapper that provides checksum validation for [`ChainSnapshot`] instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainSnapshotPackage {
    /// Version of the snapshot schema for forward compatibility.
    pub version: u32,
    /// Snapshot payload.
    pub snapshot: ChainSnapshot,
    /// Hex-encoded sha2-256 checksum of the serialized snapshot.
    pub checksum: String,
}

impl ChainSnapshotPackage {
    /// Creates a package, computing the checksum of the snapshot contents.
    pub fn new(snapshot: ChainSnapshot) -> Result<Self, ChainError> {
        let checksum = Self::compute_checksum(&snapshot)?;
        Ok(Self {
            version: CHAIN_SNAPSHOT_FORMAT_VERSION,
            snapshot,
            checksum,
        })
    }

    /// Serializes the package to JSON.
    pub fn to_json(&self) -> Result<String, ChainError> {
        serde_json::to_string(self).map_err(|error| ChainError::SerializationError {
            message: error.to_string(),
        })
    }

    /// Deserializes a package from JSON.
    pub fn from_json(data: &str) -> Result<Self, ChainError> {
        serde_json::from_str(data).map_err(|error| ChainError::DeserializationError {
            message: error.to_string(),
        })
    }

    /// Validates the version and the checksum.
    pub fn validate(&self) -> Result<(), ChainError> {
        if self.version != CHAIN_SNAPSHOT_FORMAT_VERSION {
            return Err(ChainError::UnsupportedVersion {
                found: self.version,
                expected: CHAIN_SNAPSHOT_FORMAT_VERSION,
            });
        }

        let computed = Self::compute_checksum(&self.snapshot)?;
        if computed != self.checksum {
            return Err(ChainError::ChecksumMismatch {
                expected: self.checksum.clone(),
                actual: computed,
            });
        }

        Ok(())
    }

    /// Consumes the package and returns the validated snapshot.
    pub fn into_snapshot(self) -> Result<ChainSnapshot, ChainError> {
        self.validate()?;
        Ok(self.snapshot)
    }

    fn compute_checksum(snapshot: &ChainSnapshot) -> Result<String, ChainError> {
        let payload =
            serde_json::to_vec(snapshot).map_err(|error| ChainError::SerializationError {
                message: error.to_string(),
            })?;

        let mut hasher = Sha256::new();
        hasher.update(payload);
        Ok(format!("{:x}", hasher.finalize()))
    }
}
