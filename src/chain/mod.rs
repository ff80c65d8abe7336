//! Chain layer: normalized daily option records, session snapshots and
//! analytics enrichment.
//!
//! Raw exchange files are converted upstream into per-session JSON records;
//! this module gives those records a typed shape, wraps a whole session in
//! a checksum-validated snapshot, and embeds solved volatility and Greeks
//! next to the original fields for the reporting layer.

mod enrich;
mod error;
mod record;
mod snapshot;

pub use enrich::{EnrichedRecord, enrich_snapshot};
pub use error::ChainError;
pub use record::ChainRecord;
pub use snapshot::{CHAIN_SNAPSHOT_FORMAT_VERSION, ChainSnapshot, ChainSnapshotPackage};
