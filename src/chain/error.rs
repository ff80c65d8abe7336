//! Error types for the chain layer.

use std::fmt;

/// Errors raised while handling chain records and snapshot packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// Failed to serialize a snapshot or record.
    SerializationError {
        /// Underlying serializer message.
        message: String,
    },

    /// Failed to deserialize a snapshot or record.
    DeserializationError {
        /// Underlying deserializer message.
        message: String,
    },

    /// Snapshot package checksum does not match its payload.
    ChecksumMismatch {
        /// Checksum stored in the package.
        expected: String,
        /// Checksum recomputed from the payload.
        actual: String,
    },

    /// Snapshot package was written with an unsupported format version.
    UnsupportedVersion {
        /// Version found in the package.
        found: u32,
        /// Version this build understands.
        expected: u32,
    },

    /// A record cannot be normalized into an engine quote.
    InvalidRecord {
        /// Description of the problem.
        message: String,
    },
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::SerializationError { message } => {
                write!(f, "serialization failed: {message}")
            }
            ChainError::DeserializationError { message } => {
                write!(f, "deserialization failed: {message}")
            }
            ChainError::ChecksumMismatch { expected, actual } => {
                write!(f, "snapshot checksum mismatch: expected {expected}, got {actual}")
            }
            ChainError::UnsupportedVersion { found, expected } => {
                write!(
                    f,
                    "unsupported snapshot version: {found} (expected {expected})"
                )
            }
            ChainError::InvalidRecord { message } => {
                write!(f, "invalid chain record: {message}")
            }
        }
    }
}

impl std::error::Error for ChainError {}
