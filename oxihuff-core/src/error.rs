//! Error types for OxiHuff operations.
//!
//! Every failure the codec can report maps onto one of a small set of kinds:
//! capacity exhaustion, an unreadable source, a malformed code table, or a
//! corrupt compressed stream. I/O errors from the file layer pass through
//! unchanged.

use std::io;
use thiserror::Error;

/// The main error type for OxiHuff operations.
#[derive(Debug, Error)]
pub enum OxiHuffError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An allocation or capacity limit was exceeded.
    #[error("Resource exhausted: need {needed}, limit is {limit}")]
    ResourceExhausted {
        /// Amount that was requested (bytes, bits, or symbols).
        needed: usize,
        /// Maximum amount available or allowed.
        limit: usize,
    },

    /// Source file could not be found or opened.
    #[error("Not found: {path}")]
    NotFound {
        /// Path of the missing source.
        path: String,
    },

    /// Code table fields are inconsistent or truncated.
    #[error("Malformed code table at offset {offset}: {message}")]
    MalformedTable {
        /// Byte offset within the table where the problem was detected.
        offset: u64,
        /// Description of the inconsistency.
        message: String,
    },

    /// Compressed stream cannot be decoded with the supplied table.
    #[error("Corrupt stream at bit position {bit_position}: {message}")]
    CorruptStream {
        /// Bit position where decoding failed.
        bit_position: u64,
        /// Description of the failure.
        message: String,
    },
}

/// Result type alias for OxiHuff operations.
pub type Result<T> = std::result::Result<T, OxiHuffError>;

impl OxiHuffError {
    /// Create a resource exhausted error.
    pub fn resource_exhausted(needed: usize, limit: usize) -> Self {
        Self::ResourceExhausted { needed, limit }
    }

    /// Create a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a malformed table error.
    pub fn malformed_table(offset: u64, message: impl Into<String>) -> Self {
        Self::MalformedTable {
            offset,
            message: message.into(),
        }
    }

    /// Create a corrupt stream error.
    pub fn corrupt_stream(bit_position: u64, message: impl Into<String>) -> Self {
        Self::CorruptStream {
            bit_position,
            message: message.into(),
        }
    }

    /// Whether this error describes damaged input (table or stream) rather
    /// than an environmental failure.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::MalformedTable { .. } | Self::CorruptStream { .. })
    }
}
