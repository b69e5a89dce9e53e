//! # OxiHuff Core
//!
//! Core components for the OxiHuff compressor.
//!
//! This crate provides the fundamental building blocks shared by the codec
//! and the command-line front end:
//!
//! - [`bitstream`]: Bit-level packing and unpacking of Huffman code bits
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L4: Front end                                           │
//! │     oxihuff CLI, filename derivation, file plumbing     │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Frequency count, tree build, codes, table, decode  │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     BitWriter (MSB-first), BitReader, OxiHuffError      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_core::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_code("0110").unwrap();
//! let packed = writer.finish().unwrap();
//!
//! let mut reader = BitReader::with_reversed_bytes(&packed);
//! assert!(!reader.read_bit().unwrap());
//! assert!(reader.read_bit().unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{OxiHuffError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitReader, BitWriter};
    pub use crate::error::{OxiHuffError, Result};
}
