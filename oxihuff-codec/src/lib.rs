//! # OxiHuff Codec: Pure Rust Static Huffman Compression
//!
//! This crate compresses a byte buffer into two artifacts: a packed Huffman
//! bitstream and a code table describing the code. Both are needed to
//! reconstruct the original bytes.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Deterministic**: Array-based tree building with first-in-order tie-breaks
//! - **MSB-first packing**: Final byte zero-padded on the low-order side
//! - **Validated tables**: Short, over-long, or inconsistent tables are rejected
//!
//! ## Pipeline
//!
//! ```text
//! input ─▶ FrequencyTable ─▶ HuffmanTree ─▶ codes ─┬─▶ BitWriter ─▶ compressed
//!                                                  └─▶ CodeTable  ─▶ table bytes
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_codec::{compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! // Compress
//! let (compressed, table) = compress(original).unwrap();
//!
//! // Decompress
//! let decompressed = decompress(&compressed, &table).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod codes;
mod config;
mod decoder;
mod encoder;
mod frequency;
mod table;
mod tree;

pub use codes::{CodeEntry, SINGLE_SYMBOL_CODE, generate_codes, is_prefix_free};
pub use config::{ByteOrder, HuffmanConfig};
pub use decoder::HuffmanDecoder;
pub use encoder::HuffmanEncoder;
pub use frequency::{FrequencyEntry, FrequencyTable};
pub use oxihuff_core::error::{OxiHuffError, Result};
pub use table::{CodeTable, HEADER_SIZE, MAX_ALPHABET_SIZE};
pub use tree::{HuffmanNode, HuffmanTree};

/// Compress data with the given configuration.
///
/// # Returns
///
/// A pair of (compressed bitstream, serialized code table).
///
/// # Example
///
/// ```rust
/// use oxihuff_codec::{compress_with, decompress_with, HuffmanConfig};
///
/// let data = b"Hello, World!";
/// let (compressed, table) = compress_with(data, &HuffmanConfig::PORTABLE).unwrap();
/// let decompressed = decompress_with(&compressed, &table, &HuffmanConfig::PORTABLE).unwrap();
/// assert_eq!(decompressed, data);
/// ```
pub fn compress_with(input: &[u8], config: &HuffmanConfig) -> Result<(Vec<u8>, Vec<u8>)> {
    let (compressed, table) = HuffmanEncoder::new(*config).encode(input)?;
    let table = table.to_bytes(config.byte_order)?;
    Ok((compressed, table))
}

/// Decompress data with the given configuration.
///
/// The table is validated before any bits are decoded; a malformed table is
/// reported as [`OxiHuffError::MalformedTable`], an undecodable bitstream
/// as [`OxiHuffError::CorruptStream`].
pub fn decompress_with(compressed: &[u8], table: &[u8], config: &HuffmanConfig) -> Result<Vec<u8>> {
    let table = CodeTable::from_bytes(table, config.byte_order)?;
    HuffmanDecoder::new(&table).decode(compressed)
}

/// Compress data with the default (native byte order) configuration.
///
/// This is equivalent to `compress_with(input, &HuffmanConfig::NATIVE)`.
///
/// # Example
///
/// ```rust
/// use oxihuff_codec::compress;
///
/// let data = vec![b'A'; 1000];
/// let (compressed, _table) = compress(&data).unwrap();
/// assert_eq!(compressed.len(), 125);
/// ```
pub fn compress(input: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
    compress_with(input, &HuffmanConfig::NATIVE)
}

/// Decompress data with the default (native byte order) configuration.
///
/// This is equivalent to `decompress_with(compressed, table, &HuffmanConfig::NATIVE)`.
pub fn decompress(compressed: &[u8], table: &[u8]) -> Result<Vec<u8>> {
    decompress_with(compressed, table, &HuffmanConfig::NATIVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let (compressed, table) = compress(original).unwrap();
        let decompressed = decompress(&compressed, &table).unwrap();
        assert_eq!(decompressed, original);
    }

    #[test]
    fn test_empty_input() {
        let (compressed, table) = compress(b"").unwrap();
        assert!(compressed.is_empty());
        assert_eq!(table.len(), HEADER_SIZE);
        let decompressed = decompress(&compressed, &table).unwrap();
        assert!(decompressed.is_empty());
    }

    #[test]
    fn test_single_byte() {
        let original = b"A";
        let (compressed, table) = compress(original).unwrap();
        assert_eq!(compressed, vec![0]);
        let decompressed = decompress(&compressed, &table).unwrap();
        assert_eq!(decompressed, original);
    }

    #[test]
    fn test_all_byte_values() {
        let original: Vec<u8> = (0..=255).collect();
        let (compressed, table) = compress(&original).unwrap();
        // Uniform weights over 256 symbols: every code is 8 bits long.
        assert_eq!(compressed.len(), 256);
        let decompressed = decompress(&compressed, &table).unwrap();
        assert_eq!(decompressed, original);
    }

    #[test]
    fn test_portable_and_native_tables_differ_only_in_order() {
        let original = b"mississippi";
        let (c1, t1) = compress_with(original, &HuffmanConfig::NATIVE).unwrap();
        let (c2, t2) = compress_with(original, &HuffmanConfig::PORTABLE).unwrap();
        assert_eq!(c1, c2);
        assert_eq!(t1.len(), t2.len());
        if cfg!(target_endian = "little") {
            assert_eq!(t1, t2);
        }
    }
}
