//! Huffman encoder (compression).

use crate::codes::{CodeEntry, generate_codes};
use crate::config::HuffmanConfig;
use crate::frequency::FrequencyTable;
use crate::table::CodeTable;
use crate::tree::HuffmanTree;
use oxihuff_core::BitWriter;
use oxihuff_core::error::{OxiHuffError, Result};
use tracing::debug;

/// Huffman encoder for compression.
#[derive(Debug, Clone, Default)]
pub struct HuffmanEncoder {
    config: HuffmanConfig,
}

impl HuffmanEncoder {
    /// Create a new encoder with the given configuration.
    pub fn new(config: HuffmanConfig) -> Self {
        Self { config }
    }

    /// The encoder's configuration.
    pub fn config(&self) -> &HuffmanConfig {
        &self.config
    }

    /// Encode data with a static Huffman code.
    ///
    /// # Algorithm
    ///
    /// 1. Count symbol frequencies in first-seen order
    /// 2. Build the Huffman tree by repeatedly merging the two lightest slots
    /// 3. Derive codes by pre-order traversal
    /// 4. Pack every input byte's code MSB-first, zero-padding the last byte
    ///
    /// # Returns
    ///
    /// The packed bitstream and the code table needed to decode it. Empty
    /// input yields an empty bitstream and an empty table.
    pub fn encode(&self, input: &[u8]) -> Result<(Vec<u8>, CodeTable)> {
        if input.len() > self.config.max_input_len {
            return Err(OxiHuffError::resource_exhausted(
                input.len(),
                self.config.max_input_len,
            ));
        }

        let frequencies = FrequencyTable::count(input);
        let Some(tree) = HuffmanTree::build(&frequencies) else {
            debug!("empty input, nothing to encode");
            return Ok((Vec::new(), CodeTable::new(Vec::new(), 0)));
        };
        let entries = generate_codes(&tree, &frequencies);
        drop(tree);

        let total_bits = packed_bit_count(&frequencies, &entries)?;
        let packed_len = total_bits.div_ceil(8);
        debug!(
            alphabet_size = entries.len(),
            input_len = input.len(),
            total_bits,
            packed_len,
            "encoding"
        );

        // Symbol → code lookup
        let mut lookup: [Option<&str>; 256] = [None; 256];
        for entry in &entries {
            lookup[entry.symbol as usize] = Some(entry.code.as_str());
        }

        let mut writer = BitWriter::with_limit(packed_len)?;
        for &byte in input {
            let code = lookup[byte as usize].ok_or_else(|| {
                OxiHuffError::malformed_table(0, format!("no code for symbol {byte:#04x}"))
            })?;
            writer.write_code(code)?;
        }
        debug_assert_eq!(writer.bits_written(), total_bits as u64);
        let packed = writer.finish()?;

        Ok((packed, CodeTable::new(entries, input.len())))
    }
}

/// Exact number of code bits the input packs into.
///
/// Fails when the bit count does not fit in `usize`; the error reports the
/// packed size in bytes.
fn packed_bit_count(frequencies: &FrequencyTable, entries: &[CodeEntry]) -> Result<usize> {
    // At most 256 entries of u64 count × usize length: cannot overflow u128.
    let total: u128 = frequencies
        .entries()
        .iter()
        .zip(entries)
        .map(|(freq, entry)| u128::from(freq.count) * entry.len() as u128)
        .sum();
    usize::try_from(total).map_err(|_| {
        let needed = usize::try_from(total.div_ceil(8)).unwrap_or(usize::MAX);
        OxiHuffError::resource_exhausted(needed, usize::MAX / 8)
    })
}
