//! Huffman decoder (decompression).
//!
//! Decoding is driven by the symbol count recorded in the table, not by the
//! length of the bitstream, so the zero padding of the final byte is never
//! interpreted.

use crate::table::CodeTable;
use oxihuff_core::BitReader;
use oxihuff_core::error::{OxiHuffError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Huffman decoder for decompression.
#[derive(Debug, Clone)]
pub struct HuffmanDecoder {
    /// Code string → symbol.
    codes: HashMap<String, u8>,
    /// Longest code in the table.
    max_code_len: usize,
    /// Number of symbols to emit.
    original_len: usize,
}

impl HuffmanDecoder {
    /// Create a decoder for the given table.
    pub fn new(table: &CodeTable) -> Self {
        let codes = table
            .entries
            .iter()
            .map(|e| (e.code.clone(), e.symbol))
            .collect();
        Self {
            codes,
            max_code_len: table.max_code_len(),
            original_len: table.original_len,
        }
    }

    /// Symbols worth reserving for `input_len` packed bytes.
    ///
    /// Every code is at least one bit long, so the stream bounds the output
    /// no matter what length the table declares.
    fn output_capacity(&self, input_len: usize) -> usize {
        self.original_len.min(input_len.saturating_mul(8))
    }

    /// Decode a packed bitstream.
    ///
    /// Bits are taken one at a time into an accumulator; whenever the
    /// accumulator equals a code, that code's symbol is emitted and the
    /// accumulator starts over.
    ///
    /// # Errors
    ///
    /// [`OxiHuffError::CorruptStream`] if the bits run out before
    /// `original_len` symbols were produced, or if the accumulator grows
    /// past the longest code without a match.
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let capacity = self.output_capacity(input.len());
        let mut output = Vec::new();
        output
            .try_reserve_exact(capacity)
            .map_err(|_| OxiHuffError::resource_exhausted(capacity, isize::MAX as usize))?;
        debug!(
            input_len = input.len(),
            original_len = self.original_len,
            max_code_len = self.max_code_len,
            "decoding"
        );

        let mut reader = BitReader::with_reversed_bytes(input);
        let mut pending = String::with_capacity(self.max_code_len);

        while output.len() < self.original_len {
            let bit = reader.read_bit().map_err(|_| {
                OxiHuffError::corrupt_stream(
                    reader.bits_read(),
                    format!(
                        "bit sequence exhausted after {} of {} symbols",
                        output.len(),
                        self.original_len
                    ),
                )
            })?;
            pending.push(if bit { '1' } else { '0' });

            if let Some(&symbol) = self.codes.get(pending.as_str()) {
                output.push(symbol);
                pending.clear();
            } else if pending.len() >= self.max_code_len {
                return Err(OxiHuffError::corrupt_stream(
                    reader.bits_read() - pending.len() as u64,
                    format!("no code matches the next {} bits", pending.len()),
                ));
            }
        }

        Ok(output)
    }
}
