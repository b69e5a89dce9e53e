//! Bit-level I/O for the Huffman bitstream.
//!
//! This module provides [`BitWriter`] for packing code strings into bytes and
//! [`BitReader`] for expanding bytes back into single bits.
//!
//! # Bit Ordering
//!
//! The writer packs bits MSB-first: the first code bit lands in bit 7 of the
//! first byte, and a trailing partial byte is zero-padded on the low-order
//! side. The reader hands out bits LSB-first, which is how a byte naturally
//! unpacks with shift-and-mask. To recover the writer's order, each byte is
//! bit-reversed before it is expanded (see [`BitReader::with_reversed_bytes`]).
//!
//! # Example
//!
//! ```
//! use oxihuff_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_code("101").unwrap();
//! writer.write_code("1").unwrap();
//! let packed = writer.finish().unwrap();
//! assert_eq!(packed, vec![0b1011_0000]);
//!
//! let mut reader = BitReader::with_reversed_bytes(&packed);
//! assert!(reader.read_bit().unwrap());
//! assert!(!reader.read_bit().unwrap());
//! ```

use crate::error::{OxiHuffError, Result};

/// An MSB-first bit writer that accumulates into an owned byte buffer.
///
/// Bits are shifted into an 8-bit accumulator; each time eight bits have
/// been collected the byte is appended to the output. An optional byte limit
/// turns buffer growth past that point into [`OxiHuffError::ResourceExhausted`].
#[derive(Debug)]
pub struct BitWriter {
    /// Output buffer.
    output: Vec<u8>,
    /// Bit accumulator (MSB-first).
    buffer: u8,
    /// Number of bits in the accumulator.
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
    /// Maximum number of output bytes.
    limit: usize,
}

impl BitWriter {
    /// Create a new writer with no byte limit.
    pub fn new() -> Self {
        Self {
            output: Vec::new(),
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
            limit: usize::MAX,
        }
    }

    /// Create a writer whose output is allocated up front and may never
    /// exceed `limit` bytes.
    pub fn with_limit(limit: usize) -> Result<Self> {
        let mut output = Vec::new();
        output
            .try_reserve_exact(limit)
            .map_err(|_| OxiHuffError::resource_exhausted(limit, isize::MAX as usize))?;
        Ok(Self {
            output,
            limit,
            ..Self::new()
        })
    }

    /// Get the total number of bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    #[inline]
    fn emit(&mut self, byte: u8) -> Result<()> {
        if self.output.len() >= self.limit {
            return Err(OxiHuffError::resource_exhausted(
                self.output.len() + 1,
                self.limit,
            ));
        }
        self.output.push(byte);
        Ok(())
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.buffer = (self.buffer << 1) | bit as u8;
        self.bits_in_buffer += 1;
        self.total_bits_written += 1;

        if self.bits_in_buffer == 8 {
            let byte = self.buffer;
            self.buffer = 0;
            self.bits_in_buffer = 0;
            self.emit(byte)?;
        }
        Ok(())
    }

    /// Write a code given as ASCII `'0'`/`'1'` characters, first character
    /// first.
    ///
    /// `code` must already be validated: every character other than `'1'`
    /// is written as a 0 bit.
    pub fn write_code(&mut self, code: &str) -> Result<()> {
        for c in code.bytes() {
            debug_assert!(matches!(c, b'0' | b'1'), "non-binary code character");
            self.write_bit(c == b'1')?;
        }
        Ok(())
    }

    /// Flush the partial byte (left-aligned, zero-padded) and return the
    /// packed output.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        if self.bits_in_buffer > 0 {
            let byte = self.buffer << (8 - self.bits_in_buffer);
            self.buffer = 0;
            self.bits_in_buffer = 0;
            self.emit(byte)?;
        }
        Ok(self.output)
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// An LSB-first bit reader over a byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Current byte position.
    byte_pos: usize,
    /// Current byte being expanded.
    buffer: u8,
    /// Number of unread bits left in `buffer`.
    bits_in_buffer: u8,
    /// Whether each byte is bit-reversed before expansion.
    reverse: bool,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<'a> BitReader<'a> {
    /// Create a reader that yields each byte's bits from bit 0 upward.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            buffer: 0,
            bits_in_buffer: 0,
            reverse: false,
            total_bits_read: 0,
        }
    }

    /// Create a reader that bit-reverses each byte before expanding it
    /// LSB-first, yielding the bits in the order [`BitWriter`] wrote them.
    pub fn with_reversed_bytes(data: &'a [u8]) -> Self {
        Self {
            reverse: true,
            ..Self::new(data)
        }
    }

    /// Get the total number of bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Number of bits not yet read.
    pub fn bits_remaining(&self) -> u64 {
        (self.data.len() - self.byte_pos) as u64 * 8 + self.bits_in_buffer as u64
    }

    /// Read a single bit.
    ///
    /// Fails with [`OxiHuffError::CorruptStream`] once the input is
    /// exhausted.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.bits_in_buffer == 0 {
            let Some(&byte) = self.data.get(self.byte_pos) else {
                return Err(OxiHuffError::corrupt_stream(
                    self.total_bits_read,
                    "bit sequence exhausted",
                ));
            };
            self.byte_pos += 1;
            self.buffer = if self.reverse {
                reverse_byte(byte)
            } else {
                byte
            };
            self.bits_in_buffer = 8;
        }

        let bit = self.buffer & 1 != 0;
        self.buffer >>= 1;
        self.bits_in_buffer -= 1;
        self.total_bits_read += 1;
        Ok(bit)
    }
}

/// Reverse the bit order of a byte: bit 0 becomes bit 7, and so on.
#[inline]
pub fn reverse_byte(byte: u8) -> u8 {
    byte.reverse_bits()
}
