//! Code table serialization.
//!
//! The table is the side file that makes a compressed artifact decodable.
//!
//! # Layout
//!
//! ```text
//! int32                alphabet_size
//! int32                original_length
//! int32[alphabet_size] code_lengths
//! byte[alphabet_size]  symbols
//! bytes                code_strings   // ASCII '0'/'1', concatenated
//! ```
//!
//! Integers use the [`ByteOrder`] of the configuration (native by default).
//! Code strings are stored as literal characters, not bit-packed.

use crate::codes::{CodeEntry, is_prefix_free};
use crate::config::ByteOrder;
use oxihuff_core::error::{OxiHuffError, Result};
use std::collections::HashSet;

/// Largest alphabet a byte-oriented table can describe.
pub const MAX_ALPHABET_SIZE: usize = 256;

/// Size of the fixed header (alphabet size and original length).
pub const HEADER_SIZE: usize = 8;

/// The symbol → code mapping plus the original input length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    /// Codes in alphabet order.
    pub entries: Vec<CodeEntry>,
    /// Number of symbols (bytes) in the original input.
    pub original_len: usize,
}

impl CodeTable {
    /// Create a table.
    pub fn new(entries: Vec<CodeEntry>, original_len: usize) -> Self {
        Self {
            entries,
            original_len,
        }
    }

    /// Number of symbols in the alphabet.
    pub fn alphabet_size(&self) -> usize {
        self.entries.len()
    }

    /// Longest code length, 0 for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.entries.iter().map(CodeEntry::len).max().unwrap_or(0)
    }

    /// Serialized size in bytes.
    pub fn serialized_len(&self) -> usize {
        HEADER_SIZE
            + self.entries.len() * 5
            + self.entries.iter().map(CodeEntry::len).sum::<usize>()
    }

    /// Serialize the table.
    pub fn to_bytes(&self, order: ByteOrder) -> Result<Vec<u8>> {
        let len = self.serialized_len();
        let mut out = Vec::new();
        out.try_reserve_exact(len)
            .map_err(|_| OxiHuffError::resource_exhausted(len, isize::MAX as usize))?;

        out.extend_from_slice(&order.write_i32(to_i32(self.entries.len())?));
        out.extend_from_slice(&order.write_i32(to_i32(self.original_len)?));
        for entry in &self.entries {
            out.extend_from_slice(&order.write_i32(to_i32(entry.len())?));
        }
        out.extend(self.entries.iter().map(|e| e.symbol));
        for entry in &self.entries {
            out.extend_from_slice(entry.code.as_bytes());
        }

        Ok(out)
    }

    /// Deserialize and validate a table.
    ///
    /// Any inconsistency, including a short or over-long buffer, is a
    /// [`OxiHuffError::MalformedTable`].
    pub fn from_bytes(data: &[u8], order: ByteOrder) -> Result<Self> {
        let mut reader = TableReader::new(data, order);

        let alphabet_size = reader.read_len("alphabet size")?;
        if alphabet_size > MAX_ALPHABET_SIZE {
            return Err(OxiHuffError::malformed_table(
                0,
                format!("alphabet size {alphabet_size} exceeds {MAX_ALPHABET_SIZE}"),
            ));
        }
        let original_len = reader.read_len("original length")?;
        if alphabet_size == 0 && original_len > 0 {
            return Err(OxiHuffError::malformed_table(
                4,
                format!("original length {original_len} with an empty alphabet"),
            ));
        }

        let mut lengths = Vec::with_capacity(alphabet_size);
        for _ in 0..alphabet_size {
            let offset = reader.pos;
            let len = reader.read_len("code length")?;
            if len == 0 {
                return Err(OxiHuffError::malformed_table(
                    offset as u64,
                    "zero code length",
                ));
            }
            lengths.push(len);
        }

        let symbols_offset = reader.pos;
        let symbols = reader.read_bytes(alphabet_size, "symbols")?;
        let mut seen = HashSet::with_capacity(alphabet_size);
        if let Some(i) = symbols.iter().position(|s| !seen.insert(*s)) {
            return Err(OxiHuffError::malformed_table(
                (symbols_offset + i) as u64,
                format!("symbol {:#04x} listed twice", symbols[i]),
            ));
        }

        let mut entries = Vec::with_capacity(alphabet_size);
        for (&symbol, &len) in symbols.iter().zip(&lengths) {
            let offset = reader.pos;
            let raw = reader.read_bytes(len, "code string")?;
            if let Some(i) = raw.iter().position(|c| !matches!(c, b'0' | b'1')) {
                return Err(OxiHuffError::malformed_table(
                    (offset + i) as u64,
                    format!("invalid code character {:?}", raw[i] as char),
                ));
            }
            // Only ASCII '0'/'1' remain.
            let code = String::from_utf8_lossy(raw).into_owned();
            entries.push(CodeEntry::new(symbol, code));
        }

        if reader.remaining() > 0 {
            return Err(OxiHuffError::malformed_table(
                reader.pos as u64,
                format!("{} trailing bytes after code strings", reader.remaining()),
            ));
        }
        if !is_prefix_free(&entries) {
            return Err(OxiHuffError::malformed_table(
                symbols_offset as u64 + alphabet_size as u64,
                "code set is not prefix-free",
            ));
        }

        Ok(Self {
            entries,
            original_len,
        })
    }
}

fn to_i32(value: usize) -> Result<i32> {
    i32::try_from(value)
        .map_err(|_| OxiHuffError::resource_exhausted(value, i32::MAX as usize))
}

/// Bounds-checked cursor over a serialized table.
struct TableReader<'a> {
    data: &'a [u8],
    pos: usize,
    order: ByteOrder,
}

impl<'a> TableReader<'a> {
    fn new(data: &'a [u8], order: ByteOrder) -> Self {
        Self { data, pos: 0, order }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_bytes(&mut self, count: usize, what: &str) -> Result<&'a [u8]> {
        if count > self.remaining() {
            return Err(OxiHuffError::malformed_table(
                self.pos as u64,
                format!(
                    "table too short for {what}: need {count} bytes, have {}",
                    self.remaining()
                ),
            ));
        }
        let bytes = &self.data[self.pos..self.pos + count];
        self.pos += count;
        Ok(bytes)
    }

    /// Read a non-negative `int32`.
    fn read_len(&mut self, what: &str) -> Result<usize> {
        let offset = self.pos;
        let bytes = self.read_bytes(4, what)?;
        let value = self
            .order
            .read_i32([bytes[0], bytes[1], bytes[2], bytes[3]]);
        usize::try_from(value).map_err(|_| {
            OxiHuffError::malformed_table(offset as u64, format!("negative {what}: {value}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CodeTable {
        CodeTable::new(
            vec![
                CodeEntry::new(b'a', "0"),
                CodeEntry::new(b'b', "10"),
                CodeEntry::new(b'c', "11"),
            ],
            7,
        )
    }

    #[test]
    fn test_layout_little_endian() {
        let bytes = sample().to_bytes(ByteOrder::Little).unwrap();
        let mut expected = Vec::new();
        expected.extend_from_slice(&3i32.to_le_bytes());
        expected.extend_from_slice(&7i32.to_le_bytes());
        for len in [1i32, 2, 2] {
            expected.extend_from_slice(&len.to_le_bytes());
        }
        expected.extend_from_slice(b"abc");
        expected.extend_from_slice(b"01011");
        assert_eq!(bytes, expected);
        assert_eq!(bytes.len(), sample().serialized_len());
    }

    #[test]
    fn test_reserialize_is_identical() {
        for order in [ByteOrder::Native, ByteOrder::Little, ByteOrder::Big] {
            let bytes = sample().to_bytes(order).unwrap();
            let table = CodeTable::from_bytes(&bytes, order).unwrap();
            assert_eq!(table, sample());
            assert_eq!(table.to_bytes(order).unwrap(), bytes);
        }
    }

    #[test]
    fn test_empty_table() {
        let table = CodeTable::default();
        let bytes = table.to_bytes(ByteOrder::Native).unwrap();
        assert_eq!(bytes.len(), HEADER_SIZE);
        let parsed = CodeTable::from_bytes(&bytes, ByteOrder::Native).unwrap();
        assert_eq!(parsed.alphabet_size(), 0);
        assert_eq!(parsed.original_len, 0);
        assert_eq!(parsed.max_code_len(), 0);
    }

    #[test]
    fn test_truncated_code_strings() {
        let bytes = sample().to_bytes(ByteOrder::Little).unwrap();
        let err = CodeTable::from_bytes(&bytes[..bytes.len() - 1], ByteOrder::Little).unwrap_err();
        assert!(matches!(err, OxiHuffError::MalformedTable { .. }));
    }

    #[test]
    fn test_truncated_header() {
        let err = CodeTable::from_bytes(&[1, 0, 0], ByteOrder::Little).unwrap_err();
        assert!(matches!(err, OxiHuffError::MalformedTable { offset: 0, .. }));
    }

    #[test]
    fn test_trailing_bytes() {
        let mut bytes = sample().to_bytes(ByteOrder::Little).unwrap();
        bytes.push(b'0');
        let err = CodeTable::from_bytes(&bytes, ByteOrder::Little).unwrap_err();
        assert!(err.to_string().contains("trailing"));
    }

    #[test]
    fn test_negative_alphabet_size() {
        let mut bytes = (-1i32).to_le_bytes().to_vec();
        bytes.extend_from_slice(&0i32.to_le_bytes());
        let err = CodeTable::from_bytes(&bytes, ByteOrder::Little).unwrap_err();
        assert!(err.to_string().contains("negative alphabet size"));
    }

    #[test]
    fn test_oversized_alphabet() {
        let mut bytes = 257i32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&0i32.to_le_bytes());
        let err = CodeTable::from_bytes(&bytes, ByteOrder::Little).unwrap_err();
        assert!(matches!(err, OxiHuffError::MalformedTable { .. }));
    }

    #[test]
    fn test_length_without_alphabet() {
        let mut bytes = 0i32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&5i32.to_le_bytes());
        let err = CodeTable::from_bytes(&bytes, ByteOrder::Little).unwrap_err();
        assert!(matches!(err, OxiHuffError::MalformedTable { offset: 4, .. }));
    }

    #[test]
    fn test_invalid_code_character() {
        let mut bytes = sample().to_bytes(ByteOrder::Little).unwrap();
        let last = bytes.len() - 1;
        bytes[last] = b'2';
        let err = CodeTable::from_bytes(&bytes, ByteOrder::Little).unwrap_err();
        assert!(err.to_string().contains("invalid code character"));
    }

    #[test]
    fn test_duplicate_symbol() {
        let table = CodeTable::new(
            vec![CodeEntry::new(b'a', "0"), CodeEntry::new(b'a', "1")],
            2,
        );
        let bytes = table.to_bytes(ByteOrder::Little).unwrap();
        let err = CodeTable::from_bytes(&bytes, ByteOrder::Little).unwrap_err();
        assert!(err.to_string().contains("listed twice"));
    }

    #[test]
    fn test_not_prefix_free() {
        let table = CodeTable::new(
            vec![CodeEntry::new(b'a', "0"), CodeEntry::new(b'b', "01")],
            2,
        );
        let bytes = table.to_bytes(ByteOrder::Little).unwrap();
        let err = CodeTable::from_bytes(&bytes, ByteOrder::Little).unwrap_err();
        assert!(err.to_string().contains("prefix-free"));
    }

    #[test]
    fn test_zero_code_length() {
        let table = CodeTable::new(vec![CodeEntry::new(b'a', "")], 1);
        let bytes = table.to_bytes(ByteOrder::Little).unwrap();
        let err = CodeTable::from_bytes(&bytes, ByteOrder::Little).unwrap_err();
        assert!(matches!(err, OxiHuffError::MalformedTable { offset: 8, .. }));
    }

    #[test]
    fn test_byte_order_mismatch() {
        let bytes = sample().to_bytes(ByteOrder::Little).unwrap();
        assert!(CodeTable::from_bytes(&bytes, ByteOrder::Big).is_err());
    }

    #[test]
    fn test_original_len_too_large() {
        let table = CodeTable::new(vec![CodeEntry::new(b'a', "0")], i32::MAX as usize + 1);
        let err = table.to_bytes(ByteOrder::Little).unwrap_err();
        assert!(matches!(err, OxiHuffError::ResourceExhausted { .. }));
    }
}
