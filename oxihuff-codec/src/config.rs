//! Codec configuration: table byte order and input capacity.

/// Byte order of the fixed-width integers in the code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Byte order of the machine running the codec.
    #[default]
    Native,
    /// Little-endian.
    Little,
    /// Big-endian.
    Big,
}

impl ByteOrder {
    /// Encode a 32-bit integer in this byte order.
    pub fn write_i32(self, value: i32) -> [u8; 4] {
        match self {
            Self::Native => value.to_ne_bytes(),
            Self::Little => value.to_le_bytes(),
            Self::Big => value.to_be_bytes(),
        }
    }

    /// Decode a 32-bit integer in this byte order.
    pub fn read_i32(self, bytes: [u8; 4]) -> i32 {
        match self {
            Self::Native => i32::from_ne_bytes(bytes),
            Self::Little => i32::from_le_bytes(bytes),
            Self::Big => i32::from_be_bytes(bytes),
        }
    }
}

/// Huffman codec configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuffmanConfig {
    /// Byte order used for the integers of the code table.
    pub byte_order: ByteOrder,
    /// Largest input (in bytes) the encoder accepts.
    ///
    /// The table records the original length as an `int32`, so this can
    /// never usefully exceed `i32::MAX`.
    pub max_input_len: usize,
}

impl HuffmanConfig {
    /// Table integers in native byte order, matching files produced and
    /// consumed on the same machine.
    pub const NATIVE: Self = Self {
        byte_order: ByteOrder::Native,
        max_input_len: i32::MAX as usize,
    };

    /// Table integers in little-endian order, for tables moved between
    /// machines.
    pub const PORTABLE: Self = Self {
        byte_order: ByteOrder::Little,
        max_input_len: i32::MAX as usize,
    };

    /// Create a configuration with the given byte order and default limits.
    pub fn new(byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            ..Self::NATIVE
        }
    }

    /// Restrict the accepted input size, clamped to what the table can record.
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len.min(i32::MAX as usize);
        self
    }
}

impl Default for HuffmanConfig {
    fn default() -> Self {
        Self::NATIVE
    }
}
