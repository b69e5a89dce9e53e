//! Symbol frequency counting.

/// A distinct symbol and how often it occurs in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry {
    /// Byte value.
    pub symbol: u8,
    /// Number of occurrences.
    pub count: u64,
}

/// The input alphabet in first-seen order, with a count per symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Count the symbols of `input` in a single pass.
    pub fn count(input: &[u8]) -> Self {
        // Position of each byte value in `entries`, if already seen.
        let mut slots: [Option<u8>; 256] = [None; 256];
        let mut entries: Vec<FrequencyEntry> = Vec::new();

        for &byte in input {
            match slots[byte as usize] {
                Some(slot) => entries[slot as usize].count += 1,
                None => {
                    // At most 256 distinct symbols, so the index fits in u8.
                    slots[byte as usize] = Some(entries.len() as u8);
                    entries.push(FrequencyEntry {
                        symbol: byte,
                        count: 1,
                    });
                }
            }
        }

        Self { entries }
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the input was empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the input length.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }
}
