//! Code assignment by tree traversal.

use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanNode, HuffmanTree};
use tracing::trace;

/// Code of the only symbol when the alphabet has a single entry.
pub const SINGLE_SYMBOL_CODE: &str = "0";

/// A symbol and its Huffman code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodeEntry {
    /// Byte value.
    pub symbol: u8,
    /// Code bits as ASCII `'0'`/`'1'`, first bit first.
    pub code: String,
}

impl CodeEntry {
    /// Create a new entry.
    pub fn new(symbol: u8, code: impl Into<String>) -> Self {
        Self {
            symbol,
            code: code.into(),
        }
    }

    /// Code length in bits.
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// Whether the code is empty (never true for a generated code).
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

/// Assign a code to every symbol of `frequencies`.
///
/// Walks the tree depth-first, pre-order: the primary child extends the path
/// with `'1'`, the secondary child with `'0'`. Entries come back in alphabet
/// order.
pub fn generate_codes(tree: &HuffmanTree, frequencies: &FrequencyTable) -> Vec<CodeEntry> {
    let symbols = frequencies.entries();
    let mut codes: Vec<Option<String>> = vec![None; symbols.len()];

    if let HuffmanNode::Leaf { index, .. } = tree.root() {
        codes[*index] = Some(SINGLE_SYMBOL_CODE.to_string());
    } else {
        // Each frame owns its path; pushing secondary first visits primary first.
        let mut stack: Vec<(&HuffmanNode, String)> = vec![(tree.root(), String::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { index, .. } => {
                    let slot = &mut codes[*index];
                    debug_assert!(slot.is_none(), "symbol {index} reached twice");
                    if slot.is_none() {
                        trace!(symbol = symbols[*index].symbol, code = %path, "assigned code");
                        *slot = Some(path);
                    }
                }
                HuffmanNode::Internal {
                    primary, secondary, ..
                } => {
                    let mut secondary_path = path.clone();
                    secondary_path.push('0');
                    stack.push((secondary, secondary_path));

                    let mut primary_path = path;
                    primary_path.push('1');
                    stack.push((primary, primary_path));
                }
            }
        }
    }

    symbols
        .iter()
        .zip(codes)
        .map(|(entry, code)| CodeEntry::new(entry.symbol, code.unwrap_or_default()))
        .collect()
}

/// Whether no code in `entries` is a prefix of another (duplicates count as
/// a violation).
pub fn is_prefix_free(entries: &[CodeEntry]) -> bool {
    let mut codes: Vec<&str> = entries.iter().map(|e| e.code.as_str()).collect();
    // After sorting, any prefix sits immediately before some code it prefixes.
    codes.sort_unstable();
    codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
}
