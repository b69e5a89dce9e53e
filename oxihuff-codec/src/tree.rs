//! Huffman tree construction.
//!
//! The builder keeps one array slot per symbol. Each merge step picks the two
//! lightest active slots, replaces the first with their parent and retires
//! the second. After `N - 1` merges a single active slot remains: the root.
//! `N <= 256`, so each step is a linear scan; ties go to the first slot in
//! array order.

use crate::frequency::FrequencyTable;
use tracing::{debug, trace};

/// A node of the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A symbol, identified by its position in the alphabet.
    Leaf {
        /// Index into the frequency table's entries.
        index: usize,
        /// Symbol count.
        weight: u64,
    },
    /// A merge of two lighter subtrees.
    Internal {
        /// Sum of both children's weights.
        weight: u64,
        /// The first node picked in the merge (lightest).
        primary: Box<HuffmanNode>,
        /// The second node picked in the merge.
        secondary: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Weight of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            Self::Leaf { weight, .. } | Self::Internal { weight, .. } => *weight,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}

/// State of a builder slot.
#[derive(Debug)]
enum Slot {
    /// Still eligible for selection.
    Active(HuffmanNode),
    /// Consumed by a merge.
    Merged,
}

impl Slot {
    fn weight(&self) -> Option<u64> {
        match self {
            Self::Active(node) => Some(node.weight()),
            Self::Merged => None,
        }
    }

    fn take(&mut self) -> Option<HuffmanNode> {
        match std::mem::replace(self, Self::Merged) {
            Self::Active(node) => Some(node),
            Self::Merged => None,
        }
    }
}

/// Index of the lightest active slot, skipping `exclude`. Ties go to the
/// lowest index.
fn lightest(slots: &[Slot], exclude: Option<usize>) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (i, slot) in slots.iter().enumerate() {
        if Some(i) == exclude {
            continue;
        }
        if let Some(weight) = slot.weight()
            && best.is_none_or(|(_, w)| weight < w)
        {
            best = Some((i, weight));
        }
    }
    best.map(|(i, _)| i)
}

/// A complete Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
    leaves: usize,
}

impl HuffmanTree {
    /// Build the tree for a frequency table.
    ///
    /// Returns `None` for an empty table. A single-symbol table yields a tree
    /// whose root is the sole leaf.
    pub fn build(frequencies: &FrequencyTable) -> Option<Self> {
        let mut slots: Vec<Slot> = frequencies
            .entries()
            .iter()
            .enumerate()
            .map(|(index, e)| {
                Slot::Active(HuffmanNode::Leaf {
                    index,
                    weight: e.count,
                })
            })
            .collect();
        let leaves = slots.len();
        debug!(alphabet_size = leaves, "building Huffman tree");

        while let Some(first) = lightest(&slots, None)
            && let Some(second) = lightest(&slots, Some(first))
        {
            let (Some(primary), Some(secondary)) = (slots[first].take(), slots[second].take())
            else {
                break;
            };
            let weight = primary.weight() + secondary.weight();
            trace!(first, second, weight, "merge");

            slots[first] = Slot::Active(HuffmanNode::Internal {
                weight,
                primary: Box::new(primary),
                secondary: Box::new(secondary),
            });
        }

        let root = slots.iter_mut().find_map(Slot::take)?;
        Some(Self { root, leaves })
    }

    /// The root node.
    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Number of leaves (alphabet size).
    pub fn leaf_count(&self) -> usize {
        self.leaves
    }

    /// Number of internal nodes.
    pub fn internal_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if let HuffmanNode::Internal {
                primary, secondary, ..
            } = node
            {
                count += 1;
                stack.push(primary);
                stack.push(secondary);
            }
        }
        count
    }

    /// Sum over leaves of weight × depth (the encoded size in bits, except
    /// for the single-leaf tree whose code still costs one bit per symbol).
    pub fn weighted_path_length(&self) -> u64 {
        let mut total = 0;
        let mut stack = vec![(&self.root, 0u64)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { weight, .. } => total += weight * depth,
                HuffmanNode::Internal {
                    primary, secondary, ..
                } => {
                    stack.push((primary, depth + 1));
                    stack.push((secondary, depth + 1));
                }
            }
        }
        total
    }
}
