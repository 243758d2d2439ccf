use crate::engine::frequency::FreqTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Node of the prefix-code tree. Leaves carry a symbol, internal nodes carry
/// only their two children; every node carries the combined weight of the
/// leaves beneath it.
#[derive(Debug, Clone)]
pub struct HuffmanNode {
    pub weight: u64,
    pub symbol: Option<u8>,
    pub left: Option<Box<HuffmanNode>>,
    pub right: Option<Box<HuffmanNode>>,
}

impl HuffmanNode {
    fn leaf(symbol: u8, weight: u64) -> Self {
        Self {
            weight,
            symbol: Some(symbol),
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Heap entry: a pending subtree plus the sequence number it was inserted
/// with. Equal weights are ordered by sequence number, so extraction is FIFO
/// among ties and tree shape depends only on table order, never on heap
/// internals.
struct Pending {
    weight: u64,
    seq: u32,
    node: HuffmanNode,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior
        (other.weight, other.seq).cmp(&(self.weight, self.seq))
    }
}

/// Build the prefix-code tree for `table`.
///
/// Returns `None` for an empty table (nothing to encode). A single distinct
/// symbol yields a lone leaf. Otherwise the two lowest-weight pending nodes
/// are merged repeatedly; the first one extracted becomes the left child.
/// Sequence numbers are assigned locally: leaves in table order, then each
/// internal node at creation, so repeated builds from the same table produce
/// structurally identical trees.
pub fn build(table: &FreqTable) -> Option<HuffmanNode> {
    let mut heap = BinaryHeap::with_capacity(table.len());
    let mut next_seq = 0u32;

    for &(symbol, freq) in table.entries() {
        debug_assert!(freq > 0, "zero-count entry in frequency table");
        heap.push(Pending {
            weight: freq as u64,
            seq: next_seq,
            node: HuffmanNode::leaf(symbol, freq as u64),
        });
        next_seq += 1;
    }

    while heap.len() > 1 {
        let left = heap.pop()?;
        let right = heap.pop()?;
        let weight = left.weight + right.weight;

        heap.push(Pending {
            weight,
            seq: next_seq,
            node: HuffmanNode {
                weight,
                symbol: None,
                left: Some(Box::new(left.node)),
                right: Some(Box::new(right.node)),
            },
        });
        next_seq += 1;
    }

    heap.pop().map(|pending| pending.node)
}
