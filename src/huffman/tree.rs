use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use super::codes::CodeMap;

/// Huffman tree node. Internal nodes own their children exclusively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        symbol: char,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    pub fn freq(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }
}

/// Queue slot. `order` is unique per build, which makes the ordering total.
#[derive(Debug)]
struct QueueEntry {
    freq: u64,
    order: usize,
    node: HuffmanNode,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.order == other.order
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse so the smallest (freq, order) pops first
        (other.freq, other.order).cmp(&(self.freq, self.order))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue over nodes, ties resolved by insertion order.
///
/// Leaves go in by ascending code point, so equal-frequency leaves pop in
/// code-point order and merged nodes pop after every older node of the same
/// frequency.
#[derive(Debug, Default)]
struct MinQueue {
    heap: BinaryHeap<QueueEntry>,
    next_order: usize,
}

impl MinQueue {
    fn push(&mut self, node: HuffmanNode) {
        let entry = QueueEntry {
            freq: node.freq(),
            order: self.next_order,
            node,
        };
        self.next_order += 1;
        self.heap.push(entry);
    }

    fn pop_min(&mut self) -> Option<HuffmanNode> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Count every code point of the content, keyed in code-point order.
pub fn count_symbols(content: &str) -> BTreeMap<char, u64> {
    let mut frequencies = BTreeMap::new();
    for symbol in content.chars() {
        *frequencies.entry(symbol).or_insert(0) += 1;
    }
    frequencies
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Option<HuffmanNode>,
    frequencies: BTreeMap<char, u64>,
}

impl HuffmanTree {
    pub fn build(content: &str) -> Self {
        Self::from_frequencies(count_symbols(content))
    }

    /// Build from an explicit frequency table. Zero-frequency symbols are dropped.
    pub fn from_frequencies(mut frequencies: BTreeMap<char, u64>) -> Self {
        frequencies.retain(|_, freq| *freq > 0);

        let mut queue = MinQueue::default();
        for (&symbol, &freq) in &frequencies {
            queue.push(HuffmanNode::Leaf { symbol, freq });
        }

        while queue.len() > 1 {
            let (Some(left), Some(right)) = (queue.pop_min(), queue.pop_min()) else {
                break;
            };
            queue.push(HuffmanNode::Internal {
                freq: left.freq() + right.freq(),
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        Self {
            root: queue.pop_min(),
            frequencies,
        }
    }

    pub fn root(&self) -> Option<&HuffmanNode> {
        self.root.as_ref()
    }

    pub fn frequencies(&self) -> &BTreeMap<char, u64> {
        &self.frequencies
    }

    pub fn leaf_count(&self) -> usize {
        self.walk().filter(|(node, _)| node.is_leaf()).count()
    }

    pub fn internal_count(&self) -> usize {
        self.walk().filter(|(node, _)| !node.is_leaf()).count()
    }

    /// Length of the longest root-to-leaf path. A lone leaf root has depth 0.
    pub fn depth(&self) -> usize {
        self.walk().map(|(_, depth)| depth).max().unwrap_or(0)
    }

    /// Assign prefix codes: `'0'` for left, `'1'` for right.
    pub fn codes(&self) -> CodeMap {
        let mut codes = BTreeMap::new();
        let Some(root) = self.root.as_ref() else {
            return CodeMap::from(codes);
        };

        if let HuffmanNode::Leaf { symbol, .. } = root {
            // a lone symbol still needs a non-empty codeword
            codes.insert(*symbol, "0".to_string());
            return CodeMap::from(codes);
        }

        let mut stack: Vec<(&HuffmanNode, String)> = vec![(root, String::new())];
        while let Some((node, prefix)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { symbol, .. } => {
                    codes.insert(*symbol, prefix);
                }
                HuffmanNode::Internal { left, right, .. } => {
                    let mut right_prefix = prefix.clone();
                    right_prefix.push('1');
                    stack.push((&**right, right_prefix));

                    let mut left_prefix = prefix;
                    left_prefix.push('0');
                    stack.push((&**left, left_prefix));
                }
            }
        }

        debug_assert_eq!(codes.len(), self.frequencies.len());
        CodeMap::from(codes)
    }

    fn walk(&self) -> Walk<'_> {
        Walk {
            stack: self.root.iter().map(|root| (root, 0)).collect(),
        }
    }
}

/// Depth-first pre-order traversal with an explicit stack.
struct Walk<'a> {
    stack: Vec<(&'a HuffmanNode, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a HuffmanNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        if let HuffmanNode::Internal { left, right, .. } = node {
            self.stack.push((&**right, depth + 1));
            self.stack.push((&**left, depth + 1));
        }
        Some((node, depth))
    }
}
