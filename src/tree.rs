use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use crate::error::HuffmanError;
use crate::frequency::FrequencyTable;
use crate::queue::PriorityQueue;

/// A node of the Huffman tree.
///
/// Leaves carry a symbol and its frequency. Internal nodes own exactly two
/// children and weigh as much as both of them together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode<S> {
    Leaf {
        symbol: S,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<HuffmanNode<S>>,
        right: Box<HuffmanNode<S>>,
    },
}

impl<S> HuffmanNode<S> {
    pub fn leaf(symbol: S, weight: usize) -> Self {
        HuffmanNode::Leaf { symbol, weight }
    }

    /// Joins two subtrees under a new internal node.
    ///
    /// The weights must add up to at most `usize::MAX`, which holds for any
    /// two disjoint subtrees built from one [`FrequencyTable`].
    pub fn merge(left: HuffmanNode<S>, right: HuffmanNode<S>) -> Self {
        HuffmanNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> usize {
        match self {
            HuffmanNode::Leaf { weight, .. } | HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<&S> {
        match self {
            HuffmanNode::Leaf { symbol, .. } => Some(symbol),
            HuffmanNode::Internal { .. } => None,
        }
    }

    /// The number of symbols in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// The length of the longest root to leaf path, i.e. the longest code.
    pub fn height(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }
}

// The forward step in Huffman's algorithm: the two lightest nodes are
// repeatedly taken out of the queue and put back as one node weighing as much
// as both, until a single node holding the whole hierarchy is left.
// The first node dequeued becomes the left child, the second one the right.

/// Builds the Huffman tree of a frequency table and returns its root.
///
/// Leaves are queued in the table's order, so the same table always yields the
/// same tree. A table with a single symbol yields a lone leaf.
///
/// # Examples
///
/// ```
/// use huffman_coding::{build_tree, FrequencyTable};
///
/// let freqs = FrequencyTable::from_symbols("AAAB".chars());
/// let root = build_tree(&freqs).unwrap();
/// assert_eq!(root.weight(), 4);
/// assert_eq!(root.leaf_count(), 2);
/// ```
///
/// # Errors
///
/// Returns [`HuffmanError::EmptyAlphabet`] if the table has no entry.
pub fn build_tree<S>(frequencies: &FrequencyTable<S>) -> Result<HuffmanNode<S>, HuffmanError>
where
    S: Clone + Eq + Hash + Debug,
{
    if frequencies.is_empty() {
        return Err(HuffmanError::EmptyAlphabet);
    }

    let mut queue = PriorityQueue::with_capacity(
        frequencies.len(),
        |a: &HuffmanNode<S>, b: &HuffmanNode<S>| a.weight().cmp(&b.weight()),
    );
    for (symbol, count) in frequencies.iter() {
        queue.enqueue(HuffmanNode::leaf(symbol.clone(), count));
    }

    while queue.count() > 1 {
        let left = queue.dequeue()?;
        let right = queue.dequeue()?;
        trace!("merging nodes of weight {} and {}", left.weight(), right.weight());
        queue.enqueue(HuffmanNode::merge(left, right));
    }

    let root = queue.dequeue()?;
    debug!(
        "built a Huffman tree of {} symbols, weight {}, height {}",
        root.leaf_count(),
        root.weight(),
        root.height()
    );
    Ok(root)
}
