use std::collections::HashMap;
use std::hash::Hash;

use bitvec::prelude::*;
use log::debug;

use crate::tree::HuffmanNode;

/// An encoded symbol is represented as
/// a [`bitvec::vec::BitVec`](https://docs.rs/bitvec/0.22.3/bitvec/vec/struct.BitVec.html), a contiguous
/// array of bits.
pub type Encoded = BitVec;
/// The code of every symbol of a Huffman tree.
pub type CodeTable<S> = HashMap<S, Encoded>;

const ZERO: bool = false;
const ONE: bool = true;

// The backward step in Huffman's algorithm unfolds the hierarchy built by the
// forward step: going down from the root, the left subtree is given a `0`
// and the right one a `1`. The bits gathered along the path to a leaf are the
// code of its symbol.
fn split<S: Clone + Eq + Hash>(node: &HuffmanNode<S>, prefix: &mut Encoded, codes: &mut CodeTable<S>) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            codes.insert(symbol.clone(), prefix.clone());
        }
        HuffmanNode::Internal { left, right, .. } => {
            prefix.push(ZERO);
            split(left, prefix, codes);
            prefix.pop();
            prefix.push(ONE);
            split(right, prefix, codes);
            prefix.pop();
        }
    }
}

/// Derives the code table of a Huffman tree.
///
/// A tree made of a single leaf gives its symbol the empty code.
///
/// # Examples
///
/// ```
/// use bitvec::prelude::*;
/// use huffman_coding::{build_codes, build_tree, FrequencyTable};
///
/// let root = build_tree(&FrequencyTable::from_symbols("AAAB".chars())).unwrap();
/// let codes = build_codes(&root);
/// assert_eq!(codes[&'B'], bitvec![0]);
/// assert_eq!(codes[&'A'], bitvec![1]);
/// ```
pub fn build_codes<S: Clone + Eq + Hash>(root: &HuffmanNode<S>) -> CodeTable<S> {
    let mut codes = CodeTable::with_capacity(root.leaf_count());
    split(root, &mut BitVec::new(), &mut codes);
    debug!("derived {} codes", codes.len());
    codes
}
