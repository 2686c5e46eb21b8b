//! # Huffman coding
//!
//! `huffman-coding` is a crate to compress information with minimum-redundancy codes
//! using the [Huffman coding](https://en.wikipedia.org/wiki/Huffman_coding)
//! algorithm.
//!
//! The work is split in stages, each of which can be used on its own:
//!
//! 1. count the symbols of the input in a [`FrequencyTable`];
//! 2. [`build_tree`] merges the lightest nodes, taken from a [`PriorityQueue`],
//!    until a single [`HuffmanNode`] is left;
//! 3. [`build_codes`] walks the tree into a [`CodeTable`];
//! 4. [`compress`] replaces every symbol of the input by its code.
//!
//! [`encode`] runs all of them on a string, taking its grapheme clusters as the
//! symbols.
//!
//! An input made of a single distinct symbol gets the empty code, so it
//! compresses to no bits at all and the length of the input is needed to
//! restore it.
//!
//! ## References
//!
//! * _Hamming, R.R., 1997. Art of doing science and engineering: Learning to learn. CRC Press._
//! * _Huffman, D.A., 1952. A method for the construction of minimum-redundancy codes. Proceedings of the IRE, 40(9), pp.1098-1101._

use std::fmt::Debug;
use std::hash::Hash;

use unicode_segmentation::UnicodeSegmentation;

pub mod cli;
pub mod codes;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod queue;
pub mod report;
pub mod tree;

pub use codes::{build_codes, CodeTable, Encoded};
pub use encoder::{compress, to_bit_string, weighted_length};
pub use error::HuffmanError;
pub use frequency::{frequencies, FrequencyTable};
pub use queue::PriorityQueue;
pub use tree::{build_tree, HuffmanNode};

/// Everything computed while compressing an input.
#[derive(Debug, Clone)]
pub struct Encoding<S> {
    pub frequencies: FrequencyTable<S>,
    pub tree: HuffmanNode<S>,
    pub codes: CodeTable<S>,
    pub encoded: Encoded,
}

impl<S: Clone + Eq + Hash + Debug> Encoding<S> {
    /// The number of symbols of the input.
    pub fn input_len(&self) -> usize {
        self.frequencies.total()
    }

    /// The number of bits per input symbol.
    pub fn bits_per_symbol(&self) -> f64 {
        match self.input_len() {
            0 => 0.0,
            n => self.encoded.len() as f64 / n as f64,
        }
    }
}

/// Compresses a sequence of symbols with a code table derived from the
/// sequence itself.
///
/// # Errors
///
/// Returns [`HuffmanError::EmptyAlphabet`] if `symbols` yields nothing.
pub fn encode_symbols<S, I>(symbols: I) -> Result<Encoding<S>, HuffmanError>
where
    S: Clone + Eq + Hash + Debug,
    I: IntoIterator<Item = S>,
    I::IntoIter: Clone,
{
    let symbols = symbols.into_iter();
    let frequencies = FrequencyTable::from_symbols(symbols.clone());
    let tree = build_tree(&frequencies)?;
    let codes = build_codes(&tree);
    let encoded = compress(symbols, &codes)?;
    Ok(Encoding {
        frequencies,
        tree,
        codes,
        encoded,
    })
}

/// Encodes an input string using [Huffman's coding](https://en.wikipedia.org/wiki/Huffman_coding)
/// for minimum-redundancy codes of variable length.
///
/// The symbols are the [grapheme clusters](http://www.unicode.org/reports/tr29/#Grapheme_Cluster_Boundaries)
/// of `s`.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// use huffman_coding::*;
///
/// let encoding = huffman_coding::encode("baba").unwrap();
/// {
///     use bitvec::prelude::*;
///     let mut expected_codes = CodeTable::new();
///     expected_codes.insert("b", bitvec![0]);
///     expected_codes.insert("a", bitvec![1]);
///     let expected_encoded = bitvec![0, 1, 0, 1];
///     assert_eq!(encoding.codes, expected_codes);
///     assert_eq!(encoding.encoded, expected_encoded);
/// }
/// ```
///
/// # Errors
///
/// Returns [`HuffmanError::EmptyAlphabet`] for the empty string.
pub fn encode(s: &str) -> Result<Encoding<&str>, HuffmanError> {
    encode_symbols(UnicodeSegmentation::graphemes(s, true))
}

#[cfg(test)]
mod tests {
    use crate::*;
    use bitvec::prelude::*;

    #[test]
    fn encode() {
        assert_eq!(
            crate::encode("").expect_err("nothing to encode"),
            HuffmanError::EmptyAlphabet
        );
        assert_eq!(crate::encode("a").unwrap().encoded, bits![]);
        assert_eq!(crate::encode("ba").unwrap().encoded, bits![0, 1]);
    }

    #[test]
    fn single_symbol() {
        let encoding = crate::encode("AAAA").unwrap();
        assert_eq!(encoding.frequencies.get(&"A"), Some(4));
        assert_eq!(encoding.tree, HuffmanNode::leaf("A", 4));
        let mut codes = CodeTable::new();
        codes.insert("A", bitvec![]);
        assert_eq!(encoding.codes, codes);
        assert!(encoding.encoded.is_empty());
        assert_eq!(encoding.bits_per_symbol(), 0.0);
    }

    #[test]
    fn two_symbols() {
        let encoding = crate::encode("AAAB").unwrap();
        assert_eq!(encoding.codes["A"].len(), 1);
        assert_eq!(encoding.codes["B"].len(), 1);
        assert_eq!(to_bit_string(&encoding.encoded), "1110");
    }

    #[test]
    fn known_input() {
        let encoding = encode_symbols("ADDAABBCCBAAABBCCCBBBBCDAADDEEAA".chars()).unwrap();
        assert_eq!(encoding.tree.weight(), 32);
        assert_eq!(encoding.encoded.len(), 71);
        assert_eq!(
            weighted_length(&encoding.frequencies, &encoding.codes),
            Ok(encoding.encoded.len())
        );
        assert_eq!(
            to_bit_string(&encoding.encoded),
            "11011011111110100000101111111010000000101010100001111110110110100101111"
        );
        assert_eq!(encoding.input_len(), 32);
    }
}
