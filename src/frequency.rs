use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::HuffmanError;

/// The number of occurrences of every distinct symbol of an input.
///
/// Entries are kept in the order their symbol was first inserted, which is the
/// order the leaves are handed to the tree builder. Two tables built from the
/// same input therefore yield the very same codes.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    entries: Vec<(S, usize)>,
    index: HashMap<S, usize>,
    total: usize,
}

impl<S> Default for FrequencyTable<S> {
    fn default() -> Self {
        FrequencyTable {
            entries: Vec::new(),
            index: HashMap::new(),
            total: 0,
        }
    }
}

impl<S: Clone + Eq + Hash + Debug> FrequencyTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every symbol yielded by `symbols`.
    ///
    /// # Examples
    ///
    /// ```
    /// use huffman_coding::FrequencyTable;
    ///
    /// let freqs = FrequencyTable::from_symbols("abaca".chars());
    /// assert_eq!(freqs.get(&'a'), Some(3));
    /// assert_eq!(freqs.len(), 3);
    /// assert_eq!(freqs.total(), 5);
    /// ```
    pub fn from_symbols<I: IntoIterator<Item = S>>(symbols: I) -> Self {
        let mut table = Self::new();
        for symbol in symbols {
            table.total += 1;
            table.add(symbol, 1);
        }
        table
    }

    /// Adds `count` occurrences of `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`HuffmanError::ZeroFrequency`] when `count` is zero, every symbol
    /// of the table must have occurred at least once.
    ///
    /// Returns [`HuffmanError::WeightOverflow`] when the sum of all the counts
    /// would no longer fit in a `usize`. The table is left untouched.
    pub fn insert(&mut self, symbol: S, count: usize) -> Result<(), HuffmanError> {
        if count == 0 {
            return Err(HuffmanError::ZeroFrequency(format!("{:?}", symbol)));
        }
        self.total = self
            .total
            .checked_add(count)
            .ok_or_else(|| HuffmanError::WeightOverflow(format!("{:?}", symbol)))?;
        self.add(symbol, count);
        Ok(())
    }

    // Callers account for `count` in `total` first. No count exceeds the
    // total, so neither can overflow here.
    fn add(&mut self, symbol: S, count: usize) {
        match self.index.get(&symbol) {
            Some(&i) => self.entries[i].1 += count,
            None => {
                self.index.insert(symbol.clone(), self.entries.len());
                self.entries.push((symbol, count));
            }
        }
    }

    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.index.get(symbol).map(|&i| self.entries[i].1)
    }

    /// The size of the alphabet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The sum of all the counts, that is the length of the counted input.
    /// It is also the weight of the root of the Huffman tree, and bounds the
    /// weight of every node in it.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Iterates over the entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> {
        self.entries.iter().map(|(symbol, count)| (symbol, *count))
    }

    /// The entries sorted by increasing count. Equal counts keep their
    /// insertion order.
    pub fn ascending(&self) -> Vec<(&S, usize)> {
        let mut entries = self.iter().collect::<Vec<_>>();
        entries.sort_by_key(|&(_, count)| count);
        entries
    }
}

/// Counts the [grapheme clusters](http://www.unicode.org/reports/tr29/#Grapheme_Cluster_Boundaries)
/// of `s`.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// let freqs = huffman_coding::frequencies("huffman");
/// let mut iter = freqs.iter();
///
/// assert_eq!(iter.next(), Some((&"h", 1)));
/// assert_eq!(iter.next(), Some((&"u", 1)));
/// assert_eq!(iter.next(), Some((&"f", 2)));
/// assert_eq!(iter.next(), Some((&"m", 1)));
/// assert_eq!(iter.next(), Some((&"a", 1)));
/// assert_eq!(iter.next(), Some((&"n", 1)));
/// assert_eq!(iter.next(), None);
/// ```
pub fn frequencies(s: &str) -> FrequencyTable<&str> {
    FrequencyTable::from_symbols(UnicodeSegmentation::graphemes(s, true))
}
